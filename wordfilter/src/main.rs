// wordfilter/src/main.rs
//! wordfilter entry point.
//!
//! Parses the command line, configures logging, assembles the filter and
//! dispatches to the selected command.

use anyhow::Result;
use clap::Parser;
use is_terminal::IsTerminal;
use std::io;
use std::process::ExitCode;

use wordfilter::cli::{Cli, Commands};
use wordfilter::commands::{build_filter, read_input, sanitize, validate};
use wordfilter::logger;
use wordfilter::ui::output_format;

fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.quiet {
        logger::init_logger(Some(log::LevelFilter::Off));
    } else if cli.debug {
        logger::init_logger(Some(log::LevelFilter::Debug));
    } else {
        logger::init_logger(None);
    }

    match run(&cli) {
        Ok(code) => code,
        Err(e) => {
            let color = io::stderr().is_terminal();
            let _ = output_format::print_error_message(&mut io::stderr(), &format!("{:#}", e), color);
            ExitCode::from(2)
        }
    }
}

fn run(cli: &Cli) -> Result<ExitCode> {
    let filter = build_filter(cli)?;

    match &cli.command {
        Commands::Sanitize(cmd) => {
            let input = read_input(cmd.input_file.as_deref(), cli.strip_ansi)?;
            sanitize::run_sanitize(&filter, cmd, &input, cli.quiet)?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Validate(cmd) => {
            let input = read_input(cmd.input_file.as_deref(), cli.strip_ansi)?;
            let flagged = validate::run_validate(&filter, cmd, &input)?;
            if flagged && cmd.fail_on_match {
                Ok(ExitCode::from(1))
            } else {
                Ok(ExitCode::SUCCESS)
            }
        }
    }
}
