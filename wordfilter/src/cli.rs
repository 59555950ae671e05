//! This file defines the command-line interface (CLI) for the wordfilter application,
//! including all available commands and their arguments.
//! License: MIT OR Apache-2.0

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use wordfilter_core::SeverityLevel;

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "wordfilter",
    version = env!("CARGO_PKG_VERSION"),
    about = "Flag and mask objectionable words in text",
    long_about = "wordfilter checks text against a severity-graded word list. `validate` reports which flagged terms occur and at what severity; `sanitize` masks every flagged term with a fixed-length replacement.",
    arg_required_else_help = true,
)]
pub struct Cli {
    /// Disable informational messages
    #[arg(long, short = 'q', global = true, help = "Suppress all informational and debug messages.")]
    pub quiet: bool,

    /// Enable debug logging (overrides RUST_LOG)
    #[arg(long, short = 'd', global = true, help = "Enable debug logging.")]
    pub debug: bool,

    /// Extra word list files, each registered as its own plugin.
    #[arg(long = "words", short = 'w', value_name = "FILE", global = true, help = "Add a YAML word list file (repeatable).")]
    pub words: Vec<PathBuf>,

    /// Start from an empty vocabulary instead of the bundled one.
    #[arg(long = "no-default-words", global = true, help = "Do not load the bundled default word list.")]
    pub no_default_words: bool,

    /// Strip HTML markup from sanitized output.
    #[arg(long = "strip-markup", global = true, help = "Remove HTML tags (and script bodies) from sanitized output.")]
    pub strip_markup: bool,

    /// Strip ANSI escape sequences from the input before filtering.
    #[arg(long = "strip-ansi", global = true, help = "Remove ANSI escape sequences from the input before filtering.")]
    pub strip_ansi: bool,

    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// All available commands for the `wordfilter` CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Masks flagged words in an input file or stdin.
    #[command(about = "Mask flagged words in an input file or stdin.")]
    Sanitize(SanitizeCommand),

    /// Reports flagged words without modifying the input.
    #[command(about = "Report flagged words and their severity without modifying the input.")]
    Validate(ValidateCommand),
}

/// Arguments for the `sanitize` command.
#[derive(Parser, Debug)]
pub struct SanitizeCommand {
    /// Path to an input file (reads from stdin if not provided).
    #[arg(long, short = 'i', value_name = "FILE", help = "Read input from a specified file instead of stdin.")]
    pub input_file: Option<PathBuf>,

    /// Write sanitized output to this file instead of stdout.
    #[arg(long, short = 'o', value_name = "FILE", help = "Write output to a specified file instead of stdout.")]
    pub output: Option<PathBuf>,

    /// Replacement inserted once per character of a masked term.
    #[arg(long = "replace-with", short = 'r', value_name = "TEXT", default_value = "*", help = "Mask character(s) used for each character of a flagged term.")]
    pub replace_with: String,

    /// Restrict redaction to these levels (comma-separated, processed in order).
    #[arg(long = "levels", short = 'l', value_delimiter = ',', value_name = "LEVELS", help = "Only redact these levels, e.g. 'low,medium' (default: all).")]
    pub levels: Vec<SeverityLevel>,

    /// Show a unified diff to highlight the changes made.
    #[arg(long, short = 'D', help = "Show a unified diff instead of the sanitized text.")]
    pub diff: bool,
}

/// Arguments for the `validate` command.
#[derive(Parser, Debug)]
pub struct ValidateCommand {
    /// Path to an input file (reads from stdin if not provided).
    #[arg(long, short = 'i', value_name = "FILE", help = "Read input from a specified file instead of stdin.")]
    pub input_file: Option<PathBuf>,

    /// Print the result as JSON on stdout.
    #[arg(long = "json", help = "Print the validation result as JSON.")]
    pub json: bool,

    /// Also list every flagged term at every level with its occurrence count.
    #[arg(long = "all-matches", help = "Include a per-term summary across all levels.")]
    pub all_matches: bool,

    /// Exit with code 1 when any flagged term is found.
    #[arg(long = "fail-on-match", help = "Exit with a non-zero code if anything is flagged.")]
    pub fail_on_match: bool,
}
