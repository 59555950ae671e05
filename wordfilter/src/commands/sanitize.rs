//! `sanitize` command: masks flagged words and writes the result.

use anyhow::{Context, Result};
use is_terminal::IsTerminal;
use log::{debug, info};
use std::fs;
use std::io::{self, Write};

use wordfilter_core::{Filter, SanitizeOptions, SeverityLevel};

use crate::cli::SanitizeCommand;
use crate::ui::{diff_viewer, output_format};

/// Translates command flags into redactor options; no `--levels` means every level.
pub fn sanitize_options(cmd: &SanitizeCommand) -> SanitizeOptions {
    let options = SanitizeOptions::default().with_replacement(cmd.replace_with.clone());
    if cmd.levels.is_empty() {
        options.with_levels(SeverityLevel::ALL)
    } else {
        options.with_levels(cmd.levels.iter().copied())
    }
}

pub fn run_sanitize(filter: &Filter, cmd: &SanitizeCommand, input: &str, quiet: bool) -> Result<()> {
    info!("Starting sanitize operation.");
    let options = sanitize_options(cmd);
    if !quiet && !has_terms_for(filter, &options) {
        let color = io::stderr().is_terminal();
        let _ = output_format::print_warn_message(
            &mut io::stderr(),
            "No flagged terms are configured for the selected levels.",
            color,
        );
    }
    let sanitized = filter.sanitize_with(input, &options);
    debug!(
        "Content sanitized. Original length: {}, Sanitized length: {}",
        input.len(),
        sanitized.len()
    );

    match &cmd.output {
        Some(path) => {
            if !quiet {
                let color = io::stderr().is_terminal();
                let msg = format!("Writing sanitized content to file: {}", path.display());
                let _ = output_format::print_info_message(&mut io::stderr(), &msg, color);
            }
            let mut file = fs::File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            write_output(&mut file, input, &sanitized, cmd.diff, false)?;
        }
        None => {
            let stdout = io::stdout();
            let color = stdout.is_terminal();
            let mut writer = stdout.lock();
            write_output(&mut writer, input, &sanitized, cmd.diff, color)?;
        }
    }

    info!("Sanitize operation completed.");
    Ok(())
}

/// True when at least one selected level has a term to mask.
fn has_terms_for(filter: &Filter, options: &SanitizeOptions) -> bool {
    options.levels.iter().any(|&level| !filter.words().terms(level).is_empty())
}

fn write_output<W: Write>(writer: &mut W, original: &str, sanitized: &str, diff: bool, color: bool) -> Result<()> {
    if diff {
        diff_viewer::print_diff(original, sanitized, writer, color)?;
    } else {
        write!(writer, "{}", sanitized)?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use wordfilter_core::WordList;

    fn command(levels: Vec<SeverityLevel>, replace_with: &str) -> SanitizeCommand {
        SanitizeCommand {
            input_file: None,
            output: None,
            replace_with: replace_with.to_string(),
            levels,
            diff: false,
        }
    }

    #[test]
    fn test_no_levels_means_all_levels() {
        let options = sanitize_options(&command(Vec::new(), "*"));
        assert_eq!(options.levels, SeverityLevel::ALL.to_vec());
    }

    #[test]
    fn test_levels_and_replacement_are_forwarded() {
        let options = sanitize_options(&command(vec![SeverityLevel::Medium, SeverityLevel::Low], "#"));
        assert_eq!(options.levels, vec![SeverityLevel::Medium, SeverityLevel::Low]);
        assert_eq!(options.replace_with, "#");
    }

    #[test]
    fn test_has_terms_for_selected_levels() {
        let words = WordList::new().with_terms(SeverityLevel::Low, ["heck"]);
        let filter = Filter::with_words(words);
        assert!(has_terms_for(&filter, &sanitize_options(&command(vec![SeverityLevel::Low], "*"))));
        assert!(!has_terms_for(&filter, &sanitize_options(&command(vec![SeverityLevel::High], "*"))));
    }

    #[test]
    fn test_write_output_plain() {
        let mut buf = Vec::new();
        write_output(&mut buf, "heck\n", "****\n", false, false).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "****\n");
    }
}
