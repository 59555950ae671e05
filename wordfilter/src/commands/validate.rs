//! `validate` command: reports flagged words without modifying the input.

use anyhow::{Context, Result};
use is_terminal::IsTerminal;
use log::info;
use owo_colors::OwoColorize;
use serde::Serialize;
use std::io::{self, Write};

use wordfilter_core::{summarize_matches, Filter, MatchSummaryItem, SeverityLevel, ValidationResult};

use crate::cli::ValidateCommand;
use crate::ui::summary_table;

/// What `validate` prints, in either human-readable or JSON form.
#[derive(Debug, Serialize)]
pub struct ValidationReport {
    pub found: Vec<String>,
    pub level: Option<SeverityLevel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<Vec<MatchSummaryItem>>,
}

impl ValidationReport {
    pub fn build(filter: &Filter, input: &str, all_matches: bool) -> Self {
        let ValidationResult { found, level } = filter.validate(input);
        let summary = all_matches.then(|| summarize_matches(&filter.find_matches(input)));
        Self { found, level, summary }
    }

    pub fn is_clean(&self) -> bool {
        self.found.is_empty()
    }
}

/// Runs validation and prints the report. Returns `true` when something was flagged.
pub fn run_validate(filter: &Filter, cmd: &ValidateCommand, input: &str) -> Result<bool> {
    info!("Starting validate operation.");
    let report = ValidationReport::build(filter, input, cmd.all_matches);

    let stdout = io::stdout();
    let color = stdout.is_terminal();
    let mut writer = stdout.lock();
    if cmd.json {
        let json = serde_json::to_string_pretty(&report).context("Failed to serialize validation report")?;
        writeln!(writer, "{}", json)?;
    } else {
        write_human(&mut writer, &report, color)?;
    }

    Ok(!report.is_clean())
}

fn write_human<W: Write>(writer: &mut W, report: &ValidationReport, color: bool) -> Result<()> {
    match report.level {
        _ if report.is_clean() => writeln!(writer, "No flagged terms found.")?,
        Some(level) => {
            let header = format!("Flagged {} term(s) at level '{}':", report.found.len(), level);
            if color {
                writeln!(writer, "{}", header.red().bold())?;
            } else {
                writeln!(writer, "{}", header)?;
            }
            writeln!(writer, "  {}", report.found.join(", "))?;
        }
        None => writeln!(writer, "Flagged term(s): {}", report.found.join(", "))?,
    }

    if let Some(summary) = &report.summary {
        if !summary.is_empty() {
            writeln!(writer, "{}", summary_table::render_summary(summary))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use wordfilter_core::WordList;

    fn filter() -> Filter {
        Filter::with_words(
            WordList::new()
                .with_terms(SeverityLevel::Low, ["heck"])
                .with_terms(SeverityLevel::Medium, ["stupid"]),
        )
    }

    #[test]
    fn test_report_without_summary() {
        let report = ValidationReport::build(&filter(), "heck, stupid", false);
        assert_eq!(report.found, vec!["stupid"]);
        assert_eq!(report.level, Some(SeverityLevel::Medium));
        assert!(report.summary.is_none());
    }

    #[test]
    fn test_report_summary_covers_all_levels() {
        let report = ValidationReport::build(&filter(), "heck, stupid", true);
        let summary = report.summary.expect("summary requested");
        let terms: Vec<&str> = summary.iter().map(|s| s.term.as_str()).collect();
        assert_eq!(terms, vec!["stupid", "heck"]);
    }

    #[test]
    fn test_human_output_for_clean_text() {
        let report = ValidationReport::build(&filter(), "hello", false);
        let mut buf = Vec::new();
        write_human(&mut buf, &report, false).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "No flagged terms found.\n");
    }

    #[test]
    fn test_json_shape() {
        let report = ValidationReport::build(&filter(), "oh heck", false);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["found"][0], "heck");
        assert_eq!(json["level"], "low");
        assert!(json.get("summary").is_none());
    }
}
