// wordfilter/src/ui/diff_viewer.rs
//! Unified diff between the original and the sanitized text.
//!
//! Removed lines are shown in red and added lines in green when colour is supported.

use anyhow::Result;
use diffy::{create_patch, Line as DiffLine};
use owo_colors::OwoColorize;
use std::io::Write;

/// Writes a line-level diff of `original` against `sanitized` to `writer`.
pub fn print_diff<W: Write>(original: &str, sanitized: &str, writer: &mut W, supports_color: bool) -> Result<()> {
    let patch = create_patch(original, sanitized);
    writeln!(writer, "--- Diff View ---")?;

    let mut changed = false;
    for hunk in patch.hunks() {
        for line_change in hunk.lines() {
            match line_change {
                DiffLine::Delete(s) => {
                    changed = true;
                    let line = format!("- {}", s.trim_end_matches('\n'));
                    if supports_color {
                        writeln!(writer, "{}", line.red())?;
                    } else {
                        writeln!(writer, "{}", line)?;
                    }
                }
                DiffLine::Insert(s) => {
                    changed = true;
                    let line = format!("+ {}", s.trim_end_matches('\n'));
                    if supports_color {
                        writeln!(writer, "{}", line.green())?;
                    } else {
                        writeln!(writer, "{}", line)?;
                    }
                }
                DiffLine::Context(s) => {
                    writeln!(writer, "  {}", s.trim_end_matches('\n'))?;
                }
            }
        }
    }

    if !changed {
        writeln!(writer, "No changes detected.")?;
    }
    writeln!(writer, "-----------------")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diff_marks_changed_lines() {
        let mut buf = Vec::new();
        print_diff("keep\nheck no\n", "keep\n**** no\n", &mut buf, false).unwrap();
        let out = String::from_utf8(buf).unwrap();
        assert!(out.contains("- heck no"));
        assert!(out.contains("+ **** no"));
        assert!(out.contains("  keep"));
    }

    #[test]
    fn test_diff_without_changes() {
        let mut buf = Vec::new();
        print_diff("same\n", "same\n", &mut buf, false).unwrap();
        assert!(String::from_utf8(buf).unwrap().contains("No changes detected."));
    }
}
