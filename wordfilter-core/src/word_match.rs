//! Data structures for located matches and helpers for logging them safely.
//!
//! Input text can carry personal data, so debug logs only show matched
//! excerpts when `WORDFILTER_ALLOW_DEBUG_TEXT=true` is set.

use lazy_static::lazy_static;
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::severity::SeverityLevel;

lazy_static! {
    /// Whether raw input excerpts may appear in debug logs.
    static ref DEBUG_TEXT_ALLOWED: bool = {
        std::env::var("WORDFILTER_ALLOW_DEBUG_TEXT")
            .map(|s| s.eq_ignore_ascii_case("true"))
            .unwrap_or(false)
    };
}

/// One located occurrence of a flagged term.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordMatch {
    /// Canonical dictionary term.
    pub term: String,
    pub level: SeverityLevel,
    /// The text exactly as it appeared in the input.
    pub matched: String,
    /// Byte offsets into the input.
    pub start: usize,
    pub end: usize,
}

/// Occurrences of a single term, aggregated for reporting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSummaryItem {
    pub level: SeverityLevel,
    pub term: String,
    pub occurrences: usize,
}

/// Aggregates matches per (level, term), most severe level first, then by term.
pub fn summarize_matches(matches: &[WordMatch]) -> Vec<MatchSummaryItem> {
    let mut counts: BTreeMap<(SeverityLevel, &str), usize> = BTreeMap::new();
    for m in matches {
        *counts.entry((m.level, m.term.as_str())).or_default() += 1;
    }

    let mut summary: Vec<MatchSummaryItem> = counts
        .into_iter()
        .map(|((level, term), occurrences)| MatchSummaryItem {
            level,
            term: term.to_string(),
            occurrences,
        })
        .collect();
    summary.sort_by(|a, b| b.level.cmp(&a.level).then_with(|| a.term.cmp(&b.term)));
    summary
}

pub fn redact_sensitive(s: &str) -> String {
    const MAX_LEN: usize = 8;
    if s.chars().count() <= MAX_LEN {
        "[REDACTED]".to_string()
    } else {
        format!("[REDACTED: {} chars]", s.chars().count())
    }
}

fn get_loggable_content(content: &str) -> String {
    if *DEBUG_TEXT_ALLOWED {
        content.to_string()
    } else {
        redact_sensitive(content)
    }
}

pub fn log_word_match_debug(module_path: &str, m: &WordMatch) {
    debug!(
        "{} Found WordMatch: Term='{}', Level='{}', Matched='{}', Span={}..{}",
        module_path,
        m.term,
        m.level,
        get_loggable_content(&m.matched),
        m.start,
        m.end
    );
}

pub fn log_redaction_action_debug(module_path: &str, term: &str, level: SeverityLevel, occurrences: usize) {
    debug!(
        "{} Redaction action: Term='{}', Level='{}', Occurrences={}",
        module_path, term, level, occurrences
    );
}
