// wordfilter-core/src/engines/matcher.rs
//! Validation engine: finds flagged terms in text.
//!
//! Levels are scanned from most to least severe and the scan stops at the
//! first level with a match, so the reported level is always the most severe
//! one present. `found` holds the canonical dictionary term for every
//! occurrence at that level, ordered by position in the text.
//! License: MIT OR APACHE 2.0

use log::debug;
use serde::{Deserialize, Serialize};

use crate::sanitizers::compiler::compile_level;
use crate::severity::SeverityLevel;
use crate::word_list::WordList;
use crate::word_match::{log_word_match_debug, WordMatch};

/// The outcome of a validation call.
///
/// `level` is `None` exactly when `found` is empty for engine-produced
/// results. Plugins may return a non-empty `found` without a level; such a
/// result never takes precedence in `Filter::validate`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub found: Vec<String>,
    pub level: Option<SeverityLevel>,
}

impl ValidationResult {
    pub fn new<I, S>(found: I, level: Option<SeverityLevel>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            found: found.into_iter().map(Into::into).collect(),
            level,
        }
    }

    /// A result with nothing found.
    pub fn clean() -> Self {
        Self::default()
    }

    pub fn is_clean(&self) -> bool {
        self.found.is_empty()
    }

    /// Whether this result is allowed to replace another one during plugin overrides.
    pub fn is_conclusive(&self) -> bool {
        !self.found.is_empty() && self.level.is_some()
    }
}

/// Validates `text` against `words`, reporting only the most severe matching level.
pub fn validate_bad_words(text: &str, words: &WordList) -> ValidationResult {
    if text.is_empty() || words.is_empty() {
        return ValidationResult::clean();
    }

    for (level, _) in words.levels().rev() {
        let matches = scan_level(text, words, level);
        if !matches.is_empty() {
            debug!("Validation matched {} occurrence(s) at level '{}'.", matches.len(), level);
            return ValidationResult {
                found: matches.into_iter().map(|m| m.term).collect(),
                level: Some(level),
            };
        }
    }

    debug!("Validation found no flagged terms.");
    ValidationResult::clean()
}

/// Locates every flagged occurrence at every level, ordered by start offset.
///
/// Unlike `validate_bad_words` this never short-circuits. Occurrences that
/// start at the same offset are listed most severe first.
pub fn find_all_matches(text: &str, words: &WordList) -> Vec<WordMatch> {
    if text.is_empty() || words.is_empty() {
        return Vec::new();
    }

    let mut all_matches: Vec<WordMatch> = words
        .levels()
        .rev()
        .flat_map(|(level, _)| scan_level(text, words, level))
        .collect();
    all_matches.sort_by_key(|m| m.start);
    all_matches
}

fn scan_level(text: &str, words: &WordList, level: SeverityLevel) -> Vec<WordMatch> {
    let mut matches = Vec::new();
    for compiled in compile_level(words, level) {
        for found in compiled.regex.find_iter(text) {
            let m = WordMatch {
                term: compiled.term.clone(),
                level,
                matched: found.as_str().to_string(),
                start: found.start(),
                end: found.end(),
            };
            log_word_match_debug(module_path!(), &m);
            matches.push(m);
        }
    }
    matches.sort_by_key(|m| m.start);
    matches
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_words() -> WordList {
        WordList::new()
            .with_terms(SeverityLevel::Low, ["darn", "heck"])
            .with_terms(SeverityLevel::Medium, ["stupid", "idiot"])
            .with_terms(SeverityLevel::Highest, ["curse1"])
    }

    #[test]
    fn test_detects_term_with_level() {
        let result = validate_bad_words("You are an idiot", &sample_words());
        assert_eq!(result.found, vec!["idiot"]);
        assert_eq!(result.level, Some(SeverityLevel::Medium));
    }

    #[test]
    fn test_clean_text_has_no_level() {
        let result = validate_bad_words("Hello friend", &sample_words());
        assert!(result.is_clean());
        assert_eq!(result.level, None);
    }

    #[test]
    fn test_empty_inputs_are_clean() {
        assert_eq!(validate_bad_words("", &sample_words()), ValidationResult::clean());
        assert_eq!(validate_bad_words("darn it", &WordList::new()), ValidationResult::clean());
    }

    #[test]
    fn test_most_severe_level_wins() {
        let result = validate_bad_words("darn, you stupid curse1", &sample_words());
        assert_eq!(result.found, vec!["curse1"]);
        assert_eq!(result.level, Some(SeverityLevel::Highest));
    }

    #[test]
    fn test_found_uses_canonical_terms_in_text_order() {
        let result = validate_bad_words("HECK no, darn. Heck!", &sample_words());
        assert_eq!(result.found, vec!["heck", "darn", "heck"]);
        assert_eq!(result.level, Some(SeverityLevel::Low));
    }

    #[test]
    fn test_word_boundaries_prevent_substring_matches() {
        let words = WordList::new().with_terms(SeverityLevel::High, ["ass"]);
        assert!(validate_bad_words("a first class assignment", &words).is_clean());
        assert_eq!(validate_bad_words("you ass", &words).found, vec!["ass"]);
    }

    #[test]
    fn test_overlapping_terms_both_match() {
        let words = WordList::new().with_terms(SeverityLevel::Medium, ["dumb", "dumb luck"]);
        let result = validate_bad_words("pure dumb luck", &words);
        assert_eq!(result.found, vec!["dumb", "dumb luck"]);
    }

    #[test]
    fn test_duplicate_terms_are_reported_once_per_occurrence() {
        let words = WordList::new().with_terms(SeverityLevel::Low, ["darn", "darn"]);
        assert_eq!(validate_bad_words("darn", &words).found, vec!["darn"]);
    }

    #[test]
    fn test_find_all_matches_spans_every_level() {
        let text = "darn you stupid curse1";
        let matches = find_all_matches(text, &sample_words());
        let terms: Vec<&str> = matches.iter().map(|m| m.term.as_str()).collect();
        assert_eq!(terms, vec!["darn", "stupid", "curse1"]);
        let stupid = &matches[1];
        assert_eq!(&text[stupid.start..stupid.end], "stupid");
        assert_eq!(stupid.level, SeverityLevel::Medium);
    }

    #[test]
    fn test_conclusive_requires_found_and_level() {
        assert!(ValidationResult::new(["x"], Some(SeverityLevel::High)).is_conclusive());
        assert!(!ValidationResult::new(["x"], None).is_conclusive());
        assert!(!ValidationResult::new(Vec::<String>::new(), Some(SeverityLevel::High)).is_conclusive());
    }
}
