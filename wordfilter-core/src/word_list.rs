//! Word list management for `wordfilter-core`.
//!
//! This module defines the `WordList` catalog (severity level to flagged terms),
//! the append-only merge used when plugins contribute vocabulary, and the
//! YAML loading and validation of word list files, including the bundled
//! default vocabulary.
//!
//! License: MIT OR Apache-2.0

use anyhow::{anyhow, Context, Result};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::path::Path;

use crate::errors::WordFilterError;
use crate::severity::SeverityLevel;

/// Maximum allowed length (in characters) for a single flagged term.
pub const MAX_TERM_LENGTH: usize = 100;

type RawWordList = BTreeMap<SeverityLevel, Vec<String>>;

/// A mapping from severity level to an ordered sequence of flagged terms.
///
/// Terms are stored trimmed and lowercased. A level that was never populated
/// reads as an empty slice. Duplicates, within or across levels, are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawWordList", into = "RawWordList")]
pub struct WordList {
    levels: BTreeMap<SeverityLevel, Vec<String>>,
}

impl WordList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style helper that appends `terms` to `level` and returns the list.
    pub fn with_terms<I, S>(mut self, level: SeverityLevel, terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.insert_terms(level, terms);
        self
    }

    /// Appends `terms` to `level`, normalizing each one.
    ///
    /// Terms that are empty after trimming are dropped with a warning.
    pub fn insert_terms<I, S>(&mut self, level: SeverityLevel, terms: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let entry = self.levels.entry(level).or_default();
        for term in terms {
            match normalize_term(term.as_ref()) {
                Some(t) => entry.push(t),
                None => warn!("Dropping empty term at level '{}'.", level),
            }
        }
    }

    /// The terms flagged at `level`, in insertion order.
    pub fn terms(&self, level: SeverityLevel) -> &[String] {
        self.levels.get(&level).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Iterates populated levels in ascending rank.
    pub fn levels(&self) -> impl DoubleEndedIterator<Item = (SeverityLevel, &[String])> {
        self.levels.iter().map(|(level, terms)| (*level, terms.as_slice()))
    }

    /// Total number of terms across all levels, duplicates included.
    pub fn len(&self) -> usize {
        self.levels.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Appends every level of `other` onto this list.
    ///
    /// Existing terms come first, then `other`'s terms in their original order.
    /// Levels absent from `other` are left untouched.
    pub fn merge(&mut self, other: &WordList) {
        for (level, terms) in other.levels() {
            debug!("Merging {} term(s) into level '{}'.", terms.len(), level);
            self.levels
                .entry(level)
                .or_default()
                .extend(terms.iter().cloned());
        }
    }

    /// Loads a word list from a YAML file of the form `level: [term, ...]`.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading word list from: {}", path.display());
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read word list file {}", path.display()))?;
        let raw: RawWordList = serde_yml::from_str(&text)
            .with_context(|| format!("Failed to parse word list file {}", path.display()))?;

        validate_terms(&raw)?;
        let list = WordList::from(raw);
        info!("Loaded {} terms from file {}.", list.len(), path.display());
        Ok(list)
    }

    /// Loads the bundled default vocabulary embedded at compile time.
    pub fn load_default() -> Result<Self> {
        debug!("Loading default word list from embedded string...");
        let default_yaml = include_str!("../config/default_words.yaml");
        let raw: RawWordList = serde_yml::from_str(default_yaml)
            .context("Failed to parse default word list")?;

        validate_terms(&raw)?;
        let list = WordList::from(raw);
        debug!("Loaded {} default terms.", list.len());
        Ok(list)
    }
}

impl From<RawWordList> for WordList {
    fn from(raw: RawWordList) -> Self {
        let mut list = WordList::new();
        for (level, terms) in raw {
            list.insert_terms(level, terms);
        }
        list
    }
}

impl From<WordList> for RawWordList {
    fn from(list: WordList) -> Self {
        list.levels
    }
}

fn normalize_term(term: &str) -> Option<String> {
    let trimmed = term.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

/// Validates term integrity before a file-backed word list is accepted.
fn validate_terms(raw: &RawWordList) -> Result<()> {
    let mut errors = Vec::new();

    for (level, terms) in raw {
        let mut seen = HashSet::new();
        for term in terms {
            let trimmed = term.trim();
            if trimmed.is_empty() {
                errors.push(format!("Level '{}' contains an empty term.", level));
                continue;
            }

            let length = trimmed.chars().count();
            if length > MAX_TERM_LENGTH {
                let err = WordFilterError::TermLengthExceeded(trimmed.to_string(), length, MAX_TERM_LENGTH);
                errors.push(format!("Level '{}': {}.", level, err));
            }

            if !seen.insert(trimmed.to_lowercase()) {
                debug!("Duplicate term '{}' at level '{}' kept as-is.", trimmed, level);
            }

            let starts_word = trimmed.chars().next().is_some_and(is_word_char);
            let ends_word = trimmed.chars().last().is_some_and(is_word_char);
            if !starts_word || !ends_word {
                warn!(
                    "Term '{}' at level '{}' does not start and end with a word character; \
                     it only matches where surrounding text supplies a word boundary.",
                    trimmed, level
                );
            }
        }
    }

    if !errors.is_empty() {
        let full_error_message = format!("Word list validation failed:\n{}", errors.join("\n"));
        Err(anyhow!(full_error_message))
    } else {
        Ok(())
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
