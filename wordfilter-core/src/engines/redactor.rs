// wordfilter-core/src/engines/redactor.rs
//! Sanitization engine: masks flagged terms in text.
//!
//! Levels are processed in the order given by `SanitizeOptions::levels`, and
//! each level works on the output of the previous one. A mask is the
//! replacement string repeated once per character of the dictionary term, so
//! the mask length never depends on how the input was capitalized.
//!
//! If the replacement string itself spells a flagged term, a later level may
//! match inside an earlier mask. That behaviour is kept as-is.
//! License: MIT OR APACHE 2.0

use regex::NoExpand;
use serde::{Deserialize, Serialize};

use crate::sanitizers::compiler::compile_level;
use crate::severity::SeverityLevel;
use crate::word_list::WordList;
use crate::word_match::log_redaction_action_debug;

/// Options for `sanitize_bad_words`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SanitizeOptions {
    /// Inserted once per character of each masked term.
    pub replace_with: String,
    /// Levels to redact, processed in this order.
    pub levels: Vec<SeverityLevel>,
}

impl Default for SanitizeOptions {
    fn default() -> Self {
        Self {
            replace_with: "*".to_string(),
            levels: SeverityLevel::ALL.to_vec(),
        }
    }
}

impl SanitizeOptions {
    pub fn with_replacement(mut self, replace_with: impl Into<String>) -> Self {
        self.replace_with = replace_with.into();
        self
    }

    pub fn with_levels<I: IntoIterator<Item = SeverityLevel>>(mut self, levels: I) -> Self {
        self.levels = levels.into_iter().collect();
        self
    }
}

/// Returns a copy of `text` with every flagged occurrence in the configured levels masked.
pub fn sanitize_bad_words(text: &str, words: &WordList, options: &SanitizeOptions) -> String {
    let mut clean = text.to_string();
    if clean.is_empty() {
        return clean;
    }

    for &level in &options.levels {
        for compiled in compile_level(words, level) {
            let occurrences = compiled.regex.find_iter(&clean).count();
            if occurrences == 0 {
                continue;
            }
            let mask = options.replace_with.repeat(compiled.term.chars().count());
            clean = compiled.regex.replace_all(&clean, NoExpand(&mask)).into_owned();
            log_redaction_action_debug(module_path!(), &compiled.term, level, occurrences);
        }
    }

    clean
}
