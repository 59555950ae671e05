// wordfilter-core/src/plugin.rs
//! Defines the `Plugin` trait and the closure-backed `CustomPlugin`.
//!
//! A plugin is a named unit with an optional capability set: it may contribute
//! vocabulary, override validation, transform sanitized output, or any mix of
//! the three. Every capability has a default "not provided" implementation, so
//! a plugin only implements what it offers.
//!
//! License: MIT OR APACHE 2.0

use std::fmt;

use crate::engines::matcher::ValidationResult;
use crate::word_list::WordList;

type ValidateFn = Box<dyn Fn(&str) -> ValidationResult + Send + Sync>;
type SanitizeFn = Box<dyn Fn(&str) -> String + Send + Sync>;

/// A trait for units that extend a `Filter`.
///
/// Plugins are registered once and never mutated by the filter afterwards.
pub trait Plugin: Send + Sync {
    /// Identifies the plugin in logs. Not used as a lookup key.
    fn name(&self) -> &str;

    /// Vocabulary merged into the filter's word list on registration.
    fn words(&self) -> Option<&WordList> {
        None
    }

    /// Custom validation over the original input text.
    ///
    /// `None` means the plugin does not validate. A returned result only takes
    /// precedence when it is conclusive (non-empty `found` and a level).
    fn validate(&self, _text: &str) -> Option<ValidationResult> {
        None
    }

    /// Transforms the text produced by the previous sanitization stage.
    ///
    /// `None` means the plugin does not sanitize.
    fn sanitize(&self, _text: &str) -> Option<String> {
        None
    }
}

/// A plugin assembled from plain data and closures.
///
/// ```rust
/// use wordfilter_core::{CustomPlugin, SeverityLevel, WordList};
///
/// let plugin = CustomPlugin::new("foobar")
///     .with_words(WordList::new().with_terms(SeverityLevel::Medium, ["foobar"]))
///     .with_sanitizer(|text| text.replace("foobar", "******"));
/// # let _ = plugin;
/// ```
pub struct CustomPlugin {
    name: String,
    words: Option<WordList>,
    validator: Option<ValidateFn>,
    sanitizer: Option<SanitizeFn>,
}

impl CustomPlugin {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            words: None,
            validator: None,
            sanitizer: None,
        }
    }

    pub fn with_words(mut self, words: WordList) -> Self {
        self.words = Some(words);
        self
    }

    pub fn with_validator<F>(mut self, validator: F) -> Self
    where
        F: Fn(&str) -> ValidationResult + Send + Sync + 'static,
    {
        self.validator = Some(Box::new(validator));
        self
    }

    pub fn with_sanitizer<F>(mut self, sanitizer: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        self.sanitizer = Some(Box::new(sanitizer));
        self
    }
}

impl fmt::Debug for CustomPlugin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CustomPlugin")
            .field("name", &self.name)
            .field("words", &self.words)
            .field("validator", &self.validator.is_some())
            .field("sanitizer", &self.sanitizer.is_some())
            .finish()
    }
}

impl Plugin for CustomPlugin {
    fn name(&self) -> &str {
        &self.name
    }

    fn words(&self) -> Option<&WordList> {
        self.words.as_ref()
    }

    fn validate(&self, text: &str) -> Option<ValidationResult> {
        self.validator.as_ref().map(|validate| validate(text))
    }

    fn sanitize(&self, text: &str) -> Option<String> {
        self.sanitizer.as_ref().map(|sanitize| sanitize(text))
    }
}
