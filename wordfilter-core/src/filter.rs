// wordfilter-core/src/filter.rs
//! The `Filter` orchestrator.
//!
//! A `Filter` owns the active word list and the registered plugins. Plugin
//! vocabulary is merged into the word list on registration. `validate` and
//! `sanitize` run the built-in engines over the merged list and then give each
//! plugin, in registration order, a chance to override or transform the result.
//!
//! Registration takes `&mut self`, while `validate`/`sanitize` take `&self`:
//! register everything first, then share the filter freely.
//!
//! License: MIT OR APACHE 2.0

use log::{debug, error, info};
use std::fmt;

use crate::engines::matcher::{find_all_matches, validate_bad_words, ValidationResult};
use crate::engines::redactor::{sanitize_bad_words, SanitizeOptions};
use crate::plugin::Plugin;
use crate::word_list::WordList;
use crate::word_match::WordMatch;

pub struct Filter {
    words: WordList,
    plugins: Vec<Box<dyn Plugin>>,
}

impl Filter {
    /// Creates a filter seeded with the bundled default vocabulary.
    pub fn new() -> Self {
        let words = WordList::load_default().unwrap_or_else(|e| {
            error!("Bundled word list could not be loaded, starting empty: {:#}", e);
            WordList::new()
        });
        Self::with_words(words)
    }

    /// Creates a filter seeded with `words` instead of the bundled vocabulary.
    pub fn with_words(words: WordList) -> Self {
        debug!("Creating filter with {} base term(s).", words.len());
        Self {
            words,
            plugins: Vec::new(),
        }
    }

    /// Registers a plugin and merges its vocabulary, if any, into the active word list.
    pub fn use_plugin<P: Plugin + 'static>(&mut self, plugin: P) -> &mut Self {
        self.use_boxed(Box::new(plugin))
    }

    /// Same as `use_plugin` for an already boxed plugin.
    pub fn use_boxed(&mut self, plugin: Box<dyn Plugin>) -> &mut Self {
        if let Some(words) = plugin.words() {
            self.words.merge(words);
        }
        info!(
            "Registered plugin '{}' (active terms: {}).",
            plugin.name(),
            self.words.len()
        );
        self.plugins.push(plugin);
        self
    }

    /// The merged word list the built-in engines run against.
    pub fn words(&self) -> &WordList {
        &self.words
    }

    /// Names of the registered plugins, in registration order.
    pub fn plugin_names(&self) -> impl Iterator<Item = &str> {
        self.plugins.iter().map(|p| p.name())
    }

    /// Validates `text`.
    ///
    /// Each plugin validator sees the original text. A conclusive plugin result
    /// (non-empty `found` and a level) replaces the working result; anything
    /// else is ignored and never reverts an earlier override.
    pub fn validate(&self, text: &str) -> ValidationResult {
        let mut result = validate_bad_words(text, &self.words);

        for plugin in &self.plugins {
            let Some(custom) = plugin.validate(text) else {
                continue;
            };
            if custom.is_conclusive() {
                debug!("Plugin '{}' overrides the validation result.", plugin.name());
                result = custom;
            } else {
                debug!("Plugin '{}' returned an inconclusive result; ignored.", plugin.name());
            }
        }

        result
    }

    /// Sanitizes `text` with the default redaction options, then pipes it through plugins.
    pub fn sanitize(&self, text: &str) -> String {
        self.sanitize_with(text, &SanitizeOptions::default())
    }

    /// Sanitizes `text` with caller-supplied redaction options.
    ///
    /// Each plugin sanitizer receives the output of the previous stage.
    pub fn sanitize_with(&self, text: &str, options: &SanitizeOptions) -> String {
        let mut clean = sanitize_bad_words(text, &self.words, options);

        for plugin in &self.plugins {
            if let Some(transformed) = plugin.sanitize(&clean) {
                debug!("Plugin '{}' transformed the sanitized text.", plugin.name());
                clean = transformed;
            }
        }

        clean
    }

    /// Locates every flagged occurrence in `text` across all levels.
    ///
    /// Only the merged vocabulary is consulted; plugin validators are not run.
    pub fn find_matches(&self, text: &str) -> Vec<WordMatch> {
        find_all_matches(text, &self.words)
    }
}

impl Default for Filter {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Filter")
            .field("words", &self.words)
            .field("plugins", &self.plugin_names().collect::<Vec<_>>())
            .finish()
    }
}
