// wordfilter-core/src/lib.rs
//! # wordfilter Core Library
//!
//! `wordfilter-core` provides the platform-independent logic for detecting and
//! redacting flagged words. It defines severity-graded word lists, a
//! boundary-aware matcher, a masking redactor, and a `Plugin` trait through
//! which extra vocabulary and custom behaviour are composed into a `Filter`.
//!
//! The library performs no I/O apart from optionally reading word list files.
//!
//! ## Modules
//!
//! * `severity`: The ordered `SeverityLevel` enum.
//! * `word_list`: `WordList`, merging, and YAML loading/validation.
//! * `sanitizers`: Compiles terms into cached word-boundary matchers.
//! * `engines`: The `matcher` (validation) and `redactor` (sanitization) engines.
//! * `word_match`: Located matches and match summaries for reporting.
//! * `plugin`: The `Plugin` trait and the closure-backed `CustomPlugin`.
//! * `plugins`: Bundled plugins (markup stripping, ANSI stripping, word list files).
//! * `filter`: The `Filter` orchestrator.
//! * `errors`: The `WordFilterError` type.
//!
//! ## Usage Example
//!
//! ```rust
//! use wordfilter_core::{CustomPlugin, Filter, SeverityLevel, WordList};
//!
//! let mut filter = Filter::new();
//! filter.use_plugin(
//!     CustomPlugin::new("extra-words")
//!         .with_words(WordList::new().with_terms(SeverityLevel::Medium, ["dumb"])),
//! );
//!
//! let result = filter.validate("You are so dumb.");
//! assert_eq!(result.found, vec!["dumb"]);
//! assert_eq!(result.level, Some(SeverityLevel::Medium));
//!
//! assert_eq!(filter.sanitize("You are so dumb."), "You are so ****.");
//! ```
//!
//! ## Error Handling
//!
//! Validation and sanitization never fail; "nothing found" is an empty
//! `ValidationResult`. Loading word lists returns `anyhow::Result`, and
//! `WordFilterError` covers the specific library error cases.
//!
//! ---
//! License: MIT OR Apache-2.0

pub mod engines;
pub mod errors;
pub mod filter;
pub mod plugin;
pub mod plugins;
pub mod sanitizers;
pub mod severity;
pub mod word_list;
pub mod word_match;

/// Re-exports the custom error type for clear error reporting.
pub use errors::WordFilterError;

/// Re-exports the vocabulary types.
pub use severity::SeverityLevel;
pub use word_list::{WordList, MAX_TERM_LENGTH};

/// Re-exports the standalone engine entry points, usable without a `Filter`.
pub use engines::matcher::{find_all_matches, validate_bad_words, ValidationResult};
pub use engines::redactor::{sanitize_bad_words, SanitizeOptions};

/// Re-exports match reporting types.
pub use word_match::{summarize_matches, MatchSummaryItem, WordMatch};

/// Re-exports the plugin contract and the bundled plugins.
pub use plugin::{CustomPlugin, Plugin};
pub use plugins::{AnsiStripPlugin, MarkupStripPlugin, WordListPlugin};

/// Re-exports the orchestrator.
pub use filter::Filter;

// Advanced usage: direct access to compiled term matchers.
pub use sanitizers::compiler::{compile_term, CompiledTerm};
