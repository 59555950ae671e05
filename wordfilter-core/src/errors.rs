//! errors.rs - Custom error types for the wordfilter-core library.
//!
//! Matching and redaction never fail: a "no match" is an empty result, not an
//! error. The variants below only surface at the fallible edges of the crate,
//! such as parsing severity tags or loading word lists from disk.
//!
//! License: MIT OR APACHE 2.0

use thiserror::Error;

/// This enum represents all possible error types in the `wordfilter-core` library.
///
/// By using `#[non_exhaustive]`, we signal to consumers of this library that
/// new variants may be added in future versions.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum WordFilterError {
    #[error("Unknown severity level '{0}' (expected one of: low, medium, high, highest)")]
    UnknownLevel(String),

    #[error("Term '{0}': length ({1}) exceeds maximum allowed ({2})")]
    TermLengthExceeded(String, usize, usize),

    #[error("Failed to compile matcher for term '{0}': {1}")]
    TermCompilation(String, regex::Error),
}
