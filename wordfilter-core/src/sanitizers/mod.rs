//! Term compilation for the wordfilter engines.
//!
//! Every flagged term is turned into a case-insensitive, word-boundary-anchored
//! regular expression before it is applied to input text. Both the matcher and
//! the redactor obtain their compiled terms from here.

pub mod compiler;
