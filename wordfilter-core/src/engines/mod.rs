// wordfilter-core/src/engines/mod.rs
//! The two built-in engines that run over a `WordList`.
//!
//! * `matcher`: validation, reporting which terms occur and at what severity.
//! * `redactor`: sanitization, masking every flagged occurrence.
//!
//! Both are pure functions of their input; the `Filter` composes them with
//! plugin overrides.

pub mod matcher;
pub mod redactor;
