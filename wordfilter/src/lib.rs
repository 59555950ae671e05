// wordfilter/src/lib.rs
//! # wordfilter CLI
//!
//! Terminal front-end for `wordfilter-core`: reads text from a file or stdin,
//! then either masks flagged words (`sanitize`) or reports them (`validate`).

pub mod cli;
pub mod commands;
pub mod logger;
pub mod ui;
