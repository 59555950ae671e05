// wordfilter/src/logger.rs
//! Logging setup for the CLI.
//!
//! Logs go to stderr so they never mix with sanitized output on stdout.
//! `RUST_LOG` is honoured unless an explicit level is forced by a flag.

use env_logger::{Builder, Env, Target};
use log::LevelFilter;

/// Initializes `env_logger` once; later calls are ignored.
pub fn init_logger(level_override: Option<LevelFilter>) {
    let mut builder = Builder::from_env(Env::default().default_filter_or("warn"));
    if let Some(level) = level_override {
        builder.filter_level(level);
    }
    builder.target(Target::Stderr).format_timestamp(None);
    let _ = builder.try_init();
}
