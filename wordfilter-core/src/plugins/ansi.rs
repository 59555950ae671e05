//! Removes ANSI escape sequences (colours, cursor movement) from sanitized output.
//!
//! As a plugin it runs after redaction. Escapes glued to a word (`\x1b[31mheck`)
//! hide it from the word-boundary matcher, so callers filtering coloured input
//! should run `AnsiStripPlugin::strip` on the input first.

use log::debug;
use strip_ansi_escapes::strip;

use crate::plugin::Plugin;

#[derive(Debug, Default, Clone, Copy)]
pub struct AnsiStripPlugin;

impl AnsiStripPlugin {
    pub fn strip(text: &str) -> String {
        let stripped_bytes = strip(text.as_bytes());
        String::from_utf8_lossy(&stripped_bytes).into_owned()
    }
}

impl Plugin for AnsiStripPlugin {
    fn name(&self) -> &str {
        "ansi-strip"
    }

    fn sanitize(&self, text: &str) -> Option<String> {
        let stripped = Self::strip(text);
        debug!("Stripped {} bytes of ANSI escapes.", text.len().saturating_sub(stripped.len()));
        Some(stripped)
    }
}
