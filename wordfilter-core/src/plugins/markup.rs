//! Strips HTML markup from sanitized output.
//!
//! `<script>` elements (including their body) are replaced by a visible
//! `[removed-script]` marker; every other tag is dropped, leaving its text.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::plugin::Plugin;

static SCRIPT_ELEMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)<script.*?>.*?</script>").expect("script element pattern is valid"));

static ANY_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]+>").expect("tag pattern is valid"));

pub const SCRIPT_MARKER: &str = "[removed-script]";

#[derive(Debug, Default, Clone, Copy)]
pub struct MarkupStripPlugin;

impl MarkupStripPlugin {
    pub fn strip(text: &str) -> String {
        let without_scripts = SCRIPT_ELEMENT.replace_all(text, SCRIPT_MARKER);
        ANY_TAG.replace_all(&without_scripts, "").into_owned()
    }
}

impl Plugin for MarkupStripPlugin {
    fn name(&self) -> &str {
        "xss-protection"
    }

    fn sanitize(&self, text: &str) -> Option<String> {
        Some(Self::strip(text))
    }
}
