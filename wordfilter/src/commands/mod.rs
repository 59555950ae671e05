//! Command implementations and the shared setup they need.

pub mod sanitize;
pub mod validate;

use anyhow::{Context, Result};
use log::{debug, info};
use std::io::{self, Read};
use std::path::Path;

use wordfilter_core::{AnsiStripPlugin, Filter, MarkupStripPlugin, WordList, WordListPlugin};

use crate::cli::Cli;

/// Builds the filter described by the global flags.
///
/// Word list files are registered first, in the order given, so their terms
/// follow the base vocabulary. Markup stripping is registered last so it sees
/// the redacted text.
pub fn build_filter(cli: &Cli) -> Result<Filter> {
    let mut filter = if cli.no_default_words {
        debug!("Starting from an empty vocabulary.");
        Filter::with_words(WordList::new())
    } else {
        Filter::new()
    };

    for path in &cli.words {
        let plugin = WordListPlugin::from_file(path)
            .with_context(|| format!("Failed to load word list '{}'", path.display()))?;
        filter.use_plugin(plugin);
    }

    if cli.strip_markup {
        filter.use_plugin(MarkupStripPlugin);
    }

    info!("Filter ready with {} active term(s).", filter.words().len());
    Ok(filter)
}

/// Reads the whole input from `path`, or from stdin when no path is given.
pub fn read_input(path: Option<&Path>, strip_ansi: bool) -> Result<String> {
    let input = match path {
        Some(p) => std::fs::read_to_string(p)
            .with_context(|| format!("Failed to read input file {}", p.display()))?,
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read from stdin")?;
            buffer
        }
    };

    if strip_ansi {
        Ok(AnsiStripPlugin::strip(&input))
    } else {
        Ok(input)
    }
}
