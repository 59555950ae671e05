//! A vocabulary-only plugin, typically backed by a YAML word list file.

use anyhow::Result;
use std::path::Path;

use crate::plugin::Plugin;
use crate::word_list::WordList;

#[derive(Debug, Clone)]
pub struct WordListPlugin {
    name: String,
    words: WordList,
}

impl WordListPlugin {
    pub fn new(name: impl Into<String>, words: WordList) -> Self {
        Self {
            name: name.into(),
            words,
        }
    }

    /// Loads the plugin's vocabulary from `path`; the plugin is named after the file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let words = WordList::load_from_file(path)?;
        Ok(Self::new(path.display().to_string(), words))
    }
}

impl Plugin for WordListPlugin {
    fn name(&self) -> &str {
        &self.name
    }

    fn words(&self) -> Option<&WordList> {
        Some(&self.words)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::severity::SeverityLevel;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_from_file_loads_words() -> Result<()> {
        let mut file = NamedTempFile::new()?;
        writeln!(file, "medium:\n  - Dumb\nhigh:\n  - badword")?;

        let plugin = WordListPlugin::from_file(file.path())?;
        let words = plugin.words().expect("vocabulary plugin always has words");
        assert_eq!(words.terms(SeverityLevel::Medium), ["dumb"]);
        assert_eq!(words.terms(SeverityLevel::High), ["badword"]);
        assert!(plugin.sanitize("dumb").is_none());
        Ok(())
    }

    #[test]
    fn test_from_file_rejects_unknown_level() -> Result<()> {
        let mut file = NamedTempFile::new()?;
        writeln!(file, "severe:\n  - word")?;
        assert!(WordListPlugin::from_file(file.path()).is_err());
        Ok(())
    }
}
