// wordfilter-core/tests/word_list_config_tests.rs
use anyhow::Result;
use std::io::Write;
use tempfile::NamedTempFile;

use wordfilter_core::{Filter, SeverityLevel, WordList, WordListPlugin};

fn yaml_file(content: &str) -> Result<NamedTempFile> {
    let mut file = NamedTempFile::new()?;
    file.write_all(content.as_bytes())?;
    Ok(file)
}

#[test]
fn test_load_default_words() {
    let words = WordList::load_default().unwrap();
    assert!(!words.is_empty());
    assert!(words.terms(SeverityLevel::Low).iter().any(|t| t == "heck"));
    assert!(words.terms(SeverityLevel::Medium).iter().any(|t| t == "idiot"));
}

#[test]
fn test_load_from_file() -> Result<()> {
    let file = yaml_file(
        r#"
low:
  - Gosh
medium:
  - dumb
  - "  dense  "
"#,
    )?;
    let words = WordList::load_from_file(file.path())?;
    assert_eq!(words.terms(SeverityLevel::Low), ["gosh"]);
    assert_eq!(words.terms(SeverityLevel::Medium), ["dumb", "dense"]);
    assert!(words.terms(SeverityLevel::High).is_empty());
    Ok(())
}

#[test]
fn test_load_from_file_rejects_empty_terms() -> Result<()> {
    let file = yaml_file("high:\n  - ''\n")?;
    let err = WordList::load_from_file(file.path()).unwrap_err();
    assert!(format!("{:#}", err).contains("empty term"));
    Ok(())
}

#[test]
fn test_load_from_missing_file_reports_path() {
    let err = WordList::load_from_file("/definitely/not/here.yaml").unwrap_err();
    assert!(err.to_string().contains("/definitely/not/here.yaml"));
}

#[test]
fn test_file_plugin_extends_filter() -> Result<()> {
    let file = yaml_file("medium:\n  - dumb\n")?;
    let mut filter = Filter::new();
    filter.use_plugin(WordListPlugin::from_file(file.path())?);

    let result = filter.validate("So dumb.");
    assert_eq!(result.found, vec!["dumb"]);
    assert_eq!(result.level, Some(SeverityLevel::Medium));
    Ok(())
}
