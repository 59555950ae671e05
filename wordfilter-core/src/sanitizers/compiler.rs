//! compiler.rs - Manages the compilation and caching of flagged terms.
//!
//! This module converts dictionary terms into boundary-aware regular
//! expressions. Compiled expressions are kept in a global, shared cache keyed
//! by the normalized term, so repeated validate/sanitize calls over the same
//! vocabulary never recompile.
//!
//! The cache is never evicted. It grows with the number of distinct terms
//! seen by the process, so a host that keeps building filters from unrelated
//! vocabularies keeps every matcher it has compiled.
//!
//! License: MIT OR APACHE 2.0

use lazy_static::lazy_static;
use log::{debug, warn};
use regex::{Regex, RegexBuilder};
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, RwLock};

use crate::errors::WordFilterError;
use crate::severity::SeverityLevel;
use crate::word_list::WordList;

/// A single flagged term ready to be applied to text.
#[derive(Debug, Clone)]
pub struct CompiledTerm {
    /// Case-insensitive `\b<term>\b` matcher.
    pub regex: Arc<Regex>,
    /// The canonical (lowercased) dictionary term.
    pub term: String,
    /// The level the term was declared at.
    pub level: SeverityLevel,
}

lazy_static! {
    /// A thread-safe, global cache of compiled term matchers.
    static ref TERM_CACHE: RwLock<HashMap<String, Arc<Regex>>> = RwLock::new(HashMap::new());
}

/// Compiles one term into a whole-word, case-insensitive regular expression.
///
/// The term is escaped, so characters such as `.` or `*` are matched literally.
/// Length is not checked here; word list files enforce `MAX_TERM_LENGTH` when loaded.
pub fn compile_term(term: &str) -> Result<Regex, WordFilterError> {
    let pattern = format!(r"\b{}\b", regex::escape(term));
    RegexBuilder::new(&pattern)
        .case_insensitive(true)
        .size_limit(10 * (1 << 20))
        .build()
        .map_err(|e| WordFilterError::TermCompilation(term.to_string(), e))
}

/// Gets a compiled matcher for `term` from the cache, compiling it if needed.
///
/// A poisoned cache lock is not fatal; the term is compiled without caching.
pub fn get_or_compile_term(term: &str) -> Result<Arc<Regex>, WordFilterError> {
    if let Ok(cache) = TERM_CACHE.read() {
        if let Some(regex) = cache.get(term) {
            return Ok(Arc::clone(regex));
        }
    }

    let compiled = Arc::new(compile_term(term)?);
    if let Ok(mut cache) = TERM_CACHE.write() {
        cache.insert(term.to_string(), Arc::clone(&compiled));
    }
    debug!("Compiled and cached matcher for a term of {} chars.", term.chars().count());
    Ok(compiled)
}

/// Compiles every distinct term of one level, in declaration order.
///
/// Terms that fail to compile are skipped with a warning; duplicates within
/// the level are compiled once.
pub fn compile_level(words: &WordList, level: SeverityLevel) -> Vec<CompiledTerm> {
    let mut seen = HashSet::new();
    let mut compiled = Vec::new();

    for term in words.terms(level) {
        if !seen.insert(term.as_str()) {
            continue;
        }
        match get_or_compile_term(term) {
            Ok(regex) => compiled.push(CompiledTerm {
                regex,
                term: term.clone(),
                level,
            }),
            Err(e) => warn!("Skipping term at level '{}': {}", level, e),
        }
    }

    compiled
}
