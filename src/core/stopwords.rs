//! Stop-word list used by the word statistics.
//!
//! The bundled list (`data/stop_hinglish.txt`, mixed English and Hinglish) is
//! parsed once per process and shared. A different list can be loaded with
//! [`StopWords::from_file`] and handed to
//! [`Analyzer::with_parts`](crate::core::analysis::Analyzer::with_parts).
//!
//! List format: one word per line, compared in lowercase. Blank lines and
//! lines starting with `#` are ignored. A line holding more than one word can
//! never match a token and is skipped with a warning.

use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::sync::{Arc, LazyLock};

use tracing::{debug, warn};

use crate::error::ChatlensError;

const BUNDLED: &str = include_str!("../../data/stop_hinglish.txt");

static BUNDLED_WORDS: LazyLock<Arc<StopWords>> =
    LazyLock::new(|| Arc::new(StopWords::from_list(BUNDLED)));

/// A set of words excluded from word statistics.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StopWords {
    words: HashSet<String>,
}

impl StopWords {
    /// Returns the process-wide bundled list.
    pub fn bundled() -> Arc<StopWords> {
        Arc::clone(&BUNDLED_WORDS)
    }

    /// Creates an empty list (no word is a stop word).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parses a newline-separated list.
    pub fn from_list(list: &str) -> Self {
        let mut words = HashSet::new();
        for (idx, line) in list.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            if line.contains(char::is_whitespace) {
                warn!(line = idx + 1, entry = line, "skipping multi-word stop-word entry");
                continue;
            }
            words.insert(line.to_lowercase());
        }
        Self { words }
    }

    /// Loads a newline-separated list from a file.
    ///
    /// # Errors
    ///
    /// Returns [`ChatlensError::StopWords`] if the file cannot be read.
    pub fn from_file(path: &Path) -> Result<Self, ChatlensError> {
        let list = fs::read_to_string(path).map_err(|e| ChatlensError::stop_words(path, e))?;
        let words = Self::from_list(&list);
        debug!(path = %path.display(), words = words.len(), "loaded stop words");
        Ok(words)
    }

    /// Returns `true` if `word` (already lowercase) is a stop word.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for StopWords {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            words: iter.into_iter().map(|w| w.into().to_lowercase()).collect(),
        }
    }
}
