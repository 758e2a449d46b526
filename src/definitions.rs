//! Optional end-of-game word definitions.
//!
//! A lookup failure only costs the player the definition text; callers log
//! and move on.

use crate::error::LookupError;
use crate::word::Word;
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::Path;

pub trait DefinitionSource {
    /// # Errors
    /// Returns `LookupError` when no definition is available for `word`.
    fn define(&self, word: &Word) -> Result<String, LookupError>;
}

/// Source used when nothing is configured.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoDefinitions;

impl DefinitionSource for NoDefinitions {
    fn define(&self, _word: &Word) -> Result<String, LookupError> {
        Err(LookupError::Unavailable)
    }
}

/// Definitions read from a local `WORD: definition` file.
#[derive(Debug, Default, Clone)]
pub struct DefinitionFile {
    entries: HashMap<Word, String>,
}

impl DefinitionFile {
    /// Lines without a colon or with an invalid word are skipped.
    #[must_use]
    pub fn from_text(data: &str) -> Self {
        let entries = data
            .lines()
            .filter_map(|line| {
                let (word, text) = line.split_once(':')?;
                let word = Word::new(word).ok()?;
                let text = text.trim();
                (!text.is_empty()).then(|| (word, text.to_string()))
            })
            .collect();
        Self { entries }
    }

    /// # Errors
    /// Returns an I/O error if the file cannot be read.
    pub fn load<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        Ok(Self::from_text(&fs::read_to_string(path)?))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl DefinitionSource for DefinitionFile {
    fn define(&self, word: &Word) -> Result<String, LookupError> {
        self.entries
            .get(word)
            .cloned()
            .ok_or_else(|| LookupError::NotFound(word.to_string()))
    }
}
