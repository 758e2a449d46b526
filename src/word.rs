use crate::error::WordError;
use std::fmt;
use std::str::FromStr;

pub const WORD_LENGTH: usize = 5;

/// A five letter, upper-case ASCII word.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word([u8; WORD_LENGTH]);

impl Word {
    /// Parse a word, trimming whitespace and upper-casing ASCII letters.
    ///
    /// # Errors
    /// Returns `WordError` if the input is not exactly five letters A-Z.
    pub fn new(input: &str) -> Result<Self, WordError> {
        let trimmed = input.trim();
        let count = trimmed.chars().count();
        if count != WORD_LENGTH {
            return Err(WordError::InvalidLength(count));
        }

        let mut letters = [0u8; WORD_LENGTH];
        for (slot, c) in letters.iter_mut().zip(trimmed.chars()) {
            if !c.is_ascii_alphabetic() {
                return Err(WordError::InvalidCharacter(c));
            }
            *slot = c.to_ascii_uppercase() as u8;
        }
        Ok(Self(letters))
    }

    /// Build a word from board cells.
    ///
    /// # Errors
    /// Returns `WordError::InvalidCharacter` for any non-letter cell.
    pub fn from_letters(letters: [char; WORD_LENGTH]) -> Result<Self, WordError> {
        let mut bytes = [0u8; WORD_LENGTH];
        for (slot, c) in bytes.iter_mut().zip(letters) {
            if !c.is_ascii_alphabetic() {
                return Err(WordError::InvalidCharacter(c));
            }
            *slot = c.to_ascii_uppercase() as u8;
        }
        Ok(Self(bytes))
    }

    /// # Panics
    /// Panics if `index` is not below `WORD_LENGTH`.
    #[must_use]
    pub fn letter(&self, index: usize) -> char {
        char::from(self.0[index])
    }

    #[must_use]
    pub fn letters(&self) -> [char; WORD_LENGTH] {
        self.0.map(char::from)
    }

    pub(crate) fn bytes(&self) -> [u8; WORD_LENGTH] {
        self.0
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in self.letters() {
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

impl FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
