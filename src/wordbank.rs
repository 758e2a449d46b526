use crate::error::DictionaryError;
use crate::word::Word;
use rand::Rng;
use std::collections::HashSet;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

pub const EMBEDDED_WORDBANK: &str = include_str!("resources/wordbank.txt");

pub fn load_wordbank_from_str(data: &str) -> Vec<Word> {
    data.lines().filter_map(|line| Word::new(line).ok()).collect()
}

pub fn load_wordbank_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let mut words = Vec::new();
    for line in reader.lines() {
        if let Ok(word) = Word::new(&line?) {
            words.push(word);
        }
    }
    Ok(words)
}

/// The fixed list of candidate secret words. Never empty.
#[derive(Clone, Debug)]
pub struct Dictionary {
    words: Vec<Word>,
}

impl Dictionary {
    /// # Errors
    /// Returns `DictionaryError::Empty` when no words are supplied.
    pub fn new(words: Vec<Word>) -> Result<Self, DictionaryError> {
        let mut seen = HashSet::new();
        let words: Vec<Word> = words.into_iter().filter(|w| seen.insert(*w)).collect();
        if words.is_empty() {
            return Err(DictionaryError::Empty);
        }
        Ok(Self { words })
    }

    /// # Errors
    /// Returns `DictionaryError::Empty` if the embedded list has no valid words.
    pub fn embedded() -> Result<Self, DictionaryError> {
        Self::new(load_wordbank_from_str(EMBEDDED_WORDBANK))
    }

    /// # Errors
    /// Fails if the file cannot be read or holds no valid words.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, DictionaryError> {
        Self::new(load_wordbank_from_file(path)?)
    }

    /// Pick a word uniformly at random.
    pub fn choose<R: Rng>(&self, rng: &mut R) -> Word {
        self.words[rng.random_range(0..self.words.len())]
    }

    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.words.contains(word)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
