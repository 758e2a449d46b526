use std::io;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum WordError {
    #[error("word must be exactly 5 letters, got {0}")]
    InvalidLength(usize),
    #[error("'{0}' is not a letter")]
    InvalidCharacter(char),
}

#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("dictionary contains no valid 5-letter words")]
    Empty,
    #[error("failed to read dictionary: {0}")]
    Io(#[from] io::Error),
}

#[derive(Debug, Error)]
pub enum StatsError {
    #[error("failed to access statistics file: {0}")]
    Io(#[from] io::Error),
    #[error("trouble serializing or deserializing statistics")]
    Serde(#[from] serde_json::Error),
    #[error("statistics record is inconsistent: {0}")]
    Inconsistent(&'static str),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LookupError {
    #[error("no definition source configured")]
    Unavailable,
    #[error("no definition found for {0}")]
    NotFound(String),
}
