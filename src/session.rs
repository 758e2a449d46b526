//! One play-through: the secret word, the board, and the turn cursor.
//!
//! # State Machine
//! - `Filling` (column < 5) accepts letters and backspace
//! - `ReadyToSubmit` (column == 5) accepts backspace and submit
//! - `submit` evaluates the row and moves to `Won`, `Lost`, or back to
//!   `Filling` on the next row, all before it returns
//! - `Won` and `Lost` are terminal; every input is ignored
//!
//! Inputs that do not fit the current state are no-ops and return `None`.

use crate::evaluator::{Verdict, evaluate, is_solved};
use crate::word::{WORD_LENGTH, Word};
use crate::{debug_log, info_log};
use rand::Rng;
use std::fmt;
use thiserror::Error;

pub const MAX_GUESSES: usize = 6;
pub const MAX_HINTS: u8 = 2;

/// Six rows of five cells, filled left to right, top to bottom.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Board {
    cells: [[Option<char>; WORD_LENGTH]; MAX_GUESSES],
}

impl Board {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// `None` for an empty cell or a position off the board.
    #[must_use]
    pub fn cell(&self, row: usize, col: usize) -> Option<char> {
        self.cells.get(row)?.get(col).copied().flatten()
    }

    /// The row as a word, once every cell in it is filled.
    #[must_use]
    pub fn row_word(&self, row: usize) -> Option<Word> {
        let mut letters = [' '; WORD_LENGTH];
        for (slot, cell) in letters.iter_mut().zip(*self.cells.get(row)?) {
            *slot = cell?;
        }
        Word::from_letters(letters).ok()
    }

    fn set(&mut self, row: usize, col: usize, letter: Option<char>) {
        self.cells[row][col] = letter;
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionStatus {
    Filling,
    ReadyToSubmit,
    Won,
    Lost,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Won,
    Lost,
}

/// A cell written or cleared by a letter or backspace.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellChange {
    pub row: usize,
    pub col: usize,
    pub letter: Option<char>,
}

/// The result of a submitted row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RowResult {
    pub row: usize,
    pub guess: Word,
    pub verdicts: [Verdict; WORD_LENGTH],
    /// Status after the row was applied
    pub status: SessionStatus,
}

/// A revealed letter. `position` is zero-based.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Hint {
    pub position: usize,
    pub letter: char,
}

impl Hint {
    #[must_use]
    pub fn display_position(&self) -> usize {
        self.position + 1
    }
}

impl fmt::Display for Hint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Letter \"{}\" is at position {}",
            self.letter,
            self.display_position()
        )
    }
}

/// Why a hint was refused, in the order the checks run.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum HintDenial {
    #[error("game already over")]
    GameOver,
    #[error("no hints remaining")]
    NoHintsRemaining,
    #[error("need at least one guess first")]
    NeedGuess,
    #[error("need at least one correct letter first")]
    NeedCorrectLetter,
    #[error("all positions already found")]
    AllPositionsFound,
}

#[derive(Clone, Debug)]
pub struct GameSession {
    secret: Word,
    board: Board,
    current_row: usize,
    current_column: usize,
    outcome: Option<Outcome>,
    hints_used: u8,
}

impl GameSession {
    #[must_use]
    pub fn new(secret: Word) -> Self {
        debug_log!("GameSession::new() - secret chosen");
        Self {
            secret,
            board: Board::new(),
            current_row: 0,
            current_column: 0,
            outcome: None,
            hints_used: 0,
        }
    }

    #[must_use]
    pub fn secret(&self) -> &Word {
        &self.secret
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn current_row(&self) -> usize {
        self.current_row
    }

    #[must_use]
    pub fn current_column(&self) -> usize {
        self.current_column
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    #[must_use]
    pub fn hints_used(&self) -> u8 {
        self.hints_used
    }

    #[must_use]
    pub fn hints_remaining(&self) -> u8 {
        MAX_HINTS.saturating_sub(self.hints_used)
    }

    #[must_use]
    pub fn status(&self) -> SessionStatus {
        match self.outcome {
            Some(Outcome::Won) => SessionStatus::Won,
            Some(Outcome::Lost) => SessionStatus::Lost,
            None if self.current_column == WORD_LENGTH => SessionStatus::ReadyToSubmit,
            None => SessionStatus::Filling,
        }
    }

    /// Write a letter at the cursor. Non-letters are ignored.
    pub fn type_letter(&mut self, letter: char) -> Option<CellChange> {
        if self.is_over() || self.current_column >= WORD_LENGTH || !letter.is_ascii_alphabetic()
        {
            return None;
        }
        let letter = letter.to_ascii_uppercase();
        let change = CellChange {
            row: self.current_row,
            col: self.current_column,
            letter: Some(letter),
        };
        self.board.set(change.row, change.col, change.letter);
        self.current_column += 1;
        Some(change)
    }

    pub fn backspace(&mut self) -> Option<CellChange> {
        if self.is_over() || self.current_column == 0 {
            return None;
        }
        self.current_column -= 1;
        self.board.set(self.current_row, self.current_column, None);
        Some(CellChange {
            row: self.current_row,
            col: self.current_column,
            letter: None,
        })
    }

    /// Evaluate the full current row and advance or end the game.
    pub fn submit(&mut self) -> Option<RowResult> {
        if self.is_over() || self.current_column != WORD_LENGTH {
            return None;
        }
        let row = self.current_row;
        let guess = self.board.row_word(row)?;
        let verdicts = evaluate(&self.secret, &guess);

        if is_solved(&verdicts) {
            self.outcome = Some(Outcome::Won);
            info_log!("submit() - row {} solved the puzzle", row);
        } else if row == MAX_GUESSES - 1 {
            self.outcome = Some(Outcome::Lost);
            info_log!("submit() - last row used, game lost");
        } else {
            self.current_row += 1;
            self.current_column = 0;
            debug_log!("submit() - advancing to row {}", self.current_row);
        }

        Some(RowResult {
            row,
            guess,
            verdicts,
            status: self.status(),
        })
    }

    /// Positions already matched exactly in some submitted row.
    #[must_use]
    pub fn found_positions(&self) -> [bool; WORD_LENGTH] {
        let mut found = [false; WORD_LENGTH];
        for row in 0..self.current_row {
            for (col, slot) in found.iter_mut().enumerate() {
                if self.board.cell(row, col) == Some(self.secret.letter(col)) {
                    *slot = true;
                }
            }
        }
        found
    }

    /// Reveal one letter the player has not yet placed.
    ///
    /// # Errors
    /// Returns the first applicable `HintDenial`; a denial never spends budget.
    pub fn request_hint<R: Rng>(&mut self, rng: &mut R) -> Result<Hint, HintDenial> {
        if self.is_over() {
            return Err(HintDenial::GameOver);
        }
        if self.hints_used >= MAX_HINTS {
            return Err(HintDenial::NoHintsRemaining);
        }
        if self.current_row == 0 {
            return Err(HintDenial::NeedGuess);
        }

        let found = self.found_positions();
        if !found.iter().any(|f| *f) {
            return Err(HintDenial::NeedCorrectLetter);
        }
        let open: Vec<usize> = (0..WORD_LENGTH).filter(|i| !found[*i]).collect();
        if open.is_empty() {
            return Err(HintDenial::AllPositionsFound);
        }

        let position = open[rng.random_range(0..open.len())];
        self.hints_used += 1;
        debug_log!(
            "request_hint() - revealing position {}, {} hints used",
            position,
            self.hints_used
        );
        Ok(Hint {
            position,
            letter: self.secret.letter(position),
        })
    }
}
