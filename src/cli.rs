use crate::evaluator::{Verdict, verdicts_to_string};
use crate::game_state::{GameConfig, GameInterface, UserAction};
use crate::session::{Hint, HintDenial};
use crate::stats::{Statistics, get_stats_path};
use crate::word::{WORD_LENGTH, Word};
use clap::Parser;
use std::collections::VecDeque;
use std::io::BufRead;
use std::path::PathBuf;

/// Wordle clone options
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a newline-delimited wordbank file
    #[arg(short = 'i', long = "input")]
    pub wordbank_path: Option<PathBuf>,

    /// Statistics file (defaults to the user data directory)
    #[arg(long = "stats")]
    pub stats_path: Option<PathBuf>,

    /// Keep statistics in memory only
    #[arg(long = "no-stats", conflicts_with = "stats_path")]
    pub no_stats: bool,

    /// File of `WORD: definition` lines shown when a game ends
    #[arg(long = "definitions")]
    pub definitions_path: Option<PathBuf>,

    /// Seed for reproducible word and hint choices
    #[arg(long)]
    pub seed: Option<u64>,

    /// Line-based prompts instead of the full-screen interface
    #[arg(long)]
    pub plain: bool,

    /// Typing QWERT reveals the secret word
    #[arg(long = "reveal-sequence", hide = true)]
    pub reveal_sequence: bool,

    /// Write log records to this file
    #[arg(long = "log-file")]
    pub log_file: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    #[must_use]
    pub fn game_config(&self) -> GameConfig {
        let stats_path = if self.no_stats {
            None
        } else {
            self.stats_path.clone().or_else(get_stats_path)
        };
        GameConfig {
            seed: self.seed,
            stats_path,
            reveal_sequence: self.reveal_sequence,
        }
    }
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}

// UI Input/Output functions

pub enum GuessInput {
    Valid(Word),
    Invalid,
    Exit,
    NewGame,
    Hint,
}

pub fn read_guess<R: BufRead>(reader: &mut R) -> GuessInput {
    println!("\nEnter your guess (5 letters, 'hint', 'next' for a new game, or 'exit' to quit):");
    let mut input = String::new();
    match reader.read_line(&mut input) {
        Ok(0) => return GuessInput::Exit,
        Err(e) => {
            log::warn!("failed to read guess, exiting: {e}");
            return GuessInput::Exit;
        }
        Ok(_) => {}
    }
    let input = input.trim().to_uppercase();

    match input.as_str() {
        "EXIT" => GuessInput::Exit,
        "NEXT" | "NEW" => GuessInput::NewGame,
        "HINT" => GuessInput::Hint,
        _ => match Word::new(&input) {
            Ok(word) => GuessInput::Valid(word),
            Err(e) => {
                println!("Invalid guess: {e}. Please enter 5 letters.");
                GuessInput::Invalid
            }
        },
    }
}

pub fn display_row(letters: &[char; WORD_LENGTH], verdicts: &[Verdict; WORD_LENGTH]) {
    let word: String = letters.iter().collect();
    println!("{word}  {}", verdicts_to_string(verdicts));
}

pub fn display_stats(stats: &Statistics) {
    println!(
        "Played: {} | Win %: {} | Current streak: {} | Max streak: {}",
        stats.games_played,
        stats.win_percentage(),
        stats.current_streak,
        stats.max_streak
    );
}

/// CLI implementation of the `GameInterface` trait.
///
/// Each line the player enters is queued as letters followed by a submit.
/// Any letters left in the row are cleared first.
pub struct CliInterface<R: BufRead> {
    reader: R,
    pending: VecDeque<UserAction>,
    row: [char; WORD_LENGTH],
    filled: usize,
}

impl<R: BufRead> CliInterface<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
            row: [' '; WORD_LENGTH],
            filled: 0,
        }
    }

    fn queue_guess(&mut self, word: &Word) {
        self.pending
            .extend(std::iter::repeat_n(UserAction::Backspace, self.filled));
        self.pending
            .extend(word.letters().into_iter().map(UserAction::Letter));
        self.pending.push_back(UserAction::Submit);
    }
}

impl<R: BufRead> GameInterface for CliInterface<R> {
    fn read_action(&mut self) -> Option<UserAction> {
        if let Some(action) = self.pending.pop_front() {
            return Some(action);
        }
        match read_guess(&mut self.reader) {
            GuessInput::Valid(word) => {
                self.queue_guess(&word);
                self.pending.pop_front()
            }
            GuessInput::Exit => Some(UserAction::Exit),
            GuessInput::NewGame => Some(UserAction::NewGame),
            GuessInput::Hint => Some(UserAction::Hint),
            GuessInput::Invalid => None,
        }
    }

    fn on_new_game(&mut self) {
        self.row = [' '; WORD_LENGTH];
        self.filled = 0;
        println!("New game started. Guess the 5-letter word in 6 tries.");
    }

    fn on_cell_changed(&mut self, _row: usize, col: usize, letter: Option<char>) {
        match letter {
            Some(c) => {
                self.row[col] = c;
                self.filled = col + 1;
            }
            None => {
                self.row[col] = ' ';
                self.filled = col;
            }
        }
    }

    fn on_row_evaluated(&mut self, row: usize, verdicts: &[Verdict; WORD_LENGTH]) {
        print!("{}. ", row + 1);
        display_row(&self.row, verdicts);
        self.row = [' '; WORD_LENGTH];
        self.filled = 0;
    }

    fn on_game_won(&mut self) {
        println!("Congratulations! You guessed it!");
    }

    fn on_game_lost(&mut self, secret: &Word) {
        println!("Game Over! The word was: {secret}");
    }

    fn on_hint_granted(&mut self, hint: &Hint) {
        println!("Hint: {hint}");
    }

    fn on_hint_denied(&mut self, reason: HintDenial) {
        println!("No hint: {reason}");
    }

    fn on_stats_updated(&mut self, stats: &Statistics) {
        display_stats(stats);
    }

    fn on_definition(&mut self, word: &Word, definition: &str) {
        println!("{word}: {definition}");
    }

    fn on_secret_revealed(&mut self, secret: &Word) {
        println!("Current word is: {secret}");
    }

    fn on_exit(&mut self) {
        println!("Exiting.");
    }
}
