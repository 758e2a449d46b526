use crate::definitions::{DefinitionSource, NoDefinitions};
use crate::evaluator::Verdict;
use crate::session::{GameSession, Hint, HintDenial, Outcome, RowResult};
use crate::stats::{Statistics, read_stats, write_stats};
use crate::word::{WORD_LENGTH, Word};
use crate::wordbank::Dictionary;
use crate::{debug_log, info_log};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::collections::VecDeque;
use std::path::PathBuf;

/// Typing this sequence reveals the secret when `reveal_sequence` is on.
pub const REVEAL_SEQUENCE: &str = "QWERT";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserAction {
    Letter(char),
    Backspace,
    Submit,
    NewGame,
    Hint,
    Exit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

#[derive(Debug, Clone, Default)]
pub struct GameConfig {
    /// Fixed RNG seed for reproducible word and hint choices
    pub seed: Option<u64>,
    /// Where statistics are loaded from and saved to; `None` keeps them in memory
    pub stats_path: Option<PathBuf>,
    pub reveal_sequence: bool,
}

/// Trait for game front ends.
///
/// The controller reads one action at a time and reports every state change
/// through the `on_*` callbacks. Implementations render from these events and
/// never read back into the game.
pub trait GameInterface {
    /// `None` means no action is ready yet.
    fn read_action(&mut self) -> Option<UserAction>;
    fn on_new_game(&mut self);
    fn on_cell_changed(&mut self, row: usize, col: usize, letter: Option<char>);
    fn on_row_evaluated(&mut self, row: usize, verdicts: &[Verdict; WORD_LENGTH]);
    fn on_game_won(&mut self);
    fn on_game_lost(&mut self, secret: &Word);
    fn on_hint_granted(&mut self, hint: &Hint);
    fn on_hint_denied(&mut self, reason: HintDenial);
    fn on_stats_updated(&mut self, stats: &Statistics);
    fn on_definition(&mut self, _word: &Word, _definition: &str) {}
    fn on_secret_revealed(&mut self, _secret: &Word) {}
    fn on_exit(&mut self);
}

/// Owns the live session, the statistics, and everything needed to start the
/// next session.
pub struct Game {
    dictionary: Dictionary,
    session: GameSession,
    stats: Statistics,
    stats_path: Option<PathBuf>,
    rng: StdRng,
    definitions: Box<dyn DefinitionSource>,
    reveal_sequence: bool,
    recent_keys: VecDeque<char>,
}

impl Game {
    #[must_use]
    pub fn new(dictionary: Dictionary, config: GameConfig) -> Self {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let stats = load_stats(config.stats_path.as_ref());
        let session = GameSession::new(dictionary.choose(&mut rng));
        info_log!(
            "Game::new() - {} words, stats: {:?}",
            dictionary.len(),
            stats
        );

        Self {
            dictionary,
            session,
            stats,
            stats_path: config.stats_path,
            rng,
            definitions: Box::new(NoDefinitions),
            reveal_sequence: config.reveal_sequence,
            recent_keys: VecDeque::with_capacity(WORD_LENGTH),
        }
    }

    #[must_use]
    pub fn with_definitions(mut self, definitions: Box<dyn DefinitionSource>) -> Self {
        self.definitions = definitions;
        self
    }

    #[must_use]
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    #[must_use]
    pub fn stats(&self) -> &Statistics {
        &self.stats
    }

    #[must_use]
    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// Apply one action and report the results to `interface`.
    pub fn handle<I: GameInterface + ?Sized>(&mut self, action: UserAction, interface: &mut I) -> Flow {
        debug_log!("Game::handle() - {:?}", action);
        match action {
            UserAction::Letter(c) => self.type_letter(c, interface),
            UserAction::Backspace => {
                if let Some(change) = self.session.backspace() {
                    interface.on_cell_changed(change.row, change.col, change.letter);
                }
            }
            UserAction::Submit => {
                if let Some(result) = self.session.submit() {
                    self.finish_row(&result, interface);
                }
            }
            UserAction::NewGame => self.new_game(interface),
            UserAction::Hint => match self.session.request_hint(&mut self.rng) {
                Ok(hint) => interface.on_hint_granted(&hint),
                Err(reason) => interface.on_hint_denied(reason),
            },
            UserAction::Exit => return Flow::Exit,
        }
        Flow::Continue
    }

    /// Replace the session with a fresh one, whatever state it was in.
    pub fn new_game<I: GameInterface + ?Sized>(&mut self, interface: &mut I) {
        self.session = GameSession::new(self.dictionary.choose(&mut self.rng));
        self.recent_keys.clear();
        info_log!("new_game() - fresh session started");
        interface.on_new_game();
    }

    fn type_letter<I: GameInterface + ?Sized>(&mut self, letter: char, interface: &mut I) {
        if self.session.is_over() || !letter.is_ascii_alphabetic() {
            return;
        }
        if self.reveal_sequence && self.track_key(letter.to_ascii_uppercase()) {
            info_log!("type_letter() - reveal sequence entered");
            interface.on_secret_revealed(self.session.secret());
            return;
        }
        if let Some(change) = self.session.type_letter(letter) {
            interface.on_cell_changed(change.row, change.col, change.letter);
        }
    }

    /// Returns true when the last keys spell the reveal sequence.
    fn track_key(&mut self, letter: char) -> bool {
        self.recent_keys.push_back(letter);
        if self.recent_keys.len() > WORD_LENGTH {
            self.recent_keys.pop_front();
        }
        if self.recent_keys.iter().copied().eq(REVEAL_SEQUENCE.chars()) {
            self.recent_keys.clear();
            return true;
        }
        false
    }

    fn finish_row<I: GameInterface + ?Sized>(&mut self, result: &RowResult, interface: &mut I) {
        interface.on_row_evaluated(result.row, &result.verdicts);

        let Some(outcome) = self.session.outcome() else {
            return;
        };
        let secret = *self.session.secret();
        match outcome {
            Outcome::Won => interface.on_game_won(),
            Outcome::Lost => interface.on_game_lost(&secret),
        }

        self.stats.record_result(outcome == Outcome::Won);
        self.save_stats();
        interface.on_stats_updated(&self.stats);

        match self.definitions.define(&secret) {
            Ok(text) => interface.on_definition(&secret, &text),
            Err(e) => log::warn!("Definition lookup for {secret} failed: {e}"),
        }
    }

    fn save_stats(&self) {
        if let Some(path) = &self.stats_path
            && let Err(e) = write_stats(path, &self.stats)
        {
            log::warn!("Failed to save statistics to {}: {e}", path.display());
        }
    }
}

fn load_stats(path: Option<&PathBuf>) -> Statistics {
    let Some(path) = path else {
        return Statistics::default();
    };
    match read_stats(path) {
        Ok(Some(stats)) => stats,
        Ok(None) => Statistics::default(),
        Err(e) => {
            log::warn!(
                "Ignoring unreadable statistics at {}: {e}",
                path.display()
            );
            Statistics::default()
        }
    }
}

/// Drive `game` from `interface` until the player exits.
pub fn game_loop<I: GameInterface + ?Sized>(game: &mut Game, interface: &mut I) {
    interface.on_new_game();
    interface.on_stats_updated(game.stats());

    loop {
        let Some(action) = interface.read_action() else {
            continue;
        };
        if game.handle(action, interface) == Flow::Exit {
            interface.on_exit();
            break;
        }
    }
}
