// Library interface for wordle-clone
// The binary and the integration tests both build on these modules

pub mod cli;
pub mod definitions;
pub mod error;
pub mod evaluator;
pub mod game_state;
pub mod logging;
pub mod session;
pub mod stats;
pub mod tui;
pub mod word;
pub mod wordbank;

// Re-export commonly used items for easier testing
pub use evaluator::{Verdict, evaluate};
pub use game_state::{Game, GameConfig, GameInterface, UserAction, game_loop};
pub use session::{GameSession, Hint, HintDenial, SessionStatus};
pub use stats::Statistics;
pub use word::Word;
pub use wordbank::{Dictionary, load_wordbank_from_file, load_wordbank_from_str};
