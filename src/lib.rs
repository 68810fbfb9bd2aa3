// Library interface for hangman
// This allows integration tests to access internal modules

pub mod alphabet;
pub mod cli;
pub mod gallows;
pub mod game_loop;
pub mod logging;
pub mod session;
pub mod tui;
pub mod wordbank;

// Re-export commonly used items for easier testing
pub use alphabet::Alphabet;
pub use game_loop::{GameInterface, PlayerAction, game_loop};
pub use session::{ATTEMPTS_BUDGET, Cell, GameSession, GameStatus, GuessError, Snapshot};
pub use wordbank::{
    Word, fallback_word, load_words_from_file, load_words_from_str, pick_word,
};
