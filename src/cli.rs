use crate::gallows;
use crate::game_loop::{GameInterface, PlayerAction};
use crate::session::{GuessError, Snapshot};
use crate::wordbank::Word;
use clap::Parser;
use std::io::BufRead;

/// Hangman CLI options
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a newline-delimited word list file
    #[arg(short = 'i', long = "input")]
    pub words_path: Option<String>,

    /// Launch the full-screen terminal interface
    #[arg(long)]
    pub tui: bool,
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}

/// Line-oriented implementation of the `GameInterface` trait.
///
/// Reads one action per line, which keeps it drivable from a `Cursor` in
/// tests as well as from stdin.
pub struct CliInterface<R: BufRead> {
    reader: R,
}

impl<R: BufRead> CliInterface<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> GameInterface for CliInterface<R> {
    fn display_snapshot(&mut self, snapshot: &Snapshot) {
        println!("{}", gallows::stage_for(snapshot.attempts_remaining));
        println!("Word: {}", snapshot.pattern_string('_'));
        let incorrect: Vec<String> = snapshot.incorrect.iter().map(char::to_string).collect();
        println!("Wrong letters: {}", incorrect.join(", "));
        println!("Attempts remaining: {}", snapshot.attempts_remaining);
    }

    fn read_action(&mut self) -> Option<PlayerAction> {
        println!("\nEnter a letter (or 'new' for a new game, 'exit' to quit):");
        let mut input = String::new();
        match self.reader.read_line(&mut input) {
            // EOF or a broken pipe ends the game rather than spinning.
            Ok(0) | Err(_) => return Some(PlayerAction::Exit),
            Ok(_) => {}
        }
        let input = input.trim().to_uppercase();

        match input.as_str() {
            "EXIT" => Some(PlayerAction::Exit),
            "NEW" => Some(PlayerAction::NewGame),
            _ => {
                let mut chars = input.chars();
                match (chars.next(), chars.next()) {
                    (Some(letter), None) => Some(PlayerAction::Letter(letter)),
                    _ => {
                        println!("Please enter a single letter.");
                        None
                    }
                }
            }
        }
    }

    fn display_rejected(&mut self, error: &GuessError) {
        println!("Guess not accepted: {error}");
    }

    fn display_win(&mut self) {
        println!("You won! The word is guessed.");
    }

    fn display_loss(&mut self, word: &Word) {
        println!("You lost! The word was: {word}");
    }

    fn display_new_game(&mut self) {
        println!("New game started.");
    }

    fn display_exit_message(&mut self) {
        println!("Exiting.");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn action_for(input: &str) -> Option<PlayerAction> {
        let mut interface = CliInterface::new(Cursor::new(input));
        interface.read_action()
    }

    #[test]
    fn test_parse_cli_defaults() {
        let cli = Cli {
            words_path: None,
            tui: false,
        };
        assert_eq!(cli.words_path, None);
        assert!(!cli.tui);
    }

    #[test]
    fn test_read_action_single_letter_uppercased() {
        assert_eq!(action_for("т\n"), Some(PlayerAction::Letter('Т')));
        assert_eq!(action_for("Ж\n"), Some(PlayerAction::Letter('Ж')));
    }

    #[test]
    fn test_read_action_trims_whitespace() {
        assert_eq!(action_for("  а  \n"), Some(PlayerAction::Letter('А')));
    }

    #[test]
    fn test_read_action_exit_case_insensitive() {
        assert_eq!(action_for("exit\n"), Some(PlayerAction::Exit));
        assert_eq!(action_for("EXIT\n"), Some(PlayerAction::Exit));
    }

    #[test]
    fn test_read_action_new_game() {
        assert_eq!(action_for("new\n"), Some(PlayerAction::NewGame));
    }

    #[test]
    fn test_read_action_multi_letter_input_rejected() {
        assert_eq!(action_for("да\n"), None);
        assert_eq!(action_for("слово\n"), None);
    }

    #[test]
    fn test_read_action_empty_line_rejected() {
        assert_eq!(action_for("\n"), None);
    }

    #[test]
    fn test_read_action_eof_exits() {
        assert_eq!(action_for(""), Some(PlayerAction::Exit));
    }

    #[test]
    fn test_read_action_passes_non_alphabet_letter_through() {
        // Alphabet validation belongs to the session, not the reader.
        assert_eq!(action_for("q\n"), Some(PlayerAction::Letter('Q')));
        assert_eq!(action_for("7\n"), Some(PlayerAction::Letter('7')));
    }
}
