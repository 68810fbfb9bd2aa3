use hangman::alphabet::Alphabet;
use hangman::cli::{CliInterface, parse_cli};
use hangman::game_loop::game_loop;
use hangman::logging;
use hangman::tui::TuiInterface;
use hangman::wordbank::{
    EMBEDDED_WORDS, fallback_word, load_words_from_file, load_words_from_str,
};
use std::io;

fn main() {
    logging::init();
    let cli = parse_cli();
    let alphabet = Alphabet::russian();

    // A missing or unreadable word list is recoverable: the game falls back
    // to the built-in default word.
    let pool = match &cli.words_path {
        Some(path) => match load_words_from_file(path, &alphabet) {
            Ok(words) => words,
            Err(e) => {
                log::warn!("failed to load word list from '{path}': {e}");
                Vec::new()
            }
        },
        None => load_words_from_str(EMBEDDED_WORDS, &alphabet),
    };
    if pool.is_empty() {
        log::warn!("no usable words loaded, playing with the fallback word");
    }

    let fallback = fallback_word(&alphabet);
    let mut rng = rand::rng();

    if cli.tui {
        match TuiInterface::new(alphabet.clone()) {
            Ok(mut interface) => {
                game_loop(&pool, &fallback, &alphabet, &mut rng, &mut interface);
            }
            Err(e) => eprintln!("Failed to start the TUI: {e}"),
        }
    } else {
        let stdin = io::stdin();
        let mut interface = CliInterface::new(stdin.lock());
        game_loop(&pool, &fallback, &alphabet, &mut rng, &mut interface);
    }
}
