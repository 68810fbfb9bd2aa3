use crate::alphabet::Alphabet;
use crate::session::{GameSession, GameStatus, GuessError, Snapshot};
use crate::wordbank::{Word, pick_word};
use crate::{debug_log, info_log};
use rand::Rng;

/// What the player asked for, as parsed by the interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerAction {
    Letter(char),
    NewGame,
    Exit,
}

/// Presentation boundary: the loop drives the session, the interface renders
/// snapshots and collects player actions. The session itself never touches
/// the interface.
pub trait GameInterface {
    /// Render the current observable state.
    fn display_snapshot(&mut self, snapshot: &Snapshot);
    /// Next player action; `None` means the input was unusable and has
    /// already been flagged to the player.
    fn read_action(&mut self) -> Option<PlayerAction>;
    /// A guess was rejected (unknown letter, repeat, or game already over).
    fn display_rejected(&mut self, error: &GuessError);
    fn display_win(&mut self);
    fn display_loss(&mut self, word: &Word);
    fn display_new_game(&mut self);
    fn display_exit_message(&mut self);
}

/// Runs games until the player exits: pick a word, feed guesses through the
/// session, render each transition, and stop accepting guesses once the
/// session is terminal (further letters are rejected, `NewGame` restarts).
pub fn game_loop<I: GameInterface, R: Rng>(
    pool: &[Word],
    fallback: &Word,
    alphabet: &Alphabet,
    rng: &mut R,
    interface: &mut I,
) {
    let mut session = new_session(pool, fallback, alphabet, rng);
    interface.display_new_game();
    interface.display_snapshot(&session.snapshot());

    loop {
        let Some(action) = interface.read_action() else {
            continue;
        };
        debug_log!("game_loop - action: {:?}", action);

        match action {
            PlayerAction::Exit => {
                interface.display_exit_message();
                break;
            }
            PlayerAction::NewGame => {
                session = new_session(pool, fallback, alphabet, rng);
                interface.display_new_game();
                interface.display_snapshot(&session.snapshot());
            }
            PlayerAction::Letter(letter) => match session.guess(letter) {
                Ok(snapshot) => {
                    interface.display_snapshot(&snapshot);
                    match snapshot.status {
                        GameStatus::Won => interface.display_win(),
                        GameStatus::Lost => interface.display_loss(session.word()),
                        GameStatus::InProgress => {}
                    }
                }
                Err(e) => interface.display_rejected(&e),
            },
        }
    }
}

fn new_session<R: Rng>(
    pool: &[Word],
    fallback: &Word,
    alphabet: &Alphabet,
    rng: &mut R,
) -> GameSession {
    let word = pick_word(pool, fallback, rng);
    info_log!("game_loop - new session, word length {}", word.len());
    GameSession::new(word, alphabet.clone())
}
