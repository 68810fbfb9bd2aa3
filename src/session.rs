use crate::alphabet::Alphabet;
use crate::wordbank::Word;
use std::collections::BTreeSet;
use std::fmt;

/// Maximum number of incorrect guesses before the session is lost.
pub const ATTEMPTS_BUDGET: u32 = 6;

/// Current status of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    pub fn is_terminal(self) -> bool {
        matches!(self, GameStatus::Won | GameStatus::Lost)
    }
}

/// One position of the reveal pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Hidden,
    Revealed(char),
}

/// Guesses rejected before any state change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessError {
    /// The character is not part of the recognized alphabet.
    NotInAlphabet(char),
    /// The letter was guessed earlier in this session.
    AlreadyGuessed(char),
    /// The session is already Won or Lost.
    GameOver,
}

impl fmt::Display for GuessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GuessError::NotInAlphabet(c) => write!(f, "'{c}' is not a letter of the alphabet"),
            GuessError::AlreadyGuessed(c) => write!(f, "'{c}' was already guessed"),
            GuessError::GameOver => write!(f, "the game is already over"),
        }
    }
}

impl std::error::Error for GuessError {}

/// Observable state handed to the presentation layer after every accepted
/// guess, and on demand via [`GameSession::snapshot`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub pattern: Vec<Cell>,
    /// Every letter guessed so far; renderers dim these in the letter grid.
    pub guessed: BTreeSet<char>,
    pub incorrect: Vec<char>,
    pub attempts_remaining: u32,
    pub status: GameStatus,
}

impl Snapshot {
    /// Reveal pattern as a display string, hidden cells as `placeholder`.
    pub fn pattern_string(&self, placeholder: char) -> String {
        let rendered: Vec<String> = self
            .pattern
            .iter()
            .map(|cell| match cell {
                Cell::Hidden => placeholder.to_string(),
                Cell::Revealed(c) => c.to_string(),
            })
            .collect();
        rendered.join(" ")
    }
}

/// The guess-evaluation state machine for a single game.
///
/// The word is fixed at construction. All other state is mutated only by
/// [`GameSession::guess`], and only while the session is in progress.
pub struct GameSession {
    word: Word,
    alphabet: Alphabet,
    pattern: Vec<Cell>,
    guessed: BTreeSet<char>,
    incorrect: Vec<char>,
    attempts_remaining: u32,
    status: GameStatus,
}

impl GameSession {
    /// Starts a session: everything hidden, no guesses, full attempts budget.
    pub fn new(word: Word, alphabet: Alphabet) -> Self {
        let pattern = vec![Cell::Hidden; word.len()];
        Self {
            word,
            alphabet,
            pattern,
            guessed: BTreeSet::new(),
            incorrect: Vec::new(),
            attempts_remaining: ATTEMPTS_BUDGET,
            status: GameStatus::InProgress,
        }
    }

    /// The secret word, for the loss-reveal message.
    pub fn word(&self) -> &Word {
        &self.word
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn attempts_remaining(&self) -> u32 {
        self.attempts_remaining
    }

    /// Letters guessed so far, correct and incorrect alike.
    pub fn is_guessed(&self, letter: char) -> bool {
        self.guessed.contains(&letter)
    }

    /// Evaluates one guessed letter.
    ///
    /// A correct letter reveals every matching position at no attempt cost;
    /// an absent letter costs one attempt. Rejected guesses (unknown letter,
    /// repeated letter, terminal session) leave all state untouched.
    pub fn guess(&mut self, letter: char) -> Result<Snapshot, GuessError> {
        if self.status.is_terminal() {
            return Err(GuessError::GameOver);
        }
        if !self.alphabet.contains(letter) {
            return Err(GuessError::NotInAlphabet(letter));
        }
        if self.guessed.contains(&letter) {
            return Err(GuessError::AlreadyGuessed(letter));
        }

        self.guessed.insert(letter);

        if self.word.contains(letter) {
            for (cell, c) in self.pattern.iter_mut().zip(self.word.letters()) {
                if c == letter {
                    *cell = Cell::Revealed(c);
                }
            }
            if self.pattern.iter().all(|cell| *cell != Cell::Hidden) {
                self.status = GameStatus::Won;
            }
        } else {
            self.incorrect.push(letter);
            self.attempts_remaining -= 1;
            if self.attempts_remaining == 0 {
                self.status = GameStatus::Lost;
            }
        }

        Ok(self.snapshot())
    }

    /// Current observable state, without mutation.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            pattern: self.pattern.clone(),
            guessed: self.guessed.clone(),
            incorrect: self.incorrect.clone(),
            attempts_remaining: self.attempts_remaining,
            status: self.status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(word: &str) -> GameSession {
        let alphabet = Alphabet::russian();
        let word = Word::parse(word, &alphabet).unwrap();
        GameSession::new(word, alphabet)
    }

    #[test]
    fn test_initial_state() {
        let s = session("ТЕСТ");
        let snap = s.snapshot();
        assert_eq!(snap.pattern, vec![Cell::Hidden; 4]);
        assert!(snap.incorrect.is_empty());
        assert_eq!(snap.attempts_remaining, ATTEMPTS_BUDGET);
        assert_eq!(snap.status, GameStatus::InProgress);
    }

    #[test]
    fn test_correct_guess_reveals_all_occurrences() {
        // Т appears twice; one guess reveals both at no attempt cost.
        let mut s = session("ТЕСТ");
        let snap = s.guess('Т').unwrap();
        assert_eq!(
            snap.pattern,
            vec![
                Cell::Revealed('Т'),
                Cell::Hidden,
                Cell::Hidden,
                Cell::Revealed('Т'),
            ]
        );
        assert_eq!(snap.attempts_remaining, ATTEMPTS_BUDGET);
        assert_eq!(snap.status, GameStatus::InProgress);
        assert!(snap.incorrect.is_empty());
    }

    #[test]
    fn test_incorrect_guess_costs_one_attempt() {
        let mut s = session("ТЕСТ");
        let snap = s.guess('Ж').unwrap();
        assert_eq!(snap.incorrect, vec!['Ж']);
        assert_eq!(snap.attempts_remaining, ATTEMPTS_BUDGET - 1);
        assert_eq!(snap.pattern, vec![Cell::Hidden; 4]);
        assert_eq!(snap.status, GameStatus::InProgress);
    }

    #[test]
    fn test_full_reveal_wins_with_attempts_untouched() {
        // Guessing every distinct letter (in any order) wins without cost.
        let mut s = session("ТЕСТ");
        s.guess('Е').unwrap();
        s.guess('С').unwrap();
        let snap = s.guess('Т').unwrap();
        assert_eq!(snap.status, GameStatus::Won);
        assert_eq!(snap.attempts_remaining, ATTEMPTS_BUDGET);
        assert_eq!(snap.pattern_string('_'), "Т Е С Т");
    }

    #[test]
    fn test_budget_exhaustion_loses() {
        let mut s = session("НО");
        let wrong = ['А', 'Б', 'В', 'Г', 'Д', 'Е'];
        for (i, letter) in wrong.iter().enumerate() {
            let snap = s.guess(*letter).unwrap();
            assert_eq!(snap.attempts_remaining, ATTEMPTS_BUDGET - i as u32 - 1);
            if i + 1 < wrong.len() {
                assert_eq!(snap.status, GameStatus::InProgress);
            }
        }
        let snap = s.snapshot();
        assert_eq!(snap.status, GameStatus::Lost);
        assert_eq!(snap.attempts_remaining, 0);
        assert_eq!(snap.pattern, vec![Cell::Hidden; 2]);
        assert_eq!(snap.incorrect, wrong.to_vec());
    }

    #[test]
    fn test_scenario_from_the_board() {
        // ТЕСТ: Т, then a miss, then Е and С to win at 5 attempts left.
        let mut s = session("ТЕСТ");
        let snap = s.guess('Т').unwrap();
        assert_eq!(snap.pattern_string('_'), "Т _ _ Т");
        let snap = s.guess('Х').unwrap();
        assert_eq!(snap.incorrect, vec!['Х']);
        assert_eq!(snap.attempts_remaining, 5);
        let snap = s.guess('Е').unwrap();
        assert_eq!(snap.pattern_string('_'), "Т Е _ Т");
        let snap = s.guess('С').unwrap();
        assert_eq!(snap.status, GameStatus::Won);
        assert_eq!(snap.attempts_remaining, 5);
    }

    #[test]
    fn test_repeated_guess_is_rejected_without_mutation() {
        let mut s = session("ТЕСТ");
        s.guess('Т').unwrap();
        s.guess('Ж').unwrap();
        let before = s.snapshot();
        assert_eq!(s.guess('Т'), Err(GuessError::AlreadyGuessed('Т')));
        assert_eq!(s.guess('Ж'), Err(GuessError::AlreadyGuessed('Ж')));
        assert_eq!(s.snapshot(), before);
    }

    #[test]
    fn test_non_alphabet_guess_is_rejected_without_mutation() {
        let mut s = session("ТЕСТ");
        let before = s.snapshot();
        assert_eq!(s.guess('Q'), Err(GuessError::NotInAlphabet('Q')));
        assert_eq!(s.guess('т'), Err(GuessError::NotInAlphabet('т')));
        assert_eq!(s.guess('!'), Err(GuessError::NotInAlphabet('!')));
        assert_eq!(s.snapshot(), before);
    }

    #[test]
    fn test_guess_after_win_is_rejected() {
        let mut s = session("НО");
        s.guess('Н').unwrap();
        s.guess('О').unwrap();
        assert_eq!(s.status(), GameStatus::Won);
        let before = s.snapshot();
        assert_eq!(s.guess('А'), Err(GuessError::GameOver));
        assert_eq!(s.snapshot(), before);
    }

    #[test]
    fn test_guess_after_loss_is_rejected() {
        let mut s = session("НО");
        for letter in ['А', 'Б', 'В', 'Г', 'Д', 'Е'] {
            s.guess(letter).unwrap();
        }
        assert_eq!(s.status(), GameStatus::Lost);
        let before = s.snapshot();
        assert_eq!(s.guess('Н'), Err(GuessError::GameOver));
        assert_eq!(s.snapshot(), before);
    }

    #[test]
    fn test_is_guessed_tracks_both_outcomes() {
        let mut s = session("ТЕСТ");
        s.guess('Т').unwrap();
        s.guess('Ж').unwrap();
        assert!(s.is_guessed('Т'));
        assert!(s.is_guessed('Ж'));
        assert!(!s.is_guessed('Е'));
    }

    #[test]
    fn test_single_letter_word() {
        let mut s = session("Я");
        let snap = s.guess('Я').unwrap();
        assert_eq!(snap.status, GameStatus::Won);
        assert_eq!(snap.pattern, vec![Cell::Revealed('Я')]);
    }

    #[test]
    fn test_incorrect_guesses_keep_insertion_order() {
        let mut s = session("ТЕСТ");
        for letter in ['Ю', 'А', 'Ж'] {
            s.guess(letter).unwrap();
        }
        assert_eq!(s.snapshot().incorrect, vec!['Ю', 'А', 'Ж']);
    }
}
