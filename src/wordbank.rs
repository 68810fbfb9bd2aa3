use crate::alphabet::Alphabet;
use rand::Rng;
use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

pub const EMBEDDED_WORDS: &str = include_str!("resources/words.txt");

/// Word used when the word list is missing or empty, carried over from the
/// original game.
pub const FALLBACK_WORD: &str = "ДЕФОЛТ";

/// A secret-word candidate: non-empty, every letter in the alphabet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word(String);

/// Reasons a line cannot become a `Word`.
#[derive(Debug, PartialEq, Eq)]
pub enum WordError {
    Empty,
    /// A character outside the recognized alphabet.
    UnknownLetter(char),
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WordError::Empty => write!(f, "word is empty"),
            WordError::UnknownLetter(c) => write!(f, "'{c}' is not in the alphabet"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Validates and uppercases a candidate word.
    pub fn parse(raw: &str, alphabet: &Alphabet) -> Result<Self, WordError> {
        let word: String = raw.trim().chars().flat_map(char::to_uppercase).collect();
        if word.is_empty() {
            return Err(WordError::Empty);
        }
        if let Some(bad) = word.chars().find(|&c| !alphabet.contains(c)) {
            return Err(WordError::UnknownLetter(bad));
        }
        Ok(Self(word))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn letters(&self) -> impl Iterator<Item = char> + '_ {
        self.0.chars()
    }

    /// Number of letters (not bytes; the alphabet is multi-byte in UTF-8).
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, letter: char) -> bool {
        self.0.chars().any(|c| c == letter)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Parses one candidate word per line, skipping lines that fail validation.
pub fn load_words_from_str(data: &str, alphabet: &Alphabet) -> Vec<Word> {
    data.lines()
        .filter(|line| !line.trim().is_empty())
        .filter_map(|line| match Word::parse(line, alphabet) {
            Ok(word) => Some(word),
            Err(e) => {
                log::warn!("skipping word list line '{}': {e}", line.trim());
                None
            }
        })
        .collect()
}

/// Reads a newline-delimited word list from a UTF-8 text file.
///
/// An unreadable file surfaces as `Err` so the caller can log it and fall
/// back; it is never fatal to the game.
pub fn load_words_from_file<P: AsRef<Path>>(
    path: P,
    alphabet: &Alphabet,
) -> io::Result<Vec<Word>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let mut words = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        match Word::parse(&line, alphabet) {
            Ok(word) => words.push(word),
            Err(e) => log::warn!("skipping word list line '{}': {e}", line.trim()),
        }
    }
    Ok(words)
}

/// Picks a secret word uniformly at random, or the fallback when the pool is
/// empty. The session is therefore always constructed with a valid word.
pub fn pick_word<R: Rng>(pool: &[Word], fallback: &Word, rng: &mut R) -> Word {
    if pool.is_empty() {
        log::warn!("word pool is empty, using fallback word");
        return fallback.clone();
    }
    pool[rng.random_range(0..pool.len())].clone()
}

/// The fixed fallback word, validated against the given alphabet.
pub fn fallback_word(alphabet: &Alphabet) -> Word {
    Word::parse(FALLBACK_WORD, alphabet)
        .unwrap_or_else(|e| unreachable!("built-in fallback word is invalid: {e}"))
}
