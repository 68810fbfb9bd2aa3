use std::fmt;

/// Letter layout carried over from the original game. It contains a
/// duplicated letter; `Alphabet::new` drops duplicates, so the effective
/// alphabet is the 31 distinct letters in first-occurrence order.
pub const RUSSIAN_LAYOUT: &str = "АБВГДЕЁЖЗИИЙКЛМНОПРСТУФХЦЧШЩЫЭЮЯ";

/// The fixed set of letters the game recognizes, in display order.
///
/// Guess validation and the selectable-letter grid both key off this set,
/// so a letter outside it can never enter a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    letters: Vec<char>,
}

impl Alphabet {
    /// Builds an alphabet from a layout string, dropping duplicate letters
    /// (first occurrence wins).
    pub fn new(layout: &str) -> Self {
        let mut letters = Vec::new();
        for c in layout.chars() {
            if !letters.contains(&c) {
                letters.push(c);
            }
        }
        Self { letters }
    }

    /// The default Russian alphabet used by the game.
    pub fn russian() -> Self {
        Self::new(RUSSIAN_LAYOUT)
    }

    pub fn contains(&self, letter: char) -> bool {
        self.letters.contains(&letter)
    }

    pub fn letters(&self) -> impl Iterator<Item = char> + '_ {
        self.letters.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.letters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in &self.letters {
            write!(f, "{c}")?;
        }
        Ok(())
    }
}
