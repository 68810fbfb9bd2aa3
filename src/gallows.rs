use crate::session::ATTEMPTS_BUDGET;

/// Gallows drawings, one per number of wrong guesses (0 through the full
/// budget). The stage index and the attempts budget are coupled: the table
/// must hold exactly `ATTEMPTS_BUDGET + 1` entries.
pub const STAGES: [&str; 7] = [
    r"
    ------
    |    |
         |
         |
         |
         |
    ",
    r"
    ------
    |    |
    O    |
         |
         |
         |
    ",
    r"
    ------
    |    |
    O    |
    |    |
         |
         |
    ",
    r"
    ------
    |    |
    O    |
   /|    |
         |
         |
    ",
    r"
    ------
    |    |
    O    |
   /|\   |
         |
         |
    ",
    r"
    ------
    |    |
    O    |
   /|\   |
   /     |
         |
    ",
    r"
    ------
    |    |
    O    |
   /|\   |
   / \   |
         |
    ",
];

/// Drawing for the given number of attempts remaining.
pub fn stage_for(attempts_remaining: u32) -> &'static str {
    let wrong = ATTEMPTS_BUDGET.saturating_sub(attempts_remaining) as usize;
    STAGES[wrong.min(STAGES.len() - 1)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_count_matches_budget() {
        assert_eq!(STAGES.len(), ATTEMPTS_BUDGET as usize + 1);
    }

    #[test]
    fn test_fresh_session_shows_empty_gallows() {
        assert_eq!(stage_for(ATTEMPTS_BUDGET), STAGES[0]);
    }

    #[test]
    fn test_exhausted_budget_shows_final_stage() {
        assert_eq!(stage_for(0), STAGES[STAGES.len() - 1]);
    }

    #[test]
    fn test_each_wrong_guess_advances_one_stage() {
        for wrong in 0..=ATTEMPTS_BUDGET {
            assert_eq!(stage_for(ATTEMPTS_BUDGET - wrong), STAGES[wrong as usize]);
        }
    }
}
