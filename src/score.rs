/// The user's answer to "is this a word?".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Guess {
    Yes,
    No,
}

impl Guess {
    /// Parses a guess button label. Anything but `Yes`/`No` is rejected.
    pub fn parse(label: &str) -> Option<Self> {
        match label {
            "Yes" => Some(Self::Yes),
            "No" => Some(Self::No),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Yes => "Yes",
            Self::No => "No",
        }
    }

    pub fn is_correct_for(self, is_valid: bool) -> bool {
        (self == Self::Yes) == is_valid
    }
}

/// Result of scoring one guess.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GuessOutcome {
    /// False when the guess label was not recognised; nothing was scored.
    pub has_guessed: bool,
    pub was_correct: bool,
}

/// Running session score.
///
/// `longest_streak` never drops below `current_streak`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreState {
    pub correct: u32,
    pub incorrect: u32,
    pub current_streak: u32,
    pub longest_streak: u32,
}

impl ScoreState {
    /// Scores the guess label against the word's actual validity.
    pub fn record(&mut self, label: &str, was_actually_valid: bool) -> GuessOutcome {
        match Guess::parse(label) {
            Some(guess) => self.record_guess(guess, was_actually_valid),
            None => GuessOutcome::default(),
        }
    }

    pub fn record_guess(&mut self, guess: Guess, was_actually_valid: bool) -> GuessOutcome {
        let was_correct = guess.is_correct_for(was_actually_valid);

        if was_correct {
            self.correct += 1;
            self.current_streak += 1;
            self.longest_streak = self.longest_streak.max(self.current_streak);
        } else {
            self.incorrect += 1;
            self.current_streak = 0;
        }

        GuessOutcome {
            has_guessed: true,
            was_correct,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn correctness_follows_guess_and_validity() {
        for (label, is_valid) in [("Yes", true), ("Yes", false), ("No", true), ("No", false)] {
            let mut score = ScoreState::default();
            let outcome = score.record(label, is_valid);

            assert!(outcome.has_guessed);
            assert_eq!(outcome.was_correct, (label == "Yes") == is_valid);
        }
    }

    #[test]
    fn unknown_label_is_a_no_op() {
        let mut score = ScoreState::default();
        let outcome = score.record("Maybe", true);

        assert_eq!(outcome, GuessOutcome::default());
        assert_eq!(score, ScoreState::default());
    }

    #[test]
    fn labels_are_case_sensitive() {
        assert_eq!(Guess::parse("yes"), None);
        assert_eq!(Guess::parse("No"), Some(Guess::No));
    }

    #[test]
    fn correct_guesses_extend_streaks() {
        let mut score = ScoreState::default();
        score.record("Yes", true);
        score.record("No", false);
        score.record("Yes", true);

        assert_eq!(score.correct, 3);
        assert_eq!(score.current_streak, 3);
        assert_eq!(score.longest_streak, 3);
    }

    #[test]
    fn incorrect_guess_resets_current_streak_only() {
        let mut score = ScoreState::default();
        for _ in 0..4 {
            score.record("Yes", true);
        }
        score.record("Yes", false);

        assert_eq!(score.incorrect, 1);
        assert_eq!(score.current_streak, 0);
        assert_eq!(score.longest_streak, 4);

        score.record("No", false);
        assert_eq!(score.current_streak, 1);
        assert_eq!(score.longest_streak, 4);
        assert_eq!(score.correct + score.incorrect, 6);
    }

    #[test]
    fn longest_streak_is_monotonic_and_bounds_current() {
        let mut score = ScoreState::default();
        let mut previous_longest = 0;
        let pattern = [true, true, false, true, true, true, false, false, true];

        for correct in pattern {
            let label = if correct { "Yes" } else { "No" };
            score.record(label, true);

            assert!(score.longest_streak >= previous_longest);
            assert!(score.longest_streak >= score.current_streak);
            previous_longest = score.longest_streak;
        }

        assert_eq!(score.longest_streak, 3);
        assert_eq!(score.current_streak, 1);
    }
}
