//! Per-letter feedback for a guess
//!
//! A guess is scored position by position into a [`LetterHint`]:
//! - `NotInWord` = letter has no unmatched occurrence left in the target
//! - `Somewhere` = letter is in the target, but not at this position
//! - `Located`   = letter is in the target at this position
//!
//! `Unknown` never appears in a [`GuessResult`]; it is the starting state of
//! every key on the keyboard.

use super::{WORD_LENGTH, Word, WordError, word::letter_index};
use std::fmt;

/// Feedback for a single letter
///
/// The derived ordering is the upgrade precedence used by the keyboard:
/// `Unknown < NotInWord < Somewhere < Located`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LetterHint {
    #[default]
    Unknown,
    NotInWord,
    Somewhere,
    Located,
}

impl LetterHint {
    /// Emoji square used in the share grid
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Located => '🟩',
            Self::Somewhere => '🟨',
            Self::NotInWord | Self::Unknown => '⬛',
        }
    }
}

/// Scored feedback for one accepted guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GuessResult([LetterHint; WORD_LENGTH]);

impl GuessResult {
    /// All letters located (a win)
    pub const PERFECT: Self = Self([LetterHint::Located; WORD_LENGTH]);

    /// Score `guess` against `target`
    ///
    /// Implements Wordle's exact feedback rules, including duplicate letters.
    ///
    /// # Algorithm
    /// 1. Count every letter of the target
    /// 2. First pass: mark exact matches and consume their count
    /// 3. Second pass: mark the rest `Somewhere` while credit remains for
    ///    that letter, otherwise `NotInWord`
    ///
    /// Exact matches must be taken first, otherwise an early misplaced copy
    /// of a letter could claim credit that belongs to a later exact match.
    ///
    /// # Examples
    /// ```
    /// use wordle_daily::core::{GuessResult, LetterHint::*, Word};
    ///
    /// let guess = Word::new("erase").unwrap();
    /// let target = Word::new("speed").unwrap();
    /// let result = GuessResult::evaluate(&guess, &target);
    ///
    /// assert_eq!(
    ///     result.hints(),
    ///     &[Somewhere, NotInWord, NotInWord, Somewhere, Somewhere]
    /// );
    /// ```
    #[must_use]
    pub fn evaluate(guess: &Word, target: &Word) -> Self {
        let mut result = [LetterHint::NotInWord; WORD_LENGTH];
        let mut remaining = target.letter_counts();

        // Allow: Index needed to access guess[i], target[i], and set result[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            let letter = guess.char_at(i);
            if letter == target.char_at(i) {
                result[i] = LetterHint::Located;
                remaining[letter_index(letter)] -= 1;
            }
        }

        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            if result[i] == LetterHint::Located {
                continue;
            }

            let count = &mut remaining[letter_index(guess.char_at(i))];
            if *count > 0 {
                result[i] = LetterHint::Somewhere;
                *count -= 1;
            }
        }

        Self(result)
    }

    /// Score two raw strings
    ///
    /// # Errors
    /// Returns `WordError::InvalidLength` (or a character error) when either
    /// string is not a valid 5-letter word.
    pub fn evaluate_str(guess: &str, target: &str) -> Result<Self, WordError> {
        Ok(Self::evaluate(&Word::new(guess)?, &Word::new(target)?))
    }

    /// Per-position hints
    #[inline]
    #[must_use]
    pub const fn hints(&self) -> &[LetterHint; WORD_LENGTH] {
        &self.0
    }

    /// Check if every letter is located
    #[inline]
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        *self == Self::PERFECT
    }

    /// Count the number of located letters
    #[must_use]
    pub fn count_located(&self) -> usize {
        self.0.iter().filter(|&&h| h == LetterHint::Located).count()
    }

    /// Count the number of letters present elsewhere
    #[must_use]
    pub fn count_somewhere(&self) -> usize {
        self.0.iter().filter(|&&h| h == LetterHint::Somewhere).count()
    }

    /// Convert to a share-grid row like "🟩🟨⬛⬛🟩"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|h| h.emoji()).collect()
    }
}

impl fmt::Display for GuessResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_emoji())
    }
}

#[cfg(test)]
mod tests {
    use super::LetterHint::{Located, NotInWord, Somewhere, Unknown};
    use super::*;

    fn eval(guess: &str, target: &str) -> GuessResult {
        GuessResult::evaluate_str(guess, target).unwrap()
    }

    #[test]
    fn hint_ordering_is_upgrade_precedence() {
        assert!(Unknown < NotInWord);
        assert!(NotInWord < Somewhere);
        assert!(Somewhere < Located);
        assert_eq!(LetterHint::default(), Unknown);
    }

    #[test]
    fn evaluate_all_absent() {
        let result = eval("abcde", "fghij");
        assert_eq!(result.hints(), &[NotInWord; 5]);
        assert_eq!(result.count_located(), 0);
        assert_eq!(result.count_somewhere(), 0);
    }

    #[test]
    fn evaluate_self_is_perfect() {
        for word in ["crane", "slate", "speed", "zzzzz", "aaaaa"] {
            let result = eval(word, word);
            assert!(result.is_perfect(), "{word} against itself");
            assert_eq!(result, GuessResult::PERFECT);
        }
    }

    #[test]
    fn evaluate_duplicate_credit_is_limited() {
        // SPEED holds two E's, one S: the third E-claim finds no credit
        let result = eval("erase", "speed");
        assert_eq!(
            result.hints(),
            &[Somewhere, NotInWord, NotInWord, Somewhere, Somewhere]
        );
    }

    #[test]
    fn evaluate_exact_match_takes_priority() {
        // The green O at position 3 must not be stolen by the earlier O
        let result = eval("robot", "floor");
        assert_eq!(
            result.hints(),
            &[Somewhere, Somewhere, NotInWord, Located, NotInWord]
        );
    }

    #[test]
    fn evaluate_single_letter_target_repeated_guess() {
        // PLANT has one L, so only the first L earns credit
        let result = eval("lolly", "plant");
        assert_eq!(
            result.hints(),
            &[Somewhere, NotInWord, NotInWord, NotInWord, NotInWord]
        );

        let result = eval("llama", "hello");
        assert_eq!(
            result.hints(),
            &[Somewhere, Somewhere, NotInWord, NotInWord, NotInWord]
        );
    }

    #[test]
    fn evaluate_trace_against_crane() {
        let result = eval("trace", "crane");
        assert_eq!(
            result.hints(),
            &[NotInWord, Located, Located, Somewhere, Located]
        );
    }

    #[test]
    fn evaluate_str_rejects_bad_length() {
        assert_eq!(
            GuessResult::evaluate_str("cranes", "crane"),
            Err(WordError::InvalidLength(6))
        );
        assert_eq!(
            GuessResult::evaluate_str("crane", "cran"),
            Err(WordError::InvalidLength(4))
        );
    }

    #[test]
    fn emoji_row() {
        assert_eq!(eval("trace", "crane").to_emoji(), "⬛🟩🟩🟨🟩");
        assert_eq!(GuessResult::PERFECT.to_string(), "🟩🟩🟩🟩🟩");
    }
}
