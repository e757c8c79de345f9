//! Hard mode enforcement
//!
//! Once a letter has been located, every later guess must keep it in place.
//! Letters that were only hinted as `Somewhere` are not enforced.

use super::DiscoveredMask;
use crate::core::Word;
use std::fmt;

/// A discovered position the guess failed to keep
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MissingLetter {
    pub position: usize,
    pub letter: char,
}

/// Every discovered position the guess failed to keep, ascending
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HardModeViolation {
    pub missing: Vec<MissingLetter>,
}

impl HardModeViolation {
    /// Zero-based offending positions
    #[must_use]
    pub fn positions(&self) -> Vec<usize> {
        self.missing.iter().map(|m| m.position).collect()
    }
}

impl fmt::Display for HardModeViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, missing) in self.missing.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            let ordinal = missing.position + 1;
            write!(f, "letter {ordinal} must be {}", missing.letter)?;
        }
        Ok(())
    }
}

/// Check `guess` against every position already located in `target`
///
/// # Errors
/// Returns the offending positions when any discovered letter moved.
///
/// # Examples
/// ```
/// use wordle_daily::core::{GuessResult, Word};
/// use wordle_daily::game::{DiscoveredMask, hard_mode};
///
/// let target = Word::new("crane").unwrap();
/// let mut mask = DiscoveredMask::new();
/// mask.reveal(&GuessResult::evaluate(&Word::new("trace").unwrap(), &target));
///
/// assert!(hard_mode::check(&Word::new("brave").unwrap(), &mask, &target).is_ok());
///
/// let err = hard_mode::check(&Word::new("cloud").unwrap(), &mask, &target).unwrap_err();
/// assert_eq!(err.positions(), vec![1, 2, 4]);
/// ```
pub fn check(
    guess: &Word,
    discovered: &DiscoveredMask,
    target: &Word,
) -> Result<(), HardModeViolation> {
    let missing: Vec<MissingLetter> = discovered
        .positions()
        .filter(|&i| guess.char_at(i) != target.char_at(i))
        .map(|i| MissingLetter {
            position: i,
            letter: char::from(target.char_at(i)),
        })
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(HardModeViolation { missing })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GuessResult;

    fn mask_after(guesses: &[&str], target: &Word) -> DiscoveredMask {
        let mut mask = DiscoveredMask::new();
        for guess in guesses {
            mask.reveal(&GuessResult::evaluate(&Word::new(*guess).unwrap(), target));
        }
        mask
    }

    #[test]
    fn empty_mask_accepts_anything() {
        let target = Word::new("crane").unwrap();
        let mask = DiscoveredMask::new();
        assert!(check(&Word::new("fuzzy").unwrap(), &mask, &target).is_ok());
    }

    #[test]
    fn keeping_located_letters_passes() {
        let target = Word::new("crane").unwrap();
        let mask = mask_after(&["trace"], &target);
        assert!(check(&Word::new("grate").unwrap(), &mask, &target).is_ok());
    }

    #[test]
    fn dropping_located_letters_names_each_position() {
        let target = Word::new("crane").unwrap();
        let mask = mask_after(&["trace"], &target);

        let err = check(&Word::new("grime").unwrap(), &mask, &target).unwrap_err();
        assert_eq!(err.positions(), vec![2]);
        assert_eq!(
            err.missing,
            vec![MissingLetter {
                position: 2,
                letter: 'A'
            }]
        );
        assert_eq!(err.to_string(), "letter 3 must be A");
    }

    #[test]
    fn somewhere_letters_are_not_enforced() {
        // TRACE shows C as misplaced; a guess without any C is still fine
        let target = Word::new("crane").unwrap();
        let mask = mask_after(&["trace"], &target);
        let guess = Word::new("brave").unwrap();
        assert!(!guess.text().contains('C'));
        assert!(check(&guess, &mask, &target).is_ok());
    }

    #[test]
    fn violation_lists_multiple_positions() {
        let target = Word::new("crane").unwrap();
        let mask = mask_after(&["trace"], &target);
        let err = check(&Word::new("fuzzy").unwrap(), &mask, &target).unwrap_err();
        assert_eq!(
            err.to_string(),
            "letter 2 must be R, letter 3 must be A, letter 5 must be E"
        );
    }
}
