//! Positions confirmed by earlier guesses

use crate::core::{GuessResult, LetterHint, WORD_LENGTH};

/// One flag per position, set once any guess locates a letter there
///
/// Flags never clear for the lifetime of a session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiscoveredMask([bool; WORD_LENGTH]);

impl DiscoveredMask {
    #[must_use]
    pub const fn new() -> Self {
        Self([false; WORD_LENGTH])
    }

    /// Set every position where `result` is `Located`
    pub fn reveal(&mut self, result: &GuessResult) {
        for (flag, &hint) in self.0.iter_mut().zip(result.hints()) {
            if hint == LetterHint::Located {
                *flag = true;
            }
        }
    }

    /// # Panics
    /// Panics if position >= 5
    #[must_use]
    pub const fn is_discovered(&self, position: usize) -> bool {
        self.0[position]
    }

    /// Indices of every discovered position, ascending
    pub fn positions(&self) -> impl Iterator<Item = usize> + '_ {
        self.0
            .iter()
            .enumerate()
            .filter_map(|(i, &found)| found.then_some(i))
    }

    #[must_use]
    pub const fn as_array(&self) -> &[bool; WORD_LENGTH] {
        &self.0
    }
}
