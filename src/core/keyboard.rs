//! Keyboard hint aggregation
//!
//! Tracks the best hint seen so far for every letter of the alphabet.

use super::{GuessResult, LetterHint, Word};
use rustc_hash::FxHashMap;

/// Physical key layout, top row first
pub const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// Best-known hint per letter for one session
///
/// Hints only ever move up in `LetterHint` order, so a letter that was once
/// located stays located even if a later guess puts it in the wrong spot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyboardState {
    hints: FxHashMap<u8, LetterHint>,
}

impl Default for KeyboardState {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyboardState {
    /// Every letter A-Z starts as `Unknown`
    #[must_use]
    pub fn new() -> Self {
        let hints = (b'A'..=b'Z').map(|c| (c, LetterHint::Unknown)).collect();
        Self { hints }
    }

    /// Raise the hint for `letter` to `hint` if it is an improvement
    ///
    /// Returns `true` when the stored hint changed. Lowercase letters are
    /// folded to uppercase; anything outside A-Z is ignored.
    pub fn set_hint(&mut self, letter: u8, hint: LetterHint) -> bool {
        let Some(current) = self.hints.get_mut(&letter.to_ascii_uppercase()) else {
            return false;
        };

        if hint > *current {
            *current = hint;
            true
        } else {
            false
        }
    }

    /// Apply every scored letter of one guess
    pub fn record(&mut self, guess: &Word, result: &GuessResult) {
        for (&letter, &hint) in guess.chars().iter().zip(result.hints()) {
            self.set_hint(letter, hint);
        }
    }

    /// Current hint for a letter (`Unknown` for non-letters)
    #[must_use]
    pub fn hint(&self, letter: u8) -> LetterHint {
        self.hints
            .get(&letter.to_ascii_uppercase())
            .copied()
            .unwrap_or_default()
    }

    /// Read-only view of the full A-Z mapping
    #[must_use]
    pub const fn as_map(&self) -> &FxHashMap<u8, LetterHint> {
        &self.hints
    }
}
