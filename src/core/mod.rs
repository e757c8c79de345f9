//! Core domain types for Wordle
//!
//! This module contains the fundamental domain types with no I/O.
//! All types here are pure, testable, and have clear ordering rules.

mod hint;
mod keyboard;
mod word;

pub use hint::{GuessResult, LetterHint};
pub use keyboard::{KEYBOARD_ROWS, KeyboardState};
pub use word::{ALPHABET_LEN, Word, WordError};

/// Letters per word
pub const WORD_LENGTH: usize = 5;

/// Attempts allowed per session
pub const TOTAL_GUESSES: usize = 6;
