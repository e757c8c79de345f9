//! Game session state machine
//!
//! A session starts `Active` at attempt 0 and ends `Won` or `Lost`. Rejected
//! guesses never change state or consume an attempt.

use super::{DiscoveredMask, HardModeViolation, hard_mode};
use crate::core::{GuessResult, KeyboardState, TOTAL_GUESSES, WORD_LENGTH, Word};
use crate::wordlists::Dictionary;
use thiserror::Error;

/// Why a guess was not accepted
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuessError {
    #[error("guess must be exactly {WORD_LENGTH} letters, got {0}")]
    InvalidLength(usize),
    #[error("{0} is not in the word list")]
    NotADictionaryWord(String),
    #[error("must use revealed hints: {0}")]
    HardModeViolation(HardModeViolation),
    #[error("the game is already over")]
    GameOver,
}

/// Where the session stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    Active,
    Won,
    Lost,
}

/// One accepted guess and its feedback
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    pub guess: Word,
    pub result: GuessResult,
}

/// State of a single game
#[derive(Debug, Clone)]
pub struct GameSession {
    target: Word,
    hard_mode: bool,
    turns: Vec<Turn>,
    attempt: usize,
    discovered: DiscoveredMask,
    keyboard: KeyboardState,
    status: SessionStatus,
}

impl GameSession {
    #[must_use]
    pub fn new(target: Word, hard_mode: bool) -> Self {
        Self {
            target,
            hard_mode,
            turns: Vec::with_capacity(TOTAL_GUESSES),
            attempt: 0,
            discovered: DiscoveredMask::new(),
            keyboard: KeyboardState::new(),
            status: SessionStatus::Active,
        }
    }

    /// Submit a guess
    ///
    /// Validation order is length, dictionary, then hard mode; the first
    /// failure is reported. On success the guess is scored, the mask and
    /// keyboard are updated, and the session advances.
    ///
    /// # Errors
    /// Returns a `GuessError` describing the rejection. The session is left
    /// exactly as it was.
    ///
    /// # Examples
    /// ```
    /// use wordle_daily::core::Word;
    /// use wordle_daily::game::{GameSession, SessionStatus};
    /// use wordle_daily::wordlists::{Dictionary, loader::words_from_slice};
    ///
    /// let dictionary = Dictionary::new(&words_from_slice(&["crane", "trace"]), &[]);
    /// let mut session = GameSession::new(Word::new("crane").unwrap(), false);
    ///
    /// session.submit("trace", &dictionary).unwrap();
    /// assert_eq!(session.status(), SessionStatus::Active);
    ///
    /// session.submit("crane", &dictionary).unwrap();
    /// assert_eq!(session.status(), SessionStatus::Won);
    /// assert_eq!(session.attempt(), 1);
    /// ```
    pub fn submit(&mut self, guess: &str, dictionary: &Dictionary) -> Result<&Turn, GuessError> {
        if self.is_over() {
            return Err(GuessError::GameOver);
        }

        let guess = guess.trim();
        let len = guess.chars().count();
        if len != WORD_LENGTH {
            return Err(GuessError::InvalidLength(len));
        }

        let word = Word::new(guess)
            .ok()
            .filter(|w| dictionary.contains(w))
            .ok_or_else(|| GuessError::NotADictionaryWord(guess.to_uppercase()))?;

        if self.hard_mode {
            hard_mode::check(&word, &self.discovered, &self.target)
                .map_err(GuessError::HardModeViolation)?;
        }

        let result = GuessResult::evaluate(&word, &self.target);
        self.discovered.reveal(&result);
        self.keyboard.record(&word, &result);

        if result.is_perfect() {
            self.status = SessionStatus::Won;
        } else if self.attempt == TOTAL_GUESSES - 1 {
            self.status = SessionStatus::Lost;
        } else {
            self.attempt += 1;
        }

        let index = self.turns.len();
        self.turns.push(Turn {
            guess: word,
            result,
        });
        Ok(&self.turns[index])
    }

    #[must_use]
    pub const fn target(&self) -> &Word {
        &self.target
    }

    #[must_use]
    pub const fn is_hard_mode(&self) -> bool {
        self.hard_mode
    }

    /// Accepted guesses in submission order
    #[must_use]
    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    /// Zero-based index of the current attempt
    ///
    /// After a win this is the attempt the game was won on; after a loss it
    /// is the last attempt.
    #[must_use]
    pub const fn attempt(&self) -> usize {
        self.attempt
    }

    #[must_use]
    pub fn guesses_used(&self) -> usize {
        self.turns.len()
    }

    #[must_use]
    pub fn guesses_remaining(&self) -> usize {
        TOTAL_GUESSES - self.turns.len()
    }

    #[must_use]
    pub const fn status(&self) -> SessionStatus {
        self.status
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.status != SessionStatus::Active
    }

    #[must_use]
    pub const fn discovered(&self) -> &DiscoveredMask {
        &self.discovered
    }

    #[must_use]
    pub const fn keyboard(&self) -> &KeyboardState {
        &self.keyboard
    }
}
