//! Wordle Daily
//!
//! A terminal Wordle with a daily puzzle, hard mode, and persistent streaks.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_daily::core::Word;
//! use wordle_daily::game::{GameSession, SessionStatus};
//! use wordle_daily::wordlists::Dictionary;
//!
//! let dictionary = Dictionary::embedded();
//! let mut session = GameSession::new(Word::new("crane").unwrap(), false);
//!
//! let turn = session.submit("trace", &dictionary).unwrap();
//! println!("{}", turn.result.to_emoji());
//! assert_eq!(session.status(), SessionStatus::Active);
//! ```

// Core domain types
pub mod core;

// Game rules, sessions and target selection
pub mod game;

// Word lists
pub mod wordlists;

// Persistent statistics
pub mod stats;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// SIGINT handling
pub mod interrupt;
