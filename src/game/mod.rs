//! Game rules and flow
//!
//! Target selection, the per-session state machine, hard mode, and the
//! `Round` that binds a session to its dictionary and stats.

pub mod hard_mode;
mod mask;
mod round;
pub mod selector;
mod session;

pub use hard_mode::{HardModeViolation, MissingLetter};
pub use mask::DiscoveredMask;
pub use round::{GameConfig, Puzzle, Round, Submission};
pub use selector::WordSelector;
pub use session::{GameSession, GuessError, SessionStatus, Turn};
