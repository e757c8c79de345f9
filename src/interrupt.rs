//! External interrupt (SIGINT) handling
//!
//! Only one handler can be installed per process. The TUI polls a flag
//! between input events; line mode runs its cleanup on the handler thread.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Flag raised by SIGINT, checked between input events
#[derive(Debug, Clone, Default)]
pub struct InterruptFlag(Arc<AtomicBool>);

impl InterruptFlag {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Install a SIGINT handler that raises this flag
    ///
    /// # Errors
    /// Fails if a handler is already installed or the OS refuses one.
    pub fn install(&self) -> Result<(), ctrlc::Error> {
        let flag = Arc::clone(&self.0);
        ctrlc::set_handler(move || flag.store(true, Ordering::SeqCst))
    }

    /// Raise the flag from the main loop (Ctrl-C as a raw-mode key)
    pub fn raise(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    #[must_use]
    pub fn is_raised(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Run `cleanup` on SIGINT
///
/// # Errors
/// Fails if a handler is already installed or the OS refuses one.
pub fn on_interrupt<F>(cleanup: F) -> Result<(), ctrlc::Error>
where
    F: FnMut() + Send + 'static,
{
    ctrlc::set_handler(cleanup)
}
