//! # Atomic cancel flag for cancellable events.

use std::sync::atomic::{AtomicBool, Ordering};

/// Boolean flag that can be flipped through a shared reference.
///
/// Embed it in an event to implement [`Cancellable`](crate::Cancellable).
/// The flag is not tied to dispatch: a handler may clear it again and later
/// handlers will see the event as live.
#[derive(Debug, Default)]
pub struct CancelFlag {
    set: AtomicBool,
}

impl CancelFlag {
    /// Creates a cleared flag.
    pub const fn new() -> Self {
        Self {
            set: AtomicBool::new(false),
        }
    }

    /// Returns the current value.
    pub fn is_set(&self) -> bool {
        self.set.load(Ordering::Acquire)
    }

    /// Stores a new value.
    pub fn set(&self, value: bool) {
        self.set.store(value, Ordering::Release);
    }
}

impl Clone for CancelFlag {
    fn clone(&self) -> Self {
        Self {
            set: AtomicBool::new(self.is_set()),
        }
    }
}
