//! # Event payloads and the optional cancellation capability.
//!
//! Any `Send + Sync + 'static` type can be posted once it implements [`Event`].
//! Events that can be cancelled also implement [`Cancellable`] and return
//! themselves from [`Event::as_cancellable`]; dispatch then skips every handler
//! once the event reports cancelled.
//!
//! ## Example
//! ```rust
//! use eventvisor::{CancelFlag, Cancellable, Event};
//!
//! #[derive(Default)]
//! struct PlotClaim {
//!     cancelled: CancelFlag,
//! }
//!
//! impl Cancellable for PlotClaim {
//!     fn is_cancelled(&self) -> bool { self.cancelled.is_set() }
//!     fn set_cancelled(&self, cancelled: bool) { self.cancelled.set(cancelled) }
//! }
//!
//! impl Event for PlotClaim {
//!     fn as_cancellable(&self) -> Option<&dyn Cancellable> { Some(self) }
//! }
//!
//! let ev = PlotClaim::default();
//! ev.set_cancelled(true);
//! assert!(ev.as_cancellable().is_some_and(|c| c.is_cancelled()));
//! ```

/// A payload that can be posted to the bus.
///
/// The default implementation has no cancellation capability, so such events
/// are always dispatched.
pub trait Event: Send + Sync + 'static {
    /// Returns the cancellation capability, if this event has one.
    fn as_cancellable(&self) -> Option<&dyn Cancellable> {
        None
    }
}

/// Cancellation capability of an event.
///
/// Setting goes through `&self` because handlers only ever see a shared
/// reference; see [`CancelFlag`](crate::CancelFlag) for a ready-made backing field.
pub trait Cancellable: Send + Sync {
    /// Returns whether the event has been marked cancelled.
    fn is_cancelled(&self) -> bool;

    /// Marks (or un-marks) the event as cancelled.
    fn set_cancelled(&self, cancelled: bool);
}
