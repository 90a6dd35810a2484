//! Event payloads posted through the bus.
//!
//! ## Contents
//! - [`Event`] marker trait for postable payloads
//! - [`Cancellable`] optional cancellation capability
//! - [`CancelFlag`] atomic flag backing `Cancellable` behind `&self`
//!
//! Concrete event types live in user code; this crate never inspects payload
//! content beyond the cancellation query.

mod cancel;
mod event;

pub use cancel::CancelFlag;
pub use event::{Cancellable, Event};
