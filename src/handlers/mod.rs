//! Handler registrations: the unit the bus sorts, deduplicates and dispatches.
//!
//! ## Contents
//! - [`Callback`] invocable value with a stable identity key
//! - [`SubscriberId`] structurally compared owner handle
//! - [`HandlerRegistration`] immutable (priority, owner, callback) binding
//! - [`Dispatch`] non-failing dispatch outcome (invoked / skipped)

mod callback;
mod owner;
mod registration;

pub use callback::Callback;
pub use owner::SubscriberId;
pub use registration::{Dispatch, HandlerRegistration};
