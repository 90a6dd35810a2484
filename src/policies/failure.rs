//! # What the bus does when a handler fails.
//!
//! - [`FailurePolicy::Continue`] log the failure, keep calling the remaining handlers (default).
//! - [`FailurePolicy::Stop`] abort the post and return the failure to the poster.
//!
//! Either way the failure reaching the bus is already an
//! [`InvocationError`](crate::InvocationError); the policy only decides how far it travels.

/// Policy applied by [`EventBus::post`](crate::EventBus::post) on handler failure.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Record the failure and continue with the next handler.
    #[default]
    Continue,
    /// Stop at the first failure and return [`BusError::Aborted`](crate::BusError::Aborted).
    Stop,
}
