//! Ordering and failure policies.
//!
//! ## Contents
//! - [`Order`] dispatch priority of a registration (explicit integer tiers)
//! - [`FailurePolicy`] how the bus reacts to a failed handler
//!
//! ## Quick wiring
//! ```text
//! HandlerRegistration { priority: Order, .. }
//!      └─► HandlerList keeps entries sorted by Order::tier()
//! BusConfig { failure_policy: FailurePolicy, default_order: Order }
//!      └─► EventBus::post decides continue/abort per failure
//! ```

mod failure;
mod order;

pub use failure::FailurePolicy;
pub use order::{Order, ParseOrderError};
