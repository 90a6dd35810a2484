//! # Bus configuration.
//!
//! Provides [`BusConfig`] centralized settings for an [`EventBus`](crate::EventBus).
//!
//! Config is used in two ways:
//! 1. **Bus creation**: `EventBus::new(config)` / `EventBus::builder(config)`
//! 2. **Registration defaults**: `Registrar::on_default` binds at `default_order`

use crate::policies::{FailurePolicy, Order};

/// Settings for an [`EventBus`](crate::EventBus).
///
/// ## Field semantics
/// - `failure_policy`: what `post` does when a handler fails
/// - `default_order`: priority used when a subscriber does not pick one
///
/// All fields are public; `Default` gives the recommended setup.
#[derive(Clone, Debug, Default)]
pub struct BusConfig {
    /// Reaction to a failed handler.
    ///
    /// - `Continue` (default): log, record in [`Delivery`](crate::Delivery), keep going
    /// - `Stop`: return [`BusError::Aborted`](crate::BusError::Aborted) at the first failure
    pub failure_policy: FailurePolicy,

    /// Priority applied by `Registrar::on_default`.
    pub default_order: Order,
}

impl BusConfig {
    /// Returns a copy with the given failure policy.
    pub fn with_failure_policy(mut self, policy: FailurePolicy) -> Self {
        self.failure_policy = policy;
        self
    }

    /// Returns a copy with the given default order.
    pub fn with_default_order(mut self, order: Order) -> Self {
        self.default_order = order;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = BusConfig::default();
        assert_eq!(cfg.failure_policy, FailurePolicy::Continue);
        assert_eq!(cfg.default_order, Order::Normal);
    }

    #[test]
    fn test_with_helpers() {
        let cfg = BusConfig::default()
            .with_failure_policy(FailurePolicy::Stop)
            .with_default_order(Order::Low);
        assert_eq!(cfg.failure_policy, FailurePolicy::Stop);
        assert_eq!(cfg.default_order, Order::Low);
    }
}
