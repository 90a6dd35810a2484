//! # Dispatch priority for handler registrations.
//!
//! [`Order`] ranks handlers bound to the same event type. Lower tiers run
//! first, so `Monitor` handlers observe the final state of an event after every
//! other handler had its chance to change or cancel it.
//!
//! ## Tiers
//! ```text
//! Lowest   =   0   → runs first
//! Low      = 100
//! Normal   = 200   (default)
//! High     = 300
//! Highest  = 400
//! Monitor  = 500   → runs last, should not mutate the event
//! ```
//!
//! Tiers are part of the public contract: they are explicit discriminants,
//! not declaration positions, and must never be renumbered.

use std::fmt;
use std::str::FromStr;

/// Priority of a handler registration.
#[repr(i32)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Order {
    /// Runs before every other tier.
    Lowest = 0,
    /// Runs early.
    Low = 100,
    /// Default tier.
    #[default]
    Normal = 200,
    /// Runs late.
    High = 300,
    /// Runs after every tier that may still change the event.
    Highest = 400,
    /// Observes the outcome; runs last.
    Monitor = 500,
}

impl Order {
    /// All tiers, in dispatch order.
    pub const ALL: [Order; 6] = [
        Order::Lowest,
        Order::Low,
        Order::Normal,
        Order::High,
        Order::Highest,
        Order::Monitor,
    ];

    /// Returns the stable integer tier.
    ///
    /// # Example
    /// ```
    /// use eventvisor::Order;
    ///
    /// assert_eq!(Order::Normal.tier(), 200);
    /// assert!(Order::Low.tier() < Order::High.tier());
    /// ```
    pub const fn tier(self) -> i32 {
        self as i32
    }

    /// Looks up the order with the given tier.
    pub fn from_tier(tier: i32) -> Option<Order> {
        Self::ALL.into_iter().find(|o| o.tier() == tier)
    }

    /// Returns a short stable label (lowercase) for logs and parsing.
    pub const fn as_label(self) -> &'static str {
        match self {
            Order::Lowest => "lowest",
            Order::Low => "low",
            Order::Normal => "normal",
            Order::High => "high",
            Order::Highest => "highest",
            Order::Monitor => "monitor",
        }
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_label())
    }
}

/// Error returned when parsing an unknown [`Order`] name.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown order '{0}'")]
pub struct ParseOrderError(String);

impl FromStr for Order {
    type Err = ParseOrderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|o| o.as_label().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ParseOrderError(s.to_string()))
    }
}
