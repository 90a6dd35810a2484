//! Bus core: storage and dispatch loop.
//!
//! The public API from this module is [`EventBus`] (with its [`BusBuilder`]
//! and [`BusConfig`]), the per-type [`HandlerList`], and the [`Delivery`] report.
//!
//! Internal modules:
//! - [`list`]: sorted, deduplicated registrations for one event type;
//! - [`bus`]: type-keyed table of lists and the `post` loop;
//! - [`builder`]: startup wiring of subscribers;
//! - [`config`]: failure policy and default order.

mod builder;
mod bus;
mod config;
mod list;

pub use builder::BusBuilder;
pub use bus::{Delivery, EventBus};
pub use config::BusConfig;
pub use list::HandlerList;
