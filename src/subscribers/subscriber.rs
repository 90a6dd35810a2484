//! # Subscriber trait.
//!
//! Provides [`Subscribe`], the extension point through which a component
//! declares its handlers. Discovery is explicit: the subscriber lists its
//! callbacks in [`Subscribe::subscribe`] instead of being scanned.
//!
//! ## Rules
//! - Every handler registered through the [`Registrar`] is owned by [`Subscribe::id`].
//! - Two subscribers with the same id share identity: registering the second one
//!   dedups against the first, and unregistering the id removes both.
//! - Callback keys only need to be unique within one subscriber.
//!
//! ## Example
//! ```rust
//! use std::sync::Arc;
//! use eventvisor::{Event, EventBus, Order, Registrar, Subscribe, SubscriberId};
//!
//! struct Greeting(&'static str);
//! impl Event for Greeting {}
//!
//! struct Audit;
//!
//! impl Subscribe for Audit {
//!     fn id(&self) -> SubscriberId { SubscriberId::new("audit") }
//!
//!     fn subscribe(self: Arc<Self>, registrar: &mut Registrar<'_>) {
//!         registrar.on(Order::Monitor, "record", |ev: &Greeting| {
//!             assert!(!ev.0.is_empty());
//!             Ok(())
//!         });
//!     }
//! }
//!
//! let bus = EventBus::default();
//! assert_eq!(bus.register_subscriber(Arc::new(Audit)), 1);
//! assert_eq!(bus.post(&Greeting("hi")).unwrap().invoked, 1);
//! ```

use std::sync::Arc;

use crate::handlers::SubscriberId;
use crate::subscribers::Registrar;

/// A component that owns a set of handlers.
pub trait Subscribe: Send + Sync + 'static {
    /// Identity used as the owner of every handler this subscriber registers.
    ///
    /// The default uses `type_name::<Self>()`; override it when several
    /// instances of one type live on the same bus.
    fn id(&self) -> SubscriberId {
        SubscriberId::of::<Self>()
    }

    /// Registers this subscriber's handlers.
    ///
    /// Closures that need subscriber state capture a clone of `self`.
    fn subscribe(self: Arc<Self>, registrar: &mut Registrar<'_>);
}
