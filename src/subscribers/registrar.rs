//! # Registrar handed to [`Subscribe::subscribe`](crate::Subscribe::subscribe).

use std::borrow::Cow;

use crate::core::EventBus;
use crate::error::HandlerResult;
use crate::events::Event;
use crate::handlers::{Callback, HandlerRegistration, SubscriberId};
use crate::policies::Order;

/// Binds one subscriber's id as owner of every handler it registers.
pub struct Registrar<'a> {
    bus: &'a EventBus,
    owner: SubscriberId,
    added: usize,
}

impl<'a> Registrar<'a> {
    pub(crate) fn new(bus: &'a EventBus, owner: SubscriberId) -> Self {
        Self {
            bus,
            owner,
            added: 0,
        }
    }

    /// Registers `f` for events of type `E` at `order`.
    ///
    /// Duplicates (same key for this subscriber) are ignored.
    pub fn on<E, F>(&mut self, order: Order, key: impl Into<Cow<'static, str>>, f: F) -> &mut Self
    where
        E: Event,
        F: Fn(&E) -> HandlerResult + Send + Sync + 'static,
    {
        let reg = HandlerRegistration::new(order, Some(self.owner.clone()), Callback::new(key, f));
        if self.bus.register(reg) {
            self.added += 1;
        }
        self
    }

    /// Same as [`on`](Self::on) at the bus's configured default order.
    pub fn on_default<E, F>(&mut self, key: impl Into<Cow<'static, str>>, f: F) -> &mut Self
    where
        E: Event,
        F: Fn(&E) -> HandlerResult + Send + Sync + 'static,
    {
        let order = self.bus.config().default_order;
        self.on(order, key, f)
    }

    /// The owner bound to registrations made through this registrar.
    pub fn owner(&self) -> &SubscriberId {
        &self.owner
    }

    /// Number of registrations added so far (duplicates excluded).
    pub fn added(&self) -> usize {
        self.added
    }
}
