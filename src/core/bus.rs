//! # Synchronous event bus.
//!
//! [`EventBus`] keeps one [`HandlerList`] per event type and walks it in
//! priority order for every [`post`](EventBus::post), calling each
//! registration's guarded dispatch.
//!
//! ## Architecture
//! ```text
//! register::<E>(reg) ──► RwLock<HashMap<TypeId, Arc<HandlerList<E>>>>
//!                                         │ (copy-on-write)
//! post(&E) ── read lock, clone Arc ◄──────┘
//!     │ (lock released)
//!     ├──► reg1.handle_event(&E) ─ Ok(Invoked) / Ok(Skipped)
//!     ├──► reg2.handle_event(&E) ─ Err(InvocationError)
//!     │        ├─ FailurePolicy::Continue ─► warn!, record, next handler
//!     │        └─ FailurePolicy::Stop     ─► return BusError::Aborted
//!     └──► regN.handle_event(&E)
//! ```
//!
//! ## Rules
//! - Dispatch is synchronous, on the posting thread.
//! - Each post works on a snapshot: handlers may (un)register during dispatch;
//!   the change applies from the next post.
//! - Once a handler cancels a cancellable event, later handlers are skipped.

use std::any::{Any, TypeId, type_name};
use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{debug, trace, warn};

use crate::core::{BusBuilder, BusConfig, HandlerList};
use crate::error::{BusError, InvocationError};
use crate::events::Event;
use crate::handlers::{Dispatch, HandlerRegistration, SubscriberId};
use crate::policies::FailurePolicy;
use crate::subscribers::{Registrar, Subscribe};

/// Outcome of one [`EventBus::post`].
#[derive(Debug, Default)]
pub struct Delivery {
    /// Handlers whose callback ran without failing.
    pub invoked: usize,
    /// Handlers skipped because the event was cancelled.
    pub skipped: usize,
    /// Failures recorded under [`FailurePolicy::Continue`], in dispatch order.
    pub failures: Vec<InvocationError>,
}

impl Delivery {
    /// True if no handler failed.
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    /// Total number of handlers visited.
    pub fn visited(&self) -> usize {
        self.invoked + self.skipped + self.failures.len()
    }
}

/// Type-erased per-event-type slot.
trait ErasedList: Send + Sync {
    fn remove_owner(&mut self, owner: &SubscriberId) -> usize;
    fn len(&self) -> usize;
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<E: Event> ErasedList for Arc<HandlerList<E>> {
    fn remove_owner(&mut self, owner: &SubscriberId) -> usize {
        if !self.has_owner(owner) {
            return 0;
        }
        Arc::make_mut(self).remove_owner(owner)
    }

    fn len(&self) -> usize {
        HandlerList::len(self)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// In-process publish/subscribe bus with priority-ordered handlers.
pub struct EventBus {
    cfg: BusConfig,
    lists: RwLock<HashMap<TypeId, Box<dyn ErasedList>>>,
}

impl EventBus {
    /// Creates an empty bus.
    pub fn new(cfg: BusConfig) -> Self {
        Self {
            cfg,
            lists: RwLock::new(HashMap::new()),
        }
    }

    /// Starts a builder that can attach subscribers up front.
    pub fn builder(cfg: BusConfig) -> BusBuilder {
        BusBuilder::new(cfg)
    }

    /// Returns the bus configuration.
    pub fn config(&self) -> &BusConfig {
        &self.cfg
    }

    /// Adds a registration for events of type `E`.
    ///
    /// Returns `false` if an equal registration (same owner and callback, any
    /// priority) is already present. Without an owner only the callback key is
    /// compared, so two owner-less callbacks sharing a key collide.
    pub fn register<E: Event>(&self, reg: HandlerRegistration<E>) -> bool {
        let mut lists = self.lists.write();
        let slot = lists
            .entry(TypeId::of::<E>())
            .or_insert_with(|| -> Box<dyn ErasedList> { Box::new(Arc::new(HandlerList::<E>::new())) });
        let Some(list) = slot.as_any_mut().downcast_mut::<Arc<HandlerList<E>>>() else {
            unreachable!("slot for {} holds another event type", type_name::<E>());
        };

        let handler = reg.callback().key().to_string();
        let priority = reg.priority();
        if list.contains(&reg) {
            debug!(event = type_name::<E>(), %handler, "duplicate registration ignored");
            return false;
        }
        let inserted = Arc::make_mut(list).insert(reg);
        debug!(event = type_name::<E>(), %handler, %priority, "handler registered");
        inserted
    }

    /// Removes the registration equal to `reg` (priority is ignored).
    pub fn unregister<E: Event>(&self, reg: &HandlerRegistration<E>) -> bool {
        let mut lists = self.lists.write();
        let Some(list) = lists
            .get_mut(&TypeId::of::<E>())
            .and_then(|slot| slot.as_any_mut().downcast_mut::<Arc<HandlerList<E>>>())
        else {
            return false;
        };
        if !list.contains(reg) {
            return false;
        }
        let removed = Arc::make_mut(list).remove(reg);
        debug!(
            event = type_name::<E>(),
            handler = reg.callback().key(),
            "handler unregistered"
        );
        removed
    }

    /// Lets `subscriber` register its handlers, owned by its [`Subscribe::id`].
    ///
    /// Returns the number of registrations actually added.
    pub fn register_subscriber(&self, subscriber: Arc<dyn Subscribe>) -> usize {
        let id = subscriber.id();
        let mut registrar = Registrar::new(self, id.clone());
        subscriber.subscribe(&mut registrar);
        let added = registrar.added();
        debug!(subscriber = %id, added, "subscriber registered");
        added
    }

    /// Removes every registration owned by `id`, across all event types.
    pub fn unregister_subscriber(&self, id: &SubscriberId) -> usize {
        let mut lists = self.lists.write();
        let removed: usize = lists.values_mut().map(|l| l.remove_owner(id)).sum();
        debug!(subscriber = %id, removed, "subscriber unregistered");
        removed
    }

    /// Number of registrations for events of type `E`.
    pub fn handlers<E: Event>(&self) -> usize {
        self.lists
            .read()
            .get(&TypeId::of::<E>())
            .map_or(0, |l| l.len())
    }

    /// Total number of registrations across all event types.
    pub fn len(&self) -> usize {
        self.lists.read().values().map(|l| l.len()).sum()
    }

    /// True if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the current handler list for `E`, if any handler was ever registered.
    pub fn snapshot<E: Event>(&self) -> Option<Arc<HandlerList<E>>> {
        self.lists
            .read()
            .get(&TypeId::of::<E>())
            .and_then(|slot| slot.as_any().downcast_ref::<Arc<HandlerList<E>>>())
            .cloned()
    }

    /// Posts an event to every handler registered for `E`, in priority order.
    ///
    /// # Errors
    /// Returns [`BusError::Aborted`] when a handler fails under
    /// [`FailurePolicy::Stop`]. Under `Continue`, failures are recorded in the
    /// returned [`Delivery`] instead.
    pub fn post<E: Event>(&self, event: &E) -> Result<Delivery, BusError> {
        let mut delivery = Delivery::default();
        let Some(list) = self.snapshot::<E>() else {
            trace!(event = type_name::<E>(), "no handlers");
            return Ok(delivery);
        };

        for reg in list.iter() {
            match reg.handle_event(event) {
                Ok(Dispatch::Invoked) => delivery.invoked += 1,
                Ok(Dispatch::Skipped) => delivery.skipped += 1,
                Err(error) => {
                    warn!(
                        event = type_name::<E>(),
                        handler = error.handler(),
                        label = error.as_label(),
                        "{error}"
                    );
                    match self.cfg.failure_policy {
                        FailurePolicy::Continue => delivery.failures.push(error),
                        FailurePolicy::Stop => {
                            return Err(BusError::Aborted {
                                invoked: delivery.invoked,
                                error,
                            });
                        }
                    }
                }
            }
        }

        trace!(
            event = type_name::<E>(),
            invoked = delivery.invoked,
            skipped = delivery.skipped,
            failed = delivery.failures.len(),
            "event posted"
        );
        Ok(delivery)
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(BusConfig::default())
    }
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("cfg", &self.cfg)
            .field("handlers", &self.len())
            .finish()
    }
}
