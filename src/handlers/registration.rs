//! # Handler registration: one subscriber callback bound at one priority.
//!
//! [`HandlerRegistration`] is what the bus stores in its per-event-type lists.
//! It carries three independent contracts that are easy to conflate:
//!
//! | Contract     | Uses                  | Ignores              |
//! |--------------|-----------------------|----------------------|
//! | Ordering     | `priority`            | `owner`, `callback`  |
//! | Equality     | `owner`, `callback`   | `priority`           |
//! | Cancellation | event capability      | everything else      |
//!
//! ## Ordering is NOT consistent with equality
//! Two registrations with the same priority compare as tied
//! ([`compare_to`](HandlerRegistration::compare_to) returns `0`) even when
//! they are unequal. For that reason the type implements neither `Ord` nor
//! `PartialOrd`: putting it in a `BTreeSet` or `BinaryHeap` keyed by priority
//! would silently coalesce distinct handlers. Sort with a **stable** sort:
//!
//! ```rust
//! use eventvisor::{Callback, HandlerRegistration, Order};
//!
//! struct Ping;
//! impl eventvisor::Event for Ping {}
//!
//! let mut regs = vec![
//!     HandlerRegistration::new(Order::High, None, Callback::new("a", |_: &Ping| Ok(()))),
//!     HandlerRegistration::new(Order::Low, None, Callback::new("b", |_: &Ping| Ok(()))),
//!     HandlerRegistration::new(Order::High, None, Callback::new("c", |_: &Ping| Ok(()))),
//! ];
//! regs.sort_by(HandlerRegistration::cmp_priority); // stable
//! let keys: Vec<_> = regs.iter().map(|r| r.callback().key()).collect();
//! assert_eq!(keys, ["b", "a", "c"]);
//! ```
//!
//! ## Dispatch
//! ```text
//! handle_event(ev) ── catch_unwind ──► dispatch(ev)
//!                                         ├─ ev cancelled? ─► Ok(Skipped)
//!                                         └─ callback(ev)
//!                                              ├─ Ok  ─► Ok(Invoked)
//!                                              └─ Err ─► Err(e) unchanged
//!        Err(e) / panic ─► InvocationError { source: e | PanicError }
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::panic::{AssertUnwindSafe, catch_unwind};

use crate::error::{HandlerError, InvocationError, PanicError};
use crate::events::Event;
use crate::handlers::{Callback, SubscriberId};
use crate::policies::Order;

/// Outcome of a dispatch that did not fail.
#[must_use]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dispatch {
    /// The callback ran.
    Invoked,
    /// The event was cancelled; the callback did not run.
    Skipped,
}

/// Immutable binding of subscriber, callback and priority.
pub struct HandlerRegistration<E> {
    priority: Order,
    owner: Option<SubscriberId>,
    callback: Callback<E>,
}

impl<E> HandlerRegistration<E> {
    /// Creates a registration.
    ///
    /// `owner` is `None` for callbacks that do not belong to a subscriber instance.
    /// Owner-less registrations are told apart by callback key alone: two
    /// unrelated `None`-owner callbacks that share a key are the same
    /// registration, and a bus keeps only the first. Give each component its
    /// own [`SubscriberId`] (or a unique key) to keep them distinct.
    pub fn new(priority: Order, owner: Option<SubscriberId>, callback: Callback<E>) -> Self {
        Self {
            priority,
            owner,
            callback,
        }
    }

    /// Returns the dispatch priority.
    pub fn priority(&self) -> Order {
        self.priority
    }

    /// Returns the owning subscriber, if any.
    pub fn owner(&self) -> Option<&SubscriberId> {
        self.owner.as_ref()
    }

    /// Returns the bound callback.
    pub fn callback(&self) -> &Callback<E> {
        &self.callback
    }

    /// Signed difference of the two priority tiers.
    ///
    /// Negative when `self` runs before `other`, zero on a tie (even for
    /// unequal registrations), positive otherwise.
    pub fn compare_to(&self, other: &Self) -> i32 {
        self.priority.tier() - other.priority.tier()
    }

    /// [`compare_to`](Self::compare_to) as an [`Ordering`], for `sort_by`.
    pub fn cmp_priority(&self, other: &Self) -> Ordering {
        self.compare_to(other).cmp(&0)
    }
}

impl<E: Event> HandlerRegistration<E> {
    /// Direct dispatch.
    ///
    /// Returns [`Dispatch::Skipped`] without calling the callback if the event
    /// is cancellable and cancelled. Otherwise calls the callback once; its
    /// error is returned unchanged. Panics are not caught.
    pub fn dispatch(&self, event: &E) -> Result<Dispatch, HandlerError> {
        if event.as_cancellable().is_some_and(|c| c.is_cancelled()) {
            return Ok(Dispatch::Skipped);
        }
        self.callback.call(event)?;
        Ok(Dispatch::Invoked)
    }

    /// Guarded dispatch.
    ///
    /// Runs [`dispatch`](Self::dispatch) and turns any error, or a panic raised
    /// by the callback, into a single [`InvocationError`] whose source is the
    /// original failure.
    pub fn handle_event(&self, event: &E) -> Result<Dispatch, InvocationError> {
        let outcome = catch_unwind(AssertUnwindSafe(|| self.dispatch(event)))
            .unwrap_or_else(|payload| Err(HandlerError::from(PanicError::from_payload(payload))));
        outcome.map_err(|source| InvocationError::new(self.callback.key_cow(), source))
    }
}

impl<E> Clone for HandlerRegistration<E> {
    fn clone(&self) -> Self {
        Self {
            priority: self.priority,
            owner: self.owner.clone(),
            callback: self.callback.clone(),
        }
    }
}

impl<E> PartialEq for HandlerRegistration<E> {
    fn eq(&self, other: &Self) -> bool {
        self.callback == other.callback && self.owner == other.owner
    }
}

impl<E> Eq for HandlerRegistration<E> {}

impl<E> Hash for HandlerRegistration<E> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.owner.hash(state);
        self.callback.hash(state);
    }
}

impl<E> fmt::Display for HandlerRegistration<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EventHandler{{priority={}}}", self.priority)
    }
}

impl<E> fmt::Debug for HandlerRegistration<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HandlerRegistration")
            .field("priority", &self.priority)
            .field("owner", &self.owner)
            .field("callback", &self.callback.key())
            .finish()
    }
}
