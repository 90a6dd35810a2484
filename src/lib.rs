//! # eventvisor
//!
//! **Eventvisor** is the handler-registration and dispatch layer of an
//! in-process publish/subscribe event bus.
//!
//! A [`HandlerRegistration`] binds one subscriber callback to one event type at
//! one [`Order`]. It carries three contracts that owning buses rely on and that
//! are easy to conflate:
//!
//! - **Ordering** by priority tier only ([`HandlerRegistration::compare_to`]);
//! - **Cancellation**: cancelled events are skipped silently ([`HandlerRegistration::dispatch`]);
//! - **Identity**: (owner, callback) decides equality and hashing; priority never does.
//!
//! Ordering is deliberately *not* consistent with equality, so registrations
//! implement neither `Ord` nor `PartialOrd`. Sort them with a stable sort
//! (`sort_by(HandlerRegistration::cmp_priority)`), never put them in ordered sets.
//!
//! ## Architecture
//! ```text
//!   Subscribe::subscribe ──► Registrar::on::<E>(Order, key, f)
//!                                    │
//!                                    ▼
//! ┌───────────────────────────────────────────────────────────────────┐
//! │  EventBus                                                         │
//! │  - TypeId ─► HandlerList<E> (sorted by tier, stable, deduped)     │
//! │  - BusConfig { failure_policy, default_order }                    │
//! └──────────────────────────────┬────────────────────────────────────┘
//!                                │ post(&E)
//!                                ▼
//!        for reg in list: reg.handle_event(&E)   (guarded dispatch)
//!                            └─► reg.dispatch(&E) (direct dispatch)
//!                                  ├─ cancelled ─► Skipped
//!                                  └─ callback(&E) ─► Ok / Err
//!                            Err | panic ─► InvocationError
//! ```
//!
//! ## Features
//! | Area              | Description                                                | Key types / traits                         |
//! |-------------------|------------------------------------------------------------|--------------------------------------------|
//! | **Registrations** | Bind callback + owner + priority; dispatch; identity       | [`HandlerRegistration`], [`Callback`]      |
//! | **Priorities**    | Explicit, stable integer tiers                             | [`Order`]                                  |
//! | **Events**        | Payload marker and optional cancellation capability        | [`Event`], [`Cancellable`], [`CancelFlag`] |
//! | **Bus**           | Per-type sorted lists and the post loop                    | [`EventBus`], [`HandlerList`], [`Delivery`]|
//! | **Subscribers**   | Components that own handlers                               | [`Subscribe`], [`Registrar`]               |
//! | **Errors**        | One failure kind at the dispatch boundary                  | [`InvocationError`], [`BusError`]          |
//! | **Configuration** | Failure policy and default order                           | [`BusConfig`], [`FailurePolicy`]           |
//!
//! ## Example
//! ```rust
//! use std::error::Error;
//! use eventvisor::{BusConfig, Callback, CancelFlag, Cancellable, Event, EventBus, HandlerRegistration, Order};
//!
//! #[derive(Default)]
//! struct PlotClaim {
//!     plot: u32,
//!     cancelled: CancelFlag,
//! }
//!
//! impl Cancellable for PlotClaim {
//!     fn is_cancelled(&self) -> bool { self.cancelled.is_set() }
//!     fn set_cancelled(&self, cancelled: bool) { self.cancelled.set(cancelled) }
//! }
//!
//! impl Event for PlotClaim {
//!     fn as_cancellable(&self) -> Option<&dyn Cancellable> { Some(self) }
//! }
//!
//! let bus = EventBus::new(BusConfig::default());
//! bus.register(HandlerRegistration::new(
//!     Order::Low,
//!     None,
//!     Callback::new("deny_spawn", |ev: &PlotClaim| {
//!         if ev.plot == 0 { ev.set_cancelled(true); }
//!         Ok(())
//!     }),
//! ));
//! bus.register(HandlerRegistration::new(
//!     Order::Normal,
//!     None,
//!     Callback::new("charge", |_: &PlotClaim| Err("insufficient funds".into())),
//! ));
//!
//! // Plot 0 is cancelled by the first handler; the second never runs.
//! let d = bus.post(&PlotClaim { plot: 0, ..Default::default() })?;
//! assert_eq!((d.invoked, d.skipped), (1, 1));
//!
//! // Plot 7 reaches the failing handler; the failure is collected, not raised.
//! let d = bus.post(&PlotClaim { plot: 7, ..Default::default() })?;
//! assert_eq!(d.failures[0].source().unwrap().to_string(), "insufficient funds");
//! # Ok::<(), eventvisor::BusError>(())
//! ```
mod core;
mod error;
mod events;
mod handlers;
mod policies;
mod subscribers;

// ---- Public re-exports ----

pub use core::{BusBuilder, BusConfig, Delivery, EventBus, HandlerList};
pub use error::{BusError, HandlerError, HandlerResult, InvocationError, PanicError};
pub use events::{CancelFlag, Cancellable, Event};
pub use handlers::{Callback, Dispatch, HandlerRegistration, SubscriberId};
pub use policies::{FailurePolicy, Order, ParseOrderError};
pub use subscribers::{Registrar, Subscribe};
