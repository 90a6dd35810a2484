//! # Subscribers: components that own handlers.
//!
//! ## Architecture
//! ```text
//! EventBus::register_subscriber(Arc<S>)
//!     └─► S::subscribe(self, &mut Registrar { owner: S::id() })
//!             ├─► registrar.on::<E1>(Order, "key", f) ─► HandlerRegistration(owner, key)
//!             └─► registrar.on::<E2>(...)
//! EventBus::unregister_subscriber(&id) ─► drops every registration owned by id
//! ```

mod registrar;
mod subscriber;

pub use registrar::Registrar;
pub use subscriber::Subscribe;
