//! # Function-backed callback (`Callback`)
//!
//! [`Callback`] wraps a closure `F: Fn(&E) -> HandlerResult` together with a
//! stable identity key. The key stands in for "which method of which
//! subscriber": two callbacks are the same callback iff their keys match.
//!
//! ## Identity
//! - Keys are compared structurally (string equality), never by pointer.
//! - Closures are not comparable; two callbacks sharing a key are treated as
//!   the same subscription even if their bodies differ.
//!
//! ## Example
//! ```rust
//! use eventvisor::{Callback, Event};
//!
//! struct Tick(u32);
//! impl Event for Tick {}
//!
//! let cb = Callback::new("on_tick", |ev: &Tick| {
//!     assert_eq!(ev.0, 7);
//!     Ok(())
//! });
//! assert_eq!(cb.key(), "on_tick");
//! cb.call(&Tick(7)).unwrap();
//! ```

use std::borrow::Cow;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use crate::error::HandlerResult;

type BoxCallbackFn<E> = Arc<dyn Fn(&E) -> HandlerResult + Send + Sync>;

/// Invocable reference to a subscriber's handling logic.
pub struct Callback<E> {
    key: Cow<'static, str>,
    f: BoxCallbackFn<E>,
}

impl<E> Callback<E> {
    /// Creates a callback from an identity key and a closure.
    ///
    /// # Panics
    /// Panics if `key` is empty: an empty key would make every anonymous
    /// callback equal to every other.
    pub fn new<F>(key: impl Into<Cow<'static, str>>, f: F) -> Self
    where
        F: Fn(&E) -> HandlerResult + Send + Sync + 'static,
    {
        let key = key.into();
        assert!(!key.is_empty(), "callback key must not be empty");
        Self { key, f: Arc::new(f) }
    }

    /// Returns the identity key.
    pub fn key(&self) -> &str {
        &self.key
    }

    pub(crate) fn key_cow(&self) -> Cow<'static, str> {
        self.key.clone()
    }

    /// Invokes the closure with the event. No cancellation check happens here.
    pub fn call(&self, event: &E) -> HandlerResult {
        (self.f)(event)
    }
}

impl<E> Clone for Callback<E> {
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
            f: Arc::clone(&self.f),
        }
    }
}

impl<E> PartialEq for Callback<E> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl<E> Eq for Callback<E> {}

impl<E> Hash for Callback<E> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}

impl<E> fmt::Debug for Callback<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callback").field("key", &self.key).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equality_by_key() {
        let a = Callback::<u8>::new("same", |_| Ok(()));
        let b = Callback::<u8>::new("same", |_| Err("different body".into()));
        let c = Callback::<u8>::new("other", |_| Ok(()));
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_clone_shares_closure() {
        let a = Callback::<u8>::new("double", |v| if *v == 2 { Ok(()) } else { Err("odd".into()) });
        let b = a.clone();
        assert!(b.call(&2).is_ok());
        assert!(b.call(&3).is_err());
        assert_eq!(a, b);
    }

    #[test]
    #[should_panic(expected = "callback key must not be empty")]
    fn test_empty_key_panics() {
        let _ = Callback::<u8>::new("", |_| Ok(()));
    }

    #[test]
    fn test_debug_shows_key() {
        let a = Callback::<u8>::new(String::from("owned_key"), |_| Ok(()));
        assert_eq!(format!("{a:?}"), r#"Callback { key: "owned_key" }"#);
    }
}
