//! Error types used by handler registrations and the owning bus.
//!
//! - [`HandlerError`] — whatever a subscriber callback returns on failure.
//! - [`InvocationError`] — the single failure kind raised by guarded dispatch.
//! - [`PanicError`] — stands in for a callback panic inside an [`InvocationError`].
//! - [`BusError`] — errors raised by [`EventBus::post`](crate::EventBus::post).
//!
//! Like the rest of the crate, these expose `as_label` / `as_message` helpers
//! for logs and metrics.

use std::any::Any;
use std::borrow::Cow;
use std::error::Error as StdError;

use thiserror::Error;

/// Failure returned by a subscriber callback.
pub type HandlerError = Box<dyn StdError + Send + Sync + 'static>;

/// Return type of a subscriber callback.
pub type HandlerResult = Result<(), HandlerError>;

/// # Unified failure of guarded dispatch.
///
/// Produced by [`HandlerRegistration::handle_event`](crate::HandlerRegistration::handle_event)
/// whenever the callback returns an error or panics. The original failure is
/// available through [`std::error::Error::source`] and [`InvocationError::cause`].
///
/// # Example
/// ```
/// use std::error::Error;
/// use eventvisor::{Callback, HandlerRegistration, Order};
///
/// struct Ping;
/// impl eventvisor::Event for Ping {}
///
/// let reg = HandlerRegistration::new(
///     Order::Normal,
///     None,
///     Callback::new("fails", |_: &Ping| Err("boom".into())),
/// );
/// let err = reg.handle_event(&Ping).unwrap_err();
/// assert_eq!(err.source().unwrap().to_string(), "boom");
/// assert_eq!(err.as_label(), "handler_failed");
/// ```
#[derive(Error, Debug)]
#[error("handler '{handler}' failed: {source}")]
pub struct InvocationError {
    handler: Cow<'static, str>,
    #[source]
    source: HandlerError,
}

impl InvocationError {
    pub(crate) fn new(handler: Cow<'static, str>, source: HandlerError) -> Self {
        Self { handler, source }
    }

    /// Key of the callback that failed.
    pub fn handler(&self) -> &str {
        &self.handler
    }

    /// The original failure raised by the callback.
    pub fn cause(&self) -> &(dyn StdError + Send + Sync + 'static) {
        self.source.as_ref()
    }

    /// Consumes the error, returning the original failure.
    pub fn into_cause(self) -> HandlerError {
        self.source
    }

    /// True if the callback panicked rather than returning an error.
    pub fn is_panic(&self) -> bool {
        self.source.is::<PanicError>()
    }

    /// Returns a short stable label (snake_case) for use in logs/metrics.
    pub fn as_label(&self) -> &'static str {
        if self.is_panic() {
            "handler_panicked"
        } else {
            "handler_failed"
        }
    }

    /// Returns a human-readable message with details about the error.
    pub fn as_message(&self) -> String {
        format!("{}: {}", self.handler, self.source)
    }
}

/// A callback panic, captured by guarded dispatch.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("handler panicked: {message}")]
pub struct PanicError {
    message: String,
}

impl PanicError {
    /// Builds the error from a `catch_unwind` payload.
    pub(crate) fn from_payload(payload: Box<dyn Any + Send>) -> Self {
        let message = if let Some(s) = payload.downcast_ref::<&'static str>() {
            (*s).to_string()
        } else if let Some(s) = payload.downcast_ref::<String>() {
            s.clone()
        } else {
            "<non-string panic payload>".to_string()
        };
        Self { message }
    }

    /// The panic message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// # Errors produced by the owning bus.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum BusError {
    /// A handler failed while [`FailurePolicy::Stop`](crate::FailurePolicy::Stop) was active;
    /// the remaining handlers were not called.
    #[error("dispatch aborted after {invoked} handler(s): {error}")]
    Aborted {
        /// Handlers invoked successfully before the failure.
        invoked: usize,
        /// The failure that stopped dispatch.
        #[source]
        error: InvocationError,
    },
}

impl BusError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    pub fn as_label(&self) -> &'static str {
        match self {
            BusError::Aborted { .. } => "bus_dispatch_aborted",
        }
    }

    /// Returns a human-readable message with details about the error.
    pub fn as_message(&self) -> String {
        match self {
            BusError::Aborted { invoked, error } => {
                format!("aborted after {invoked} handler(s); {}", error.as_message())
            }
        }
    }

    /// The invocation failure behind this error.
    pub fn invocation(&self) -> &InvocationError {
        match self {
            BusError::Aborted { error, .. } => error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_panic_payload_str() {
        let err = PanicError::from_payload(Box::new("kaboom"));
        assert_eq!(err.message(), "kaboom");
    }

    #[test]
    fn test_panic_payload_string() {
        let err = PanicError::from_payload(Box::new(String::from("formatted 42")));
        assert_eq!(err.message(), "formatted 42");
    }

    #[test]
    fn test_panic_payload_other() {
        let err = PanicError::from_payload(Box::new(7_u32));
        assert_eq!(err.message(), "<non-string panic payload>");
    }

    #[test]
    fn test_invocation_error_labels() {
        let failed = InvocationError::new("h".into(), "boom".into());
        assert_eq!(failed.as_label(), "handler_failed");
        assert!(!failed.is_panic());
        assert_eq!(failed.as_message(), "h: boom");

        let panicked =
            InvocationError::new("h".into(), Box::new(PanicError::from_payload(Box::new("x"))));
        assert_eq!(panicked.as_label(), "handler_panicked");
        assert!(panicked.is_panic());
    }

    #[test]
    fn test_source_is_original() {
        let err = InvocationError::new("h".into(), "boom".into());
        let source = StdError::source(&err).map(ToString::to_string);
        assert_eq!(source.as_deref(), Some("boom"));
        assert_eq!(err.into_cause().to_string(), "boom");
    }

    #[test]
    fn test_bus_error_label() {
        let err = BusError::Aborted {
            invoked: 2,
            error: InvocationError::new("h".into(), "boom".into()),
        };
        assert_eq!(err.as_label(), "bus_dispatch_aborted");
        assert_eq!(err.invocation().handler(), "h");
        assert_eq!(err.as_message(), "aborted after 2 handler(s); h: boom");
    }
}
