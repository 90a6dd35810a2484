//! # Subscriber identity.
//!
//! [`SubscriberId`] is the owner handle stored in a registration. It is a
//! plain value compared structurally, so "no owner" (`None`) and "some owner"
//! never blur together the way a null reference would.

use std::borrow::Cow;
use std::fmt;

/// Identity of the subscriber a callback belongs to.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriberId(Cow<'static, str>);

impl SubscriberId {
    /// Creates an id from an explicit name.
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }

    /// Creates an id from a type name (verbose; prefer [`SubscriberId::new`] for
    /// subscribers that can have several instances on one bus).
    pub fn of<T: ?Sized>() -> Self {
        Self(Cow::Borrowed(std::any::type_name::<T>()))
    }

    /// Returns the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SubscriberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&'static str> for SubscriberId {
    fn from(name: &'static str) -> Self {
        Self::new(name)
    }
}

impl From<String> for SubscriberId {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}
