//! # Priority-ordered handler list for one event type.
//!
//! [`HandlerList`] is the storage the bus keeps per event type.
//!
//! ## Rules
//! - Entries are kept sorted by [`Order::tier`](crate::Order::tier), lowest first.
//! - Among equal priorities, insertion order is preserved (stable).
//! - Registrations equal by (owner, callback) are stored at most once; the
//!   first one wins, even if a later duplicate carries another priority.
//! - Removal matches by identity, so the priority of the lookup value is irrelevant.
//!
//! ```text
//! insert(Normal "c")   [Low a] [Normal b] [High d]
//!                                        ▲
//!                                        └─ after the last entry tied or lower
//! ```

use std::slice;

use crate::handlers::{HandlerRegistration, SubscriberId};

/// Sorted, deduplicated list of registrations.
pub struct HandlerList<E> {
    entries: Vec<HandlerRegistration<E>>,
}

impl<E> HandlerList<E> {
    /// Creates an empty list.
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Builds a list from registrations in arbitrary order.
    ///
    /// Duplicates are dropped (first occurrence kept), then entries are
    /// sorted with a stable sort so ties keep their input order.
    pub fn from_unsorted(regs: Vec<HandlerRegistration<E>>) -> Self {
        let mut entries: Vec<HandlerRegistration<E>> = Vec::with_capacity(regs.len());
        for reg in regs {
            if !entries.contains(&reg) {
                entries.push(reg);
            }
        }
        entries.sort_by(HandlerRegistration::cmp_priority);
        Self { entries }
    }

    /// Inserts a registration at its priority position.
    ///
    /// Returns `false` (and leaves the list untouched) if an equal
    /// registration is already present.
    pub fn insert(&mut self, reg: HandlerRegistration<E>) -> bool {
        if self.contains(&reg) {
            return false;
        }
        let at = self.entries.partition_point(|e| e.compare_to(&reg) <= 0);
        self.entries.insert(at, reg);
        true
    }

    /// Removes the registration equal to `reg`. Returns `true` if one was removed.
    pub fn remove(&mut self, reg: &HandlerRegistration<E>) -> bool {
        match self.entries.iter().position(|e| e == reg) {
            Some(idx) => {
                self.entries.remove(idx);
                true
            }
            None => false,
        }
    }

    /// Removes every registration owned by `owner`. Returns the number removed.
    pub fn remove_owner(&mut self, owner: &SubscriberId) -> usize {
        let before = self.entries.len();
        self.entries.retain(|e| e.owner() != Some(owner));
        before - self.entries.len()
    }

    /// True if `owner` owns at least one registration.
    pub fn has_owner(&self, owner: &SubscriberId) -> bool {
        self.entries.iter().any(|e| e.owner() == Some(owner))
    }

    /// True if a registration equal to `reg` is present.
    pub fn contains(&self, reg: &HandlerRegistration<E>) -> bool {
        self.entries.contains(reg)
    }

    /// Number of registrations.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if there are no registrations.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates in dispatch order.
    pub fn iter(&self) -> slice::Iter<'_, HandlerRegistration<E>> {
        self.entries.iter()
    }
}

impl<E> Default for HandlerList<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Clone for HandlerList<E> {
    fn clone(&self) -> Self {
        Self {
            entries: self.entries.clone(),
        }
    }
}

impl<E> std::fmt::Debug for HandlerList<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.entries.iter()).finish()
    }
}

impl<'a, E> IntoIterator for &'a HandlerList<E> {
    type Item = &'a HandlerRegistration<E>;
    type IntoIter = slice::Iter<'a, HandlerRegistration<E>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::Callback;
    use crate::policies::Order;

    struct Ping;
    impl crate::events::Event for Ping {}

    fn reg(order: Order, owner: Option<&'static str>, key: &'static str) -> HandlerRegistration<Ping> {
        HandlerRegistration::new(
            order,
            owner.map(SubscriberId::from),
            Callback::new(key, |_: &Ping| Ok(())),
        )
    }

    fn keys(list: &HandlerList<Ping>) -> Vec<&str> {
        list.iter().map(|r| r.callback().key()).collect()
    }

    #[test]
    fn test_insert_orders_by_priority() {
        let mut list = HandlerList::new();
        assert!(list.insert(reg(Order::High, None, "high")));
        assert!(list.insert(reg(Order::Lowest, None, "lowest")));
        assert!(list.insert(reg(Order::Monitor, None, "monitor")));
        assert!(list.insert(reg(Order::Normal, None, "normal")));
        assert_eq!(keys(&list), vec!["lowest", "normal", "high", "monitor"]);
    }

    #[test]
    fn test_ties_keep_insertion_order() {
        let mut list = HandlerList::new();
        for key in ["a", "b", "c"] {
            assert!(list.insert(reg(Order::Normal, None, key)));
        }
        assert!(list.insert(reg(Order::Low, None, "low")));
        assert!(list.insert(reg(Order::Normal, None, "d")));
        assert_eq!(keys(&list), vec!["low", "a", "b", "c", "d"]);
    }

    #[test]
    fn test_duplicate_rejected_regardless_of_priority() {
        let mut list = HandlerList::new();
        assert!(list.insert(reg(Order::Low, Some("s"), "c")));
        assert!(!list.insert(reg(Order::High, Some("s"), "c")));
        assert_eq!(list.len(), 1);
        assert_eq!(list.iter().next().map(|r| r.priority()), Some(Order::Low));

        // same callback key, different owner: distinct subscription
        assert!(list.insert(reg(Order::Low, Some("t"), "c")));
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_remove_ignores_priority() {
        let mut list = HandlerList::new();
        list.insert(reg(Order::Low, Some("s"), "c"));
        assert!(list.remove(&reg(Order::Monitor, Some("s"), "c")));
        assert!(list.is_empty());
        assert!(!list.remove(&reg(Order::Low, Some("s"), "c")));
    }

    #[test]
    fn test_remove_owner() {
        let mut list = HandlerList::new();
        list.insert(reg(Order::Low, Some("s"), "a"));
        list.insert(reg(Order::High, Some("s"), "b"));
        list.insert(reg(Order::Normal, Some("t"), "a"));
        list.insert(reg(Order::Normal, None, "free"));

        assert!(list.has_owner(&SubscriberId::new("s")));
        assert_eq!(list.remove_owner(&SubscriberId::new("s")), 2);
        assert!(!list.has_owner(&SubscriberId::new("s")));
        assert_eq!(keys(&list), vec!["a", "free"]);
        assert_eq!(list.remove_owner(&SubscriberId::new("nobody")), 0);
    }

    #[test]
    fn test_from_unsorted_is_stable_and_deduplicated() {
        let list = HandlerList::from_unsorted(vec![
            reg(Order::High, None, "h1"),
            reg(Order::Normal, None, "n1"),
            reg(Order::High, None, "h2"),
            reg(Order::Normal, None, "n2"),
            reg(Order::Lowest, None, "n1"),
        ]);
        assert_eq!(keys(&list), vec!["n1", "n2", "h1", "h2"]);
    }
}
