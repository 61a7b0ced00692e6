//! # Orderable Capability & OrderableStack
//!
//! Entries carry no intrinsic order; a caller-supplied [`Orderable`]
//! comparator expresses relative semantic priority between two entries. The
//! comparator produces a total preorder: ties are expected and are resolved
//! by recency (the later-pushed entry wins).
//!
//! [`OrderableStack`] composes a [`Stack`] with such a comparator and adds a
//! single query: the highest-priority, most-recent entry. UI surfaces that
//! can show only one of many concurrently-reported messages bind to that
//! query and never see the rest of the stack.

use std::cmp::Ordering;

use crate::observe::{ChangeKind, WatcherId};
use crate::stack::Stack;

// =============================================================================
// ORDERABLE
// =============================================================================

/// Comparator capability: relative semantic priority between two entries.
///
/// There is no meaningful default order over opaque entries, so this is a
/// required constructor dependency of [`OrderableStack`] - a specialization
/// cannot exist without supplying one.
///
/// `Greater` means `a` outranks `b`. `Equal` is a legitimate, frequent
/// outcome; the stack layer breaks such ties by recency.
pub trait Orderable<T> {
    /// Compare two entries by semantic priority.
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

/// Any plain comparison closure is a valid comparator.
impl<T, F> Orderable<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

// =============================================================================
// ORDERABLE STACK
// =============================================================================

/// A [`Stack`] paired with an [`Orderable`] comparator.
///
/// Mutation is the plain stack contract, delegated unchanged; the comparator
/// only comes into play in [`OrderableStack::highest_priority`].
#[derive(Debug)]
pub struct OrderableStack<T, C> {
    stack: Stack<T>,
    order: C,
}

impl<T, C: Orderable<T>> OrderableStack<T, C> {
    /// Create an empty orderable stack around the given comparator.
    #[must_use]
    pub fn new(order: C) -> Self {
        Self {
            stack: Stack::new(),
            order,
        }
    }

    /// The highest-priority entry, most recent among equals.
    ///
    /// Takes a snapshot of the entries paired with their insertion index and
    /// sorts it descending by the comparator; entries comparing `Equal` are
    /// ordered with the larger insertion index (more recently pushed) first.
    /// The head of the sorted snapshot is the winner. `None` on an empty
    /// stack. A single-entry stack short-circuits without invoking the
    /// comparator.
    ///
    /// O(n log n); n is small in practice (validation messages of one panel).
    #[must_use]
    pub fn highest_priority(&self) -> Option<&T> {
        let entries = self.stack.as_slice();
        if entries.len() <= 1 {
            return entries.first();
        }

        let mut snapshot: Vec<usize> = (0..entries.len()).collect();
        // Descending by comparator; the index tie-break makes the order total,
        // with recency winning inside each rank.
        snapshot.sort_by(|&i, &j| {
            self.order
                .compare(&entries[j], &entries[i])
                .then_with(|| j.cmp(&i))
        });
        snapshot.first().map(|&winner| &entries[winner])
    }

    /// The comparator this stack was built with.
    #[must_use]
    pub fn order(&self) -> &C {
        &self.order
    }

    // -------------------------------------------------------------------------
    // Stack contract, delegated unchanged
    // -------------------------------------------------------------------------

    /// Append an entry. See [`Stack::push`].
    pub fn push(&mut self, entry: T) {
        self.stack.push(entry);
    }

    /// Remove and return the most recently pushed entry. See [`Stack::pop`].
    pub fn pop(&mut self) -> Option<T> {
        self.stack.pop()
    }

    /// The most recently pushed entry. See [`Stack::peek_last`].
    #[must_use]
    pub fn peek_last(&self) -> Option<&T> {
        self.stack.peek_last()
    }

    /// Remove every entry. See [`Stack::clear`].
    pub fn clear(&mut self) {
        self.stack.clear();
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.stack.len()
    }

    /// Whether the stack holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.stack.iter()
    }

    /// Register a change callback. See [`Stack::subscribe`].
    pub fn subscribe(&mut self, callback: Box<dyn Fn(ChangeKind)>) -> WatcherId {
        self.stack.subscribe(callback)
    }

    /// Drop a subscription. See [`Stack::unsubscribe`].
    pub fn unsubscribe(&mut self, id: WatcherId) -> bool {
        self.stack.unsubscribe(id)
    }

    /// Monotonic content version. See [`Stack::version`].
    #[must_use]
    pub fn version(&self) -> u64 {
        self.stack.version()
    }
}

impl<T: std::fmt::Debug, C: Orderable<T>> OrderableStack<T, C> {
    /// Log every entry at debug level. See [`Stack::dump`].
    pub fn dump(&self) {
        self.stack.dump();
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    fn by_value() -> impl Orderable<i32> {
        |a: &i32, b: &i32| a.cmp(b)
    }

    #[test]
    fn empty_stack_has_no_winner() {
        let stack = OrderableStack::new(by_value());
        assert_eq!(stack.highest_priority(), None);
    }

    #[test]
    fn highest_value_wins() {
        let mut stack = OrderableStack::new(by_value());
        stack.push(3);
        stack.push(7);
        stack.push(5);
        assert_eq!(stack.highest_priority(), Some(&7));
    }

    #[test]
    fn ties_resolve_to_most_recent() {
        // Comparator that ranks everything equal: pure recency.
        let mut stack = OrderableStack::new(|_: &i32, _: &i32| Ordering::Equal);
        stack.push(1);
        stack.push(2);
        stack.push(3);
        assert_eq!(stack.highest_priority(), Some(&3));
    }

    #[test]
    fn equal_top_ranks_prefer_later_push() {
        // Rank only by sign; among the positives the last one pushed wins.
        let mut stack = OrderableStack::new(|a: &i32, b: &i32| (*a > 0).cmp(&(*b > 0)));
        stack.push(10);
        stack.push(-5);
        stack.push(20);
        stack.push(-1);
        assert_eq!(stack.highest_priority(), Some(&20));
    }

    #[test]
    fn single_entry_skips_comparator() {
        let calls = Rc::new(Cell::new(0u32));
        let counter = Rc::clone(&calls);
        let mut stack = OrderableStack::new(move |a: &i32, b: &i32| {
            counter.set(counter.get() + 1);
            a.cmp(b)
        });

        stack.push(42);
        assert_eq!(stack.highest_priority(), Some(&42));
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn mutation_contract_is_unchanged() {
        let mut stack = OrderableStack::new(by_value());
        stack.push(1);
        stack.push(2);

        assert_eq!(stack.peek_last(), Some(&2));
        assert_eq!(stack.pop(), Some(2));
        assert_eq!(stack.len(), 1);

        stack.clear();
        assert!(stack.is_empty());
        assert_eq!(stack.highest_priority(), None);
    }

    #[test]
    fn query_does_not_mutate() {
        let mut stack = OrderableStack::new(by_value());
        stack.push(2);
        stack.push(9);
        stack.push(4);
        let version = stack.version();

        let _ = stack.highest_priority();
        let _ = stack.highest_priority();

        assert_eq!(stack.version(), version);
        let order: Vec<_> = stack.iter().copied().collect();
        assert_eq!(order, vec![2, 9, 4]);
    }
}
