//! # Stack
//!
//! Insertion-ordered, append-only-by-operation sequence of opaque entries.
//!
//! The only ways the length changes are `push` (append), `pop` (remove and
//! return the last entry) and `clear`. There is no random access removal and
//! entries are never reordered in place; consumers that need an ordering run
//! the query layer in [`crate::order`] over a snapshot instead.
//!
//! Every mutation notifies subscribers synchronously (see [`crate::observe`]).

use crate::observe::{ChangeKind, WatcherId, Watchers};

// =============================================================================
// STACK
// =============================================================================

/// A stack of opaque entries, oldest first, with change notification.
///
/// One logical owner (one validation session, one panel) holds one `Stack`;
/// all operations are synchronous and non-blocking.
#[derive(Debug)]
pub struct Stack<T> {
    entries: Vec<T>,
    watchers: Watchers,
}

impl<T> Stack<T> {
    /// Create an empty stack.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            watchers: Watchers::new(),
        }
    }

    /// Append an entry. Always succeeds; subscribers are notified.
    pub fn push(&mut self, entry: T) {
        self.entries.push(entry);
        self.watchers.notify(ChangeKind::Push);
    }

    /// Remove and return the most recently pushed entry.
    ///
    /// Returns `None` on an empty stack; that is a normal outcome, not an
    /// error. Subscribers are notified only when an entry was removed.
    pub fn pop(&mut self) -> Option<T> {
        let entry = self.entries.pop();
        if entry.is_some() {
            self.watchers.notify(ChangeKind::Pop);
        }
        entry
    }

    /// The most recently pushed entry, without removing it.
    #[must_use]
    pub fn peek_last(&self) -> Option<&T> {
        self.entries.last()
    }

    /// Remove every entry.
    ///
    /// Idempotent: clearing an already-empty stack is a no-op and does not
    /// notify, so the version counter only moves when content changed.
    pub fn clear(&mut self) {
        if self.entries.is_empty() {
            return;
        }
        self.entries.clear();
        self.watchers.notify(ChangeKind::Clear);
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the stack holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in insertion order, index 0 = oldest.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.entries
    }

    /// Lazy, restartable traversal in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.entries.iter()
    }

    /// Register a callback invoked synchronously after each mutation.
    pub fn subscribe(&mut self, callback: Box<dyn Fn(ChangeKind)>) -> WatcherId {
        self.watchers.subscribe(callback)
    }

    /// Drop a subscription. Returns `false` if the id was already gone.
    pub fn unsubscribe(&mut self, id: WatcherId) -> bool {
        self.watchers.unsubscribe(id)
    }

    /// Monotonic content version, for consumers that poll instead of
    /// subscribing.
    #[must_use]
    pub fn version(&self) -> u64 {
        self.watchers.version()
    }
}

impl<T: std::fmt::Debug> Stack<T> {
    /// Log every entry at debug level, oldest first. Diagnostics only.
    pub fn dump(&self) {
        for (index, entry) in self.entries.iter().enumerate() {
            tracing::debug!(index, ?entry, "stack entry");
        }
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T> IntoIterator for &'a Stack<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// =============================================================================
// TESTS
// =============================================================================
