//! # Change Notification
//!
//! Explicit observer registry used by [`crate::Stack`] in place of a
//! framework-level reactivity runtime.
//!
//! Two complementary mechanisms are offered:
//! - a subscriber list, invoked synchronously after every mutation, and
//! - a monotonic version counter for consumers that prefer polling.
//!
//! Callbacks run on the mutating call stack, after the mutation has fully
//! applied: a subscriber that re-reads the stack once its callback has
//! returned always observes post-mutation state. Subscribers are expected to
//! be lightweight (mark-dirty, schedule a re-render); heavy work belongs in
//! the embedding layer's own event loop.

// =============================================================================
// CHANGE KIND
// =============================================================================

/// The mutation that triggered a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChangeKind {
    /// An entry was appended.
    Push,
    /// The last entry was removed.
    Pop,
    /// All entries were removed.
    Clear,
}

// =============================================================================
// WATCHER ID
// =============================================================================

/// Opaque handle identifying one subscription.
///
/// Returned by [`Watchers::subscribe`]; the only thing it is good for is
/// [`Watchers::unsubscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WatcherId(u64);

// =============================================================================
// WATCHERS
// =============================================================================

/// Subscriber registry plus version counter.
///
/// Single-threaded by design: subscriptions and notifications happen on the
/// one call stack that owns the containing structure. There is no locking
/// because there is nothing to lock against.
pub struct Watchers {
    subscribers: Vec<(WatcherId, Box<dyn Fn(ChangeKind)>)>,
    next_id: u64,
    version: u64,
}

impl Watchers {
    /// Create an empty registry at version 0.
    #[must_use]
    pub fn new() -> Self {
        Self {
            subscribers: Vec::new(),
            next_id: 0,
            version: 0,
        }
    }

    /// Register a callback to be invoked synchronously on every mutation.
    pub fn subscribe(&mut self, callback: Box<dyn Fn(ChangeKind)>) -> WatcherId {
        let id = WatcherId(self.next_id);
        self.next_id = self.next_id.saturating_add(1);
        self.subscribers.push((id, callback));
        id
    }

    /// Remove a subscription. Returns `false` if the id was already gone.
    pub fn unsubscribe(&mut self, id: WatcherId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sid, _)| *sid != id);
        self.subscribers.len() != before
    }

    /// Bump the version and invoke every subscriber, in subscription order.
    ///
    /// Called by the owning structure after (never during) a mutation.
    pub fn notify(&mut self, kind: ChangeKind) {
        self.version = self.version.saturating_add(1);
        for (_, callback) in &self.subscribers {
            callback(kind);
        }
    }

    /// Current version. Strictly increases with each notified mutation, so a
    /// consumer can cache the value it last rendered and compare.
    #[must_use]
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Number of live subscriptions.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}

impl Default for Watchers {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Watchers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Watchers")
            .field("subscribers", &self.subscribers.len())
            .field("version", &self.version)
            .finish()
    }
}

// =============================================================================
// TESTS
// =============================================================================
