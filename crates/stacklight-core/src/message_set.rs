//! # Message Set
//!
//! The severity-tagged specialization of [`OrderableStack`]: validation
//! producers push [`TypedMessage`]s, a display surface reads back exactly one
//! winner - the most severe, most recently pushed message.
//!
//! The comparator ranks by priority class only. Two severities mapping to the
//! same class (synonyms) compare equal, so the recency tie-break of the
//! ordering layer decides between them.

use std::sync::Arc;

use crate::observe::{ChangeKind, WatcherId};
use crate::order::{Orderable, OrderableStack};
use crate::severity::{PriorityClass, Severity, SeverityRanking};
use crate::types::{StacklightError, TypedMessage};

// =============================================================================
// SEVERITY ORDER
// =============================================================================

/// [`Orderable`] over [`TypedMessage`] by priority class of the severity.
///
/// Built from a [`SeverityRanking`] up front; construction fails if the
/// ranking does not cover the whole closed severity set, so `compare` itself
/// never has to deal with an unmapped value.
#[derive(Debug, Clone)]
pub struct SeverityOrder {
    classes: [PriorityClass; Severity::COUNT],
}

impl SeverityOrder {
    /// Comparator for the standard ranking.
    #[must_use]
    pub fn standard() -> Self {
        let mut classes = [PriorityClass::Diagnostic; Severity::COUNT];
        for severity in Severity::ALL {
            classes[severity.index()] = severity.standard_class();
        }
        Self { classes }
    }

    /// Comparator for a custom ranking.
    ///
    /// Fails with [`StacklightError::UnmappedSeverity`] unless the ranking is
    /// total.
    pub fn from_ranking(ranking: &SeverityRanking) -> Result<Self, StacklightError> {
        let mut classes = [PriorityClass::Diagnostic; Severity::COUNT];
        for severity in Severity::ALL {
            classes[severity.index()] = ranking.priority_class_of(severity)?;
        }
        Ok(Self { classes })
    }

    /// The class this comparator assigns to a severity.
    #[must_use]
    pub fn class_of(&self, severity: Severity) -> PriorityClass {
        self.classes[severity.index()]
    }
}

impl Orderable<TypedMessage> for SeverityOrder {
    fn compare(&self, a: &TypedMessage, b: &TypedMessage) -> std::cmp::Ordering {
        self.class_of(a.severity()).cmp(&self.class_of(b.severity()))
    }
}

// =============================================================================
// MESSAGE SET
// =============================================================================

/// An ordered set of typed messages answering "which message matters most?".
///
/// One validation session owns one `MessageSet`; producers `push` results as
/// they arrive and `clear` on re-validation, while the error-display surface
/// subscribes and re-reads [`MessageSet::most_severe_recent`] on each change.
#[derive(Debug)]
pub struct MessageSet {
    ranking: Arc<SeverityRanking>,
    inner: OrderableStack<TypedMessage, SeverityOrder>,
}

impl MessageSet {
    /// A message set ranked by the standard severity mapping.
    #[must_use]
    pub fn new() -> Self {
        Self {
            ranking: Arc::new(SeverityRanking::standard()),
            inner: OrderableStack::new(SeverityOrder::standard()),
        }
    }

    /// A message set over a shared custom ranking.
    ///
    /// The ranking must be total over the closed severity set.
    pub fn with_ranking(ranking: Arc<SeverityRanking>) -> Result<Self, StacklightError> {
        let order = SeverityOrder::from_ranking(&ranking)?;
        Ok(Self {
            ranking,
            inner: OrderableStack::new(order),
        })
    }

    /// The most severe message, most recent among equally severe ones.
    ///
    /// This is the single value an error-display surface binds to; `None`
    /// means "nothing to show".
    #[must_use]
    pub fn most_severe_recent(&self) -> Option<&TypedMessage> {
        self.inner.highest_priority()
    }

    /// The ranking shared with collaborators.
    #[must_use]
    pub fn ranking(&self) -> &Arc<SeverityRanking> {
        &self.ranking
    }

    // -------------------------------------------------------------------------
    // Stack contract, delegated unchanged
    // -------------------------------------------------------------------------

    /// Append a message. See [`crate::Stack::push`].
    pub fn push(&mut self, message: TypedMessage) {
        self.inner.push(message);
    }

    /// Remove and return the most recently pushed message.
    pub fn pop(&mut self) -> Option<TypedMessage> {
        self.inner.pop()
    }

    /// The most recently pushed message, regardless of severity.
    #[must_use]
    pub fn peek_last(&self) -> Option<&TypedMessage> {
        self.inner.peek_last()
    }

    /// Remove every message (start of a new validation pass).
    pub fn clear(&mut self) {
        self.inner.clear();
    }

    /// Number of messages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Whether the set holds no messages.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Messages in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, TypedMessage> {
        self.inner.iter()
    }

    /// Log every message at debug level. Diagnostics only.
    pub fn dump(&self) {
        self.inner.dump();
    }

    /// Register a change callback. See [`crate::Stack::subscribe`].
    pub fn subscribe(&mut self, callback: Box<dyn Fn(ChangeKind)>) -> WatcherId {
        self.inner.subscribe(callback)
    }

    /// Drop a subscription.
    pub fn unsubscribe(&mut self, id: WatcherId) -> bool {
        self.inner.unsubscribe(id)
    }

    /// Monotonic content version.
    #[must_use]
    pub fn version(&self) -> u64 {
        self.inner.version()
    }
}

impl Default for MessageSet {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// TESTS
// =============================================================================
