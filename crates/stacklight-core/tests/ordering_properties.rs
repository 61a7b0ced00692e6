//! # Property-Based Tests
//!
//! Ordering and tie-break invariants of the stack and the message set,
//! checked against a naive reference scan.

use proptest::collection::vec;
use proptest::prelude::*;
use stacklight_core::{MessageSet, OrderableStack, Severity, SeverityOrder, Stack, TypedMessage};

// =============================================================================
// HELPERS
// =============================================================================

fn any_severity() -> impl Strategy<Value = Severity> {
    prop::sample::select(Severity::ALL.to_vec())
}

fn any_message() -> impl Strategy<Value = TypedMessage> {
    (any_severity(), "[a-z]{0,8}")
        .prop_map(|(severity, text)| TypedMessage::new(severity, text))
}

/// Reference implementation of "most severe, most recent": a linear scan
/// keeping the latest entry whose class is >= the best seen so far.
fn reference_winner(messages: &[TypedMessage]) -> Option<&TypedMessage> {
    let order = SeverityOrder::standard();
    let mut best: Option<&TypedMessage> = None;
    for message in messages {
        let replaces = match best {
            None => true,
            Some(current) => {
                order.class_of(message.severity()) >= order.class_of(current.severity())
            }
        };
        if replaces {
            best = Some(message);
        }
    }
    best
}

// =============================================================================
// PROPERTY TESTS
// =============================================================================

proptest! {
    /// The sorted-snapshot query agrees with the naive reference scan.
    #[test]
    fn winner_matches_reference_scan(messages in vec(any_message(), 0..40)) {
        let mut set = MessageSet::new();
        for message in &messages {
            set.push(message.clone());
        }
        prop_assert_eq!(set.most_severe_recent(), reference_winner(&messages));
    }

    /// Among entries of equal rank, the most recently pushed one wins.
    #[test]
    fn equal_ranks_resolve_to_most_recent(
        severity in any_severity(),
        texts in vec("[a-z]{1,8}", 1..20)
    ) {
        let mut set = MessageSet::new();
        for text in &texts {
            set.push(TypedMessage::new(severity, text.clone()));
        }
        let last = texts.last().expect("non-empty").as_str();
        prop_assert_eq!(set.most_severe_recent().map(TypedMessage::text), Some(last));
    }

    /// A blocking entry beats an informational one in either push order.
    #[test]
    fn blocking_dominates_informational(error_first in any::<bool>()) {
        let blocking = TypedMessage::new(Severity::Error, "blocking");
        let informational = TypedMessage::new(Severity::Info, "informational");

        let mut set = MessageSet::new();
        if error_first {
            set.push(blocking.clone());
            set.push(informational);
        } else {
            set.push(informational);
            set.push(blocking.clone());
        }
        prop_assert_eq!(set.most_severe_recent(), Some(&blocking));
    }

    /// pop() right after push(x) returns x and restores the previous state.
    #[test]
    fn pop_undoes_push(
        existing in vec(any_message(), 0..20),
        pushed in any_message()
    ) {
        let mut set = MessageSet::new();
        for message in &existing {
            set.push(message.clone());
        }
        let len_before = set.len();
        let winner_before = set.most_severe_recent().cloned();

        set.push(pushed.clone());
        prop_assert_eq!(set.pop(), Some(pushed));

        prop_assert_eq!(set.len(), len_before);
        prop_assert_eq!(set.most_severe_recent().cloned(), winner_before);
    }

    /// clear() empties the set; clearing again is a silent no-op.
    #[test]
    fn clear_is_idempotent(messages in vec(any_message(), 0..20)) {
        let mut set = MessageSet::new();
        for message in messages {
            set.push(message);
        }

        set.clear();
        prop_assert!(set.is_empty());
        prop_assert_eq!(set.most_severe_recent(), None);

        let version = set.version();
        set.clear();
        prop_assert_eq!(set.version(), version);
        prop_assert_eq!(set.most_severe_recent(), None);
    }

    /// The version counter strictly increases with each content change.
    #[test]
    fn version_is_strictly_monotonic(messages in vec(any_message(), 1..20)) {
        let mut stack = Stack::new();
        let mut last_version = stack.version();

        for message in messages {
            stack.push(message);
            prop_assert!(stack.version() > last_version);
            last_version = stack.version();
        }
        while stack.pop().is_some() {
            prop_assert!(stack.version() > last_version);
            last_version = stack.version();
        }
    }

    /// Generic stacks honor the same recency rule under an all-equal
    /// comparator.
    #[test]
    fn generic_stack_recency_under_constant_comparator(values in vec(any::<u32>(), 1..30)) {
        let mut stack =
            OrderableStack::new(|_: &u32, _: &u32| std::cmp::Ordering::Equal);
        for value in &values {
            stack.push(*value);
        }
        prop_assert_eq!(stack.highest_priority(), values.last());
    }
}
