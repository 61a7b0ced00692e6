//! # Core Type Definitions
//!
//! The message value pushed by validation producers, and the crate error
//! type.
//!
//! Empty-stack queries are deliberately NOT errors; they return `Option` and
//! callers check. [`StacklightError`] only covers conditions that indicate a
//! misconfigured or buggy collaborator.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::severity::Severity;

// =============================================================================
// TYPED MESSAGE
// =============================================================================

/// A severity-tagged message produced by validation logic.
///
/// Immutable once created: the fields are private and there are no setters.
/// Producers build one, push it, and forget it; display surfaces only ever
/// borrow it back out of the set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypedMessage {
    severity: Severity,
    text: String,
}

impl TypedMessage {
    /// Create a new message.
    #[must_use]
    pub fn new(severity: Severity, text: impl Into<String>) -> Self {
        Self {
            severity,
            text: text.into(),
        }
    }

    /// The message severity.
    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// The message text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl std::fmt::Display for TypedMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.severity, self.text)
    }
}

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors surfaced by the Stacklight core.
///
/// Both variants indicate programmer or configuration error in a
/// collaborator, surfaced as fast as possible; neither is a runtime condition
/// to retry.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StacklightError {
    /// A severity label outside the closed set.
    #[error("unknown severity: {0:?}")]
    UnknownSeverity(String),

    /// A custom ranking has no priority class for this severity.
    #[error("severity ranking has no priority class for {0}")]
    UnmappedSeverity(Severity),
}

// =============================================================================
// TESTS
// =============================================================================
