//! # Severity & Priority Ranking
//!
//! A closed set of message severities, each mapping to exactly one priority
//! class in a fixed ranking (most blocking first). Several severities may
//! share a class; such synonyms compare equal and leave the winner choice to
//! the recency tie-break.
//!
//! The mapping lives in an explicit [`SeverityRanking`] registry constructed
//! once at startup and shared by reference with every consumer. There is no
//! hidden singleton.

use std::collections::{BTreeMap, BTreeSet};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::types::StacklightError;

// =============================================================================
// SEVERITY
// =============================================================================

/// Severity of a message. Closed set; anything else is a caller bug surfaced
/// as [`StacklightError::UnknownSeverity`] at the parsing boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    /// Unrecoverable failure; blocks whatever the user was doing.
    Fatal,
    /// Validation failure; blocks submission.
    Error,
    /// Urgent advisory; submission still possible.
    Alert,
    /// Non-blocking problem the user should look at.
    Warning,
    /// Noteworthy but expected condition.
    Notice,
    /// Neutral information.
    Info,
    /// Developer-facing detail.
    Debug,
    /// Finest-grained developer-facing detail.
    Trace,
}

impl Severity {
    /// Every severity, in declaration order.
    pub const ALL: [Severity; 8] = [
        Severity::Fatal,
        Severity::Error,
        Severity::Alert,
        Severity::Warning,
        Severity::Notice,
        Severity::Info,
        Severity::Debug,
        Severity::Trace,
    ];

    /// Number of severities in the closed set.
    pub const COUNT: usize = Severity::ALL.len();

    /// Canonical uppercase label, as used on the wire and in logs.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Severity::Fatal => "FATAL",
            Severity::Error => "ERROR",
            Severity::Alert => "ALERT",
            Severity::Warning => "WARNING",
            Severity::Notice => "NOTICE",
            Severity::Info => "INFO",
            Severity::Debug => "DEBUG",
            Severity::Trace => "TRACE",
        }
    }

    /// Priority class under the standard ranking.
    #[must_use]
    pub const fn standard_class(self) -> PriorityClass {
        match self {
            Severity::Fatal | Severity::Error => PriorityClass::Blocking,
            Severity::Alert | Severity::Warning => PriorityClass::Advisory,
            Severity::Notice | Severity::Info => PriorityClass::Informational,
            Severity::Debug | Severity::Trace => PriorityClass::Diagnostic,
        }
    }

    /// Dense index into [`Severity::ALL`], for table lookups.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Severity {
    type Err = StacklightError;

    /// Case-insensitive lookup of a severity label.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Severity::ALL
            .into_iter()
            .find(|severity| severity.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| StacklightError::UnknownSeverity(s.to_string()))
    }
}

// =============================================================================
// PRIORITY CLASS
// =============================================================================

/// Rank bucket in the fixed severity ordering.
///
/// `Ord` follows blocking-ness: `Blocking > Advisory > Informational >
/// Diagnostic`, so the most blocking class is the greatest value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriorityClass {
    /// Developer diagnostics; never shown to end users by default.
    Diagnostic,
    /// Neutral information.
    Informational,
    /// Worth the user's attention, does not block.
    Advisory,
    /// Blocks the user's current operation.
    Blocking,
}

impl PriorityClass {
    /// Classes from most blocking to least.
    #[must_use]
    pub const fn ranked() -> [PriorityClass; 4] {
        [
            PriorityClass::Blocking,
            PriorityClass::Advisory,
            PriorityClass::Informational,
            PriorityClass::Diagnostic,
        ]
    }

    /// Human-readable class name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            PriorityClass::Blocking => "blocking",
            PriorityClass::Advisory => "advisory",
            PriorityClass::Informational => "informational",
            PriorityClass::Diagnostic => "diagnostic",
        }
    }
}

impl std::fmt::Display for PriorityClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// SEVERITY RANKING
// =============================================================================

/// Registry mapping each severity to its priority class.
///
/// Built once at startup and passed by reference (usually behind an `Arc`) to
/// every consumer that needs to rank severities. A custom ranking may be
/// partial; lookups on unmapped severities fail with
/// [`StacklightError::UnmappedSeverity`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeverityRanking {
    classes: BTreeMap<Severity, PriorityClass>,
}

impl SeverityRanking {
    /// The standard total mapping (see [`Severity::standard_class`]).
    #[must_use]
    pub fn standard() -> Self {
        Self {
            classes: Severity::ALL
                .into_iter()
                .map(|severity| (severity, severity.standard_class()))
                .collect(),
        }
    }

    /// A custom mapping from explicit pairs. Later pairs win on duplicates.
    #[must_use]
    pub fn from_pairs(pairs: impl IntoIterator<Item = (Severity, PriorityClass)>) -> Self {
        Self {
            classes: pairs.into_iter().collect(),
        }
    }

    /// The priority class of a severity.
    pub fn priority_class_of(&self, severity: Severity) -> Result<PriorityClass, StacklightError> {
        self.classes
            .get(&severity)
            .copied()
            .ok_or(StacklightError::UnmappedSeverity(severity))
    }

    /// Parse a severity label and look up its class in one step.
    pub fn class_of_label(&self, label: &str) -> Result<PriorityClass, StacklightError> {
        self.priority_class_of(Severity::from_str(label)?)
    }

    /// All severities sharing the given class - the synonym set.
    #[must_use]
    pub fn synonyms_of(&self, class: PriorityClass) -> BTreeSet<Severity> {
        self.classes
            .iter()
            .filter(|(_, mapped)| **mapped == class)
            .map(|(severity, _)| *severity)
            .collect()
    }

    /// Whether every severity of the closed set is mapped.
    #[must_use]
    pub fn is_total(&self) -> bool {
        Severity::ALL
            .into_iter()
            .all(|severity| self.classes.contains_key(&severity))
    }
}

impl Default for SeverityRanking {
    fn default() -> Self {
        Self::standard()
    }
}

// =============================================================================
// TESTS
// =============================================================================
