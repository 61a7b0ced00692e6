//! # stacklight-core
//!
//! The ordering/aggregation core for Stacklight - THE LOGIC.
//!
//! Validation producers push severity-tagged messages onto a stack; a display
//! surface reads back exactly one winner: the highest-priority entry, most
//! recent among equals. Like an industrial stack light, many states may be
//! active at once but only the most severe one is shown.
//!
//! Layering, leaves first:
//! - [`observe`]: subscriber list + version counter, notified synchronously
//!   on every mutation
//! - [`stack`]: insertion-ordered stack (push / pop / peek / clear / dump)
//! - [`order`]: the [`Orderable`] comparator capability and the
//!   "highest priority, most recent" query over a stack snapshot
//! - [`severity`]: closed severity set, priority classes, synonym ranking
//! - [`message_set`]: the severity specialization a form UI binds to
//!
//! ## Architectural Constraints
//!
//! - Single-threaded and synchronous: one logical owner per stack, no
//!   locking, no async
//! - Purely in-memory: no persistence, no wire formats
//! - The embedding UI layer (rendering, routing, i18n) stays outside this
//!   crate and talks to it only through push/clear and the winner queries

// =============================================================================
// MODULES
// =============================================================================

pub mod message_set;
pub mod observe;
pub mod order;
pub mod severity;
pub mod stack;
pub mod types;

// =============================================================================
// RE-EXPORTS: Core Types
// =============================================================================

pub use types::{StacklightError, TypedMessage};

// =============================================================================
// RE-EXPORTS: Stack & Ordering
// =============================================================================

pub use observe::{ChangeKind, WatcherId, Watchers};
pub use order::{Orderable, OrderableStack};
pub use stack::Stack;

// =============================================================================
// RE-EXPORTS: Severity & Messages
// =============================================================================

pub use message_set::{MessageSet, SeverityOrder};
pub use severity::{PriorityClass, Severity, SeverityRanking};
