//! Surface Kit Layout Classifier
//!
//! Given a task list with dependency declarations, derive a dependency
//! graph, compute structural metrics, and select a visualization mode with
//! a confidence score and a human-readable rationale.
//!
//! # Architecture
//!
//! ```text
//! TaskSpec → TaskGraph (ephemeral) → GraphMetrics → decision policy → LayoutDecision
//! ```
//!
//! Everything is rebuilt per call; nothing is cached or mutated across
//! calls, and classification never fails — degenerate input resolves to the
//! default grouped-status-board branch.

#![warn(missing_docs)]
#![warn(unreachable_pub)]

// Core modules
pub mod classify;
pub mod graph;
pub mod metrics;
pub mod task;

// Re-exports for convenience
pub use classify::{LayoutClassifier, LayoutDecision, LayoutMode};
pub use graph::TaskGraph;
pub use metrics::GraphMetrics;
pub use task::{Task, TaskSpec};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for classifying task layouts
    pub use crate::classify::{LayoutClassifier, LayoutDecision, LayoutMode};
    pub use crate::graph::TaskGraph;
    pub use crate::metrics::GraphMetrics;
    pub use crate::task::{Task, TaskSpec};
}
