//! Surface Kit Schema
//!
//! Shared data model for agent-driven surface descriptions:
//!
//! - **Document**: a flat, reference-based description of a tree of typed
//!   nodes, delivered as one of a fixed set of message kinds
//! - **Catalog**: the allowlist of node types a renderer may be asked for
//! - **Graph utilities**: adjacency construction, cycle probing, and
//!   longest-path depth over id-keyed structures
//!
//! # Architecture
//!
//! ```text
//! Agent → SurfaceDocument (flat nodes + child ids) → Validator → Renderer
//!                         ↑
//!                 ComponentCatalog (allowlist)
//! ```
//!
//! Hierarchy exists only through `children` id references; nodes are never
//! physically nested. Resolving and checking those references is the
//! validator's job, not this crate's.

#![warn(missing_docs)]
#![warn(unreachable_pub)]

// Core modules
pub mod catalog;
pub mod document;
pub mod graph;

// Re-exports for convenience
pub use catalog::ComponentCatalog;
pub use document::{MessageKind, SurfaceDocument, SurfaceNode};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with surface documents
    pub use crate::catalog::ComponentCatalog;
    pub use crate::document::{MessageKind, SurfaceDocument, SurfaceNode};
    pub use crate::graph::{adjacency_of, find_cycle_from, longest_depth_from, roots_of};
}
