//! Surface Kit Structural Validator
//!
//! The trusted boundary between agent-produced surface descriptions and the
//! rendering layer.
//!
//! # Core Operations
//!
//! - **Validate**: fail-closed; collect every schema, integrity, and catalog
//!   violation in a [`Verdict`] without ever raising
//! - **Assert**: the same pass with fail-fast semantics, aggregating all
//!   violations into one [`ValidateError`]
//! - **Sanitize**: fail-open; keep the individually-valid subset of a
//!   document and always return something renderable
//!
//! # Architecture
//!
//! ```text
//! Agent output (JSON) → validate ──valid──→ SurfaceDocument → Renderer
//!                          │
//!                       Verdict { errors, warnings }
//!
//! Agent output (JSON) → sanitize ─always──→ SurfaceDocument (best effort)
//! ```
//!
//! The two postures share one per-node rule set and nothing else; there is
//! no flag that turns one into the other.

#![warn(missing_docs)]
#![warn(unreachable_pub)]

// Core modules
pub mod error;
mod rules;
pub mod sanitize;
pub mod validator;

// Re-exports for convenience
pub use error::ValidateError;
pub use sanitize::sanitize;
pub use validator::{SurfaceValidator, ValidateOptions, Verdict};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for validating surface documents
    pub use crate::error::ValidateError;
    pub use crate::sanitize::sanitize;
    pub use crate::validator::{SurfaceValidator, ValidateOptions, Verdict};
    pub use surface_schema::{ComponentCatalog, MessageKind, SurfaceDocument, SurfaceNode};
}
