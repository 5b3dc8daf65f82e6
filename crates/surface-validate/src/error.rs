//! Error types for the structural validator
//!
//! The primary entry point never returns `Err`; malformed input surfaces as
//! a [`Verdict`](crate::Verdict) with collected violations. The types here
//! back the raising `assert_valid` wrapper only.

/// Error raised by the `assert_valid` wrapper
#[derive(Debug, thiserror::Error)]
pub enum ValidateError {
    /// The document failed validation; all collected violations are listed
    #[error("surface document rejected: {}", violations.join("; "))]
    DocumentRejected {
        /// Every violation collected during the pass, in report order
        violations: Vec<String>,
    },
}

impl ValidateError {
    /// Aggregate collected violations into a single rejection
    pub fn rejected(violations: Vec<String>) -> Self {
        Self::DocumentRejected { violations }
    }

    /// The collected violations
    #[must_use]
    pub fn violations(&self) -> &[String] {
        match self {
            Self::DocumentRejected { violations } => violations,
        }
    }
}
