//! Risk scoring errors
//!
//! The only failure the scoring engine knows is an operation whose shape
//! does not match the score it targets. It always indicates a defect in the
//! policy chain, never bad applicant input.

use core_kernel::{ItemKey, LineOfInsurance};
use thiserror::Error;

/// Why a score operation was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidOperationKind {
    /// An item key was given for a single-value score
    #[error("item {0} addressed on a single-value score")]
    ItemOnScalar(ItemKey),

    /// The item was never registered under the line
    #[error("item {0} is not registered")]
    UnregisteredItem(ItemKey),

    /// The line was never created (distinct from disabled)
    #[error("line was never created")]
    LineNotCreated,
}

/// Errors that can occur while scoring
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoringError {
    /// Operation shape does not match the targeted score
    #[error("Invalid operation on {line} score: {kind}")]
    InvalidOperation {
        line: LineOfInsurance,
        kind: InvalidOperationKind,
    },
}

impl ScoringError {
    /// Creates an InvalidOperation error for the given line
    pub fn invalid_operation(line: LineOfInsurance, kind: InvalidOperationKind) -> Self {
        ScoringError::InvalidOperation { line, kind }
    }
}
