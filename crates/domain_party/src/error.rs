//! Applicant domain errors
//!
//! These are input-integrity errors: they describe applicant data that
//! cannot be turned into a well-formed [`Applicant`](crate::Applicant).

use core_kernel::ItemKey;
use thiserror::Error;

/// Errors that can occur while building an applicant
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PartyError {
    /// Two items of the same collection share a key
    #[error("Duplicate {collection} key: {key}")]
    DuplicateKey {
        collection: &'static str,
        key: ItemKey,
    },

    /// A binary risk answer outside of {0, 1}
    #[error("Invalid risk answer at position {index}: {value} (expected 0 or 1)")]
    InvalidRiskAnswer { index: usize, value: u8 },

    /// A required applicant field was never supplied
    #[error("Missing required field: {0}")]
    MissingField(&'static str),
}

impl PartyError {
    /// Creates a DuplicateKey error for the given collection
    pub fn duplicate_key(collection: &'static str, key: ItemKey) -> Self {
        PartyError::DuplicateKey { collection, key }
    }
}
