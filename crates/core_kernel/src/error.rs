//! Core error types used across the system

use thiserror::Error;

/// Core error type for the kernel
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("Invalid date: {0}")]
    InvalidDate(String),
}

impl CoreError {
    pub fn invalid_date(message: impl Into<String>) -> Self {
        CoreError::InvalidDate(message.into())
    }
}
