//! API error handling

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use domain_party::PartyError;
use domain_risk::ScoringError;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::error;
use validator::ValidationErrors;

/// API error types
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal server error: {0}")]
    Internal(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl ApiError {
    /// A required top-level key is absent from the request body
    pub fn missing_key(key: &str) -> Self {
        ApiError::Validation(format!("missing key: {}", key))
    }

    /// A value could not be read as the expected type
    pub fn invalid_value(reason: impl std::fmt::Display) -> Self {
        ApiError::Validation(format!("invalid value: {}", reason))
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

/// Error response body
///
/// `error` is the full human-readable description, `code` the stable
/// machine-readable category and `message` the detail without its prefix.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<String>>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let error = self.to_string();
        let (code, message) = match self {
            ApiError::NotFound(msg) => ("not_found", msg),
            ApiError::BadRequest(msg) => ("bad_request", msg),
            ApiError::Internal(msg) => ("internal_error", msg),
            ApiError::Validation(msg) => ("validation_error", msg),
        };

        let body = ErrorResponse {
            error,
            code: code.to_string(),
            message,
            details: None,
        };

        (status, Json(body)).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        ApiError::invalid_value(errors)
    }
}

impl From<PartyError> for ApiError {
    fn from(err: PartyError) -> Self {
        ApiError::Validation(err.to_string())
    }
}

impl From<ScoringError> for ApiError {
    fn from(err: ScoringError) -> Self {
        error!(error = %err, "risk scoring failed");
        ApiError::Internal("risk profile could not be calculated".to_string())
    }
}
