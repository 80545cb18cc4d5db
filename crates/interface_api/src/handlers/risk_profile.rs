//! Risk profile handlers

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use domain_party::Applicant;
use serde_json::Value;
use tracing::debug;

use crate::dto::risk_profile::{RiskProfileRequest, RiskProfileResponse};
use crate::{error::ApiError, AppState};

/// Calculates the risk profile of the applicant in the request body
///
/// Malformed JSON is a 400. Missing keys, mistyped values and applicant
/// data that breaks the model's rules are a 422.
pub async fn calculate_risk_profile(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<RiskProfileResponse>, ApiError> {
    let Json(body) = payload?;
    let request = RiskProfileRequest::from_json(body)?;
    let applicant = Applicant::try_from(request)?;

    debug!(
        age = applicant.age(),
        houses = applicant.houses_count(),
        vehicles = applicant.vehicles_count(),
        "calculating risk profile"
    );

    let profile = state.calculator.calculate(&applicant)?;
    Ok(Json(RiskProfileResponse::from(&profile)))
}
