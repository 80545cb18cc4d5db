//! Risk profile DTOs
//!
//! Requests are read in three steps: every top-level key must be present,
//! the body must deserialize into [`RiskProfileRequest`], and the derived
//! validation rules must pass. Conversion into an [`Applicant`] then checks
//! the applicant model's own invariants.

use std::collections::BTreeMap;

use core_kernel::{ItemKey, LineOfInsurance};
use domain_party::{Applicant, Gender, House, MaritalStatus, PartyError, RiskAnswer, Vehicle};
use domain_risk::{LineAversion, RiskAversion, RiskProfile};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::Validate;

use crate::error::ApiError;

/// Top-level keys every request must carry, in reporting order
pub const REQUIRED_KEYS: [&str; 8] = [
    "age",
    "gender",
    "marital_status",
    "dependents",
    "income",
    "risk_questions",
    "houses",
    "vehicles",
];

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RiskProfileRequest {
    #[validate(range(max = 150))]
    pub age: u32,
    pub gender: Gender,
    pub marital_status: MaritalStatus,
    pub dependents: u32,
    pub income: u64,
    #[validate(length(equal = 3))]
    pub risk_questions: Vec<RiskAnswer>,
    pub houses: Vec<House>,
    pub vehicles: Vec<Vehicle>,
}

impl RiskProfileRequest {
    /// Reads a request from a parsed JSON body
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Validation` naming the first missing key, the
    /// first value of the wrong type, or the failed validation rules.
    pub fn from_json(body: Value) -> Result<Self, ApiError> {
        let object = body
            .as_object()
            .ok_or_else(|| ApiError::invalid_value("request body must be a JSON object"))?;

        if let Some(missing) = REQUIRED_KEYS.iter().find(|key| !object.contains_key(**key)) {
            return Err(ApiError::missing_key(missing));
        }

        let request: RiskProfileRequest =
            serde_json::from_value(body).map_err(ApiError::invalid_value)?;
        request.validate()?;
        Ok(request)
    }
}

impl TryFrom<RiskProfileRequest> for Applicant {
    type Error = PartyError;

    fn try_from(request: RiskProfileRequest) -> Result<Self, Self::Error> {
        Applicant::builder()
            .age(request.age)
            .gender(request.gender)
            .marital_status(request.marital_status)
            .dependents(request.dependents)
            .income(request.income)
            .risk_answers(request.risk_questions)
            .houses(request.houses)
            .vehicles(request.vehicles)
            .build()
    }
}

/// Category of one insured item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemAversionResponse {
    pub key: ItemKey,
    pub value: RiskAversion,
}

/// Category of one line: a single value, or one entry per item ordered by key
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LineAversionResponse {
    Single(RiskAversion),
    PerItem(Vec<ItemAversionResponse>),
}

impl From<&LineAversion> for LineAversionResponse {
    fn from(aversion: &LineAversion) -> Self {
        match aversion {
            LineAversion::Single(value) => LineAversionResponse::Single(*value),
            LineAversion::PerItem(items) => LineAversionResponse::PerItem(
                items
                    .iter()
                    .map(|(key, value)| ItemAversionResponse {
                        key: *key,
                        value: *value,
                    })
                    .collect(),
            ),
        }
    }
}

/// Risk profile keyed by line name; disabled lines are absent
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RiskProfileResponse {
    pub lines: BTreeMap<LineOfInsurance, LineAversionResponse>,
}

impl From<&RiskProfile> for RiskProfileResponse {
    fn from(profile: &RiskProfile) -> Self {
        Self {
            lines: profile
                .lines()
                .map(|(line, aversion)| (line, LineAversionResponse::from(aversion)))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;
    use test_utils::PayloadFixtures;

    #[test]
    fn test_reads_complete_request() {
        let request = RiskProfileRequest::from_json(PayloadFixtures::risk_profile_request()).unwrap();

        assert_eq!(request.age, 35);
        assert_eq!(request.houses.len(), 2);
        assert_eq!(request.vehicles[1].year, 2018);
    }

    #[test]
    fn test_reports_first_missing_key() {
        let mut body = PayloadFixtures::risk_profile_request();
        let object = body.as_object_mut().unwrap();
        object.remove("income");
        object.remove("vehicles");

        match RiskProfileRequest::from_json(body) {
            Err(ApiError::Validation(msg)) => assert_eq!(msg, "missing key: income"),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_rejects_non_object_body() {
        let result = RiskProfileRequest::from_json(json!([1, 2, 3]));
        assert!(matches!(result, Err(ApiError::Validation(_))));
    }

    #[test]
    fn test_rejects_wrong_answer_count() {
        let mut body = PayloadFixtures::risk_profile_request();
        body["risk_questions"] = json!([0, 1]);

        assert!(matches!(
            RiskProfileRequest::from_json(body),
            Err(ApiError::Validation(_))
        ));
    }

    #[test]
    fn test_converts_into_applicant() {
        let request = RiskProfileRequest::from_json(PayloadFixtures::risk_profile_request()).unwrap();
        let applicant = Applicant::try_from(request).unwrap();

        assert_eq!(applicant.base_score(), 1);
        assert_eq!(applicant.mortgaged_houses().len(), 1);
    }

    #[test]
    fn test_response_shape() {
        let profile: RiskProfile = [
            (LineOfInsurance::Life, LineAversion::Single(RiskAversion::Average)),
            (
                LineOfInsurance::Home,
                LineAversion::PerItem(
                    [(ItemKey::new(2), RiskAversion::Conservative), (ItemKey::new(0), RiskAversion::Adventurous)]
                        .into_iter()
                        .collect(),
                ),
            ),
        ]
        .into_iter()
        .collect();

        let json = serde_json::to_value(RiskProfileResponse::from(&profile)).unwrap();
        assert_eq!(
            json,
            json!({
                "life": "average",
                "home": [
                    {"key": 0, "value": "adventurous"},
                    {"key": 2, "value": "conservative"}
                ]
            })
        );
    }

    proptest! {
        /// Whatever keys are dropped, the first one in declared order is reported
        #[test]
        fn prop_first_missing_key_is_reported(
            dropped in proptest::collection::btree_set(0usize..REQUIRED_KEYS.len(), 1..=REQUIRED_KEYS.len())
        ) {
            let mut body = PayloadFixtures::risk_profile_request();
            let object = body.as_object_mut().unwrap();
            for index in &dropped {
                object.remove(REQUIRED_KEYS[*index]);
            }

            let first = REQUIRED_KEYS[*dropped.iter().next().unwrap()];
            match RiskProfileRequest::from_json(body) {
                Err(ApiError::Validation(msg)) => {
                    prop_assert_eq!(msg, format!("missing key: {}", first));
                }
                other => prop_assert!(false, "unexpected result: {:?}", other),
            }
        }
    }
}
