//! HTTP API Tests
//!
//! Drives the router in-process with `tower::ServiceExt::oneshot`.
//!
//! # Test Organization
//!
//! - `health` - liveness endpoint
//! - `risk_profile` - successful calculations
//! - `request_errors` - 400 / 422 / 404 handling

use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use core_kernel::ReferenceDate;
use interface_api::{config::ApiConfig, create_router};
use serde_json::{json, Value};
use test_utils::{PayloadFixtures, TemporalFixtures};
use tower::ServiceExt;

// ============================================================================
// TEST HELPERS
// ============================================================================

/// Router with vehicle ages measured against the fixture reference date
fn app() -> Router {
    create_router(ApiConfig {
        reference_date: ReferenceDate::Fixed(TemporalFixtures::reference_date()),
        ..ApiConfig::default()
    })
}

async fn post_json(body: String) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri("/risk_profile")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .unwrap();

    send(request).await
}

async fn post_value(body: Value) -> (StatusCode, Value) {
    post_json(body.to_string()).await
}

async fn send(request: Request<Body>) -> (StatusCode, Value) {
    let response = app().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

// ============================================================================
// HEALTH
// ============================================================================

mod health {
    use super::*;

    #[tokio::test]
    async fn test_health_check() {
        let request = Request::builder().uri("/health").body(Body::empty()).unwrap();
        let (status, body) = send(request).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
        assert!(body["version"].is_string());
    }

    /// Verifies a request id is generated and echoed back
    #[tokio::test]
    async fn test_request_id_is_propagated() {
        let request = Request::builder().uri("/health").body(Body::empty()).unwrap();
        let response = app().oneshot(request).await.unwrap();

        assert!(response.headers().contains_key("x-request-id"));
    }

    /// Verifies a caller-supplied request id is kept
    #[tokio::test]
    async fn test_request_id_is_kept() {
        let request = Request::builder()
            .uri("/health")
            .header("x-request-id", "abc-123")
            .body(Body::empty())
            .unwrap();
        let response = app().oneshot(request).await.unwrap();

        assert_eq!(response.headers()["x-request-id"], "abc-123");
    }
}

// ============================================================================
// RISK PROFILE
// ============================================================================

mod risk_profile {
    use super::*;

    /// Full payload: every line active, item lines ordered by key
    #[tokio::test]
    async fn test_full_payload() {
        let (status, body) = post_value(PayloadFixtures::risk_profile_request()).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({
                "life": "average",
                "disability": "average",
                "home": [
                    {"key": 0, "value": "adventurous"},
                    {"key": 1, "value": "average"}
                ],
                "auto": [
                    {"key": 0, "value": "adventurous"},
                    {"key": 1, "value": "adventurous"}
                ]
            })
        );
    }

    /// No income and no assets: only life remains
    #[tokio::test]
    async fn test_disabled_lines_are_omitted() {
        let (status, body) = post_value(json!({
            "age": 25,
            "gender": "male",
            "marital_status": "single",
            "dependents": 0,
            "income": 0,
            "risk_questions": [0, 0, 0],
            "houses": [],
            "vehicles": []
        }))
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"life": "adventurous"}));
    }

    /// Over 60 with one owned house: only home remains
    #[tokio::test]
    async fn test_retiree_with_single_house() {
        let (status, body) = post_value(json!({
            "age": 65,
            "gender": "male",
            "marital_status": "married",
            "dependents": 0,
            "income": 40000,
            "risk_questions": [1, 1, 0],
            "houses": [{"key": 3, "zip_code": 54321, "status": "owned"}],
            "vehicles": []
        }))
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"home": [{"key": 3, "value": "conservative"}]}));
    }

    /// Boolean and weighted answers are accepted alongside 0/1
    #[tokio::test]
    async fn test_mixed_answer_forms() {
        let mut payload = PayloadFixtures::risk_profile_request();
        payload["risk_questions"] = json!([false, {"weight": 1, "question": "q2"}, 0]);

        let (status, body) = post_value(payload).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["life"], "average");
    }

    /// Answer weights and model years at the integer bounds still get a profile
    #[tokio::test]
    async fn test_extreme_numbers_are_scored() {
        let mut payload = PayloadFixtures::risk_profile_request();
        payload["risk_questions"] = json!([{"weight": 2147483647}, {"weight": 1}, 0]);
        payload["vehicles"][0]["year"] = json!(-2147483648i64);

        let (status, body) = post_value(payload).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["life"], "conservative");
        assert_eq!(body["auto"][0], json!({"key": 0, "value": "conservative"}));
    }
}

// ============================================================================
// REQUEST ERRORS
// ============================================================================

mod request_errors {
    use super::*;
    use interface_api::dto::risk_profile::REQUIRED_KEYS;

    /// Verifies each missing key is named in a 422
    #[tokio::test]
    async fn test_missing_keys() {
        for key in REQUIRED_KEYS {
            let mut payload = PayloadFixtures::risk_profile_request();
            payload.as_object_mut().unwrap().remove(key);

            let (status, body) = post_value(payload).await;

            assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY, "key {}", key);
            assert_eq!(body["code"], "validation_error");
            let error = body["error"].as_str().unwrap();
            assert!(error.contains("missing key"), "{}", error);
            assert!(error.contains(key), "{}", error);
            assert_eq!(body["message"], format!("missing key: {}", key));
        }
    }

    #[tokio::test]
    async fn test_wrong_type() {
        let mut payload = PayloadFixtures::risk_profile_request();
        payload["age"] = json!("thirty-five");

        let (status, body) = post_value(payload).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(body["message"].as_str().unwrap().starts_with("invalid value"));
    }

    #[tokio::test]
    async fn test_negative_age() {
        let mut payload = PayloadFixtures::risk_profile_request();
        payload["age"] = json!(-1);

        let (status, _) = post_value(payload).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_age_out_of_range() {
        let mut payload = PayloadFixtures::risk_profile_request();
        payload["age"] = json!(151);

        let (status, body) = post_value(payload).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["code"], "validation_error");
    }

    #[tokio::test]
    async fn test_wrong_answer_count() {
        let mut payload = PayloadFixtures::risk_profile_request();
        payload["risk_questions"] = json!([0, 1, 0, 1]);

        let (status, _) = post_value(payload).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_binary_answer_out_of_range() {
        let mut payload = PayloadFixtures::risk_profile_request();
        payload["risk_questions"] = json!([0, 2, 0]);

        let (status, body) = post_value(payload).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(body["message"].as_str().unwrap().contains("risk answer"));
    }

    #[tokio::test]
    async fn test_duplicate_house_key() {
        let mut payload = PayloadFixtures::risk_profile_request();
        payload["houses"] = json!([
            {"key": 0, "zip_code": 1, "status": "owned"},
            {"key": 0, "zip_code": 2, "status": "mortgaged"}
        ]);

        let (status, body) = post_value(payload).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["message"], "Duplicate house key: 0");
    }

    #[tokio::test]
    async fn test_unknown_house_status() {
        let mut payload = PayloadFixtures::risk_profile_request();
        payload["houses"][0]["status"] = json!("rented");

        let (status, _) = post_value(payload).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_malformed_json() {
        let (status, body) = post_json("{\"age\": 35,".to_string()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "bad_request");
    }

    #[tokio::test]
    async fn test_unknown_route() {
        let request = Request::builder()
            .uri("/policies")
            .body(Body::empty())
            .unwrap();
        let (status, body) = send(request).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["code"], "not_found");
    }
}
