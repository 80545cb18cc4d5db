//! HTTP API Layer
//!
//! This crate exposes the risk profile calculation over HTTP using Axum.
//!
//! # Architecture
//!
//! - **Handlers**: Request handlers for health and risk profile endpoints
//! - **Middleware**: Request tracing, request ids, audit logging
//! - **DTOs**: Request/Response data transfer objects
//! - **Error Handling**: Consistent error responses
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::create_router;
//!
//! let app = create_router(config);
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;

use std::sync::Arc;

use axum::{
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use domain_risk::ProfileCalculator;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

use crate::config::ApiConfig;
use crate::handlers::{health, risk_profile};
use crate::middleware::audit_middleware;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: ApiConfig,
    pub calculator: Arc<ProfileCalculator>,
}

impl AppState {
    /// Builds the state, configuring the calculator from `config`
    pub fn new(config: ApiConfig) -> Self {
        let calculator = ProfileCalculator::new(config.calculator_config());
        Self {
            config,
            calculator: Arc::new(calculator),
        }
    }
}

/// Creates the main API router
///
/// # Arguments
///
/// * `config` - API configuration
///
/// # Returns
///
/// Configured Axum router with all routes and middleware
pub fn create_router(config: ApiConfig) -> Router {
    let state = AppState::new(config);

    Router::new()
        .route("/health", get(health::health_check))
        .route("/risk_profile", post(risk_profile::calculate_risk_profile))
        .fallback(handlers::not_found)
        .layer(axum_middleware::from_fn(audit_middleware))
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                .layer(TraceLayer::new_for_http())
                .layer(PropagateRequestIdLayer::x_request_id()),
        )
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
