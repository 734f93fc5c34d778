//! Router creation and configuration
//!
//! Creates Axum routers for REST API endpoints.

use super::handlers::*;
use super::types::AppState;
use crate::users::UserStore;
use axum::{
    routing::{get, post},
    Router,
};
use eduguard_sdk::RiskEngine;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Create REST API router
pub fn create_router(engine: Arc<RiskEngine>) -> Router {
    let state = AppState {
        engine,
        users: Arc::new(UserStore::new()),
    };

    Router::new()
        .route("/health", get(health))
        .route("/v1/auth/signup", post(signup))
        .route("/v1/auth/login", post(login))
        .route("/v1/activity/override", post(override_activity))
        .route("/v1/activity-log", get(activity_log))
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
