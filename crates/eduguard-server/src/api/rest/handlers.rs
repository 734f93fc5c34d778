//! API endpoint handlers
//!
//! HTTP request handlers for all REST API endpoints. The risk
//! assessment runs (and its decision record lands in the activity log)
//! before the signup/login outcome is decided, so failed attempts are
//! still logged.

use super::extractors::{ClientIp, JsonExtractor};
use super::types::*;
use crate::error::ServerError;
use axum::{extract::State, http::StatusCode, Json};
use eduguard_core::{ActivityEntry, AttemptKind};
use eduguard_sdk::{AssessmentRequest, AssessmentResponse, OverrideRequest};
use tracing::info;

/// Health check endpoint
pub(super) async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

fn risk_summary(response: &AssessmentResponse) -> RiskSummary {
    RiskSummary {
        activity_id: response.activity_id.clone(),
        fraud_score: response.assessment.fraud_score,
        explanation: response.assessment.explanation.clone(),
        is_suspicious: response.assessment.is_suspicious,
        ip_consistency: response.geo.reason.clone(),
    }
}

/// Signup endpoint with integrated fraud detection
pub(super) async fn signup(
    State(state): State<AppState>,
    ClientIp(ip): ClientIp,
    JsonExtractor(payload): JsonExtractor<SignupPayload>,
) -> Result<(StatusCode, Json<AuthResponse>), ServerError> {
    let form = payload.form_data;

    info!(email = %form.email, ip = %ip, "signup attempt");

    let assessment = state
        .engine
        .assess(AssessmentRequest::new(
            AttemptKind::Signup,
            form.email.clone(),
            ip,
            payload.behavioral_data,
        ))
        .await?;

    let user = state
        .users
        .register(&form.email, &form.password, &form.full_name)
        .await
        .ok_or_else(|| ServerError::Conflict("User already exists.".to_string()))?;

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            message: "User created successfully!".to_string(),
            user_id: user.id,
            full_name: None,
            role: user.role,
            risk: risk_summary(&assessment),
        }),
    ))
}

/// Login endpoint with integrated fraud detection
pub(super) async fn login(
    State(state): State<AppState>,
    ClientIp(ip): ClientIp,
    JsonExtractor(payload): JsonExtractor<LoginPayload>,
) -> Result<Json<AuthResponse>, ServerError> {
    let form = payload.form_data;

    info!(email = %form.email, ip = %ip, "login attempt");

    // Assess and log the attempt before the credential check, so failed
    // logins still appear in the activity log.
    let assessment = state
        .engine
        .assess(AssessmentRequest::new(
            AttemptKind::Login,
            form.email.clone(),
            ip,
            payload.behavioral_data,
        ))
        .await?;

    let user = state
        .users
        .authenticate(&form.email, &form.password)
        .await
        .ok_or_else(|| ServerError::Unauthorized("Invalid credentials.".to_string()))?;

    Ok(Json(AuthResponse {
        message: "Login successful!".to_string(),
        user_id: user.id,
        full_name: Some(user.full_name),
        role: user.role,
        risk: risk_summary(&assessment),
    }))
}

/// Officer override endpoint
pub(super) async fn override_activity(
    State(state): State<AppState>,
    JsonExtractor(payload): JsonExtractor<OverridePayload>,
) -> Result<Json<ActivityEntry>, ServerError> {
    let updated = state
        .engine
        .override_activity(OverrideRequest {
            log_id: payload.log_id,
            officer_id: payload.officer_id,
            reason: payload.reason,
        })
        .await?;

    Ok(Json(updated))
}

/// Activity/audit log retrieval endpoint
pub(super) async fn activity_log(
    State(state): State<AppState>,
) -> Json<ActivityLogResponse> {
    Json(ActivityLogResponse {
        activity_log: state.engine.activity_log().await,
        audit_log: state.engine.audit_log().await,
    })
}
