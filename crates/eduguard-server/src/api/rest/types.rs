//! REST API type definitions
//!
//! Request and response types for the REST API endpoints.

use crate::users::{Role, UserStore};
use eduguard_core::{ActivityEntry, AuditEntry, BehavioralSample};
use eduguard_sdk::RiskEngine;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Application state
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<RiskEngine>,
    pub users: Arc<UserStore>,
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Registration form fields
#[derive(Debug, Clone, Deserialize)]
pub struct SignupForm {
    pub email: String,
    pub password: String,
    pub full_name: String,
}

/// Signup request payload
///
/// Both sections are required; a request without behavioral telemetry
/// is rejected before any scoring runs.
#[derive(Debug, Deserialize)]
pub struct SignupPayload {
    pub form_data: SignupForm,
    pub behavioral_data: BehavioralSample,
}

/// Login form fields
#[derive(Debug, Clone, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

/// Login request payload
#[derive(Debug, Deserialize)]
pub struct LoginPayload {
    pub form_data: LoginForm,
    pub behavioral_data: BehavioralSample,
}

/// Risk summary attached to signup/login responses
#[derive(Debug, Serialize)]
pub struct RiskSummary {
    pub activity_id: String,
    pub fraud_score: f64,
    pub explanation: String,
    pub is_suspicious: bool,
    pub ip_consistency: String,
}

/// Signup/login response
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub message: String,
    pub user_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    pub role: Role,
    pub risk: RiskSummary,
}

/// Officer override request payload
#[derive(Debug, Deserialize)]
pub struct OverridePayload {
    pub log_id: String,
    pub officer_id: String,
    pub reason: String,
}

/// Combined log retrieval response, newest-first
#[derive(Debug, Serialize)]
pub struct ActivityLogResponse {
    pub activity_log: Vec<ActivityEntry>,
    pub audit_log: Vec<AuditEntry>,
}
