//! Request/Response types for RiskEngine

use eduguard_core::{AttemptKind, BehavioralFeatures, BehavioralSample, GeoOutcome, RiskAssessment};
use serde::{Deserialize, Serialize};

/// One signup/login attempt to assess.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentRequest {
    /// Whether this is a signup or a login attempt
    pub kind: AttemptKind,

    /// User identity, also the key for the location baseline
    pub email: String,

    /// Source IP of the request
    pub ip_address: String,

    /// Raw behavioral telemetry captured by the form
    pub behavioral: BehavioralSample,
}

impl AssessmentRequest {
    pub fn new(
        kind: AttemptKind,
        email: impl Into<String>,
        ip_address: impl Into<String>,
        behavioral: BehavioralSample,
    ) -> Self {
        Self {
            kind,
            email: email.into(),
            ip_address: ip_address.into(),
            behavioral,
        }
    }
}

/// Result of assessing one attempt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentResponse {
    /// Id of the activity-log entry created for this attempt
    pub activity_id: String,

    /// Score, explanation, and the suspicious flag
    pub assessment: RiskAssessment,

    /// Outcome of the IP-consistency check
    pub geo: GeoOutcome,

    /// Derived behavioral features (for display/debugging)
    pub features: BehavioralFeatures,
}

/// An officer override of a logged attempt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OverrideRequest {
    /// Id of the activity-log entry to transition
    pub log_id: String,

    /// Officer applying the override
    pub officer_id: String,

    /// Free-text justification
    pub reason: String,
}
