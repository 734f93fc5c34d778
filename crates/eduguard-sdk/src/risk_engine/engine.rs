//! Core RiskEngine implementation

use crate::error::{Result, SdkError};
use crate::risk_engine::types::{AssessmentRequest, AssessmentResponse, OverrideRequest};
use chrono::Utc;
use eduguard_core::{
    ActivityEntry, ActivityStatus, AuditEntry, RiskAssessment, L2_ESCALATION_THRESHOLD,
};
use eduguard_engine::explain::{self, ExplanationInput};
use eduguard_engine::geo::ConsistencyChecker;
use eduguard_engine::ledger::{ActivityLog, AuditLog};
use eduguard_engine::model::Classifier;
use eduguard_engine::behavior;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

/// The composed fraud-risk scoring pipeline.
///
/// Stage order per attempt: behavioral feature extraction and the
/// IP-consistency check run independently; the classifier consumes the
/// combined vector; the explanation generator consumes the score plus
/// both upstream outputs; the decision record lands in the activity
/// log. Overrides transition a logged entry and append an audit record.
pub struct RiskEngine {
    checker: ConsistencyChecker,
    classifier: Box<dyn Classifier>,
    activity_log: Arc<dyn ActivityLog>,
    audit_log: Arc<dyn AuditLog>,
}

impl RiskEngine {
    pub(crate) fn from_parts(
        checker: ConsistencyChecker,
        classifier: Box<dyn Classifier>,
        activity_log: Arc<dyn ActivityLog>,
        audit_log: Arc<dyn AuditLog>,
    ) -> Self {
        Self {
            checker,
            classifier,
            activity_log,
            audit_log,
        }
    }

    /// Score one signup/login attempt and append the decision record.
    ///
    /// The record is appended unconditionally; whether the surrounding
    /// signup/login succeeds is the caller's business.
    pub async fn assess(&self, request: AssessmentRequest) -> Result<AssessmentResponse> {
        let features = behavior::extract(&request.behavioral);
        let geo = self.checker.check(&request.email, &request.ip_address).await;

        let vector = features.to_vector(geo.is_inconsistent);
        let fraud_score = self.classifier.predict(&vector);

        let explanation = explain::generate(&ExplanationInput {
            score: fraud_score,
            sample: &request.behavioral,
            features: &features,
            geo: &geo,
        });

        let assessment = RiskAssessment::new(fraud_score, explanation, geo.is_inconsistent);

        let entry = ActivityEntry {
            id: Uuid::new_v4().to_string(),
            kind: request.kind,
            email: request.email.clone(),
            timestamp: Utc::now(),
            fraud_score: assessment.fraud_score,
            explanation: assessment.explanation.clone(),
            ip_address: request.ip_address.clone(),
            ip_consistency: geo.reason.clone(),
            is_suspicious: assessment.is_suspicious,
            status: if assessment.is_suspicious {
                ActivityStatus::Suspicious
            } else {
                ActivityStatus::Normal
            },
        };
        let activity_id = entry.id.clone();

        info!(
            email = %request.email,
            fraud_score,
            is_suspicious = assessment.is_suspicious,
            "attempt assessed"
        );
        self.activity_log.append(entry).await;

        Ok(AssessmentResponse {
            activity_id,
            assessment,
            geo,
            features,
        })
    }

    /// Apply an officer override to a logged attempt.
    ///
    /// Accepted unconditionally for any matching id — no check that the
    /// entry is currently flagged, and no idempotence guard: re-invoking
    /// with the same id re-applies the transition and appends another
    /// audit record. Scores above 0.8 escalate to L2 instead of
    /// clearing at L1.
    pub async fn override_activity(&self, request: OverrideRequest) -> Result<ActivityEntry> {
        let entry = self
            .activity_log
            .find(&request.log_id)
            .await
            .ok_or_else(|| SdkError::ActivityNotFound(request.log_id.clone()))?;

        let previous_status = entry.status;
        let new_status = if entry.fraud_score > L2_ESCALATION_THRESHOLD {
            ActivityStatus::PendingL2Approval
        } else {
            ActivityStatus::ClearedByL1
        };

        let updated = self
            .activity_log
            .set_status(&request.log_id, new_status)
            .await
            .ok_or_else(|| SdkError::ActivityNotFound(request.log_id.clone()))?;

        self.audit_log
            .append(AuditEntry {
                log_id: Uuid::new_v4().to_string(),
                timestamp: Utc::now(),
                activity_id: updated.id.clone(),
                user_email: updated.email.clone(),
                officer_id: request.officer_id.clone(),
                reason: request.reason,
                previous_status,
                new_status,
                fraud_score_at_override: updated.fraud_score,
            })
            .await;

        info!(
            officer = %request.officer_id,
            email = %updated.email,
            status = ?new_status,
            "officer override applied"
        );
        Ok(updated)
    }

    /// Activity log snapshot, newest-first.
    pub async fn activity_log(&self) -> Vec<ActivityEntry> {
        self.activity_log.snapshot().await
    }

    /// Audit log snapshot, newest-first.
    pub async fn audit_log(&self) -> Vec<AuditEntry> {
        self.audit_log.snapshot().await
    }
}
