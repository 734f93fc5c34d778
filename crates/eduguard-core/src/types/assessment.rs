//! Risk assessment types and decision thresholds

use serde::{Deserialize, Serialize};

/// Fraud-score threshold above which an attempt is considered suspicious.
pub const SUSPICION_THRESHOLD: f64 = 0.6;

/// Fraud-score threshold above which an officer override escalates to L2
/// instead of clearing at L1.
pub const L2_ESCALATION_THRESHOLD: f64 = 0.8;

/// The computed risk assessment for one signup/login attempt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessment {
    /// Ensemble vote fraction in [0, 1], interpreted as a probability of
    /// fraudulent behavior
    pub fraud_score: f64,
    /// Human-readable rationale (advisory only; never feeds back into
    /// the score or the flag)
    pub explanation: String,
    /// True iff `fraud_score > 0.6` or the IP check was inconsistent
    pub is_suspicious: bool,
}

impl RiskAssessment {
    /// Build an assessment, deriving the suspicious flag from the score
    /// and the IP-consistency result.
    pub fn new(fraud_score: f64, explanation: String, ip_inconsistent: bool) -> Self {
        Self {
            fraud_score,
            explanation,
            is_suspicious: fraud_score > SUSPICION_THRESHOLD || ip_inconsistent,
        }
    }
}
