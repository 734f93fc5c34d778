//! Activity and audit ledger entry types
//!
//! `ActivityEntry` records every signup/login attempt together with its
//! risk assessment. `AuditEntry` records every officer override and is
//! immutable once written.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Kind of authentication attempt being assessed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttemptKind {
    #[serde(rename = "Signup Attempt")]
    Signup,
    #[serde(rename = "Login Attempt")]
    Login,
}

/// Review status of an activity entry.
///
/// `Normal`/`Suspicious` are assigned at assessment time; the other two
/// are reachable only through an officer override.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActivityStatus {
    Normal,
    Suspicious,
    #[serde(rename = "Cleared by L1")]
    ClearedByL1,
    #[serde(rename = "Pending L2 Approval")]
    PendingL2Approval,
}

/// One entry in the append-only, newest-first activity log.
///
/// Only the `status` field is ever mutated (by an officer override);
/// entries are never deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityEntry {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: AttemptKind,
    pub email: String,
    pub timestamp: DateTime<Utc>,
    pub fraud_score: f64,
    pub explanation: String,
    pub ip_address: String,
    /// Reason string from the IP-consistency check, verbatim
    pub ip_consistency: String,
    pub is_suspicious: bool,
    pub status: ActivityStatus,
}

/// One entry in the append-only, newest-first audit log.
///
/// Created exactly once per override call; never mutated or deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditEntry {
    pub log_id: String,
    pub timestamp: DateTime<Utc>,
    /// The `ActivityEntry` this override applied to
    pub activity_id: String,
    pub user_email: String,
    pub officer_id: String,
    /// Free-text justification supplied by the officer
    pub reason: String,
    pub previous_status: ActivityStatus,
    pub new_status: ActivityStatus,
    pub fraud_score_at_override: f64,
}
