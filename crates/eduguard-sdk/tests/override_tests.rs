//! Officer override and audit-trail tests

use chrono::Utc;
use eduguard_core::{ActivityEntry, ActivityStatus, AttemptKind, LocationPoint};
use eduguard_engine::geo::MockResolver;
use eduguard_engine::ledger::{ActivityLog, AuditLog, MemoryActivityLog, MemoryAuditLog};
use eduguard_engine::model::StubClassifier;
use eduguard_sdk::{OverrideRequest, RiskEngine, RiskEngineBuilder, SdkError};
use std::sync::Arc;

struct Harness {
    engine: RiskEngine,
    activity: Arc<MemoryActivityLog>,
    audit: Arc<MemoryAuditLog>,
}

fn harness() -> Harness {
    let activity = Arc::new(MemoryActivityLog::new());
    let audit = Arc::new(MemoryAuditLog::new());
    let engine = RiskEngineBuilder::new()
        .with_classifier(Box::new(StubClassifier::new(0.5)))
        .with_resolver(Arc::new(MockResolver::with_point(LocationPoint::new(
            48.85, 2.35,
        ))))
        .with_activity_log(activity.clone())
        .with_audit_log(audit.clone())
        .build()
        .unwrap();

    Harness {
        engine,
        activity,
        audit,
    }
}

fn flagged_entry(id: &str, fraud_score: f64) -> ActivityEntry {
    ActivityEntry {
        id: id.to_string(),
        kind: AttemptKind::Login,
        email: "student@example.com".to_string(),
        timestamp: Utc::now(),
        fraud_score,
        explanation: "flagged".to_string(),
        ip_address: "203.0.113.7".to_string(),
        ip_consistency: "Unable to verify IP location.".to_string(),
        is_suspicious: true,
        status: ActivityStatus::Suspicious,
    }
}

fn override_request(log_id: &str) -> OverrideRequest {
    OverrideRequest {
        log_id: log_id.to_string(),
        officer_id: "officer-7".to_string(),
        reason: "verified by phone".to_string(),
    }
}

#[tokio::test]
async fn test_low_score_override_clears_at_l1() {
    let h = harness();
    h.activity.append(flagged_entry("a-1", 0.79)).await;

    let updated = h.engine.override_activity(override_request("a-1")).await.unwrap();

    assert_eq!(updated.status, ActivityStatus::ClearedByL1);
}

#[tokio::test]
async fn test_boundary_score_exactly_point_eight_clears_at_l1() {
    // Escalation requires strictly greater than 0.8
    let h = harness();
    h.activity.append(flagged_entry("a-1", 0.8)).await;

    let updated = h.engine.override_activity(override_request("a-1")).await.unwrap();

    assert_eq!(updated.status, ActivityStatus::ClearedByL1);
}

#[tokio::test]
async fn test_high_score_override_escalates_to_l2() {
    let h = harness();
    h.activity.append(flagged_entry("a-1", 0.81)).await;

    let updated = h.engine.override_activity(override_request("a-1")).await.unwrap();

    assert_eq!(updated.status, ActivityStatus::PendingL2Approval);
}

#[tokio::test]
async fn test_audit_entry_records_transition() {
    let h = harness();
    h.activity.append(flagged_entry("a-1", 0.7)).await;

    h.engine.override_activity(override_request("a-1")).await.unwrap();

    let audit = h.audit.snapshot().await;
    assert_eq!(audit.len(), 1);
    let entry = &audit[0];
    assert_eq!(entry.activity_id, "a-1");
    assert_eq!(entry.user_email, "student@example.com");
    assert_eq!(entry.officer_id, "officer-7");
    assert_eq!(entry.reason, "verified by phone");
    assert_eq!(entry.previous_status, ActivityStatus::Suspicious);
    assert_eq!(entry.new_status, ActivityStatus::ClearedByL1);
    assert_eq!(entry.fraud_score_at_override, 0.7);
}

#[tokio::test]
async fn test_override_is_not_idempotent() {
    // Re-invoking with the same id re-applies the transition and
    // appends a duplicate audit record; the second entry's previous
    // status is the already-overridden one.
    let h = harness();
    h.activity.append(flagged_entry("a-1", 0.7)).await;

    h.engine.override_activity(override_request("a-1")).await.unwrap();
    h.engine.override_activity(override_request("a-1")).await.unwrap();

    let audit = h.audit.snapshot().await;
    assert_eq!(audit.len(), 2);
    // Newest-first: the repeat comes first
    assert_eq!(audit[0].previous_status, ActivityStatus::ClearedByL1);
    assert_eq!(audit[0].new_status, ActivityStatus::ClearedByL1);
    assert_eq!(audit[1].previous_status, ActivityStatus::Suspicious);
}

#[tokio::test]
async fn test_override_accepts_unflagged_entries() {
    // No check that the entry is currently flagged
    let h = harness();
    let mut entry = flagged_entry("a-1", 0.2);
    entry.is_suspicious = false;
    entry.status = ActivityStatus::Normal;
    h.activity.append(entry).await;

    let updated = h.engine.override_activity(override_request("a-1")).await.unwrap();

    assert_eq!(updated.status, ActivityStatus::ClearedByL1);
    assert_eq!(h.audit.snapshot().await.len(), 1);
}

#[tokio::test]
async fn test_unknown_id_is_not_found_and_mutates_nothing() {
    let h = harness();
    h.activity.append(flagged_entry("a-1", 0.7)).await;

    let result = h.engine.override_activity(override_request("missing")).await;

    assert!(matches!(result, Err(SdkError::ActivityNotFound(_))));
    assert_eq!(
        h.activity.find("a-1").await.unwrap().status,
        ActivityStatus::Suspicious
    );
    assert!(h.audit.snapshot().await.is_empty());
}
