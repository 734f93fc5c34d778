//! End-to-end pipeline tests
//!
//! Exercise the composed assess flow with a stub classifier and mock
//! resolvers, so no model artifact or network access is needed.

use async_trait::async_trait;
use eduguard_core::{
    ActivityStatus, AttemptKind, BehavioralSample, LocationPoint,
};
use eduguard_engine::error::Result as EngineResult;
use eduguard_engine::geo::{GeoResolver, MockResolver};
use eduguard_engine::model::StubClassifier;
use eduguard_sdk::{AssessmentRequest, RiskEngine, RiskEngineBuilder};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Resolver that answers each call with the next point in a sequence,
/// repeating the last one.
struct SequenceResolver {
    points: Vec<LocationPoint>,
    calls: AtomicUsize,
}

impl SequenceResolver {
    fn new(points: Vec<LocationPoint>) -> Self {
        Self {
            points,
            calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl GeoResolver for SequenceResolver {
    async fn resolve(&self, _ip: &str) -> EngineResult<Option<LocationPoint>> {
        let index = self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(Some(self.points[index.min(self.points.len() - 1)]))
    }
}

fn engine_with(score: f64, resolver: Arc<dyn GeoResolver>) -> RiskEngine {
    RiskEngineBuilder::new()
        .with_classifier(Box::new(StubClassifier::new(score)))
        .with_resolver(resolver)
        .build()
        .unwrap()
}

fn sample(keys: u32, pastes: u32, errors: u32, time: f64) -> BehavioralSample {
    BehavioralSample {
        key_press_count: keys,
        paste_count: pastes,
        error_count: errors,
        total_time_seconds: time,
    }
}

fn login(email: &str, behavioral: BehavioralSample) -> AssessmentRequest {
    AssessmentRequest::new(AttemptKind::Login, email, "203.0.113.7", behavioral)
}

#[tokio::test]
async fn test_paste_sample_cites_paste_in_explanation() {
    // The worked example: 50 keys, 1 paste, 2 errors, 8 seconds
    let engine = engine_with(
        0.2,
        Arc::new(MockResolver::with_point(LocationPoint::new(48.85, 2.35))),
    );

    let response = engine
        .assess(login("student@example.com", sample(50, 1, 2, 8.0)))
        .await
        .unwrap();

    assert_eq!(response.features.paste_flag, 1);
    assert!(
        response
            .assessment
            .explanation
            .contains("data was pasted into the form"),
        "{}",
        response.assessment.explanation
    );
}

#[tokio::test]
async fn test_suspicious_from_high_score_with_consistent_ip() {
    let engine = engine_with(
        0.9,
        Arc::new(MockResolver::with_point(LocationPoint::new(48.85, 2.35))),
    );

    let response = engine
        .assess(login("student@example.com", sample(50, 0, 2, 8.0)))
        .await
        .unwrap();

    assert!(!response.geo.is_inconsistent);
    assert!(response.assessment.is_suspicious);
}

#[tokio::test]
async fn test_suspicious_from_inconsistent_ip_with_low_score() {
    // Lookup failure is fail-closed, so the attempt is flagged even at
    // score 0.1
    let engine = engine_with(0.1, Arc::new(MockResolver::with_failure("timeout")));

    let response = engine
        .assess(login("student@example.com", sample(50, 0, 2, 8.0)))
        .await
        .unwrap();

    assert!(response.geo.is_inconsistent);
    assert!(response.assessment.is_suspicious);
    assert_eq!(response.geo.reason, "Unable to verify IP location.");
}

#[tokio::test]
async fn test_normal_when_neither_disjunct_fires() {
    let engine = engine_with(
        0.1,
        Arc::new(MockResolver::with_point(LocationPoint::new(48.85, 2.35))),
    );

    let response = engine
        .assess(login("student@example.com", sample(50, 0, 2, 8.0)))
        .await
        .unwrap();

    assert!(!response.assessment.is_suspicious);

    let log = engine.activity_log().await;
    assert_eq!(log[0].status, ActivityStatus::Normal);
}

#[tokio::test]
async fn test_geo_jump_flags_second_login() {
    // First login establishes the baseline in Bangalore; the second
    // resolves to Delhi, far past the 20 km threshold.
    let resolver = Arc::new(SequenceResolver::new(vec![
        LocationPoint::new(12.9716, 77.5946),
        LocationPoint::new(28.6139, 77.2090),
    ]));
    let engine = engine_with(0.1, resolver);

    let first = engine
        .assess(login("traveler@example.com", sample(40, 0, 1, 10.0)))
        .await
        .unwrap();
    assert!(!first.geo.is_inconsistent);
    assert_eq!(
        first.geo.reason,
        "First-time login, location baseline established."
    );

    let second = engine
        .assess(login("traveler@example.com", sample(40, 0, 1, 10.0)))
        .await
        .unwrap();
    assert!(second.geo.is_inconsistent);
    assert!(second.assessment.is_suspicious);
    assert!(second
        .assessment
        .explanation
        .contains("significant geographic jump of approximately"));
}

#[tokio::test]
async fn test_activity_log_records_every_attempt_newest_first() {
    let engine = engine_with(
        0.1,
        Arc::new(MockResolver::with_point(LocationPoint::new(48.85, 2.35))),
    );

    engine
        .assess(AssessmentRequest::new(
            AttemptKind::Signup,
            "a@example.com",
            "203.0.113.7",
            sample(30, 0, 1, 12.0),
        ))
        .await
        .unwrap();
    engine
        .assess(login("b@example.com", sample(45, 0, 0, 9.0)))
        .await
        .unwrap();

    let log = engine.activity_log().await;
    assert_eq!(log.len(), 2);
    assert_eq!(log[0].email, "b@example.com");
    assert_eq!(log[0].kind, AttemptKind::Login);
    assert_eq!(log[1].email, "a@example.com");
    assert_eq!(log[1].kind, AttemptKind::Signup);
    assert_eq!(log[1].ip_address, "203.0.113.7");
}

#[tokio::test]
async fn test_response_carries_activity_id_of_logged_entry() {
    let engine = engine_with(
        0.1,
        Arc::new(MockResolver::with_point(LocationPoint::new(48.85, 2.35))),
    );

    let response = engine
        .assess(login("student@example.com", sample(50, 0, 2, 8.0)))
        .await
        .unwrap();

    let log = engine.activity_log().await;
    assert_eq!(log[0].id, response.activity_id);
    assert_eq!(log[0].explanation, response.assessment.explanation);
    assert_eq!(log[0].ip_consistency, response.geo.reason);
}
