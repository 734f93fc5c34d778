//! EduGuard Core - Core types for the EduGuard fraud-risk pipeline
//!
//! This crate provides the fundamental types shared across the EduGuard
//! workspace:
//! - Behavioral telemetry and derived feature types
//! - Geolocation types
//! - Risk assessment results
//! - Activity and audit ledger entries

pub mod types;

// Re-export commonly used types
pub use types::activity::{ActivityEntry, ActivityStatus, AttemptKind, AuditEntry};
pub use types::assessment::{RiskAssessment, L2_ESCALATION_THRESHOLD, SUSPICION_THRESHOLD};
pub use types::behavior::{BehavioralFeatures, BehavioralSample};
pub use types::location::{GeoOutcome, LocationPoint, DISTANCE_THRESHOLD_KM};
