//! Type definitions for the EduGuard pipeline
//!
//! This module contains:
//! - Behavioral telemetry types
//! - Geolocation types
//! - Risk assessment types
//! - Ledger entry types

pub mod activity;
pub mod assessment;
pub mod behavior;
pub mod location;

pub use activity::{ActivityEntry, ActivityStatus, AttemptKind, AuditEntry};
pub use assessment::RiskAssessment;
pub use behavior::{BehavioralFeatures, BehavioralSample};
pub use location::{GeoOutcome, LocationPoint};
