//! EduGuard Engine - runtime components for the fraud-risk pipeline
//!
//! This crate provides the individual pipeline stages:
//! - Behavioral feature extraction from raw telemetry
//! - IP-geolocation consistency checking against a moving baseline
//! - The pre-trained ensemble classifier adapter
//! - The rule-based explanation generator
//! - The activity/audit ledgers

pub mod behavior;
pub mod error;
pub mod explain;
pub mod geo;
pub mod ledger;
pub mod model;

pub use error::{EngineError, Result};
pub use geo::{ConsistencyChecker, GeoResolver, IpinfoResolver, LocationStore, MockResolver};
pub use ledger::{ActivityLog, AuditLog, MemoryActivityLog, MemoryAuditLog};
pub use model::{Classifier, ForestClassifier, StubClassifier};
