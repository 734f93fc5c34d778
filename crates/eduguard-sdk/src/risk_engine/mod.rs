//! The composed risk-scoring pipeline

pub mod engine;
pub mod types;

pub use engine::RiskEngine;
pub use types::{AssessmentRequest, AssessmentResponse, OverrideRequest};
