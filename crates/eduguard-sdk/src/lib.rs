//! EduGuard SDK - high-level API for the fraud-risk pipeline
//!
//! Composes the engine's stages (feature extraction, IP-consistency
//! check, classifier, explanation generator, ledgers) into a single
//! `RiskEngine` with three operations: assess an attempt, apply an
//! officer override, and read back the logs.

pub mod builder;
pub mod config;
pub mod error;
pub mod risk_engine;

pub use builder::RiskEngineBuilder;
pub use config::EngineConfig;
pub use error::{Result, SdkError};
pub use risk_engine::{AssessmentRequest, AssessmentResponse, OverrideRequest, RiskEngine};
