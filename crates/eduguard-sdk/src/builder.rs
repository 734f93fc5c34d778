//! Builder pattern for RiskEngine

use crate::config::EngineConfig;
use crate::error::Result;
use crate::risk_engine::RiskEngine;
use eduguard_engine::geo::{ConsistencyChecker, GeoResolver, IpinfoResolver, MemoryLocationStore};
use eduguard_engine::ledger::{ActivityLog, AuditLog, MemoryActivityLog, MemoryAuditLog};
use eduguard_engine::model::{Classifier, ForestClassifier};
use std::sync::Arc;

/// Builder for `RiskEngine`.
///
/// # Example
///
/// ```rust,ignore
/// use eduguard_sdk::{EngineConfig, RiskEngineBuilder};
///
/// // Production: artifacts from disk, live resolver
/// let engine = RiskEngineBuilder::new()
///     .with_config(EngineConfig::default())
///     .build()?;
///
/// // Tests: stub classifier and mock resolver, no artifacts needed
/// let engine = RiskEngineBuilder::new()
///     .with_classifier(Box::new(StubClassifier::new(0.9)))
///     .with_resolver(Arc::new(MockResolver::with_point(point)))
///     .build()?;
/// ```
pub struct RiskEngineBuilder {
    config: EngineConfig,
    classifier: Option<Box<dyn Classifier>>,
    resolver: Option<Arc<dyn GeoResolver>>,
    activity_log: Option<Arc<dyn ActivityLog>>,
    audit_log: Option<Arc<dyn AuditLog>>,
    distance_threshold_km: Option<f64>,
}

impl RiskEngineBuilder {
    /// Create a new builder with default configuration.
    pub fn new() -> Self {
        Self {
            config: EngineConfig::default(),
            classifier: None,
            resolver: None,
            activity_log: None,
            audit_log: None,
            distance_threshold_km: None,
        }
    }

    /// Set the full engine configuration.
    pub fn with_config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    /// Use a preloaded classifier instead of loading artifacts from the
    /// configured paths.
    pub fn with_classifier(mut self, classifier: Box<dyn Classifier>) -> Self {
        self.classifier = Some(classifier);
        self
    }

    /// Use a custom geolocation resolver (mock in tests, alternative
    /// provider in production).
    pub fn with_resolver(mut self, resolver: Arc<dyn GeoResolver>) -> Self {
        self.resolver = Some(resolver);
        self
    }

    /// Use a custom activity log store.
    pub fn with_activity_log(mut self, log: Arc<dyn ActivityLog>) -> Self {
        self.activity_log = Some(log);
        self
    }

    /// Use a custom audit log store.
    pub fn with_audit_log(mut self, log: Arc<dyn AuditLog>) -> Self {
        self.audit_log = Some(log);
        self
    }

    /// Override the consistency-check distance threshold (km).
    pub fn with_distance_threshold_km(mut self, threshold_km: f64) -> Self {
        self.distance_threshold_km = Some(threshold_km);
        self
    }

    /// Build the engine.
    ///
    /// Loads the classifier artifacts unless one was supplied directly;
    /// a missing or corrupt artifact is a fatal configuration error.
    pub fn build(self) -> Result<RiskEngine> {
        let classifier = match self.classifier {
            Some(classifier) => classifier,
            None => Box::new(ForestClassifier::load(
                &self.config.model_path,
                &self.config.scaler_path,
            )?),
        };

        let resolver = match self.resolver {
            Some(resolver) => resolver,
            None => Arc::new(IpinfoResolver::new(self.config.geo.clone())?),
        };

        let mut checker = ConsistencyChecker::new(resolver, Arc::new(MemoryLocationStore::new()));
        if let Some(threshold) = self.distance_threshold_km {
            checker = checker.with_threshold_km(threshold);
        }

        let activity_log = self
            .activity_log
            .unwrap_or_else(|| Arc::new(MemoryActivityLog::new()));
        let audit_log = self
            .audit_log
            .unwrap_or_else(|| Arc::new(MemoryAuditLog::new()));

        Ok(RiskEngine::from_parts(
            checker,
            classifier,
            activity_log,
            audit_log,
        ))
    }
}

impl Default for RiskEngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eduguard_engine::geo::MockResolver;
    use eduguard_engine::model::StubClassifier;
    use eduguard_core::LocationPoint;

    #[test]
    fn test_build_with_stub_parts() {
        let engine = RiskEngineBuilder::new()
            .with_classifier(Box::new(StubClassifier::new(0.5)))
            .with_resolver(Arc::new(MockResolver::with_point(LocationPoint::new(
                1.0, 2.0,
            ))))
            .build();
        assert!(engine.is_ok());
    }

    #[test]
    fn test_build_fails_without_artifacts() {
        let config = EngineConfig {
            model_path: "/nonexistent/model.json".into(),
            scaler_path: "/nonexistent/scaler.json".into(),
            geo: Default::default(),
        };

        let result = RiskEngineBuilder::new().with_config(config).build();
        assert!(result.is_err());
    }
}
