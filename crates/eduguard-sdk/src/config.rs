//! Engine configuration

use eduguard_engine::geo::GeoResolverConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration for building a `RiskEngine`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Path to the serialized tree ensemble
    pub model_path: PathBuf,

    /// Path to the serialized min-max scaler
    pub scaler_path: PathBuf,

    /// Geolocation resolver settings
    #[serde(default)]
    pub geo: GeoResolverConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            model_path: PathBuf::from("model/fraud_model.json"),
            scaler_path: PathBuf::from("model/scaler.json"),
            geo: GeoResolverConfig::default(),
        }
    }
}
