//! Server configuration

use eduguard_engine::geo::GeoResolverConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

fn default_model_path() -> PathBuf {
    PathBuf::from("model/fraud_model.json")
}

fn default_scaler_path() -> PathBuf {
    PathBuf::from("model/scaler.json")
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Server host
    pub host: String,

    /// Server port (HTTP)
    pub port: u16,

    /// Path to the serialized classifier ensemble
    #[serde(default = "default_model_path")]
    pub model_path: PathBuf,

    /// Path to the serialized feature scaler
    #[serde(default = "default_scaler_path")]
    pub scaler_path: PathBuf,

    /// Geolocation resolver settings
    #[serde(default)]
    pub geo: GeoResolverConfig,

    /// Log level
    pub log_level: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            model_path: default_model_path(),
            scaler_path: default_scaler_path(),
            geo: GeoResolverConfig::default(),
            log_level: "info".to_string(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables and config file
    pub fn load() -> anyhow::Result<Self> {
        // Load .env file if exists
        dotenvy::dotenv().ok();

        // Try to read from config file
        let config_result = config::Config::builder()
            .add_source(config::File::with_name("config/server").required(false))
            .add_source(config::Environment::with_prefix("EDUGUARD").separator("__"))
            .build();

        match config_result {
            Ok(cfg) => cfg
                .try_deserialize()
                .map_err(|e| anyhow::anyhow!("Failed to deserialize config: {}", e)),
            Err(_) => {
                // Use default config if no config file found
                tracing::info!("No config file found, using default configuration");
                Ok(Self::default())
            }
        }
    }
}
