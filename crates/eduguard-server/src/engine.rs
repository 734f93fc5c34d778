//! Risk engine initialization
//!
//! Converts server configuration to SDK configuration and builds the
//! engine. A missing or corrupt classifier artifact fails here, before
//! the server binds its listener: a process without a model must not
//! serve risk-scoring requests.

use crate::config::ServerConfig;
use anyhow::Result;
use eduguard_sdk::{EngineConfig, RiskEngine, RiskEngineBuilder};
use tracing::info;

/// Initialize the risk engine from server configuration.
pub fn init_engine(config: &ServerConfig) -> Result<RiskEngine> {
    let engine_config = EngineConfig {
        model_path: config.model_path.clone(),
        scaler_path: config.scaler_path.clone(),
        geo: config.geo.clone(),
    };

    let engine = RiskEngineBuilder::new()
        .with_config(engine_config)
        .build()?;

    info!(
        model = %config.model_path.display(),
        scaler = %config.scaler_path.display(),
        "risk engine initialized"
    );
    Ok(engine)
}
