//! EduGuard HTTP Server
//!
//! Provides the REST API for signup/login risk scoring, officer
//! overrides, and log retrieval.

use anyhow::Result;
use eduguard_server::{api, config::ServerConfig, engine};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    init_tracing()?;

    // Load configuration
    let config = ServerConfig::load()?;
    info!("Loaded configuration: {:?}", config);

    // Initialize the risk engine; refuses to start on a missing or
    // corrupt classifier artifact
    let engine = engine::init_engine(&config)?;
    info!("Risk engine initialized");

    // Create router
    let app = api::create_router(Arc::new(engine));

    // Start server
    let addr = format!("{}:{}", config.host, config.port);
    info!("Starting server on {}", addr);

    let listener = TcpListener::bind(&addr).await?;
    info!("✓ Server listening on http://{}", addr);
    info!("  Health check: http://{}/health", addr);
    info!("  Signup: POST http://{}/v1/auth/signup", addr);
    info!("  Login: POST http://{}/v1/auth/login", addr);
    info!("  Override: POST http://{}/v1/activity/override", addr);
    info!("  Logs: GET http://{}/v1/activity-log", addr);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<std::net::SocketAddr>(),
    )
    .await?;

    Ok(())
}

/// Initialize tracing subscriber
fn init_tracing() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "eduguard_server=info,eduguard_sdk=info,eduguard_engine=info,tower_http=debug"
                    .into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize tracing: {}", e))?;

    Ok(())
}
