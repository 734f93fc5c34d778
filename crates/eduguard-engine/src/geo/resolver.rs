//! IP-to-location resolvers
//!
//! `GeoResolver` abstracts the external geolocation service so the
//! consistency checker can be tested without network access.

use crate::error::{EngineError, Result};
use async_trait::async_trait;
use eduguard_core::LocationPoint;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Resolves an IP address to geographic coordinates.
///
/// `Ok(None)` means the service answered but had no location for the
/// address; `Err` means the lookup itself failed (network error, bad
/// response). The consistency checker treats both the same way.
#[async_trait]
pub trait GeoResolver: Send + Sync {
    async fn resolve(&self, ip: &str) -> Result<Option<LocationPoint>>;
}

/// Configuration for the ipinfo.io-backed resolver.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeoResolverConfig {
    /// Base URL of the geolocation service
    pub base_url: String,

    /// API token, appended as a query parameter when set
    #[serde(default)]
    pub token: Option<String>,

    /// Request timeout in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

fn default_timeout_ms() -> u64 {
    10_000
}

impl Default for GeoResolverConfig {
    fn default() -> Self {
        Self {
            base_url: "https://ipinfo.io".to_string(),
            token: None,
            timeout_ms: default_timeout_ms(),
        }
    }
}

/// Response body from ipinfo.io; only the `loc` field matters here.
#[derive(Debug, Deserialize)]
struct IpinfoResponse {
    #[serde(default)]
    loc: Option<String>,
}

/// Resolver backed by the ipinfo.io lookup service.
pub struct IpinfoResolver {
    config: GeoResolverConfig,
    client: reqwest::Client,
}

impl IpinfoResolver {
    /// Create a resolver from configuration.
    pub fn new(config: GeoResolverConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| EngineError::GeoLookup(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    /// Parse the `loc` field ("lat,lon") into a point.
    fn parse_loc(loc: &str) -> Option<LocationPoint> {
        let (lat, lon) = loc.split_once(',')?;
        let latitude = lat.trim().parse::<f64>().ok()?;
        let longitude = lon.trim().parse::<f64>().ok()?;
        Some(LocationPoint::new(latitude, longitude))
    }
}

#[async_trait]
impl GeoResolver for IpinfoResolver {
    async fn resolve(&self, ip: &str) -> Result<Option<LocationPoint>> {
        let mut url = format!("{}/{}/json", self.config.base_url, ip);
        if let Some(token) = &self.config.token {
            url = format!("{}?token={}", url, token);
        }

        debug!(ip, "resolving IP location");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| EngineError::GeoLookup(format!("HTTP request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(EngineError::GeoLookup(format!(
                "Lookup failed with status: {}",
                response.status()
            )));
        }

        let body: IpinfoResponse = response
            .json()
            .await
            .map_err(|e| EngineError::GeoLookup(format!("Failed to parse response: {}", e)))?;

        match body.loc.as_deref().and_then(Self::parse_loc) {
            Some(point) => Ok(Some(point)),
            None => {
                warn!(ip, "no location in lookup response");
                Ok(None)
            }
        }
    }
}

/// Mock resolver for testing.
///
/// Returns a fixed point, no location, or a lookup error, and records
/// the IPs it was asked to resolve.
pub struct MockResolver {
    response: Result<Option<LocationPoint>>,
    resolved: tokio::sync::Mutex<Vec<String>>,
}

impl MockResolver {
    /// Always resolve to the given point.
    pub fn with_point(point: LocationPoint) -> Self {
        Self {
            response: Ok(Some(point)),
            resolved: tokio::sync::Mutex::new(Vec::new()),
        }
    }

    /// Answer successfully but without a location.
    pub fn with_no_location() -> Self {
        Self {
            response: Ok(None),
            resolved: tokio::sync::Mutex::new(Vec::new()),
        }
    }

    /// Fail every lookup.
    pub fn with_failure(message: impl Into<String>) -> Self {
        Self {
            response: Err(EngineError::GeoLookup(message.into())),
            resolved: tokio::sync::Mutex::new(Vec::new()),
        }
    }

    /// IPs this resolver has been asked about, in order.
    pub async fn resolved_ips(&self) -> Vec<String> {
        self.resolved.lock().await.clone()
    }
}

#[async_trait]
impl GeoResolver for MockResolver {
    async fn resolve(&self, ip: &str) -> Result<Option<LocationPoint>> {
        self.resolved.lock().await.push(ip.to_string());
        match &self.response {
            Ok(point) => Ok(*point),
            Err(e) => Err(EngineError::GeoLookup(e.to_string())),
        }
    }
}
