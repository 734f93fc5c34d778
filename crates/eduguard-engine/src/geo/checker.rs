//! Moving-baseline IP consistency checker
//!
//! Every check overwrites the stored baseline with the current point,
//! regardless of outcome. Only a sudden single jump is therefore
//! detected; repeated small steps away are never caught. This trades
//! detection of slow drift for tolerance of legitimate travel and must
//! be preserved for behavioral equivalence.

use crate::error::Result;
use crate::geo::resolver::GeoResolver;
use crate::geo::store::LocationStore;
use eduguard_core::{GeoOutcome, LocationPoint, DISTANCE_THRESHOLD_KM};
use std::sync::Arc;
use tracing::{debug, warn};

/// Earth radius used by the Haversine distance, in km.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Public test IP substituted for loopback addresses before lookup.
/// Development-time shim: local requests arrive as `::1`/`127.0.0.1`,
/// which no geolocation service can place.
const LOOPBACK_REMAP_IP: &str = "8.8.8.8";

/// Great-circle distance between two points, in km.
pub fn haversine_km(a: &LocationPoint, b: &LocationPoint) -> f64 {
    let lat1 = a.latitude.to_radians();
    let lat2 = b.latitude.to_radians();
    let d_lat = (b.latitude - a.latitude).to_radians();
    let d_lon = (b.longitude - a.longitude).to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_KM * c
}

/// IP-geolocation consistency checker.
pub struct ConsistencyChecker {
    resolver: Arc<dyn GeoResolver>,
    store: Arc<dyn LocationStore>,
    threshold_km: f64,
}

impl ConsistencyChecker {
    pub fn new(resolver: Arc<dyn GeoResolver>, store: Arc<dyn LocationStore>) -> Self {
        Self {
            resolver,
            store,
            threshold_km: DISTANCE_THRESHOLD_KM,
        }
    }

    /// Override the distance threshold (km).
    pub fn with_threshold_km(mut self, threshold_km: f64) -> Self {
        self.threshold_km = threshold_km;
        self
    }

    fn normalize_ip(ip: &str) -> &str {
        if ip == "::1" || ip == "127.0.0.1" {
            LOOPBACK_REMAP_IP
        } else {
            ip
        }
    }

    /// Check whether `ip` is consistent with the user's last known
    /// location, then move the baseline to the current point.
    ///
    /// Lookup failure is fail-closed: it yields an inconsistent outcome
    /// (and leaves the baseline untouched) rather than an error.
    pub async fn check(&self, user_email: &str, ip: &str) -> GeoOutcome {
        let ip = Self::normalize_ip(ip);

        let current = match self.resolve(ip).await {
            Ok(Some(point)) => point,
            Ok(None) => {
                warn!(ip, "no location found for IP");
                return GeoOutcome::inconsistent("Unable to verify IP location.");
            }
            Err(e) => {
                warn!(ip, error = %e, "geolocation lookup failed");
                return GeoOutcome::inconsistent("Unable to verify IP location.");
            }
        };

        // Atomically fetch the previous baseline and install the new one.
        let previous = self.store.swap(user_email, current).await;

        let Some(previous) = previous else {
            // Cold start is explicitly treated as trustworthy.
            debug!(user_email, "location baseline established");
            return GeoOutcome::consistent("First-time login, location baseline established.");
        };

        let distance = haversine_km(&current, &previous);
        debug!(user_email, distance_km = distance, "distance from last known location");

        if distance > self.threshold_km {
            GeoOutcome::inconsistent(format!(
                "Inconsistent Location: New login is {:.0} km away from the last known location.",
                distance
            ))
        } else {
            GeoOutcome::consistent(format!(
                "Consistent Location (within {:.0} km)",
                self.threshold_km
            ))
        }
    }

    async fn resolve(&self, ip: &str) -> Result<Option<LocationPoint>> {
        self.resolver.resolve(ip).await
    }
}
