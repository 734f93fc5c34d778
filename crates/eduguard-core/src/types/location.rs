//! Geolocation types

use serde::{Deserialize, Serialize};

/// Distance threshold for the moving-baseline consistency check, in km.
pub const DISTANCE_THRESHOLD_KM: f64 = 20.0;

/// A resolved geographic coordinate pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LocationPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl LocationPoint {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Outcome of one IP-consistency check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoOutcome {
    /// True when the current location is inconsistent with the stored
    /// baseline, or when the lookup could not be verified at all
    pub is_inconsistent: bool,
    /// Human-readable reason, attached verbatim to the activity entry
    pub reason: String,
}

impl GeoOutcome {
    pub fn consistent(reason: impl Into<String>) -> Self {
        Self {
            is_inconsistent: false,
            reason: reason.into(),
        }
    }

    pub fn inconsistent(reason: impl Into<String>) -> Self {
        Self {
            is_inconsistent: true,
            reason: reason.into(),
        }
    }
}
