//! Per-user location baseline store
//!
//! Keyed by user email. The single `swap` operation reads the previous
//! baseline and overwrites it in one step, so the moving-baseline
//! read-then-write can never race under concurrent handlers.

use async_trait::async_trait;
use eduguard_core::LocationPoint;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// Store for each user's last known location.
#[async_trait]
pub trait LocationStore: Send + Sync {
    /// Replace the stored baseline for `user` with `point`, returning
    /// the previous baseline if one existed. Atomic.
    async fn swap(&self, user: &str, point: LocationPoint) -> Option<LocationPoint>;

    /// Current baseline for `user`, if any.
    async fn get(&self, user: &str) -> Option<LocationPoint>;
}

/// In-memory location store.
///
/// Suitable for a single-process deployment; baselines are lost on
/// restart and never expire.
pub struct MemoryLocationStore {
    history: RwLock<HashMap<String, LocationPoint>>,
}

impl MemoryLocationStore {
    pub fn new() -> Self {
        Self {
            history: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for MemoryLocationStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LocationStore for MemoryLocationStore {
    async fn swap(&self, user: &str, point: LocationPoint) -> Option<LocationPoint> {
        let mut history = self.history.write().await;
        history.insert(user.to_string(), point)
    }

    async fn get(&self, user: &str) -> Option<LocationPoint> {
        let history = self.history.read().await;
        history.get(user).copied()
    }
}
