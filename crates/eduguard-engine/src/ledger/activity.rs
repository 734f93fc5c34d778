//! Activity log store
//!
//! Newest-first, append-only. Entries are never deleted; the only
//! mutation is the status transition applied by an officer override.

use async_trait::async_trait;
use eduguard_core::{ActivityEntry, ActivityStatus};
use tokio::sync::RwLock;

/// Store for signup/login attempt records.
#[async_trait]
pub trait ActivityLog: Send + Sync {
    /// Prepend an entry (the log reads newest-first).
    async fn append(&self, entry: ActivityEntry);

    /// Look up an entry by id.
    async fn find(&self, id: &str) -> Option<ActivityEntry>;

    /// Update the status of an entry in place, returning the updated
    /// entry; `None` when the id is unknown (no mutation).
    async fn set_status(&self, id: &str, status: ActivityStatus) -> Option<ActivityEntry>;

    /// Full snapshot, newest-first.
    async fn snapshot(&self) -> Vec<ActivityEntry>;
}

/// In-memory activity log.
pub struct MemoryActivityLog {
    entries: RwLock<Vec<ActivityEntry>>,
}

impl MemoryActivityLog {
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(Vec::new()),
        }
    }
}

impl Default for MemoryActivityLog {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ActivityLog for MemoryActivityLog {
    async fn append(&self, entry: ActivityEntry) {
        let mut entries = self.entries.write().await;
        entries.insert(0, entry);
    }

    async fn find(&self, id: &str) -> Option<ActivityEntry> {
        let entries = self.entries.read().await;
        entries.iter().find(|e| e.id == id).cloned()
    }

    async fn set_status(&self, id: &str, status: ActivityStatus) -> Option<ActivityEntry> {
        let mut entries = self.entries.write().await;
        let entry = entries.iter_mut().find(|e| e.id == id)?;
        entry.status = status;
        Some(entry.clone())
    }

    async fn snapshot(&self) -> Vec<ActivityEntry> {
        let entries = self.entries.read().await;
        entries.clone()
    }
}
