//! Audit log store
//!
//! Newest-first, append-only, immutable once written. One entry per
//! override call, duplicates included: the override operation is
//! deliberately not idempotent.

use async_trait::async_trait;
use eduguard_core::AuditEntry;
use tokio::sync::RwLock;

/// Store for officer override records.
#[async_trait]
pub trait AuditLog: Send + Sync {
    /// Prepend an entry (the log reads newest-first).
    async fn append(&self, entry: AuditEntry);

    /// Full snapshot, newest-first.
    async fn snapshot(&self) -> Vec<AuditEntry>;
}

/// In-memory audit log.
pub struct MemoryAuditLog {
    entries: RwLock<Vec<AuditEntry>>,
}

impl MemoryAuditLog {
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(Vec::new()),
        }
    }
}

impl Default for MemoryAuditLog {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AuditLog for MemoryAuditLog {
    async fn append(&self, entry: AuditEntry) {
        let mut entries = self.entries.write().await;
        entries.insert(0, entry);
    }

    async fn snapshot(&self) -> Vec<AuditEntry> {
        let entries = self.entries.read().await;
        entries.clone()
    }
}
