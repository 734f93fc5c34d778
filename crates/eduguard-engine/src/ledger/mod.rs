//! Activity and audit ledgers
//!
//! Interface-bound stores so ordering and append-only guarantees are
//! testable in isolation; the in-memory implementations serve a
//! single-process deployment and tests.

pub mod activity;
pub mod audit;

pub use activity::{ActivityLog, MemoryActivityLog};
pub use audit::{AuditLog, MemoryAuditLog};
