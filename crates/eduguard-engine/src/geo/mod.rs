//! IP-geolocation consistency checking
//!
//! Resolves a source IP to coordinates, compares against the user's last
//! known location, and maintains the moving baseline.

pub mod checker;
pub mod resolver;
pub mod store;

pub use checker::ConsistencyChecker;
pub use resolver::{GeoResolver, GeoResolverConfig, IpinfoResolver, MockResolver};
pub use store::{LocationStore, MemoryLocationStore};
