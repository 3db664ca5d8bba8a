//! Port interfaces (traits) for external systems
//!
//! These traits define the boundaries between the application
//! and infrastructure layers.

pub mod environment;
pub mod kv_store;
pub mod status;

// Re-export common types
pub use environment::{EnvironmentCapabilities, Location};
pub use kv_store::KvStore;
pub use status::{ServiceStatus, StatusProbe};
