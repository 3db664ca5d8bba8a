//! Application layer - Services and port interfaces
//!
//! Contains the capability probe and configuration store built on the
//! port traits, independent of any concrete backend.

pub mod config_store;
pub mod ports;
pub mod probe;

// Re-export services
pub use config_store::{ConfigStore, STORAGE_KEY};
pub use probe::CapabilityProbe;
