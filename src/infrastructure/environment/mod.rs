//! Environment adapters

pub mod snapshot;

pub use snapshot::EnvironmentSnapshot;
