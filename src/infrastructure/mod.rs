//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces: key-value
//! backends, the snapshot environment, and the HTTP adapters.

pub mod environment;
pub mod kv;
pub mod legacy;
pub mod status;

// Re-export adapters
pub use environment::EnvironmentSnapshot;
pub use kv::{FileKvStore, MemoryKvStore};
pub use legacy::{LegacyAdapter, LegacyReply};
pub use status::HttpStatusProbe;
