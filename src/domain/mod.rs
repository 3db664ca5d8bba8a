//! Domain layer - Core decision logic
//!
//! Contains value objects, the compatibility matrix, negotiation rules and
//! domain errors. This layer has no dependencies on external systems.

pub mod capability;
pub mod config;
pub mod error;
pub mod negotiation;

// Re-export common types
pub use capability::{BrowserInfo, CapabilityReport, CompatibilityVerdict};
pub use config::{ConfigStatus, VoiceConfig, VoiceConfigPatch};
pub use error::*;
pub use negotiation::{FormatFamily, RecordingOptions};
