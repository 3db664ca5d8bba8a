//! Environment capability port interface

use crate::domain::error::EnvironmentError;

/// Scheme and hostname the hosting context was served from
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    /// URL scheme without the trailing colon, e.g. "https"
    pub scheme: String,
    pub hostname: String,
}

impl Location {
    pub fn new(scheme: impl Into<String>, hostname: impl Into<String>) -> Self {
        Self {
            scheme: scheme.into(),
            hostname: hostname.into(),
        }
    }

    /// Microphone access requires a secure scheme, except on loopback hosts
    pub fn is_secure_context(&self) -> bool {
        self.scheme == "https"
            || self.hostname.contains("localhost")
            || self.hostname == "127.0.0.1"
    }
}

/// Port for the hosting environment's exposed feature surface.
///
/// Replaces ad hoc checks on loosely-typed globals with boolean capability
/// queries and identity accessors, so tests can simulate missing features
/// or specific vendor/version strings.
pub trait EnvironmentCapabilities: Send + Sync {
    /// Whether a hosting window/document context exists at all. When
    /// false, nothing else can be probed.
    fn has_window(&self) -> bool;

    /// Media-device enumeration capability
    fn has_media_devices(&self) -> bool;

    /// User-media acquisition capability
    fn has_get_user_media(&self) -> bool;

    /// Media-recording capability
    fn has_media_recorder(&self) -> bool;

    /// Audio-processing context capability, primary or vendor-prefixed
    fn has_audio_context(&self) -> bool;

    /// The environment's identity string, if it exposes one
    fn user_agent(&self) -> Option<String>;

    /// The environment's platform string, if it exposes one
    fn platform(&self) -> Option<String>;

    /// Scheme and hostname the context was served from, if exposed
    fn location(&self) -> Option<Location>;

    /// Whether the recorder claims to support a MIME type. The query
    /// itself may fail; callers degrade rather than propagate.
    fn supports_media_type(&self, mime_type: &str) -> Result<bool, EnvironmentError>;
}
