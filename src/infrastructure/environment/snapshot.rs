//! Snapshot-based environment adapter

use crate::application::ports::{EnvironmentCapabilities, Location};
use crate::domain::error::EnvironmentError;

/// `EnvironmentCapabilities` backed by a point-in-time snapshot of the
/// hosting environment's feature surface.
///
/// Hosts embedding the library build one from whatever they can observe
/// (a browser shim, forwarded client hints, a desktop runtime); tests
/// build one simulating missing features or specific vendor strings.
#[derive(Debug, Clone)]
pub struct EnvironmentSnapshot {
    has_window: bool,
    has_media_devices: bool,
    has_get_user_media: bool,
    has_media_recorder: bool,
    has_audio_context: bool,
    user_agent: Option<String>,
    platform: Option<String>,
    location: Option<Location>,
    supported_media_types: Vec<String>,
    media_type_probe_fails: bool,
}

impl EnvironmentSnapshot {
    /// Snapshot of a fully capable environment serving over HTTPS, with
    /// every preference-list format supported
    pub fn modern(user_agent: &str) -> Self {
        Self {
            has_window: true,
            has_media_devices: true,
            has_get_user_media: true,
            has_media_recorder: true,
            has_audio_context: true,
            user_agent: Some(user_agent.to_string()),
            platform: None,
            location: Some(Location::new("https", "app.example.com")),
            supported_media_types: crate::domain::negotiation::FORMAT_PREFERENCES
                .iter()
                .map(|f| f.to_string())
                .collect(),
            media_type_probe_fails: false,
        }
    }

    /// Snapshot of an environment with no hosting window/document context
    pub fn headless() -> Self {
        Self {
            has_window: false,
            has_media_devices: false,
            has_get_user_media: false,
            has_media_recorder: false,
            has_audio_context: false,
            user_agent: None,
            platform: None,
            location: None,
            supported_media_types: Vec::new(),
            media_type_probe_fails: false,
        }
    }

    pub fn with_platform(mut self, platform: &str) -> Self {
        self.platform = Some(platform.to_string());
        self
    }

    pub fn with_location(mut self, scheme: &str, hostname: &str) -> Self {
        self.location = Some(Location::new(scheme, hostname));
        self
    }

    pub fn without_location(mut self) -> Self {
        self.location = None;
        self
    }

    pub fn without_media_devices(mut self) -> Self {
        self.has_media_devices = false;
        self
    }

    pub fn without_get_user_media(mut self) -> Self {
        self.has_get_user_media = false;
        self
    }

    pub fn without_media_recorder(mut self) -> Self {
        self.has_media_recorder = false;
        self
    }

    pub fn without_audio_context(mut self) -> Self {
        self.has_audio_context = false;
        self
    }

    pub fn with_supported_media_types<S: AsRef<str>>(mut self, types: &[S]) -> Self {
        self.supported_media_types = types.iter().map(|t| t.as_ref().to_string()).collect();
        self
    }

    /// Make every codec support query fail, simulating a recorder whose
    /// type probe throws
    pub fn with_failing_media_type_probe(mut self) -> Self {
        self.media_type_probe_fails = true;
        self
    }
}

impl EnvironmentCapabilities for EnvironmentSnapshot {
    fn has_window(&self) -> bool {
        self.has_window
    }

    fn has_media_devices(&self) -> bool {
        self.has_media_devices
    }

    fn has_get_user_media(&self) -> bool {
        self.has_get_user_media
    }

    fn has_media_recorder(&self) -> bool {
        self.has_media_recorder
    }

    fn has_audio_context(&self) -> bool {
        self.has_audio_context
    }

    fn user_agent(&self) -> Option<String> {
        self.user_agent.clone()
    }

    fn platform(&self) -> Option<String> {
        self.platform.clone()
    }

    fn location(&self) -> Option<Location> {
        self.location.clone()
    }

    fn supports_media_type(&self, mime_type: &str) -> Result<bool, EnvironmentError> {
        if self.media_type_probe_fails {
            return Err(EnvironmentError {
                message: "media type probe unavailable".to_string(),
            });
        }
        Ok(self.supported_media_types.iter().any(|t| t == mime_type))
    }
}
