//! Environment capability probe

use tracing::warn;

use crate::domain::capability::{classify, BrowserInfo, CapabilityReport};
use crate::domain::negotiation::{
    derive_options, select_best_format, RecordingOptions, FORMAT_PREFERENCES,
};
use crate::domain::VoiceConfig;

use super::ports::EnvironmentCapabilities;

/// Probes the hosting environment for the features voice capture needs
/// and negotiates recording parameters against it.
///
/// Every probe and negotiation runs fresh against the injected
/// environment; nothing is cached between calls.
pub struct CapabilityProbe<E: EnvironmentCapabilities> {
    environment: E,
}

impl<E: EnvironmentCapabilities> CapabilityProbe<E> {
    pub fn new(environment: E) -> Self {
        Self { environment }
    }

    /// Access the underlying environment
    pub fn environment(&self) -> &E {
        &self.environment
    }

    /// Derive the browser identity from the environment
    pub fn browser_info(&self) -> BrowserInfo {
        match self.environment.user_agent() {
            Some(user_agent) => {
                BrowserInfo::from_user_agent(&user_agent, self.environment.platform().as_deref())
            }
            None => BrowserInfo::unknown(),
        }
    }

    /// Probe the environment and produce a capability report.
    ///
    /// Each feature check appends to the gap list independently; there is
    /// no short-circuit between checks. The final verdict is the
    /// conjunction of the compatibility-matrix result and an empty gap
    /// list.
    pub fn probe(&self) -> CapabilityReport {
        let browser_info = self.browser_info();

        if !self.environment.has_window() {
            return CapabilityReport::no_host_context(browser_info);
        }

        let mut missing_features = Vec::new();

        if !self.environment.has_media_devices() {
            missing_features.push("MediaDevices API".to_string());
        }
        if !self.environment.has_get_user_media() {
            missing_features.push("getUserMedia API".to_string());
        }
        if !self.environment.has_media_recorder() {
            missing_features.push("MediaRecorder API".to_string());
        }
        if !self.environment.has_audio_context() {
            missing_features.push("AudioContext API".to_string());
        }

        // Only check transport security when the environment exposes a
        // location at all
        if let Some(location) = self.environment.location() {
            if !location.is_secure_context() {
                missing_features
                    .push("HTTPS Protocol (required for microphone access)".to_string());
            }
        }

        let verdict = classify(&browser_info);
        if let Some(reason) = verdict.missing_reason {
            missing_features.push(reason);
        }

        CapabilityReport {
            is_supported: verdict.supported && missing_features.is_empty(),
            missing_features,
            browser_info,
        }
    }

    /// Formats from the fixed preference list that the environment's
    /// recorder claims to support. Empty when there is no hosting context
    /// or no recording capability.
    pub fn supported_formats(&self) -> Vec<String> {
        if !self.environment.has_window() || !self.environment.has_media_recorder() {
            return Vec::new();
        }

        FORMAT_PREFERENCES
            .iter()
            .filter(|format| match self.environment.supports_media_type(format) {
                Ok(supported) => supported,
                Err(error) => {
                    warn!(%error, format = **format, "codec probe failed, skipping format");
                    false
                }
            })
            .map(|format| format.to_string())
            .collect()
    }

    /// Negotiate recording options for a capture session.
    ///
    /// Selects the best supported format, then applies the bitrate policy
    /// only when the codec probe confirms support. A failing or negative
    /// probe degrades to the bare format with a warning; negotiation never
    /// fails outright.
    pub fn recording_options(&self, config: &VoiceConfig) -> RecordingOptions {
        let format = select_best_format(&self.supported_formats());

        match self.environment.supports_media_type(&format) {
            Ok(true) => derive_options(&format, config.sample_rate),
            Ok(false) => RecordingOptions::format_only(format),
            Err(error) => {
                warn!(%error, %format, "codec probe failed, omitting bitrate");
                RecordingOptions::format_only(format)
            }
        }
    }
}
