//! Voice capture configuration value object

use serde::{Deserialize, Serialize};

/// Placeholder API key shipped in the defaults. A config carrying this
/// value is never considered complete.
pub const PLACEHOLDER_API_KEY: &str = "sk-xx";

/// Mask substituted for the API key in exported documents. Like the
/// placeholder, it never counts as a real secret.
pub const MASKED_API_KEY: &str = "***";

/// Default transcription endpoint when no environment override is set
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:38082/v1/audio/transcriptions";

/// Default maximum recording duration in seconds
pub const DEFAULT_MAX_DURATION_SECS: u32 = 60;

/// Default capture sample rate in Hz
pub const DEFAULT_SAMPLE_RATE_HZ: u32 = 16_000;

/// Default transcription language
pub const DEFAULT_LANGUAGE: &str = "zh-CN";

/// Environment variable overriding the transcription endpoint
pub const ENV_API_URL: &str = "VOICEGATE_API_URL";

/// Environment variable overriding the API key
pub const ENV_API_KEY: &str = "VOICEGATE_API_KEY";

/// Complete voice capture configuration.
///
/// Fields are only meaningful after validation passes; a config may be
/// syntactically complete yet still be gated off by `enabled`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoiceConfig {
    pub api_url: String,
    pub api_key: String,
    /// Maximum recording duration in seconds (1-300)
    pub max_duration: u32,
    /// Capture sample rate in Hz
    pub sample_rate: u32,
    /// Locale code, e.g. "en" or "zh-CN"
    pub language: String,
    pub enabled: bool,
}

/// Partial configuration fragment.
///
/// All fields are optional to support merging, persistence of sparse
/// fragments, and import of documents that omit fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoiceConfigPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_duration: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sample_rate: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
}

impl VoiceConfig {
    /// Create config with default values. Environment overrides for the
    /// endpoint and key take precedence over the built-in placeholders.
    pub fn defaults() -> Self {
        let env = VoiceConfigPatch::from_env();
        Self {
            api_url: env.api_url.unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            api_key: env
                .api_key
                .unwrap_or_else(|| PLACEHOLDER_API_KEY.to_string()),
            max_duration: DEFAULT_MAX_DURATION_SECS,
            sample_rate: DEFAULT_SAMPLE_RATE_HZ,
            language: DEFAULT_LANGUAGE.to_string(),
            enabled: true,
        }
    }

    /// Apply a patch over this config, where patch fields take precedence.
    /// A single shallow, field-by-field merge; the config is never
    /// partially mutated in place.
    pub fn apply(self, patch: VoiceConfigPatch) -> Self {
        Self {
            api_url: patch.api_url.unwrap_or(self.api_url),
            api_key: patch.api_key.unwrap_or(self.api_key),
            max_duration: patch.max_duration.unwrap_or(self.max_duration),
            sample_rate: patch.sample_rate.unwrap_or(self.sample_rate),
            language: patch.language.unwrap_or(self.language),
            enabled: patch.enabled.unwrap_or(self.enabled),
        }
    }

    /// A config is complete iff every required field is present and the
    /// API key is a real secret rather than the shipped placeholder or
    /// the export mask.
    pub fn is_complete(&self) -> bool {
        !self.api_url.is_empty()
            && !self.api_key.is_empty()
            && self.api_key != PLACEHOLDER_API_KEY
            && self.api_key != MASKED_API_KEY
            && self.max_duration > 0
            && self.sample_rate > 0
            && !self.language.is_empty()
    }

    /// A config is active iff it is enabled and complete
    pub fn is_active(&self) -> bool {
        self.enabled && self.is_complete()
    }

    /// Convert into a patch with every field set
    pub fn into_patch(self) -> VoiceConfigPatch {
        VoiceConfigPatch {
            api_url: Some(self.api_url),
            api_key: Some(self.api_key),
            max_duration: Some(self.max_duration),
            sample_rate: Some(self.sample_rate),
            language: Some(self.language),
            enabled: Some(self.enabled),
        }
    }
}

impl VoiceConfigPatch {
    /// Create an empty patch (all None)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Merge this patch with another, where other takes precedence.
    /// Only set fields from other will override this.
    pub fn merge(self, other: Self) -> Self {
        Self {
            api_url: other.api_url.or(self.api_url),
            api_key: other.api_key.or(self.api_key),
            max_duration: other.max_duration.or(self.max_duration),
            sample_rate: other.sample_rate.or(self.sample_rate),
            language: other.language.or(self.language),
            enabled: other.enabled.or(self.enabled),
        }
    }

    /// Read endpoint and key overrides from process environment variables
    pub fn from_env() -> Self {
        Self {
            api_url: std::env::var(ENV_API_URL).ok(),
            api_key: std::env::var(ENV_API_KEY).ok(),
            ..Self::default()
        }
    }
}
