//! Configuration field validation

use std::sync::OnceLock;

use regex::Regex;
use url::Url;

use crate::domain::config::{VoiceConfig, VoiceConfigPatch};

/// Sample rates accepted by the transcription service, in Hz
pub const STANDARD_SAMPLE_RATES: [u32; 5] = [8_000, 16_000, 22_050, 44_100, 48_000];

/// Minimum accepted API key length
const MIN_API_KEY_LEN: usize = 3;

/// Recording duration bounds in seconds
const MIN_MAX_DURATION: u32 = 1;
const MAX_MAX_DURATION: u32 = 300;

fn locale_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[a-z]{2}(-[A-Z]{2})?$").expect("valid locale pattern"))
}

/// Validate a configuration fragment against field-level rules.
///
/// Every rule is checked independently and all violations are reported;
/// an absent field is never a violation. An empty result means valid.
pub fn validate(patch: &VoiceConfigPatch) -> Vec<String> {
    let mut errors = Vec::new();

    if let Some(api_url) = &patch.api_url {
        if Url::parse(api_url).is_err() {
            errors.push("API URL is not a valid absolute URL".to_string());
        }
    }

    if let Some(api_key) = &patch.api_key {
        if api_key.len() < MIN_API_KEY_LEN {
            errors.push(format!(
                "API key is too short (minimum {} characters)",
                MIN_API_KEY_LEN
            ));
        }
    }

    if let Some(max_duration) = patch.max_duration {
        if !(MIN_MAX_DURATION..=MAX_MAX_DURATION).contains(&max_duration) {
            errors.push(format!(
                "Recording duration must be between {} and {} seconds",
                MIN_MAX_DURATION, MAX_MAX_DURATION
            ));
        }
    }

    if let Some(sample_rate) = patch.sample_rate {
        if !STANDARD_SAMPLE_RATES.contains(&sample_rate) {
            errors.push(
                "Sample rate must be one of 8000, 16000, 22050, 44100 or 48000 Hz".to_string(),
            );
        }
    }

    if let Some(language) = &patch.language {
        if !locale_pattern().is_match(language) {
            errors.push("Language code is invalid (expected e.g. \"en\" or \"en-US\")".to_string());
        }
    }

    errors
}

/// Validate a full configuration
pub fn validate_config(config: &VoiceConfig) -> Vec<String> {
    validate(&config.clone().into_patch())
}

/// Aggregate status of a configuration: validation, completeness, enablement
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigStatus {
    pub is_complete: bool,
    pub is_enabled: bool,
    pub errors: Vec<String>,
}

/// Derive the aggregate status of a full configuration.
/// `is_enabled` requires both the enabled flag and completeness.
pub fn config_status(config: &VoiceConfig) -> ConfigStatus {
    ConfigStatus {
        is_complete: config.is_complete(),
        is_enabled: config.is_active(),
        errors: validate_config(config),
    }
}
