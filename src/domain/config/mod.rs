//! Voice configuration: value objects, validation, status

pub mod validate;
pub mod voice_config;

pub use validate::{config_status, validate, validate_config, ConfigStatus, STANDARD_SAMPLE_RATES};
pub use voice_config::{
    VoiceConfig, VoiceConfigPatch, DEFAULT_API_URL, DEFAULT_LANGUAGE, DEFAULT_MAX_DURATION_SECS,
    DEFAULT_SAMPLE_RATE_HZ, ENV_API_KEY, ENV_API_URL, MASKED_API_KEY, PLACEHOLDER_API_KEY,
};
