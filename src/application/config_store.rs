//! Configuration persistence service

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::domain::config::{validate, VoiceConfig, VoiceConfigPatch, MASKED_API_KEY};
use crate::domain::error::{ConfigError, ImportError};

use super::ports::KvStore;

/// Key under which the configuration fragment is persisted
pub const STORAGE_KEY: &str = "voice-config";

/// Exported configuration document: the config with a masked key plus an
/// export timestamp
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ExportDocument {
    #[serde(flatten)]
    config: VoiceConfig,
    /// ISO-8601 timestamp of the export
    exported_at: String,
}

/// Owns load/save/reset/export/import of the voice configuration over an
/// injected key-value backend.
///
/// Read, parse and write failures on the backend are recovered locally by
/// falling back to defaults (or dropping the write) and logging a warning;
/// they are never surfaced to the caller. Import failures are surfaced.
pub struct ConfigStore<S: KvStore> {
    store: S,
}

impl<S: KvStore> ConfigStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Load the persisted configuration merged over defaults.
    ///
    /// A missing fragment, a failed read or an unparseable document all
    /// fall back to defaults.
    pub fn load(&self) -> VoiceConfig {
        let raw = match self.store.get(STORAGE_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return VoiceConfig::defaults(),
            Err(error) => {
                warn!(%error, "failed to read voice config, using defaults");
                return VoiceConfig::defaults();
            }
        };

        match serde_json::from_str::<VoiceConfigPatch>(&raw) {
            Ok(patch) => VoiceConfig::defaults().apply(patch),
            Err(error) => {
                warn!(%error, "failed to parse stored voice config, using defaults");
                VoiceConfig::defaults()
            }
        }
    }

    /// Merge a fragment over the currently loaded config and persist the
    /// result. Write failures are logged and absorbed.
    pub fn save(&self, patch: VoiceConfigPatch) {
        let merged = self.load().apply(patch);

        let raw = match serde_json::to_string(&merged) {
            Ok(raw) => raw,
            Err(error) => {
                warn!(%error, "failed to serialize voice config, dropping save");
                return;
            }
        };

        if let Err(error) = self.store.set(STORAGE_KEY, &raw) {
            warn!(%error, "failed to persist voice config");
        }
    }

    /// Delete the persisted fragment so subsequent loads revert to
    /// defaults. Delete failures are logged and absorbed.
    pub fn reset(&self) {
        if let Err(error) = self.store.delete(STORAGE_KEY) {
            warn!(%error, "failed to reset voice config");
        }
    }

    /// Serialize a config for sharing: pretty JSON with the API key
    /// replaced by a fixed mask and an export timestamp added.
    pub fn export(&self, config: &VoiceConfig) -> Result<String, ConfigError> {
        let masked = VoiceConfig {
            api_key: if config.api_key.is_empty() {
                String::new()
            } else {
                MASKED_API_KEY.to_string()
            },
            ..config.clone()
        };

        let document = ExportDocument {
            config: masked,
            exported_at: Utc::now().to_rfc3339(),
        };

        serde_json::to_string_pretty(&document).map_err(|e| ConfigError::Serialize(e.to_string()))
    }

    /// Parse and validate an exported document, merging its fields over
    /// defaults. All validation violations are reported together. The
    /// masked key is imported as-is and keeps the config incomplete until
    /// a fresh key is supplied.
    pub fn import(&self, json: &str) -> Result<VoiceConfig, ImportError> {
        let patch: VoiceConfigPatch =
            serde_json::from_str(json).map_err(|e| ImportError::Malformed(e.to_string()))?;

        let errors = validate(&patch);
        if !errors.is_empty() {
            return Err(ImportError::Validation(errors.join(", ")));
        }

        Ok(VoiceConfig::defaults().apply(patch))
    }

    /// Access the underlying key-value backend
    pub fn backend(&self) -> &S {
        &self.store
    }
}
