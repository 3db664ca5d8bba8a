//! Bitrate policy for negotiated formats

use serde::{Deserialize, Serialize};

use crate::domain::negotiation::FormatFamily;

/// Bitrate cap for opus/webm encodings, bits per second
const OPUS_BITRATE_CAP: u32 = 128_000;

/// Bitrate cap for mp4 encodings, bits per second
const MP4_BITRATE_CAP: u32 = 96_000;

/// Bits per sample budgeted for opus/webm encodings
const OPUS_BITS_PER_SAMPLE: u32 = 8;

/// Bits per sample budgeted for mp4 encodings
const MP4_BITS_PER_SAMPLE: u32 = 6;

/// Parameters handed to the host's recorder for one capture session.
/// Recomputed on every negotiation; never cached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordingOptions {
    pub mime_type: String,
    /// Only set for opus/webm/mp4 families
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio_bits_per_second: Option<u32>,
}

impl RecordingOptions {
    /// Options carrying only the negotiated format, used when bitrate
    /// derivation is skipped or degraded
    pub fn format_only(mime_type: impl Into<String>) -> Self {
        Self {
            mime_type: mime_type.into(),
            audio_bits_per_second: None,
        }
    }
}

/// Derive recording options for a format at a given sample rate.
///
/// Opus/webm encodings get `min(rate * 8, 128000)` bits per second, mp4
/// gets `min(rate * 6, 96000)`; wav/ogg families carry no bitrate. Pure
/// function, safe to call concurrently.
pub fn derive_options(format: &str, sample_rate: u32) -> RecordingOptions {
    // Persisted rates are untrusted; the product must not overflow
    let audio_bits_per_second = match FormatFamily::classify(format) {
        FormatFamily::Opus => {
            Some((sample_rate.saturating_mul(OPUS_BITS_PER_SAMPLE)).min(OPUS_BITRATE_CAP))
        }
        FormatFamily::Mp4 => {
            Some((sample_rate.saturating_mul(MP4_BITS_PER_SAMPLE)).min(MP4_BITRATE_CAP))
        }
        FormatFamily::Other => None,
    };

    RecordingOptions {
        mime_type: format.to_string(),
        audio_bits_per_second,
    }
}
