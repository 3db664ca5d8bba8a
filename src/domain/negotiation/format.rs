//! Audio format negotiation

/// Fixed preference order for capture formats. Defines the total
/// negotiation order; earlier entries win.
pub const FORMAT_PREFERENCES: [&str; 6] = [
    "audio/webm;codecs=opus",
    "audio/webm",
    "audio/mp4",
    "audio/wav",
    "audio/ogg;codecs=opus",
    "audio/ogg",
];

/// Fallback when the environment claims to support nothing at all
pub const FALLBACK_FORMAT: &str = "audio/wav";

/// Encoding family of a MIME type, classified once so the bitrate table
/// can branch on a tag instead of repeated substring probes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormatFamily {
    /// Opus-in-WebM and friends; anything naming opus or webm
    Opus,
    Mp4,
    /// WAV, plain OGG and everything else; no bitrate cap applies
    Other,
}

impl FormatFamily {
    /// Classify a MIME type string into its encoding family
    pub fn classify(format: &str) -> Self {
        if format.contains("opus") || format.contains("webm") {
            Self::Opus
        } else if format.contains("mp4") {
            Self::Mp4
        } else {
            Self::Other
        }
    }
}

/// Select the single best capture format from the set the environment
/// claims to support.
///
/// Iterates the fixed preference list and returns the first entry present
/// in `supported`; falls back to the first supported format, then to
/// `"audio/wav"` when the set is empty. Deterministic and total.
pub fn select_best_format<S: AsRef<str>>(supported: &[S]) -> String {
    for preferred in FORMAT_PREFERENCES {
        if supported.iter().any(|s| s.as_ref() == preferred) {
            return preferred.to_string();
        }
    }

    supported
        .first()
        .map(|s| s.as_ref().to_string())
        .unwrap_or_else(|| FALLBACK_FORMAT.to_string())
}
