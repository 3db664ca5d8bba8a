//! Audio format negotiation and bitrate policy

pub mod bitrate;
pub mod format;

pub use bitrate::{derive_options, RecordingOptions};
pub use format::{select_best_format, FormatFamily, FALLBACK_FORMAT, FORMAT_PREFERENCES};
