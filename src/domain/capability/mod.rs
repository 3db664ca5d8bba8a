//! Environment capability: browser identity, compatibility matrix, report

pub mod browser;
pub mod matrix;
pub mod report;

pub use browser::{BrowserInfo, UNKNOWN};
pub use matrix::{classify, CompatibilityVerdict};
pub use report::CapabilityReport;
