//! Capability report value object

use crate::domain::capability::BrowserInfo;

/// Result of probing an environment for the features needed to record and
/// transcribe audio. Recomputed fresh on every probe; never cached.
#[derive(Debug, Clone, PartialEq)]
pub struct CapabilityReport {
    /// True iff the compatibility-matrix verdict is supported AND the gap
    /// list is empty. The matrix also appends its reason to the gap list,
    /// so the two conditions overlap; both are kept deliberately.
    pub is_supported: bool,
    /// Human-readable names of missing capabilities, in probe order
    pub missing_features: Vec<String>,
    pub browser_info: BrowserInfo,
}

impl CapabilityReport {
    /// Report for an environment with no hosting window/document context.
    /// Nothing further can be probed.
    pub fn no_host_context(browser_info: BrowserInfo) -> Self {
        Self {
            is_supported: false,
            missing_features: vec!["Window object".to_string()],
            browser_info,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_host_context_reports_single_gap() {
        let report = CapabilityReport::no_host_context(BrowserInfo::unknown());
        assert!(!report.is_supported);
        assert_eq!(report.missing_features, vec!["Window object".to_string()]);
    }
}
