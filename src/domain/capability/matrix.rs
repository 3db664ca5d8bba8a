//! Vendor version compatibility matrix

use crate::domain::capability::BrowserInfo;

/// Minimum supported versions per vendor
const MIN_FIREFOX: f32 = 29.0;
const MIN_CHROME: f32 = 47.0;
const MIN_SAFARI: f32 = 11.0;
const MIN_EDGE: f32 = 79.0;

/// Verdict of the compatibility matrix for one browser identity
#[derive(Debug, Clone, PartialEq)]
pub struct CompatibilityVerdict {
    pub supported: bool,
    /// Human-readable reason, set only when unsupported
    pub missing_reason: Option<String>,
}

impl CompatibilityVerdict {
    fn supported() -> Self {
        Self {
            supported: true,
            missing_reason: None,
        }
    }

    fn unsupported(reason: impl Into<String>) -> Self {
        Self {
            supported: false,
            missing_reason: Some(reason.into()),
        }
    }
}

/// Classify a browser identity against the vendor minimum-version table.
///
/// Versions are compared as parsed leading floats; an unparseable version
/// passes every gate. Vendors outside the table are supported by default.
/// Pure function, safe to call concurrently.
pub fn classify(info: &BrowserInfo) -> CompatibilityVerdict {
    let version = info.version_number();

    match info.name.as_str() {
        "Firefox" => match version {
            Some(v) if v < MIN_FIREFOX => {
                CompatibilityVerdict::unsupported("Firefox version too old (requires 29+)")
            }
            _ => CompatibilityVerdict::supported(),
        },
        "Chrome" => match version {
            Some(v) if v < MIN_CHROME => {
                CompatibilityVerdict::unsupported("Chrome version too old (requires 47+)")
            }
            _ => CompatibilityVerdict::supported(),
        },
        "Safari" => match version {
            Some(v) if v < MIN_SAFARI => {
                if info.is_mobile {
                    CompatibilityVerdict::unsupported("Safari iOS version too old (requires 11+)")
                } else {
                    CompatibilityVerdict::unsupported("Safari macOS version too old (requires 11+)")
                }
            }
            _ => CompatibilityVerdict::supported(),
        },
        "Edge" => match version {
            Some(v) if v < MIN_EDGE => {
                CompatibilityVerdict::unsupported("Edge version too old (requires 79+)")
            }
            _ => CompatibilityVerdict::supported(),
        },
        _ => CompatibilityVerdict::supported(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info(name: &str, version: &str, is_mobile: bool) -> BrowserInfo {
        BrowserInfo {
            name: name.to_string(),
            version: version.to_string(),
            platform: "Test".to_string(),
            is_mobile,
        }
    }

    #[test]
    fn firefox_boundary() {
        assert!(!classify(&info("Firefox", "28.0", false)).supported);
        assert!(classify(&info("Firefox", "29.0", false)).supported);
        assert!(classify(&info("Firefox", "30.0", false)).supported);
    }

    #[test]
    fn chrome_boundary() {
        assert!(!classify(&info("Chrome", "46.0", false)).supported);
        assert!(classify(&info("Chrome", "47.0", false)).supported);
        assert!(classify(&info("Chrome", "48.0", false)).supported);
    }

    #[test]
    fn safari_boundary_desktop_and_mobile() {
        let desktop = classify(&info("Safari", "10.1", false));
        assert!(!desktop.supported);
        assert!(desktop.missing_reason.unwrap().contains("macOS"));

        let mobile = classify(&info("Safari", "10.1", true));
        assert!(!mobile.supported);
        assert!(mobile.missing_reason.unwrap().contains("iOS"));

        assert!(classify(&info("Safari", "11.0", false)).supported);
        assert!(classify(&info("Safari", "11.0", true)).supported);
        assert!(classify(&info("Safari", "12.0", false)).supported);
    }

    #[test]
    fn edge_boundary() {
        assert!(!classify(&info("Edge", "78.0", false)).supported);
        assert!(classify(&info("Edge", "79.0", false)).supported);
        assert!(classify(&info("Edge", "80.0", false)).supported);
    }

    #[test]
    fn unsupported_verdict_carries_reason() {
        let verdict = classify(&info("Chrome", "46.0", false));
        assert_eq!(
            verdict.missing_reason.as_deref(),
            Some("Chrome version too old (requires 47+)")
        );
    }

    #[test]
    fn unknown_vendor_is_supported_by_default() {
        assert!(classify(&info("Unknown", "Unknown", false)).supported);
        assert!(classify(&info("Brave", "1.60", false)).supported);
    }

    #[test]
    fn unparseable_version_passes_gates() {
        assert!(classify(&info("Chrome", "Unknown", false)).supported);
        assert!(classify(&info("Firefox", "Unknown", false)).supported);
    }
}
