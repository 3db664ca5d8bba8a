//! Browser identity value object

use std::sync::OnceLock;

use regex::Regex;

/// Name/version/platform used when no identity string is available or no
/// vendor marker matches
pub const UNKNOWN: &str = "Unknown";

/// Browser identity derived from the environment's user-agent string.
/// Derived fresh on every probe; never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct BrowserInfo {
    pub name: String,
    /// Dotted version string, compared as its leading float
    pub version: String,
    pub platform: String,
    pub is_mobile: bool,
}

fn mobile_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(?i)iPhone|iPad|iPod|Android|BlackBerry|IEMobile|Opera Mini")
            .expect("valid mobile pattern")
    })
}

fn version_capture(marker: &'static str) -> Regex {
    Regex::new(&format!(r"{}/(\d+\.\d+)", marker)).expect("valid version pattern")
}

impl BrowserInfo {
    /// Identity to report when the environment exposes no user agent
    pub fn unknown() -> Self {
        Self {
            name: UNKNOWN.to_string(),
            version: UNKNOWN.to_string(),
            platform: UNKNOWN.to_string(),
            is_mobile: false,
        }
    }

    /// Parse vendor, version and mobile flag from a user-agent string.
    ///
    /// Vendor markers are scanned in priority order: Firefox, Chrome
    /// (excluding Edge, whose UA also carries a Chrome token), Safari
    /// (excluding Chrome, which also carries a Safari token), Edge.
    pub fn from_user_agent(user_agent: &str, platform: Option<&str>) -> Self {
        let is_mobile = mobile_pattern().is_match(user_agent);
        let platform = platform.unwrap_or(UNKNOWN).to_string();

        let (name, version) = if user_agent.contains("Firefox") {
            ("Firefox", extract_version(user_agent, "Firefox"))
        } else if user_agent.contains("Chrome") && !user_agent.contains("Edg") {
            ("Chrome", extract_version(user_agent, "Chrome"))
        } else if user_agent.contains("Safari") && !user_agent.contains("Chrome") {
            // Safari reports its version behind a separate "Version/" token
            ("Safari", extract_version(user_agent, "Version"))
        } else if user_agent.contains("Edg") {
            ("Edge", extract_version(user_agent, "Edg"))
        } else {
            (UNKNOWN, UNKNOWN.to_string())
        };

        Self {
            name: name.to_string(),
            version,
            platform,
            is_mobile,
        }
    }

    /// Leading float of the version string, used for gate comparisons.
    /// None when the version does not start with a number, in which case
    /// version gates pass.
    pub fn version_number(&self) -> Option<f32> {
        parse_leading_float(&self.version)
    }
}

fn extract_version(user_agent: &str, marker: &'static str) -> String {
    version_capture(marker)
        .captures(user_agent)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| UNKNOWN.to_string())
}

/// Parse the longest numeric prefix of a string as a float
fn parse_leading_float(s: &str) -> Option<f32> {
    let mut end = 0;
    let mut seen_dot = false;
    for (i, ch) in s.char_indices() {
        if ch.is_ascii_digit() {
            end = i + 1;
        } else if ch == '.' && !seen_dot && end > 0 {
            seen_dot = true;
        } else {
            break;
        }
    }
    s[..end].parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIREFOX_UA: &str =
        "Mozilla/5.0 (X11; Linux x86_64; rv:109.0) Gecko/20100101 Firefox/119.0";
    const CHROME_UA: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
         (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";
    const SAFARI_UA: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) \
         AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.1 Safari/605.1.15";
    const EDGE_UA: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
         (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36 Edg/120.0.2210.91";
    const IPHONE_UA: &str = "Mozilla/5.0 (iPhone; CPU iPhone OS 17_1 like Mac OS X) \
         AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.1 Mobile/15E148 Safari/604.1";

    #[test]
    fn detects_firefox() {
        let info = BrowserInfo::from_user_agent(FIREFOX_UA, Some("Linux x86_64"));
        assert_eq!(info.name, "Firefox");
        assert_eq!(info.version, "119.0");
        assert_eq!(info.platform, "Linux x86_64");
        assert!(!info.is_mobile);
    }

    #[test]
    fn detects_chrome() {
        let info = BrowserInfo::from_user_agent(CHROME_UA, None);
        assert_eq!(info.name, "Chrome");
        assert_eq!(info.version, "120.0");
        assert_eq!(info.platform, UNKNOWN);
    }

    #[test]
    fn detects_safari_via_version_token() {
        let info = BrowserInfo::from_user_agent(SAFARI_UA, Some("MacIntel"));
        assert_eq!(info.name, "Safari");
        assert_eq!(info.version, "17.1");
    }

    #[test]
    fn edge_is_not_misreported_as_chrome() {
        let info = BrowserInfo::from_user_agent(EDGE_UA, None);
        assert_eq!(info.name, "Edge");
        assert_eq!(info.version, "120.0");
    }

    #[test]
    fn chrome_is_not_misreported_as_safari() {
        // Chrome UAs carry a Safari token; priority order must win
        let info = BrowserInfo::from_user_agent(CHROME_UA, None);
        assert_eq!(info.name, "Chrome");
    }

    #[test]
    fn detects_mobile_tokens_case_insensitively() {
        let info = BrowserInfo::from_user_agent(IPHONE_UA, Some("iPhone"));
        assert!(info.is_mobile);

        let lower = IPHONE_UA.to_lowercase();
        let info = BrowserInfo::from_user_agent(&lower, None);
        assert!(info.is_mobile);
    }

    #[test]
    fn unknown_vendor_falls_back() {
        let info = BrowserInfo::from_user_agent("SomeBot/1.0", None);
        assert_eq!(info.name, UNKNOWN);
        assert_eq!(info.version, UNKNOWN);
        assert!(!info.is_mobile);
    }

    #[test]
    fn version_number_parses_leading_float() {
        let mut info = BrowserInfo::unknown();
        info.version = "119.0".to_string();
        assert_eq!(info.version_number(), Some(119.0));

        info.version = "17.1.2".to_string();
        assert_eq!(info.version_number(), Some(17.1));

        info.version = UNKNOWN.to_string();
        assert_eq!(info.version_number(), None);
    }
}
