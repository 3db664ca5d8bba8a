//! Capability probing and negotiation integration tests

use voicegate::application::CapabilityProbe;
use voicegate::domain::negotiation::{derive_options, select_best_format, FORMAT_PREFERENCES};
use voicegate::domain::{VoiceConfig, VoiceConfigPatch};
use voicegate::infrastructure::EnvironmentSnapshot;

const CHROME_UA: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
     (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";
const OLD_MOBILE_SAFARI_UA: &str = "Mozilla/5.0 (iPhone; CPU iPhone OS 10_3 like Mac OS X) \
     AppleWebKit/603.1.30 (KHTML, like Gecko) Version/10.3 Mobile/14E304 Safari/602.1";
const EDGE_UA: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
     (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36 Edg/120.0.2210.91";

#[test]
fn modern_chrome_over_https_is_fully_supported() {
    let probe = CapabilityProbe::new(EnvironmentSnapshot::modern(CHROME_UA));
    let report = probe.probe();

    assert!(report.is_supported);
    assert!(report.missing_features.is_empty());
    assert_eq!(report.browser_info.name, "Chrome");
    assert!(!report.browser_info.is_mobile);
}

#[test]
fn old_mobile_safari_fails_with_ios_reason() {
    let env = EnvironmentSnapshot::modern(OLD_MOBILE_SAFARI_UA).with_platform("iPhone");
    let report = CapabilityProbe::new(env).probe();

    assert!(!report.is_supported);
    assert!(report.browser_info.is_mobile);
    assert_eq!(
        report.missing_features,
        vec!["Safari iOS version too old (requires 11+)".to_string()]
    );
}

#[test]
fn edge_is_recognized_and_supported() {
    let report = CapabilityProbe::new(EnvironmentSnapshot::modern(EDGE_UA)).probe();
    assert!(report.is_supported);
    assert_eq!(report.browser_info.name, "Edge");
}

#[test]
fn gaps_from_features_and_matrix_accumulate() {
    let env = EnvironmentSnapshot::modern(OLD_MOBILE_SAFARI_UA)
        .without_audio_context()
        .with_location("http", "app.example.com");
    let report = CapabilityProbe::new(env).probe();

    assert!(!report.is_supported);
    assert_eq!(
        report.missing_features,
        vec![
            "AudioContext API".to_string(),
            "HTTPS Protocol (required for microphone access)".to_string(),
            "Safari iOS version too old (requires 11+)".to_string(),
        ]
    );
}

#[test]
fn probe_results_are_recomputed_not_cached() {
    let supported = CapabilityProbe::new(EnvironmentSnapshot::modern(CHROME_UA));
    let degraded = CapabilityProbe::new(
        EnvironmentSnapshot::modern(CHROME_UA).without_media_recorder(),
    );

    assert!(supported.probe().is_supported);
    assert!(!degraded.probe().is_supported);
    // Re-probing the first environment is unaffected by the second
    assert!(supported.probe().is_supported);
}

#[test]
fn negotiation_end_to_end_prefers_opus_and_caps_bitrate() {
    let env = EnvironmentSnapshot::modern(CHROME_UA);
    let probe = CapabilityProbe::new(env);

    let config = VoiceConfig::defaults().apply(VoiceConfigPatch {
        sample_rate: Some(48_000),
        ..Default::default()
    });

    let options = probe.recording_options(&config);
    assert_eq!(options.mime_type, "audio/webm;codecs=opus");
    assert_eq!(options.audio_bits_per_second, Some(128_000));
}

#[test]
fn negotiation_with_mp4_only_recorder() {
    let env = EnvironmentSnapshot::modern(CHROME_UA).with_supported_media_types(&["audio/mp4"]);
    let probe = CapabilityProbe::new(env);

    let config = VoiceConfig::defaults().apply(VoiceConfigPatch {
        sample_rate: Some(8_000),
        ..Default::default()
    });

    let options = probe.recording_options(&config);
    assert_eq!(options.mime_type, "audio/mp4");
    assert_eq!(options.audio_bits_per_second, Some(48_000));
}

#[test]
fn bitrate_table_reference_vectors() {
    assert_eq!(
        derive_options("audio/webm;codecs=opus", 48_000).audio_bits_per_second,
        Some(128_000)
    );
    assert_eq!(
        derive_options("audio/mp4", 8_000).audio_bits_per_second,
        Some(48_000)
    );
    assert!(derive_options("audio/wav", 44_100)
        .audio_bits_per_second
        .is_none());
}

#[test]
fn format_selection_is_pure_across_calls() {
    let supported = vec!["audio/ogg".to_string(), "audio/webm".to_string()];
    let first = select_best_format(&supported);
    let second = select_best_format(&supported);
    assert_eq!(first, second);
    assert_eq!(first, "audio/webm");
}

#[test]
fn preference_list_is_the_negotiation_order() {
    assert_eq!(FORMAT_PREFERENCES[0], "audio/webm;codecs=opus");
    assert_eq!(FORMAT_PREFERENCES.len(), 6);
    assert_eq!(FORMAT_PREFERENCES[5], "audio/ogg");
}
