//! Property-based tests for ShellSettings serialization round-trip.
//!
//! Settings written by the engine must load back unchanged for arbitrary
//! valid values, both through serde directly and through the JSON file.

use std::collections::HashMap;

use fooscreen::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use fooscreen::types::settings::{
    ChromeSettings, GeneralSettings, GestureSettings, HistorySettings, NetworkSettings,
    ShellSettings,
};
use proptest::prelude::*;

fn arb_general() -> impl Strategy<Value = GeneralSettings> {
    ("https://[a-z]{3,10}\\.[a-z]{2,3}/[a-z]{0,8}", any::<bool>())
        .prop_map(|(start_page, fullscreen)| GeneralSettings { start_page, fullscreen })
}

fn arb_network() -> impl Strategy<Value = NetworkSettings> {
    (any::<bool>(), "http://[a-z]{3,10}\\.com/[a-z_0-9]{0,12}", any::<bool>()).prop_map(
        |(probe_enabled, probe_url, reachability_check)| NetworkSettings {
            probe_enabled,
            probe_url,
            reachability_check,
        },
    )
}

fn arb_history() -> impl Strategy<Value = HistorySettings> {
    (1usize..=5, any::<bool>()).prop_map(|(display_limit, confirm_clear)| HistorySettings {
        display_limit,
        confirm_clear,
    })
}

fn arb_chrome() -> impl Strategy<Value = ChromeSettings> {
    // Quarter steps keep the threshold exactly representable through JSON.
    (0u32..2000, 0u32..2000, 20u32..200, 0u32..=4).prop_map(
        |(fade_ms, keyboard_focus_ms, height, threshold)| ChromeSettings {
            fade_ms,
            keyboard_focus_ms,
            address_bar_height: height as f64,
            progress_dismiss_threshold: threshold as f64 / 4.0,
        },
    )
}

fn arb_gestures() -> impl Strategy<Value = GestureSettings> {
    (1u32..6, 10u32..300).prop_map(|(swipe_touches, distance)| GestureSettings {
        swipe_touches,
        swipe_distance: distance as f64,
    })
}

fn arb_shortcuts() -> impl Strategy<Value = HashMap<String, String>> {
    prop::collection::hash_map(
        "(Ctrl|Alt|Shift)\\+[A-Z]",
        prop_oneof![Just("show_chrome"), Just("reload"), Just("dismiss")].prop_map(String::from),
        0..4,
    )
}

fn arb_settings() -> impl Strategy<Value = ShellSettings> {
    (
        arb_general(),
        arb_network(),
        arb_history(),
        arb_chrome(),
        arb_gestures(),
        arb_shortcuts(),
    )
        .prop_map(|(general, network, history, chrome, gestures, shortcuts)| ShellSettings {
            general,
            network,
            history,
            chrome,
            gestures,
            shortcuts,
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(30))]

    #[test]
    fn settings_json_roundtrip(settings in arb_settings()) {
        let json = serde_json::to_string(&settings).unwrap();
        let back: ShellSettings = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(back, settings);
    }

    #[test]
    fn settings_file_roundtrip(settings in arb_settings()) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json").to_string_lossy().to_string();

        SettingsEngine::with_settings(path.clone(), settings.clone()).save().unwrap();

        let mut engine = SettingsEngine::new(Some(path));
        let loaded = engine.load().unwrap();
        prop_assert_eq!(loaded, settings);
    }
}
