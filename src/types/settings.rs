use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::history::DEFAULT_DISPLAY_LIMIT;

/// Top-level shell settings container.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ShellSettings {
    pub general: GeneralSettings,
    pub network: NetworkSettings,
    pub history: HistorySettings,
    pub chrome: ChromeSettings,
    pub gestures: GestureSettings,
    pub shortcuts: HashMap<String, String>,
}

impl Default for ShellSettings {
    fn default() -> Self {
        Self {
            general: GeneralSettings::default(),
            network: NetworkSettings::default(),
            history: HistorySettings::default(),
            chrome: ChromeSettings::default(),
            gestures: GestureSettings::default(),
            shortcuts: Self::default_shortcuts(),
        }
    }
}

impl ShellSettings {
    /// Returns the default keyboard shortcuts, keyed by key combination.
    pub fn default_shortcuts() -> HashMap<String, String> {
        let mut shortcuts = HashMap::new();
        shortcuts.insert("Ctrl+L".to_string(), "show_chrome".to_string());
        shortcuts.insert("Ctrl+R".to_string(), "reload".to_string());
        shortcuts.insert("F5".to_string(), "reload".to_string());
        shortcuts.insert("Escape".to_string(), "dismiss".to_string());
        shortcuts
    }
}

/// Start page and window behaviour.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GeneralSettings {
    pub start_page: String,
    pub fullscreen: bool,
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            start_page: "fooscreen://localhost/index.html".to_string(),
            fullscreen: true,
        }
    }
}

/// Outbound request settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct NetworkSettings {
    pub probe_enabled: bool,
    pub probe_url: String,
    pub reachability_check: bool,
}

impl Default for NetworkSettings {
    fn default() -> Self {
        Self {
            probe_enabled: true,
            probe_url: "http://captive.apple.com/generate_204".to_string(),
            reachability_check: true,
        }
    }
}

/// Recency list settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct HistorySettings {
    pub display_limit: usize,
    pub confirm_clear: bool,
}

impl Default for HistorySettings {
    fn default() -> Self {
        Self {
            display_limit: DEFAULT_DISPLAY_LIMIT,
            confirm_clear: true,
        }
    }
}

/// Overlay animation and layout settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ChromeSettings {
    pub fade_ms: u32,
    pub keyboard_focus_ms: u32,
    pub address_bar_height: f64,
    pub progress_dismiss_threshold: f64,
}

impl Default for ChromeSettings {
    fn default() -> Self {
        Self {
            fade_ms: 250,
            keyboard_focus_ms: 500,
            address_bar_height: 46.0,
            progress_dismiss_threshold: 0.9,
        }
    }
}

impl ChromeSettings {
    /// Fade duration clamped to the 150–250 ms window the overlay is designed for.
    pub fn clamped_fade_ms(&self) -> u32 {
        self.fade_ms.clamp(150, 250)
    }
}

/// Touch gesture settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GestureSettings {
    /// Fingers required for the chrome swipes. Use 2 when testing with a trackpad.
    pub swipe_touches: u32,
    /// Minimum vertical travel in CSS pixels.
    pub swipe_distance: f64,
}

impl Default for GestureSettings {
    fn default() -> Self {
        Self {
            swipe_touches: 3,
            swipe_distance: 60.0,
        }
    }
}
