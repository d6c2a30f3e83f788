//! Gesture Manager for Foo Screen.
//!
//! Maps multi-finger swipes and keyboard shortcuts to shell actions, with
//! conflict detection and platform-specific modifier adaptation.

use std::collections::HashMap;

use crate::types::errors::ShortcutError;
use crate::types::settings::GestureSettings;
use crate::types::shell::{ShellAction, SwipeDirection};

/// Trait defining gesture and shortcut binding operations.
pub trait GestureManagerTrait {
    fn swipe_action(&self, direction: SwipeDirection, touches: u32) -> Option<ShellAction>;
    fn bind(&mut self, keys: &str, action: ShellAction) -> Result<(), ShortcutError>;
    fn unbind(&mut self, keys: &str) -> Result<(), ShortcutError>;
    fn action_for_keys(&self, keys: &str) -> Option<ShellAction>;
    fn bindings(&self) -> &HashMap<String, ShellAction>;
    fn swipe_touches(&self) -> u32;
}

/// In-memory gesture bindings.
pub struct GestureManager {
    swipe_touches: u32,
    swipe_distance: f64,
    shortcuts: HashMap<String, ShellAction>,
}

impl GestureManager {
    /// Builds bindings from settings. Entries naming an unknown action are
    /// skipped with a warning.
    pub fn new(gestures: &GestureSettings, shortcuts: &HashMap<String, String>) -> Self {
        let mut mgr = Self {
            swipe_touches: gestures.swipe_touches.max(1),
            swipe_distance: gestures.swipe_distance,
            shortcuts: HashMap::new(),
        };
        for (keys, action_name) in shortcuts {
            match ShellAction::from_name(action_name) {
                Some(action) => {
                    if let Err(e) = mgr.bind(keys, action) {
                        log::warn!("[GESTURE] skipping '{}': {}", keys, e);
                    }
                }
                None => log::warn!(
                    "[GESTURE] skipping '{}': {}",
                    keys,
                    ShortcutError::UnknownAction(action_name.clone())
                ),
            }
        }
        mgr
    }

    pub fn swipe_distance(&self) -> f64 {
        self.swipe_distance
    }

    /// Canonicalises a combination such as `"shift+ctrl+l"` into `"Ctrl+Shift+L"`
    /// and adapts `Ctrl` to `Cmd` on macOS.
    pub fn normalize_keys(keys: &str) -> Result<String, ShortcutError> {
        let parts: Vec<&str> = keys.split('+').map(str::trim).collect();
        let Some((key, modifiers)) = parts.split_last() else {
            return Err(ShortcutError::InvalidKeys(keys.to_string()));
        };
        if key.is_empty() {
            return Err(ShortcutError::InvalidKeys(keys.to_string()));
        }

        let mut ordered: Vec<&str> = Vec::new();
        for canonical in ["Ctrl", "Alt", "Shift", "Cmd"] {
            if modifiers.iter().any(|m| Self::modifier_name(m) == Some(canonical)) {
                ordered.push(canonical);
            }
        }
        if let Some(unknown) = modifiers.iter().find(|m| Self::modifier_name(m).is_none()) {
            return Err(ShortcutError::InvalidKeys(format!("{} (modifier '{}')", keys, unknown)));
        }

        let key = if key.chars().count() == 1 {
            key.to_uppercase()
        } else {
            key.to_string()
        };
        ordered.push(&key);
        Ok(Self::adapt_for_platform(&ordered.join("+")))
    }

    fn modifier_name(m: &str) -> Option<&'static str> {
        match m.to_ascii_lowercase().as_str() {
            "ctrl" | "control" => Some("Ctrl"),
            "alt" | "option" => Some("Alt"),
            "shift" => Some("Shift"),
            "cmd" | "meta" | "super" => Some("Cmd"),
            _ => None,
        }
    }

    fn adapt_for_platform(keys: &str) -> String {
        if cfg!(target_os = "macos") {
            keys.replace("Ctrl+", "Cmd+")
        } else {
            keys.to_string()
        }
    }
}

impl GestureManagerTrait for GestureManager {
    /// Swipe up shows the chrome, swipe down reloads. The finger count must
    /// match exactly.
    fn swipe_action(&self, direction: SwipeDirection, touches: u32) -> Option<ShellAction> {
        if touches != self.swipe_touches {
            return None;
        }
        Some(match direction {
            SwipeDirection::Up => ShellAction::ShowChrome,
            SwipeDirection::Down => ShellAction::Reload,
        })
    }

    fn bind(&mut self, keys: &str, action: ShellAction) -> Result<(), ShortcutError> {
        if keys.trim().is_empty() {
            return Err(ShortcutError::InvalidKeys("Keys cannot be empty".to_string()));
        }
        let normalized = Self::normalize_keys(keys)?;
        if let Some(existing) = self.shortcuts.get(&normalized) {
            if *existing != action {
                return Err(ShortcutError::Conflict(format!(
                    "'{}' is already bound to '{}'",
                    normalized,
                    existing.name()
                )));
            }
        }
        self.shortcuts.insert(normalized, action);
        Ok(())
    }

    fn unbind(&mut self, keys: &str) -> Result<(), ShortcutError> {
        let normalized = Self::normalize_keys(keys)?;
        self.shortcuts
            .remove(&normalized)
            .map(|_| ())
            .ok_or(ShortcutError::NotFound(normalized))
    }

    fn action_for_keys(&self, keys: &str) -> Option<ShellAction> {
        let normalized = Self::normalize_keys(keys).ok()?;
        self.shortcuts.get(&normalized).copied()
    }

    fn bindings(&self) -> &HashMap<String, ShellAction> {
        &self.shortcuts
    }

    fn swipe_touches(&self) -> u32 {
        self.swipe_touches
    }
}
