// Foo Screen platform abstraction
// Per-OS locations for the settings file and the defaults database.
//
// `FOOSCREEN_HOME`, when set, overrides both and holds `config/` and `data/`
// subdirectories. Kiosk images use it to keep state on a writable partition.

use std::env;
use std::path::PathBuf;

#[cfg(target_os = "linux")]
mod linux;
#[cfg(target_os = "linux")]
use linux as os;

#[cfg(target_os = "macos")]
mod macos;
#[cfg(target_os = "macos")]
use macos as os;

#[cfg(target_os = "windows")]
mod windows;
#[cfg(target_os = "windows")]
use windows as os;

pub const HOME_OVERRIDE_VAR: &str = "FOOSCREEN_HOME";

fn home_override() -> Option<PathBuf> {
    env::var_os(HOME_OVERRIDE_VAR)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}

/// Directory holding `settings.json`.
///
/// - **Linux**: `$XDG_CONFIG_HOME/fooscreen` or `~/.config/fooscreen`
/// - **macOS**: `~/Library/Application Support/FooScreen`
/// - **Windows**: `%APPDATA%/FooScreen`
pub fn get_config_dir() -> PathBuf {
    match home_override() {
        Some(home) => home.join("config"),
        None => os::get_config_dir(),
    }
}

/// Directory holding `fooscreen.db`.
///
/// - **Linux**: `$XDG_DATA_HOME/fooscreen` or `~/.local/share/fooscreen`
/// - **macOS**: `~/Library/Application Support/FooScreen`
/// - **Windows**: `%APPDATA%/FooScreen`
pub fn get_data_dir() -> PathBuf {
    match home_override() {
        Some(home) => home.join("data"),
        None => os::get_data_dir(),
    }
}
