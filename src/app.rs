//! App Core for Foo Screen.
//!
//! Central struct holding the database, settings, gesture bindings and the
//! shell controller, managing application lifecycle.

use std::sync::Arc;

use crate::database::connection::Database;
use crate::managers::gesture_manager::GestureManager;
use crate::managers::history_manager::HistoryManager;
use crate::managers::shell_controller::ShellController;
use crate::platform;
use crate::services::clipboard::{ClipboardSource, SystemClipboard};
use crate::services::defaults_store::DefaultsStore;
use crate::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use crate::types::shell::ShellEffect;

/// Central application struct.
pub struct App {
    pub db: Arc<Database>,
    pub defaults: DefaultsStore,
    pub settings_engine: SettingsEngine,
    pub gesture_manager: GestureManager,
    pub controller: ShellController,
    persist_settings: bool,
}

impl App {
    /// Opens the database at `db_path`, loads settings from the platform
    /// config dir and reads the system clipboard.
    pub fn new(db_path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        Self::load_from(
            db_path,
            SettingsEngine::new(None),
            Box::new(SystemClipboard::new()),
        )
    }

    /// Loads `settings_engine` from disk before building the App. If the file
    /// cannot be loaded the App runs on defaults and never writes them back,
    /// so the user's file survives for them to fix.
    pub fn load_from(
        db_path: &str,
        mut settings_engine: SettingsEngine,
        clipboard: Box<dyn ClipboardSource>,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let loaded = match settings_engine.load() {
            Ok(_) => true,
            Err(e) => {
                log::warn!(
                    "[SETTINGS] {}; using defaults, {} left untouched",
                    e,
                    settings_engine.get_config_path()
                );
                false
            }
        };
        let mut app = Self::with_parts(db_path, settings_engine, clipboard)?;
        app.persist_settings = loaded;
        Ok(app)
    }

    /// Opens the database in the platform data dir.
    pub fn open_default() -> Result<Self, Box<dyn std::error::Error>> {
        let db_path = platform::get_data_dir().join("fooscreen.db");
        Self::new(&db_path.to_string_lossy())
    }

    /// Builds an App from an already-loaded settings engine and a clipboard
    /// source. Used by tests and the headless demo.
    pub fn with_parts(
        db_path: &str,
        settings_engine: SettingsEngine,
        clipboard: Box<dyn ClipboardSource>,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let db = Arc::new(if db_path == ":memory:" {
            Database::open_in_memory()?
        } else {
            Database::open(db_path)?
        });
        let defaults = DefaultsStore::new(db.clone());

        let settings = settings_engine.get_settings().clone();
        let gesture_manager = GestureManager::new(&settings.gestures, &settings.shortcuts);
        let controller = ShellController::new(
            &settings,
            HistoryManager::new(defaults.clone()),
            clipboard,
        );

        Ok(Self {
            db,
            defaults,
            settings_engine,
            gesture_manager,
            controller,
            persist_settings: true,
        })
    }

    /// Startup sequence: reset chrome state, probe, load the start page.
    pub fn startup(&mut self) -> Vec<ShellEffect> {
        log::info!(
            "[APP] starting, config at {}",
            self.settings_engine.get_config_path()
        );
        self.controller.launch()
    }

    /// Shutdown sequence: persist settings unless they failed to load.
    pub fn shutdown(&mut self) {
        if !self.persist_settings {
            log::info!("[SETTINGS] not saving fallback defaults");
        } else if let Err(e) = self.settings_engine.save() {
            log::warn!("[SETTINGS] save on shutdown failed: {}", e);
        }
        log::info!("[APP] shutdown");
    }
}
