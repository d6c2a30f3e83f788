//! Shell Controller for Foo Screen.
//!
//! Owns the browser chrome state (overlay, status bar, address field,
//! keyboard inset, load progress, alerts) and turns gestures, IPC messages
//! and navigation callbacks into [`ShellEffect`]s for the window layer.
//! Nothing here touches a window, so the whole flow is testable headless.

use url::Url;

use crate::managers::history_manager::{HistoryManager, HistoryManagerTrait};
use crate::managers::suggestion_list;
use crate::services::clipboard::{self, ClipboardSource};
use crate::types::history::DEFAULT_DISPLAY_LIMIT;
use crate::types::settings::ShellSettings;
use crate::types::shell::{Alert, ChromeState, FeedbackKind, ShellAction, ShellEffect};
use crate::types::suggestion::SuggestionList;

/// Prepends `http://` unless the input already starts with `http://` or `https://`.
pub fn complete_scheme(input: &str) -> String {
    if clipboard::looks_like_web_url(input) {
        input.to_string()
    } else {
        format!("http://{}", input)
    }
}

/// Scheme-completes `input` and returns it if the result parses as a URL.
///
/// The returned string is the completed input itself, not the parser's
/// normalised form, so `example.com` yields `http://example.com`.
pub fn resolve_address(input: &str) -> Option<String> {
    let completed = complete_scheme(input.trim());
    match Url::parse(&completed) {
        Ok(url) if url.has_host() => Some(completed),
        _ => None,
    }
}

/// Chrome configuration taken from settings at construction.
#[derive(Debug, Clone)]
struct ChromeConfig {
    start_page: String,
    fade_ms: u32,
    focus_ms: u32,
    bar_height: f64,
    dismiss_threshold: f64,
    display_limit: usize,
    confirm_clear: bool,
    probe_url: Option<String>,
    reachability_check: bool,
}

impl ChromeConfig {
    fn from_settings(settings: &ShellSettings) -> Self {
        Self {
            start_page: settings.general.start_page.clone(),
            fade_ms: settings.chrome.clamped_fade_ms(),
            focus_ms: settings.chrome.keyboard_focus_ms,
            bar_height: settings.chrome.address_bar_height,
            dismiss_threshold: settings.chrome.progress_dismiss_threshold,
            display_limit: settings.history.display_limit.clamp(1, DEFAULT_DISPLAY_LIMIT),
            confirm_clear: settings.history.confirm_clear,
            probe_url: settings
                .network
                .probe_enabled
                .then(|| settings.network.probe_url.clone()),
            reachability_check: settings.network.reachability_check,
        }
    }
}

/// The chrome state machine.
pub struct ShellController {
    config: ChromeConfig,
    history: HistoryManager,
    clipboard: Box<dyn ClipboardSource>,
    chrome: ChromeState,
    current_url: Option<String>,
}

impl ShellController {
    pub fn new(
        settings: &ShellSettings,
        history: HistoryManager,
        clipboard: Box<dyn ClipboardSource>,
    ) -> Self {
        let config = ChromeConfig::from_settings(settings);
        let chrome = Self::initial_chrome(&config);
        Self {
            config,
            history,
            clipboard,
            chrome,
            current_url: None,
        }
    }

    fn initial_chrome(config: &ChromeConfig) -> ChromeState {
        ChromeState {
            overlay_visible: false,
            status_bar_hidden: true,
            address_text: String::new(),
            address_focused: false,
            address_bar_height: config.bar_height,
            fade_ms: config.fade_ms,
            focus_ms: config.focus_ms,
            progress: 0.0,
            progress_visible: false,
            suggestions: SuggestionList::default(),
            alert: None,
        }
    }

    pub fn chrome(&self) -> &ChromeState {
        &self.chrome
    }

    pub fn start_page(&self) -> &str {
        &self.config.start_page
    }

    pub fn current_url(&self) -> Option<&str> {
        self.current_url.as_deref()
    }

    pub fn history(&self) -> &HistoryManager {
        &self.history
    }

    fn render(&self) -> ShellEffect {
        ShellEffect::Render(Box::new(self.chrome.clone()))
    }

    /// True for the bundled start page, including the
    /// `http://<scheme>.localhost/` form custom protocols take on Windows.
    pub fn is_start_page(&self, url: &str) -> bool {
        if url == self.config.start_page {
            return true;
        }
        let (Ok(start), Ok(other)) = (Url::parse(&self.config.start_page), Url::parse(url)) else {
            return false;
        };
        let alias_host = format!("{}.localhost", start.scheme());
        matches!(other.scheme(), "http" | "https")
            && other.host_str() == Some(alias_host.as_str())
            && other.path() == start.path()
    }

    /// Screen load: reset transient state, probe, load the start page.
    pub fn launch(&mut self) -> Vec<ShellEffect> {
        self.chrome = Self::initial_chrome(&self.config);
        self.current_url = None;

        let mut effects = Vec::new();
        if let Some(url) = &self.config.probe_url {
            effects.push(ShellEffect::Probe(url.clone()));
        }
        effects.push(ShellEffect::SetStatusBarHidden(true));
        effects.push(ShellEffect::LoadUrl(self.config.start_page.clone()));
        effects
    }

    /// Re-reads clipboard and history into the suggestion list.
    pub fn refresh_suggestions(&mut self) {
        let clipboard_url = clipboard::clipboard_url(self.clipboard.as_mut());
        let history = self
            .history
            .recent(self.config.display_limit)
            .unwrap_or_else(|e| {
                log::warn!("[HISTORY] read failed: {}", e);
                Vec::new()
            });
        self.chrome.suggestions =
            suggestion_list::build(clipboard_url.as_deref(), &history, self.config.display_limit);
    }

    pub fn perform(&mut self, action: ShellAction) -> Vec<ShellEffect> {
        match action {
            ShellAction::ShowChrome => self.show_chrome(),
            ShellAction::Reload => self.reload(),
            ShellAction::Dismiss => self.dismiss(),
        }
    }

    /// Swipe up: capture the page URL, fade the overlay and status bar in,
    /// focus the address field, refresh the list.
    pub fn show_chrome(&mut self) -> Vec<ShellEffect> {
        if let Some(url) = self.current_url.clone() {
            if !self.is_start_page(&url) {
                self.chrome.address_text = url;
            }
        }
        self.chrome.overlay_visible = true;
        self.chrome.status_bar_hidden = false;
        self.chrome.address_focused = true;
        self.refresh_suggestions();
        vec![ShellEffect::SetStatusBarHidden(false), self.render()]
    }

    /// Swipe down: reload and pulse.
    pub fn reload(&mut self) -> Vec<ShellEffect> {
        vec![
            ShellEffect::Reload,
            ShellEffect::Feedback(FeedbackKind::Success),
        ]
    }

    /// Fades the overlay out, drops focus, hides the status bar again.
    pub fn dismiss(&mut self) -> Vec<ShellEffect> {
        self.chrome.overlay_visible = false;
        self.chrome.address_focused = false;
        self.chrome.status_bar_hidden = true;
        vec![ShellEffect::SetStatusBarHidden(true), self.render()]
    }

    /// Address-field submit. Unparseable input is ignored.
    pub fn submit(&mut self, input: &str) -> Vec<ShellEffect> {
        let Some(url) = resolve_address(input) else {
            log::debug!("[GO] ignoring unparseable input {:?}", input);
            return Vec::new();
        };

        self.chrome.address_text = url.clone();
        if let Err(e) = self.history.insert(&url) {
            log::warn!("[HISTORY] insert failed: {}", e);
        }

        let mut effects = vec![ShellEffect::LoadUrl(url.clone())];
        if self.config.reachability_check {
            effects.push(ShellEffect::CheckReachability(url));
        }
        effects
    }

    /// Row tap. "None" rows and unknown indexes do nothing.
    pub fn select_row(&mut self, section: usize, row: usize) -> Vec<ShellEffect> {
        let Some(url) =
            suggestion_list::selected_url(&self.chrome.suggestions, section, row).map(str::to_string)
        else {
            return Vec::new();
        };
        self.chrome.address_text = url.clone();
        self.submit(&url)
    }

    /// Footer button. Asks first when confirmation is enabled.
    pub fn request_clear_history(&mut self) -> Vec<ShellEffect> {
        if self.config.confirm_clear {
            self.chrome.alert = Some(Alert::ConfirmClear);
            vec![self.render()]
        } else {
            self.clear_history()
        }
    }

    /// Answer to the confirmation alert.
    /// Ignored unless the confirmation alert is the one showing.
    pub fn confirm_clear_history(&mut self, confirmed: bool) -> Vec<ShellEffect> {
        if self.chrome.alert != Some(Alert::ConfirmClear) {
            log::debug!("[HISTORY] stale clear confirmation ignored");
            return Vec::new();
        }
        self.chrome.alert = None;
        if confirmed {
            self.clear_history()
        } else {
            vec![self.render()]
        }
    }

    fn clear_history(&mut self) -> Vec<ShellEffect> {
        if let Err(e) = self.history.clear() {
            log::warn!("[HISTORY] clear failed: {}", e);
        }
        self.refresh_suggestions();
        vec![self.render()]
    }

    /// Mirrors load progress; past the threshold the overlay closes itself.
    pub fn on_progress(&mut self, value: f64) -> Vec<ShellEffect> {
        let value = if value.is_finite() { value.clamp(0.0, 1.0) } else { 0.0 };
        self.chrome.progress = value;
        if value > self.config.dismiss_threshold && self.chrome.overlay_visible {
            return self.dismiss();
        }
        vec![self.render()]
    }

    /// Keyboard frame change: grow the address bar container by the keyboard height.
    pub fn on_keyboard(&mut self, visible: bool, height: f64) -> Vec<ShellEffect> {
        let height = if height.is_finite() { height.max(0.0) } else { 0.0 };
        self.chrome.address_bar_height = if visible {
            self.config.bar_height + height
        } else {
            self.config.bar_height
        };
        vec![self.render()]
    }

    pub fn on_load_started(&mut self, url: &str) -> Vec<ShellEffect> {
        self.current_url = Some(url.to_string());
        self.chrome.progress_visible = true;
        vec![self.render()]
    }

    pub fn on_load_finished(&mut self, url: &str) -> Vec<ShellEffect> {
        self.current_url = Some(url.to_string());
        self.chrome.progress_visible = false;
        self.chrome.progress = 0.0;
        vec![self.render()]
    }

    pub fn on_url_changed(&mut self, url: &str) {
        self.current_url = Some(url.to_string());
    }

    pub fn on_load_failed(&mut self, url: &str) -> Vec<ShellEffect> {
        log::warn!("[NAV] load failed: {}", url);
        self.chrome.alert = Some(Alert::LoadFailed {
            url: url.to_string(),
        });
        vec![self.render()]
    }

    /// Dismisses the current alert. After a load failure this stops the load
    /// and resets progress; for the clear confirmation it counts as "No".
    pub fn acknowledge_alert(&mut self) -> Vec<ShellEffect> {
        match self.chrome.alert.take() {
            Some(Alert::LoadFailed { .. }) => {
                self.chrome.progress = 0.0;
                vec![ShellEffect::StopLoading, self.render()]
            }
            Some(Alert::ConfirmClear) => vec![self.render()],
            None => Vec::new(),
        }
    }

    /// Full chrome snapshot, sent when a fresh page's chrome script starts.
    pub fn on_ui_ready(&mut self) -> Vec<ShellEffect> {
        if self.chrome.overlay_visible {
            self.refresh_suggestions();
        }
        vec![self.render()]
    }
}
