use serde::{Deserialize, Serialize};

use super::suggestion::SuggestionList;

/// Direction of a multi-finger swipe on the content view.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SwipeDirection {
    Up,
    Down,
}

/// Actions a gesture or shortcut can trigger.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ShellAction {
    ShowChrome,
    Reload,
    Dismiss,
}

impl ShellAction {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "show_chrome" => Some(ShellAction::ShowChrome),
            "reload" => Some(ShellAction::Reload),
            "dismiss" => Some(ShellAction::Dismiss),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ShellAction::ShowChrome => "show_chrome",
            ShellAction::Reload => "reload",
            ShellAction::Dismiss => "dismiss",
        }
    }
}

/// Kind of haptic pulse requested from the device.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FeedbackKind {
    Success,
    Warning,
    Error,
}

impl FeedbackKind {
    /// Vibration pattern in milliseconds for the web vibration API.
    pub fn pattern(&self) -> &'static [u32] {
        match self {
            FeedbackKind::Success => &[20, 60, 20],
            FeedbackKind::Warning => &[40, 80, 40],
            FeedbackKind::Error => &[60, 60, 60, 60, 60],
        }
    }
}

/// Modal alert shown above the overlay.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Alert {
    /// A page failed to load; single "OK" button.
    LoadFailed { url: String },
    /// Confirmation before wiping the recency list; "No" / "Yes" buttons.
    ConfirmClear,
}

impl Alert {
    pub fn title(&self) -> &'static str {
        match self {
            Alert::LoadFailed { .. } => "Fail",
            Alert::ConfirmClear => "Confirm",
        }
    }

    pub fn message(&self) -> String {
        match self {
            Alert::LoadFailed { url } => format!("Fail to load \"{}\"", url),
            Alert::ConfirmClear => "Clear history?".to_string(),
        }
    }
}

/// Everything the injected chrome script needs to draw itself.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChromeState {
    pub overlay_visible: bool,
    pub status_bar_hidden: bool,
    pub address_text: String,
    pub address_focused: bool,
    pub address_bar_height: f64,
    pub fade_ms: u32,
    pub focus_ms: u32,
    pub progress: f64,
    pub progress_visible: bool,
    pub suggestions: SuggestionList,
    pub alert: Option<Alert>,
}

/// Side effects the shell controller asks the window layer to perform.
#[derive(Debug, Clone, PartialEq)]
pub enum ShellEffect {
    /// Fire-and-forget connectivity probe.
    Probe(String),
    LoadUrl(String),
    /// Background check that reports a load failure if the host is unreachable.
    CheckReachability(String),
    Reload,
    StopLoading,
    Feedback(FeedbackKind),
    SetStatusBarHidden(bool),
    Render(Box<ChromeState>),
}
