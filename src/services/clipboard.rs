//! Read-only clipboard access for the URL suggestion row.

use crate::types::errors::ClipboardError;

/// Source of the current clipboard text.
pub trait ClipboardSource {
    /// Returns the clipboard text, or `None` if it holds no text.
    fn read_text(&mut self) -> Result<Option<String>, ClipboardError>;
}

/// System clipboard via `arboard`. The backend is opened lazily and reopened
/// after a failure, so a missing display at startup is not fatal.
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self { inner: None }
    }
}

impl ClipboardSource for SystemClipboard {
    fn read_text(&mut self) -> Result<Option<String>, ClipboardError> {
        if self.inner.is_none() {
            let clipboard = arboard::Clipboard::new()
                .map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
            self.inner = Some(clipboard);
        }
        let Some(clipboard) = self.inner.as_mut() else {
            return Ok(None);
        };

        match clipboard.get_text() {
            Ok(text) => Ok(Some(text)),
            Err(arboard::Error::ContentNotAvailable) => Ok(None),
            Err(e) => {
                self.inner = None;
                Err(ClipboardError::ReadFailed(e.to_string()))
            }
        }
    }
}

/// In-memory clipboard, used headless and in tests.
#[derive(Debug, Default, Clone)]
pub struct MemoryClipboard {
    text: Option<String>,
}

impl MemoryClipboard {
    pub fn new(text: Option<&str>) -> Self {
        Self {
            text: text.map(str::to_string),
        }
    }

    pub fn set_text(&mut self, text: Option<&str>) {
        self.text = text.map(str::to_string);
    }
}

impl ClipboardSource for MemoryClipboard {
    fn read_text(&mut self) -> Result<Option<String>, ClipboardError> {
        Ok(self.text.clone())
    }
}

/// Returns `true` if `text` starts with an `http://` or `https://` scheme.
///
/// Matching is case-sensitive and anchored at the start of the string.
pub fn looks_like_web_url(text: &str) -> bool {
    text.starts_with("http://") || text.starts_with("https://")
}

/// Clipboard text if it looks like a web URL, otherwise `None`.
pub fn clipboard_url(source: &mut dyn ClipboardSource) -> Option<String> {
    match source.read_text() {
        Ok(Some(text)) if looks_like_web_url(&text) => Some(text),
        Ok(_) => None,
        Err(e) => {
            log::debug!("[CLIPBOARD] {}", e);
            None
        }
    }
}
