use std::fmt;

// === StoreError ===

/// Errors raised by the key-value defaults store.
#[derive(Debug)]
pub enum StoreError {
    /// Database operation failed.
    DatabaseError(String),
    /// A stored value could not be encoded or decoded.
    SerializationError(String),
    /// The stored value exists but has a different shape than requested.
    TypeMismatch(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::DatabaseError(msg) => write!(f, "Defaults database error: {}", msg),
            StoreError::SerializationError(msg) => {
                write!(f, "Defaults serialization error: {}", msg)
            }
            StoreError::TypeMismatch(key) => {
                write!(f, "Defaults value has unexpected type: {}", key)
            }
        }
    }
}

impl std::error::Error for StoreError {}

// === HistoryError ===

/// Errors related to the recency list.
#[derive(Debug)]
pub enum HistoryError {
    /// The URL string is empty.
    EmptyUrl,
    /// The underlying store failed.
    StoreError(String),
}

impl fmt::Display for HistoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HistoryError::EmptyUrl => write!(f, "History URL cannot be empty"),
            HistoryError::StoreError(msg) => write!(f, "History store error: {}", msg),
        }
    }
}

impl std::error::Error for HistoryError {}

impl From<StoreError> for HistoryError {
    fn from(e: StoreError) -> Self {
        HistoryError::StoreError(e.to_string())
    }
}

// === SettingsError ===

/// Errors related to settings management.
#[derive(Debug)]
pub enum SettingsError {
    /// An I/O error occurred while reading or writing settings.
    IoError(String),
    /// Failed to serialize or deserialize settings.
    SerializationError(String),
    /// The provided settings key is invalid.
    InvalidKey(String),
    /// The provided settings value is invalid.
    InvalidValue(String),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::IoError(msg) => write!(f, "Settings I/O error: {}", msg),
            SettingsError::SerializationError(msg) => {
                write!(f, "Settings serialization error: {}", msg)
            }
            SettingsError::InvalidKey(key) => write!(f, "Invalid settings key: {}", key),
            SettingsError::InvalidValue(msg) => {
                write!(f, "Invalid settings value: {}", msg)
            }
        }
    }
}

impl std::error::Error for SettingsError {}

// === ClipboardError ===

/// Errors related to reading the system clipboard.
#[derive(Debug)]
pub enum ClipboardError {
    /// No clipboard backend is available (headless session, no display).
    Unavailable(String),
    /// The clipboard exists but reading text failed.
    ReadFailed(String),
}

impl fmt::Display for ClipboardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClipboardError::Unavailable(msg) => write!(f, "Clipboard unavailable: {}", msg),
            ClipboardError::ReadFailed(msg) => write!(f, "Clipboard read failed: {}", msg),
        }
    }
}

impl std::error::Error for ClipboardError {}

// === ProbeError ===

/// Errors related to outbound connectivity and reachability checks.
#[derive(Debug)]
pub enum ProbeError {
    /// The target URL is not a valid http(s) URL.
    InvalidUrl(String),
    /// The request could not be sent or no response arrived.
    NetworkError(String),
}

impl fmt::Display for ProbeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProbeError::InvalidUrl(url) => write!(f, "Invalid probe URL: {}", url),
            ProbeError::NetworkError(msg) => write!(f, "Probe network error: {}", msg),
        }
    }
}

impl std::error::Error for ProbeError {}

// === ShortcutError ===

/// Errors related to gesture and keyboard shortcut bindings.
#[derive(Debug)]
pub enum ShortcutError {
    /// No binding exists for the given keys.
    NotFound(String),
    /// The keys are already bound to another action.
    Conflict(String),
    /// The provided key combination is invalid.
    InvalidKeys(String),
    /// The action name is not one the shell understands.
    UnknownAction(String),
}

impl fmt::Display for ShortcutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShortcutError::NotFound(keys) => write!(f, "No shortcut bound to: {}", keys),
            ShortcutError::Conflict(msg) => write!(f, "Shortcut conflict: {}", msg),
            ShortcutError::InvalidKeys(keys) => write!(f, "Invalid shortcut keys: {}", keys),
            ShortcutError::UnknownAction(action) => write!(f, "Unknown shell action: {}", action),
        }
    }
}

impl std::error::Error for ShortcutError {}
