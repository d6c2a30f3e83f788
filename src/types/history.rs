/// Key under which the recency list is persisted in the defaults store.
pub const HISTORY_KEY: &str = "history";

/// Number of history rows shown in the suggestion list.
pub const DEFAULT_DISPLAY_LIMIT: usize = 5;
