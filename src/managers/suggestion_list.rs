//! Data source for the list under the address bar.
//!
//! Section 0 is the clipboard suggestion, section 1 the recent history.
//! Each section always has at least one row; empty sections show "None".

use crate::types::suggestion::{SuggestionList, SuggestionRow, SuggestionSection};

pub const CLIPBOARD_SECTION: usize = 0;
pub const HISTORY_SECTION: usize = 1;

pub const CLIPBOARD_TITLE: &str = "Clipboard";
pub const HISTORY_TITLE: &str = "Recent History";
pub const CLEAR_HISTORY_LABEL: &str = "Clear History";

/// Builds the two-section list.
///
/// `clipboard_url` must already be gated to http(s) text. At most `limit`
/// history rows are shown; the clear button only appears when history exists.
pub fn build(clipboard_url: Option<&str>, history: &[String], limit: usize) -> SuggestionList {
    let clipboard_row = match clipboard_url {
        Some(url) if !url.is_empty() => SuggestionRow::url(url),
        _ => SuggestionRow::none(),
    };

    let (history_rows, footer) = if history.is_empty() {
        (vec![SuggestionRow::none()], None)
    } else {
        let rows = history
            .iter()
            .take(limit)
            .map(|url| SuggestionRow::url(url))
            .collect();
        (rows, Some(CLEAR_HISTORY_LABEL.to_string()))
    };

    SuggestionList {
        sections: vec![
            SuggestionSection {
                title: CLIPBOARD_TITLE.to_string(),
                rows: vec![clipboard_row],
                footer: None,
            },
            SuggestionSection {
                title: HISTORY_TITLE.to_string(),
                rows: history_rows,
                footer,
            },
        ],
    }
}

/// URL behind a row, if the row exists and can be selected.
pub fn selected_url(list: &SuggestionList, section: usize, row: usize) -> Option<&str> {
    list.row(section, row)
        .filter(|r| r.selectable)
        .map(|r| r.text.as_str())
}
