use serde::{Deserialize, Serialize};

/// Placeholder text for an empty section.
pub const NONE_LABEL: &str = "None";

/// A single row in the suggestion list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SuggestionRow {
    pub text: String,
    pub selectable: bool,
}

impl SuggestionRow {
    pub fn url(text: &str) -> Self {
        Self {
            text: text.to_string(),
            selectable: true,
        }
    }

    pub fn none() -> Self {
        Self {
            text: NONE_LABEL.to_string(),
            selectable: false,
        }
    }
}

/// One titled section of the suggestion list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SuggestionSection {
    pub title: String,
    pub rows: Vec<SuggestionRow>,
    /// Label of the footer button, if the section has one.
    pub footer: Option<String>,
}

/// The two sections shown under the address bar: clipboard, then recent history.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct SuggestionList {
    pub sections: Vec<SuggestionSection>,
}

impl SuggestionList {
    pub fn section(&self, index: usize) -> Option<&SuggestionSection> {
        self.sections.get(index)
    }

    pub fn row(&self, section: usize, row: usize) -> Option<&SuggestionRow> {
        self.sections.get(section).and_then(|s| s.rows.get(row))
    }
}
