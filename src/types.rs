//! Domain types for termdialog.
//!
//! Plain data shared by the widgets and the CLI. Anything tied to a
//! terminal backend (menu entries and their actions) lives in `tui::state`.

use serde::Serialize;

// ============================================================================
// WIDGET INPUTS
// ============================================================================

/// One autocomplete suggestion.
///
/// Produced fresh on every edit of the search buffer and discarded on the
/// next one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// The text returned to the host if this suggestion is selected.
    pub match_text: String,
    /// Extra context shown next to the match.
    pub annotation: String,
}

impl SearchResult {
    pub fn new(match_text: impl Into<String>, annotation: impl Into<String>) -> Self {
        SearchResult {
            match_text: match_text.into(),
            annotation: annotation.into(),
        }
    }

    /// The line shown in the result list: match and annotation, space separated.
    pub fn display_line(&self) -> String {
        if self.annotation.is_empty() {
            self.match_text.clone()
        } else {
            format!("{} {}", self.match_text, self.annotation)
        }
    }
}

/// A labeled form field. Resolves to exactly one string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub label: String,
}

impl FormField {
    pub fn new(label: impl Into<String>) -> Self {
        FormField { label: label.into() }
    }
}

/// Ordered cell texts of one table row.
///
/// Every row of a table must have the same number of cells as the first.
pub type TableRow = Vec<String>;

// ============================================================================
// WIDGET OUTPUTS
// ============================================================================

/// What a widget (or a menu action) hands back to its caller.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Outcome {
    /// Nothing to report (exit entry, table, alert).
    #[default]
    Nothing,
    /// A single string (search, menu label).
    Text(String),
    /// One string per form field, in field order.
    Fields(Vec<String>),
}

impl From<String> for Outcome {
    fn from(text: String) -> Self {
        Outcome::Text(text)
    }
}

impl From<Vec<String>> for Outcome {
    fn from(fields: Vec<String>) -> Self {
        Outcome::Fields(fields)
    }
}

// ============================================================================
// CONFIGURATION
// ============================================================================

/// Output format for results printed by the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Plain text, one value per line.
    #[default]
    Human,
    /// Machine-readable JSON.
    Json,
}

// ============================================================================
// TESTS
// ============================================================================
