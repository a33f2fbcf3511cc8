//! Widget state algebra: pure types, zero effects.
//!
//! Each widget run owns one of these records, starts it fresh, threads it
//! through `update` one key at a time, and drops it on exit. Nothing here
//! outlives a single invocation.

use std::fmt;

use ratatui::backend::Backend;

use crate::error::Result;
use crate::types::{Outcome, SearchResult};

use super::canvas::Canvas;

// ============================================================================
// KEYS
// ============================================================================

/// A decoded keystroke, decoupled from the terminal library's key events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// A printable character.
    Char(char),
    Up,
    Down,
    Backspace,
    Enter,
    /// Ctrl+C. Never reaches the transition functions; the canvas turns it
    /// into an error.
    Interrupt,
}

// ============================================================================
// MENU
// ============================================================================

/// Boxed callback run when a menu entry is chosen.
pub type Action<'a, B> = Box<dyn FnMut(&mut Canvas<B>) -> Result<Outcome> + 'a>;

/// What choosing a menu entry does.
pub enum MenuAction<'a, B: Backend> {
    /// Run the callback with the menu's canvas.
    Invoke(Action<'a, B>),
    /// Leave the menu without a result.
    Exit,
}

impl<B: Backend> fmt::Debug for MenuAction<'_, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MenuAction::Invoke(_) => f.write_str("Invoke(..)"),
            MenuAction::Exit => f.write_str("Exit"),
        }
    }
}

/// One selectable line of a menu.
#[derive(Debug)]
pub struct MenuEntry<'a, B: Backend> {
    /// Key that selects this entry directly.
    pub shortcut: char,
    pub label: String,
    pub action: MenuAction<'a, B>,
}

impl<'a, B: Backend> MenuEntry<'a, B> {
    /// An entry that runs `action` when chosen.
    pub fn new(
        shortcut: char,
        label: impl Into<String>,
        action: impl FnMut(&mut Canvas<B>) -> Result<Outcome> + 'a,
    ) -> Self {
        MenuEntry {
            shortcut,
            label: label.into(),
            action: MenuAction::Invoke(Box::new(action)),
        }
    }

    /// An entry that leaves the menu.
    pub fn exit(shortcut: char, label: impl Into<String>) -> Self {
        MenuEntry {
            shortcut,
            label: label.into(),
            action: MenuAction::Exit,
        }
    }

    /// The text drawn for this entry: `(k) Label`.
    pub fn item_text(&self) -> String {
        format!("({}) {}", self.shortcut, self.label)
    }
}

/// Menu cursor. Always in `0..len`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuState {
    pub selection: usize,
    pub len: usize,
}

impl MenuState {
    pub fn new(len: usize) -> Self {
        MenuState { selection: 0, len }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuTransition {
    /// Keep reading keys with this state.
    Stay(MenuState),
    /// The entry at this index was chosen.
    Commit(usize),
}

// ============================================================================
// SEARCH
// ============================================================================

/// Incremental search state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchState {
    /// What the user has typed. Edited at the end only.
    pub buffer: String,
    /// Display column of the text cursor, relative to the start of input.
    pub cursor: usize,
    /// Highlighted suggestion. None means "use the typed buffer".
    pub selection: Option<usize>,
    /// Suggestions for the current buffer.
    pub results: Vec<SearchResult>,
    /// Set by an edit, cleared once autocomplete has been called.
    pub needs_requery: bool,
    /// Maximum characters the input line can hold.
    pub capacity: usize,
}

impl SearchState {
    pub fn new(capacity: usize) -> Self {
        SearchState {
            buffer: String::new(),
            cursor: 0,
            selection: None,
            results: Vec::new(),
            needs_requery: false,
            capacity,
        }
    }

    /// Replace the suggestions after a requery. Resets the selection.
    pub fn apply_results(&mut self, mut results: Vec<SearchResult>, limit: usize) {
        results.truncate(limit);
        self.results = results;
        self.selection = None;
        self.needs_requery = false;
    }

    /// The selected suggestion's match text, or the typed buffer.
    pub fn value(&self) -> String {
        self.selection
            .and_then(|i| self.results.get(i))
            .map(|result| result.match_text.clone())
            .unwrap_or_else(|| self.buffer.clone())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchTransition {
    Continue(SearchState),
    /// Enter was pressed; this is the search's value.
    Finish(String),
}

// ============================================================================
// FORM
// ============================================================================

/// Form entry state. Fields are filled strictly in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    /// Committed values, one per completed field.
    pub values: Vec<String>,
    /// Value being typed into the current field.
    pub buffer: String,
    /// Maximum characters per field, in field order.
    pub capacities: Vec<usize>,
}

impl FormState {
    pub fn new(capacities: Vec<usize>) -> Self {
        FormState {
            values: Vec::new(),
            buffer: String::new(),
            capacities,
        }
    }

    /// Index of the field being edited.
    pub fn current(&self) -> usize {
        self.values.len()
    }

    pub fn current_capacity(&self) -> usize {
        self.capacities.get(self.current()).copied().unwrap_or(0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormTransition {
    Continue(FormState),
    /// The last field was committed.
    Finish(Vec<String>),
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;

    #[test]
    fn search_state_starts_empty_with_no_selection() {
        let state = SearchState::new(10);
        assert_eq!(state.buffer, "");
        assert_eq!(state.selection, None);
        assert!(state.results.is_empty());
        assert!(!state.needs_requery);
    }

    #[test]
    fn value_prefers_selected_result() {
        let mut state = SearchState::new(10);
        state.buffer = "al".into();
        state.apply_results(vec![SearchResult::new("alpha", "ALPHA")], 5);
        assert_eq!(state.value(), "al");
        state.selection = Some(0);
        assert_eq!(state.value(), "alpha");
    }

    #[test]
    fn apply_results_truncates_and_resets() {
        let mut state = SearchState::new(10);
        state.selection = Some(1);
        state.needs_requery = true;
        let results = (0..5).map(|i| SearchResult::new(i.to_string(), "")).collect();
        state.apply_results(results, 3);
        assert_eq!(state.results.len(), 3);
        assert_eq!(state.selection, None);
        assert!(!state.needs_requery);
    }

    #[test]
    fn form_state_tracks_current_field() {
        let mut state = FormState::new(vec![5, 7]);
        assert_eq!(state.current(), 0);
        assert_eq!(state.current_capacity(), 5);
        state.values.push("x".into());
        assert_eq!(state.current(), 1);
        assert_eq!(state.current_capacity(), 7);
    }

    #[test]
    fn menu_entry_item_text_shows_shortcut() {
        let entry: MenuEntry<'_, TestBackend> = MenuEntry::exit('q', "Quit");
        assert_eq!(entry.item_text(), "(q) Quit");
        assert!(matches!(entry.action, MenuAction::Exit));
    }

    #[test]
    fn menu_state_starts_at_top() {
        assert_eq!(MenuState::new(3), MenuState { selection: 0, len: 3 });
    }
}
