//! Pure state transitions: (State, Key) → Transition.
//!
//! This is the core logic of the widgets. Fully testable without a terminal.
//! Keys a widget does not understand return the state unchanged.

use super::state::{
    FormState, FormTransition, Key, MenuState, MenuTransition, SearchState, SearchTransition,
};

// ============================================================================
// MENU
// ============================================================================

/// Menu: Up/Down wrap around, Enter or a shortcut commits.
///
/// When two entries share a shortcut the first one wins.
pub fn update_menu(state: MenuState, key: &Key, shortcuts: &[char]) -> MenuTransition {
    if state.len == 0 {
        return MenuTransition::Stay(state);
    }

    match key {
        Key::Down => MenuTransition::Stay(MenuState {
            selection: (state.selection + 1) % state.len,
            ..state
        }),
        Key::Up => MenuTransition::Stay(MenuState {
            selection: (state.selection + state.len - 1) % state.len,
            ..state
        }),
        Key::Enter => MenuTransition::Commit(state.selection),
        Key::Char(c) => match shortcuts.iter().position(|s| s == c) {
            Some(index) => MenuTransition::Commit(index),
            None => MenuTransition::Stay(state),
        },
        _ => MenuTransition::Stay(state),
    }
}

// ============================================================================
// SEARCH
// ============================================================================

/// Search: edit the buffer or move through suggestions.
///
/// Edits only set `needs_requery`; the effects layer calls autocomplete.
/// The selection is clamped to `None..=Some(len - 1)` and never wraps.
pub fn update_search(mut state: SearchState, key: &Key) -> SearchTransition {
    match key {
        Key::Backspace => {
            // Trims from the end even if the cursor were elsewhere
            if state.buffer.pop().is_some() {
                state.cursor = state.cursor.saturating_sub(1);
                state.needs_requery = true;
            }
        }
        Key::Down => {
            let last = state.results.len().checked_sub(1);
            state.selection = match (state.selection, last) {
                (_, None) => None,
                (None, Some(_)) => Some(0),
                (Some(i), Some(last)) => Some((i + 1).min(last)),
            };
        }
        Key::Up => {
            state.selection = match state.selection {
                None | Some(0) => None,
                Some(i) => Some(i - 1),
            };
        }
        Key::Char(c) if !c.is_control() => {
            if state.buffer.chars().count() < state.capacity {
                state.buffer.push(*c);
                state.cursor += 1;
                state.needs_requery = true;
            }
        }
        Key::Enter => return SearchTransition::Finish(state.value()),
        _ => {}
    }
    SearchTransition::Continue(state)
}

// ============================================================================
// FORM
// ============================================================================

/// Form: line editing on the current field, Enter moves to the next one.
///
/// There is no way back to an earlier field.
pub fn update_form(mut state: FormState, key: &Key) -> FormTransition {
    match key {
        Key::Char(c) if !c.is_control() => {
            if state.buffer.chars().count() < state.current_capacity() {
                state.buffer.push(*c);
            }
        }
        Key::Backspace => {
            state.buffer.pop();
        }
        Key::Enter => {
            let value = std::mem::take(&mut state.buffer);
            state.values.push(value);
            if state.values.len() >= state.capacities.len() {
                return FormTransition::Finish(state.values);
            }
        }
        _ => {}
    }
    FormTransition::Continue(state)
}

// ============================================================================
// TESTS
// ============================================================================
