//! Key input: the blocking key source seen by the widgets.
//!
//! `CrosstermKeys` reads the real terminal. `ScriptedKeys` replays a fixed
//! sequence so widget loops can run against a `TestBackend`.

use std::collections::VecDeque;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::error::{DialogError, Result};

use super::state::Key;

/// Blocking source of decoded keys.
pub trait KeySource {
    /// Wait for the next key the widgets understand.
    fn next_key(&mut self) -> Result<Key>;
}

// ============================================================================
// KEY MAPPING
// ============================================================================

/// Map a crossterm key event to a [`Key`].
///
/// Returns None for keys no widget reacts to.
pub fn map_key(key: KeyEvent) -> Option<Key> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Key::Interrupt),
            // ^H is backspace on some terminals
            KeyCode::Char('h') => Some(Key::Backspace),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Up => Some(Key::Up),
        KeyCode::Down => Some(Key::Down),
        KeyCode::Enter | KeyCode::Char('\n') | KeyCode::Char('\r') => Some(Key::Enter),
        // Many terminals send DEL or BS for the backspace key
        KeyCode::Backspace | KeyCode::Char('\x08') | KeyCode::Char('\x7f') => {
            Some(Key::Backspace)
        }
        KeyCode::Char(c) if !c.is_control() => Some(Key::Char(c)),
        _ => None,
    }
}

// ============================================================================
// SOURCES
// ============================================================================

/// Reads key presses from the terminal via crossterm.
#[derive(Debug, Default)]
pub struct CrosstermKeys;

impl KeySource for CrosstermKeys {
    fn next_key(&mut self) -> Result<Key> {
        loop {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if let Some(key) = map_key(key) {
                        return Ok(key);
                    }
                }
                _ => {} // ignore releases, mouse, resize, etc.
            }
        }
    }
}

/// Replays a scripted key sequence, then fails with `InputExhausted`.
#[derive(Debug, Default, Clone)]
pub struct ScriptedKeys {
    keys: VecDeque<Key>,
}

impl ScriptedKeys {
    pub fn new(keys: impl IntoIterator<Item = Key>) -> Self {
        ScriptedKeys {
            keys: keys.into_iter().collect(),
        }
    }

    /// Append `text` as individual character keys.
    pub fn typed(mut self, text: &str) -> Self {
        self.keys.extend(text.chars().map(Key::Char));
        self
    }

    /// Append more keys.
    pub fn then(mut self, keys: impl IntoIterator<Item = Key>) -> Self {
        self.keys.extend(keys);
        self
    }

    pub fn remaining(&self) -> usize {
        self.keys.len()
    }
}

impl KeySource for ScriptedKeys {
    fn next_key(&mut self) -> Result<Key> {
        self.keys.pop_front().ok_or(DialogError::InputExhausted)
    }
}

// ============================================================================
// TESTS
// ============================================================================
