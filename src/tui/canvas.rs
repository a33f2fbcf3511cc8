//! The drawing surface every widget runs on.
//!
//! A `Canvas` pairs a ratatui terminal with a key source. Widgets draw whole
//! frames through it; ratatui diffs them against the previous frame, so only
//! changed cells reach the terminal.

use ratatui::backend::Backend;
use ratatui::layout::Rect;
use ratatui::{Frame, Terminal};

use crate::error::{DialogError, Result};

use super::geometry;
use super::input::KeySource;
use super::state::Key;

pub struct Canvas<B: Backend> {
    terminal: Terminal<B>,
    keys: Box<dyn KeySource>,
}

impl<B: Backend> Canvas<B> {
    pub fn new(terminal: Terminal<B>, keys: impl KeySource + 'static) -> Self {
        Canvas {
            terminal,
            keys: Box::new(keys),
        }
    }

    /// The whole screen.
    pub fn screen(&self) -> Result<Rect> {
        let size = self.terminal.size().map_err(DialogError::backend)?;
        Ok(Rect::new(0, 0, size.width, size.height))
    }

    /// A centered window of `height` x `width`, borders included.
    ///
    /// Fails with `TerminalTooSmall` if it does not fit.
    pub fn window(&self, height: usize, width: usize) -> Result<Rect> {
        geometry::centered(self.screen()?, height, width)
    }

    /// Draw one full frame. Cells not drawn this frame end up blank.
    pub fn draw(&mut self, render: impl FnOnce(&mut Frame)) -> Result<()> {
        self.terminal.draw(render).map_err(DialogError::backend)?;
        Ok(())
    }

    /// Blank the whole screen.
    pub fn clear(&mut self) -> Result<()> {
        self.terminal.clear().map_err(DialogError::backend)
    }

    /// Block until the next key. Ctrl+C becomes `Interrupted`.
    pub fn read_key(&mut self) -> Result<Key> {
        match self.keys.next_key()? {
            Key::Interrupt => Err(DialogError::Interrupted),
            key => Ok(key),
        }
    }

    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }
}

// ============================================================================
// TESTS
// ============================================================================
