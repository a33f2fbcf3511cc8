//! TUI effects boundary: widget loops and terminal lifecycle.
//!
//! This is the only module with side effects. Each `run_*` function owns one
//! widget invocation: it builds fresh state, then draws, reads one key and
//! applies the pure transition until the widget finishes. Decisions live in
//! `update`, drawing in `view`.

use std::io::{self, Stdout};

use crossterm::ExecutableCommand;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::{Backend, CrosstermBackend};
use tracing::{debug, info};

use crate::autocomplete::Autocomplete;
use crate::error::{DialogError, Result};
use crate::table::TableLayout;
use crate::types::{FormField, Outcome, TableRow};

use super::canvas::Canvas;
use super::geometry::{self, BORDER};
use super::input::CrosstermKeys;
use super::state::{
    FormState, FormTransition, MenuAction, MenuEntry, MenuState, MenuTransition, SearchState,
    SearchTransition,
};
use super::update::{update_form, update_menu, update_search};
use super::view;

/// Canvas on the real terminal.
pub type TerminalCanvas = Canvas<CrosstermBackend<Stdout>>;

// ============================================================================
// TERMINAL LIFECYCLE
// ============================================================================

/// Set up the terminal for TUI mode.
fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    io::stdout().execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(io::stdout());
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore the terminal to normal mode.
fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

/// Install a panic hook that restores the terminal before printing the panic.
fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        // Best-effort terminal restoration
        let _ = restore_terminal();
        original_hook(panic_info);
    }));
}

/// Run `body` on a full-screen canvas, restoring the terminal afterwards.
///
/// The terminal is restored whether `body` succeeds or fails. The body's
/// error wins over a restore error.
pub fn session<T>(body: impl FnOnce(&mut TerminalCanvas) -> Result<T>) -> Result<T> {
    install_panic_hook();
    let terminal = match setup_terminal() {
        Ok(terminal) => terminal,
        Err(e) => {
            let _ = restore_terminal();
            return Err(e);
        }
    };
    let mut canvas = Canvas::new(terminal, CrosstermKeys);
    debug!(screen = ?canvas.screen().ok(), "session started");

    let result = body(&mut canvas);
    let restored = restore_terminal();
    if let Err(e) = &result {
        info!(error = %e, "session aborted");
    }
    let value = result?;
    restored?;
    Ok(value)
}

// ============================================================================
// MENU
// ============================================================================

/// Show a selection menu over the whole canvas and dispatch the chosen entry.
///
/// `Exit` entries return `Outcome::Nothing`. With `looping`, the menu comes
/// back after every action, selection reset, until an `Exit` entry is chosen.
/// An action's error aborts the menu.
pub fn run_menu<B: Backend>(
    canvas: &mut Canvas<B>,
    title: &str,
    entries: &mut [MenuEntry<'_, B>],
    looping: bool,
) -> Result<Outcome> {
    if entries.is_empty() {
        return Err(DialogError::EmptyMenu);
    }

    let items: Vec<String> = entries.iter().map(MenuEntry::item_text).collect();
    let shortcuts: Vec<char> = entries.iter().map(|entry| entry.shortcut).collect();
    let widest = items
        .iter()
        .map(|item| item.chars().count())
        .chain([title.chars().count()])
        .max()
        .unwrap_or(0);
    info!(title, entries = entries.len(), looping, "menu opened");

    loop {
        // Title row, one blank row, the entries, bottom border
        geometry::ensure_fits(canvas.screen()?, items.len() + 3, widest + BORDER)?;

        let index = select_entry(canvas, title, &items, &shortcuts)?;
        canvas.clear()?;

        let entry = &mut entries[index];
        debug!(index, label = %entry.label, "menu entry chosen");
        let outcome = match &mut entry.action {
            MenuAction::Exit => return Ok(Outcome::Nothing),
            MenuAction::Invoke(action) => action(canvas)?,
        };

        if !looping {
            return Ok(outcome);
        }
    }
}

/// Read keys until an entry is committed. Returns its index.
fn select_entry<B: Backend>(
    canvas: &mut Canvas<B>,
    title: &str,
    items: &[String],
    shortcuts: &[char],
) -> Result<usize> {
    let mut state = MenuState::new(items.len());
    loop {
        canvas.draw(|frame| {
            let area = frame.area();
            view::render_menu(frame, area, title, items, state.selection);
        })?;

        let key = canvas.read_key()?;
        match update_menu(state, &key, shortcuts) {
            MenuTransition::Stay(next) => state = next,
            MenuTransition::Commit(index) => return Ok(index),
        }
    }
}

// ============================================================================
// SEARCH
// ============================================================================

/// Incremental search: a text box re-querying `autocomplete` on every edit.
///
/// Returns the highlighted suggestion's match text, or the typed buffer if
/// nothing is highlighted.
pub fn run_search<B, A>(
    canvas: &mut Canvas<B>,
    prompt: &str,
    autocomplete: &mut A,
    limit: usize,
) -> Result<String>
where
    B: Backend,
    A: Autocomplete + ?Sized,
{
    let screen = canvas.screen()?;
    let width = geometry::default_width(screen);
    // Prompt row plus one row per suggestion
    let area = geometry::window(screen, limit.saturating_add(1), width)?;

    // Leaves one column so the cursor stays inside the border
    let capacity = width
        .saturating_sub(BORDER)
        .saturating_sub(prompt.chars().count() + 2)
        .saturating_sub(1);
    let mut state = SearchState::new(capacity);
    info!(prompt, limit, capacity, "search opened");

    loop {
        canvas.draw(|frame| view::render_search(frame, area, prompt, &state, limit))?;

        let key = canvas.read_key()?;
        state = match update_search(state, &key) {
            SearchTransition::Continue(next) => next,
            SearchTransition::Finish(value) => {
                canvas.clear()?;
                debug!(value = %value, "search finished");
                return Ok(value);
            }
        };

        if state.needs_requery {
            let results = autocomplete.complete(&state.buffer, limit)?;
            debug!(query = %state.buffer, results = results.len(), "autocomplete");
            state.apply_results(results, limit);
        }
    }
}

// ============================================================================
// FORM
// ============================================================================

/// Fill `fields` in order. Returns one value per field.
pub fn run_form<B: Backend>(
    canvas: &mut Canvas<B>,
    title: &str,
    fields: &[FormField],
) -> Result<Vec<String>> {
    if fields.is_empty() {
        return Ok(Vec::new());
    }

    let screen = canvas.screen()?;
    let width = geometry::default_width(screen);
    let area = geometry::window(screen, fields.len(), width)?;

    // Label, ": " and both borders come off the window width
    let capacities = fields
        .iter()
        .map(|field| width.saturating_sub(field.label.chars().count() + 4))
        .collect();
    let mut state = FormState::new(capacities);
    info!(title, fields = fields.len(), "form opened");

    loop {
        canvas.draw(|frame| view::render_form(frame, area, title, fields, &state))?;

        let key = canvas.read_key()?;
        state = match update_form(state, &key) {
            FormTransition::Continue(next) => next,
            FormTransition::Finish(values) => {
                canvas.clear()?;
                debug!(values = values.len(), "form finished");
                return Ok(values);
            }
        };
    }
}

// ============================================================================
// TABLE
// ============================================================================

/// Show a bordered table until any key is pressed.
pub fn run_table<B: Backend>(
    canvas: &mut Canvas<B>,
    title: &str,
    header: &[String],
    rows: &[TableRow],
) -> Result<()> {
    let layout = TableLayout::compose(title, header, rows);
    let area = canvas.window(layout.height(), layout.width())?;
    info!(title, rows = rows.len(), columns = layout.widths().len(), "table opened");

    canvas.draw(|frame| view::render_table(frame, area, &layout))?;
    canvas.read_key()?;
    canvas.clear()
}

// ============================================================================
// ALERT
// ============================================================================

/// Show `message` in a modal box until any key is pressed.
pub fn run_alert<B: Backend>(canvas: &mut Canvas<B>, title: &str, message: &str) -> Result<()> {
    let lines: Vec<&str> = message
        .split('\n')
        .map(|line| line.trim_end_matches('\r'))
        .collect();
    let inner_width = lines
        .iter()
        .map(|line| line.chars().count())
        .chain([view::ALERT_HINT.chars().count(), title.chars().count()])
        .max()
        .unwrap_or(0);
    let area = geometry::window(canvas.screen()?, lines.len(), inner_width + BORDER)?;
    info!(title, lines = lines.len(), "alert opened");

    canvas.draw(|frame| view::render_alert(frame, area, title, &lines))?;
    canvas.read_key()?;
    canvas.clear()
}

// ============================================================================
// TESTS
// ============================================================================
