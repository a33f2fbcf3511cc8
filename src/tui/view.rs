//! Pure rendering: widget state in, cells out.
//!
//! Each widget has one render function drawing its whole window into the
//! frame. The only effect is writing to the frame buffer; the canvas decides
//! when a frame is flushed.

use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::{Block, Clear};

use crate::table::TableLayout;
use crate::types::FormField;

use super::state::{FormState, SearchState};
use super::theme::{STYLE_HIGHLIGHT, STYLE_PLAIN};

pub const MENU_HINT: &str = "↑ ↓ to select, ENTER to accept, or press the key in parentheses";
pub const SEARCH_HINT: &str = "↑ ↓ to select, ENTER to accept";
pub const FORM_HINT: &str = "ENTER to accept";
pub const ALERT_HINT: &str = "Press any key to continue";

// ============================================================================
// SHARED
// ============================================================================

/// Blank `area`, draw a bordered window with a centered title and a hint on
/// the bottom border. Returns the inner area.
fn window(frame: &mut Frame, area: Rect, title: &str, hint: &str) -> Rect {
    let block = Block::bordered()
        .title_top(Line::from(title.to_string()).centered())
        .title_bottom(Line::from(hint.to_string()));
    let inner = block.inner(area);
    frame.render_widget(Clear, area);
    frame.render_widget(block, area);
    inner
}

/// Write `text` at (x, y), clipped to the end of `bounds`. Rows outside
/// `bounds` are skipped.
fn put(frame: &mut Frame, bounds: Rect, x: u16, y: u16, text: &str, style: Style) {
    if y < bounds.top() || y >= bounds.bottom() {
        return;
    }
    let room = bounds.right().saturating_sub(x);
    frame
        .buffer_mut()
        .set_stringn(x, y, text, usize::from(room), style);
}

fn to_u16(n: usize) -> u16 {
    u16::try_from(n).unwrap_or(u16::MAX)
}

fn text_width(text: &str) -> u16 {
    to_u16(text.chars().count())
}

// ============================================================================
// MENU
// ============================================================================

/// Entries block-centered under the title, one blank row below the border.
pub fn render_menu(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    items: &[String],
    selection: usize,
) {
    let inner = window(frame, area, title, MENU_HINT);
    let widest = items.iter().map(|item| text_width(item)).max().unwrap_or(0);
    let x = inner.x + inner.width.saturating_sub(widest) / 2;

    for (i, item) in items.iter().enumerate() {
        let y = inner.y.saturating_add(1).saturating_add(to_u16(i));
        let style = if i == selection { STYLE_HIGHLIGHT } else { STYLE_PLAIN };
        put(frame, inner, x, y, item, style);
    }
}

// ============================================================================
// SEARCH
// ============================================================================

/// Prompt and input on the first row, suggestions below.
pub fn render_search(
    frame: &mut Frame,
    area: Rect,
    prompt: &str,
    state: &SearchState,
    limit: usize,
) {
    let inner = window(frame, area, "", SEARCH_HINT);
    let label = format!("{prompt}: ");
    put(frame, inner, inner.x, inner.y, &label, STYLE_PLAIN);

    let input_x = inner.x.saturating_add(text_width(&label));
    put(frame, inner, input_x, inner.y, &state.buffer, STYLE_PLAIN);

    for (i, result) in state.results.iter().take(limit).enumerate() {
        let y = inner.y.saturating_add(1).saturating_add(to_u16(i));
        let style = if state.selection == Some(i) {
            STYLE_HIGHLIGHT
        } else {
            STYLE_PLAIN
        };
        put(frame, inner, inner.x, y, &result.display_line(), style);
    }

    let cursor_x = input_x
        .saturating_add(to_u16(state.cursor))
        .min(inner.right());
    frame.set_cursor_position(Position::new(cursor_x, inner.y));
}

// ============================================================================
// FORM
// ============================================================================

/// One `label: value` row per field. The cursor sits on the field being edited.
pub fn render_form(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    fields: &[FormField],
    state: &FormState,
) {
    let inner = window(frame, area, title, FORM_HINT);
    let current = state.current();

    for (i, field) in fields.iter().enumerate() {
        let y = inner.y.saturating_add(to_u16(i));
        let label = format!("{}: ", field.label);
        put(frame, inner, inner.x, y, &label, STYLE_PLAIN);

        let value = match state.values.get(i) {
            Some(done) => done.as_str(),
            None if i == current => state.buffer.as_str(),
            None => "",
        };
        let value_x = inner.x.saturating_add(text_width(&label));
        put(frame, inner, value_x, y, value, STYLE_PLAIN);

        if i == current {
            let cursor_x = value_x.saturating_add(text_width(value)).min(inner.right());
            frame.set_cursor_position(Position::new(cursor_x, y));
        }
    }
}

// ============================================================================
// TABLE
// ============================================================================

/// Paint a composed table. The layout already contains the borders.
pub fn render_table(frame: &mut Frame, area: Rect, layout: &TableLayout) {
    frame.render_widget(Clear, area);
    for (i, line) in layout.lines().iter().enumerate() {
        let y = area.y.saturating_add(to_u16(i));
        put(frame, area, area.x, y, line, STYLE_PLAIN);
    }
}

// ============================================================================
// ALERT
// ============================================================================

pub fn render_alert(frame: &mut Frame, area: Rect, title: &str, lines: &[&str]) {
    let inner = window(frame, area, title, ALERT_HINT);
    for (i, line) in lines.iter().enumerate() {
        let y = inner.y.saturating_add(to_u16(i));
        put(frame, inner, inner.x, y, line, STYLE_PLAIN);
    }
}

// ============================================================================
// TESTS
// ============================================================================
