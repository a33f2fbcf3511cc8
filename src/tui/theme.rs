//! Widget styles.
//!
//! The toolkit uses one attribute: inverse video for the highlighted line.
//! Everything else is drawn in the terminal's default colors.

use ratatui::style::{Modifier, Style};

/// Highlighted menu entry or search suggestion.
pub const STYLE_HIGHLIGHT: Style = Style::new().add_modifier(Modifier::REVERSED);

/// Plain text, borders and titles.
pub const STYLE_PLAIN: Style = Style::new();
