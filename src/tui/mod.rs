//! Terminal widgets.
//!
//! Organized along FP/Unix boundaries:
//! - `state`: pure per-widget records, keys and menu entries
//! - `update`: pure transitions, (state, key) → transition
//! - `view`: pure rendering into a ratatui frame
//! - `geometry`, `theme`: sizes, centering and the highlight style
//! - `input`, `canvas`: the key source and drawing surface
//! - `run`: effects, the widget loops and terminal lifecycle

pub mod canvas;
pub mod geometry;
pub mod input;
pub mod run;
pub mod state;
pub mod theme;
pub mod update;
pub mod view;

pub use canvas::Canvas;
pub use input::{CrosstermKeys, KeySource, ScriptedKeys};
pub use run::{TerminalCanvas, run_alert, run_form, run_menu, run_search, run_table, session};
pub use state::{Key, MenuAction, MenuEntry};
