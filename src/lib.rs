//! termdialog: modal terminal dialogs for menus, search, forms, tables and alerts.

pub mod autocomplete;
pub mod demo;
pub mod error;
pub mod logging;
pub mod report;
pub mod table;
pub mod tui;
pub mod types;
