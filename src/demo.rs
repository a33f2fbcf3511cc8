//! Demo harness: a looping menu that exercises every widget.
//!
//! Run with `termdialog test`.

use ratatui::backend::Backend;

use crate::autocomplete::WordList;
use crate::error::Result;
use crate::tui::geometry;
use crate::tui::{Canvas, MenuEntry, run_alert, run_form, run_menu, run_search, run_table};
use crate::types::{FormField, Outcome, TableRow};

pub const TITLE: &str = "TEST APP";

/// The demo menu entries.
pub fn entries<'a, B: Backend + 'a>() -> Vec<MenuEntry<'a, B>> {
    vec![
        MenuEntry::new('a', "Autocomplete Test", autocomplete_test),
        MenuEntry::new('f', "Form Test", form_test),
        MenuEntry::new('t', "Table Test", table_test),
        MenuEntry::new('m', "Alert Test", alert_test),
        MenuEntry::exit('q', "Quit"),
    ]
}

/// Loop over the demo menu until Quit.
pub fn run<B: Backend>(canvas: &mut Canvas<B>) -> Result<Outcome> {
    let mut entries = entries();
    run_menu(canvas, TITLE, &mut entries, true)
}

fn autocomplete_test<B: Backend>(canvas: &mut Canvas<B>) -> Result<Outcome> {
    let limit = geometry::default_search_limit(canvas.screen()?);
    let value = run_search(canvas, "Autocomplete", &mut WordList::lorem(), limit)?;
    run_alert(canvas, "Autocomplete Test", &format!("You chose: {value}"))?;
    Ok(Outcome::Text(value))
}

fn form_test<B: Backend>(canvas: &mut Canvas<B>) -> Result<Outcome> {
    let fields = [FormField::new("A"), FormField::new("B"), FormField::new("C")];
    let values = run_form(canvas, "TEST", &fields)?;
    run_alert(canvas, "Form Test", &format!("{values:?}"))?;
    Ok(Outcome::Fields(values))
}

fn table_test<B: Backend>(canvas: &mut Canvas<B>) -> Result<Outcome> {
    let header = ["Fruit in stock".to_string()];
    let rows: Vec<TableRow> = [
        ["apple", "3", "red"],
        ["banana", "12", ""],
        ["cherry", "250", "dark red"],
    ]
    .iter()
    .map(|row| row.iter().map(|cell| cell.to_string()).collect())
    .collect();
    run_table(canvas, "Table Test", &header, &rows)?;
    Ok(Outcome::Nothing)
}

fn alert_test<B: Backend>(canvas: &mut Canvas<B>) -> Result<Outcome> {
    run_alert(canvas, "Alert Test", "This is an alert.\nIt spans two lines.")?;
    Ok(Outcome::Nothing)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DialogError;
    use crate::tui::{Key, ScriptedKeys};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn make_canvas(keys: ScriptedKeys) -> Canvas<TestBackend> {
        Canvas::new(Terminal::new(TestBackend::new(80, 24)).unwrap(), keys)
    }

    #[test]
    fn menu_lists_every_test() {
        let items: Vec<String> = entries::<TestBackend>()
            .iter()
            .map(MenuEntry::item_text)
            .collect();
        assert_eq!(
            items,
            vec![
                "(a) Autocomplete Test",
                "(f) Form Test",
                "(t) Table Test",
                "(m) Alert Test",
                "(q) Quit",
            ]
        );
    }

    #[test]
    fn quit_ends_the_demo() {
        let mut canvas = make_canvas(ScriptedKeys::new([Key::Char('q')]));
        assert_eq!(run(&mut canvas).unwrap(), Outcome::Nothing);
    }

    #[test]
    fn autocomplete_test_returns_chosen_word() {
        let keys = ScriptedKeys::default()
            .typed("lab")
            .then([Key::Down, Key::Enter, Key::Char('x')]);
        let mut canvas = make_canvas(keys);

        let outcome = autocomplete_test(&mut canvas).unwrap();
        assert_eq!(outcome, Outcome::Text("labore".into()));
    }

    #[test]
    fn form_test_returns_three_fields() {
        let keys = ScriptedKeys::default()
            .typed("x")
            .then([Key::Enter, Key::Enter, Key::Enter, Key::Char('k')]);
        let mut canvas = make_canvas(keys);

        let outcome = form_test(&mut canvas).unwrap();
        assert_eq!(
            outcome,
            Outcome::Fields(vec!["x".into(), String::new(), String::new()])
        );
    }

    #[test]
    fn demo_visits_every_widget_then_quits() {
        let keys = ScriptedKeys::new([Key::Char('t'), Key::Enter, Key::Char('m'), Key::Enter])
            .then([Key::Char('f'), Key::Enter, Key::Enter, Key::Enter, Key::Enter])
            .then([Key::Char('a')])
            .typed("dolor")
            .then([Key::Enter, Key::Enter, Key::Char('q')]);
        let mut canvas = make_canvas(keys);

        assert_eq!(run(&mut canvas).unwrap(), Outcome::Nothing);
        assert!(matches!(canvas.read_key(), Err(DialogError::InputExhausted)));
    }
}
