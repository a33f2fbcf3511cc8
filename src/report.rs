//! Output formatting for widget results.
//!
//! Pure functions: (Outcome, OutputFormat) → String.
//! No I/O, no side effects.

use crate::error::Result;
use crate::types::{Outcome, OutputFormat};

/// Format a widget outcome for stdout.
///
/// Human output has no trailing newline; an empty string means there is
/// nothing to print.
pub fn format_outcome(outcome: &Outcome, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Human => Ok(format_human(outcome)),
        OutputFormat::Json => format_json(outcome),
    }
}

// ============================================================================
// HUMAN FORMAT
// ============================================================================

fn format_human(outcome: &Outcome) -> String {
    match outcome {
        Outcome::Nothing => String::new(),
        Outcome::Text(text) => text.clone(),
        // One value per line, in field order
        Outcome::Fields(values) => values.join("\n"),
    }
}

// ============================================================================
// JSON FORMAT
// ============================================================================

fn format_json(outcome: &Outcome) -> Result<String> {
    Ok(serde_json::to_string_pretty(outcome)?)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // --- Human format tests ---

    #[test]
    fn human_nothing_prints_nothing() {
        assert_eq!(format_outcome(&Outcome::Nothing, OutputFormat::Human).unwrap(), "");
    }

    #[test]
    fn human_text_is_verbatim() {
        let outcome = Outcome::Text("laboris".into());
        assert_eq!(format_outcome(&outcome, OutputFormat::Human).unwrap(), "laboris");
    }

    #[test]
    fn human_fields_are_one_per_line() {
        let outcome = Outcome::Fields(vec!["Ada".into(), String::new(), "London".into()]);
        assert_eq!(
            format_outcome(&outcome, OutputFormat::Human).unwrap(),
            "Ada\n\nLondon"
        );
    }

    // --- JSON format tests ---

    #[test]
    fn json_format_is_valid_json() {
        let outcome = Outcome::Fields(vec!["a".into(), "b".into()]);
        let output = format_outcome(&outcome, OutputFormat::Json).unwrap();

        let parsed: serde_json::Value =
            serde_json::from_str(&output).expect("Should be valid JSON");
        assert_eq!(parsed["kind"], "fields");
        assert_eq!(parsed["value"][1], "b");
    }

    #[test]
    fn json_text_carries_kind_and_value() {
        let output = format_outcome(&Outcome::Text("x".into()), OutputFormat::Json).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed, serde_json::json!({ "kind": "text", "value": "x" }));
    }

    #[test]
    fn json_nothing_has_no_value() {
        let output = format_outcome(&Outcome::Nothing, OutputFormat::Json).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed, serde_json::json!({ "kind": "nothing" }));
    }
}
