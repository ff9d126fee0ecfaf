//! Scenario validation: untyped document fragments into typed engine inputs.
//!
//! The engine consumes already-decoded documents ([`serde_json::Value`]).
//! Each parse function converts one fragment into its typed form, failing
//! fast with the fixed user-facing message for that data category. Message
//! wording is an external contract and is preserved verbatim.
//!
//! Not enforced here: coordinates within the grid bounds, mine distinctness,
//! and mines disjoint from start and exit. Stricter checks would reject
//! configurations the data contract accepts.

use serde_json::Value;

use crate::command::Command;
use crate::coord::{Coordinate, Grid};

// ---------------------------------------------------------------------------
// Error taxonomy
// ---------------------------------------------------------------------------

/// A validation failure, one variant per failing check.
///
/// The moves and coordinate pairs each share one message text: the contract
/// exposes a single message per data kind, while the variants keep the
/// failing check distinguishable in code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The grid fragment is missing or not a key-value object.
    #[error("Invalid grid data. Expects an object with keys w and h.")]
    GridFormat,
    /// `w` or `h` is missing, non-numeric, or fractional.
    #[error(
        "Invalid grid data. Expects grid object to have with w and h keys and whole number values."
    )]
    GridValues,
    /// The moves fragment is missing or not an array.
    #[error("Invalid moves data. Expects an array of strings \"move\" or \"rotate\".")]
    MovesFormat,
    /// A moves entry is not one of the two recognized tokens.
    #[error("Invalid moves data. Expects an array of strings \"move\" or \"rotate\".")]
    MovesValues,
    /// A coordinate fragment is missing or not a key-value object.
    #[error("Invalid coordinate data. Expects an object with x and y keys and whole number values.")]
    CoordinateFormat,
    /// `x` or `y` is missing, non-numeric, or fractional.
    #[error("Invalid coordinate data. Expects an object with x and y keys and whole number values.")]
    CoordinateValues,
    /// The mines fragment is missing or not an array.
    #[error("Invalid mines data. Expects an array of objects with keys x and y and whole number values.")]
    MinesFormat,
}

// ---------------------------------------------------------------------------
// Parse functions
// ---------------------------------------------------------------------------

/// Numeric wholeness rule shared by grid and coordinate values.
///
/// Accepts any JSON number with zero fractional part (`5` and `5.0` both
/// pass); strings, booleans, nulls, arrays, and objects are rejected.
fn whole_number(value: &Value) -> Option<i64> {
    let n = value.as_f64()?;
    if n.fract() != 0.0 {
        return None;
    }
    Some(n as i64)
}

/// Parse the grid fragment.
pub fn parse_grid(value: &Value) -> Result<Grid, ValidationError> {
    let obj = value.as_object().ok_or(ValidationError::GridFormat)?;
    let w = obj
        .get("w")
        .and_then(whole_number)
        .ok_or(ValidationError::GridValues)?;
    let h = obj
        .get("h")
        .and_then(whole_number)
        .ok_or(ValidationError::GridValues)?;
    Ok(Grid::new(w, h))
}

/// Parse the command script, in order, failing on the first bad entry.
pub fn parse_commands(value: &Value) -> Result<Vec<Command>, ValidationError> {
    let entries = value.as_array().ok_or(ValidationError::MovesFormat)?;
    entries
        .iter()
        .map(|entry| {
            entry
                .as_str()
                .and_then(Command::from_token)
                .ok_or(ValidationError::MovesValues)
        })
        .collect()
}

/// Parse one coordinate fragment (start, exit, or a mine entry).
pub fn parse_coordinate(value: &Value) -> Result<Coordinate, ValidationError> {
    let obj = value.as_object().ok_or(ValidationError::CoordinateFormat)?;
    let x = obj
        .get("x")
        .and_then(whole_number)
        .ok_or(ValidationError::CoordinateValues)?;
    let y = obj
        .get("y")
        .and_then(whole_number)
        .ok_or(ValidationError::CoordinateValues)?;
    Ok(Coordinate::new(x, y))
}

/// Parse the mine list, in order. Entries reuse the coordinate rule and
/// message; duplicate entries are allowed.
pub fn parse_mines(value: &Value) -> Result<Vec<Coordinate>, ValidationError> {
    let entries = value.as_array().ok_or(ValidationError::MinesFormat)?;
    entries.iter().map(parse_coordinate).collect()
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    // -----------------------------------------------------------------------
    // Grid
    // -----------------------------------------------------------------------

    #[test]
    fn grid_missing_fails_format() {
        assert_eq!(parse_grid(&Value::Null), Err(ValidationError::GridFormat));
    }

    #[test]
    fn grid_not_an_object_fails_format() {
        assert_eq!(
            parse_grid(&json!(["notAnObject"])),
            Err(ValidationError::GridFormat)
        );
        assert_eq!(parse_grid(&json!(5)), Err(ValidationError::GridFormat));
    }

    #[test]
    fn grid_wrong_keys_fail_values() {
        let grid = json!({ "notCorrectKey": 3, "notCorrectKey2": 3 });
        assert_eq!(parse_grid(&grid), Err(ValidationError::GridValues));
    }

    #[test]
    fn grid_non_numeric_dimensions_fail_values() {
        let grid = json!({ "w": "notANumber", "h": ["notANumber"] });
        assert_eq!(parse_grid(&grid), Err(ValidationError::GridValues));
    }

    #[test]
    fn grid_fractional_dimensions_fail_values() {
        let grid = json!({ "w": 5.4, "h": 5.2 });
        assert_eq!(parse_grid(&grid), Err(ValidationError::GridValues));
    }

    #[test]
    fn grid_whole_float_dimensions_pass() {
        let grid = parse_grid(&json!({ "w": 5.0, "h": 3.0 })).unwrap();
        assert_eq!(grid, Grid::new(5, 3));
    }

    #[test]
    fn grid_error_messages_are_fixed() {
        assert_eq!(
            ValidationError::GridFormat.to_string(),
            "Invalid grid data. Expects an object with keys w and h."
        );
        assert_eq!(
            ValidationError::GridValues.to_string(),
            "Invalid grid data. Expects grid object to have with w and h keys and whole number values."
        );
    }

    // -----------------------------------------------------------------------
    // Moves
    // -----------------------------------------------------------------------

    #[test]
    fn moves_missing_fails_format() {
        assert_eq!(
            parse_commands(&Value::Null),
            Err(ValidationError::MovesFormat)
        );
    }

    #[test]
    fn moves_not_an_array_fails_format() {
        assert_eq!(
            parse_commands(&json!("move")),
            Err(ValidationError::MovesFormat)
        );
        assert_eq!(
            parse_commands(&json!({ "moves": [] })),
            Err(ValidationError::MovesFormat)
        );
    }

    #[test]
    fn moves_unknown_token_fails_values() {
        assert_eq!(
            parse_commands(&json!(["move", "jump", "rotate"])),
            Err(ValidationError::MovesValues)
        );
    }

    #[test]
    fn moves_non_string_entry_fails_values() {
        assert_eq!(
            parse_commands(&json!(["move", 7])),
            Err(ValidationError::MovesValues)
        );
    }

    #[test]
    fn moves_empty_script_is_legal() {
        assert_eq!(parse_commands(&json!([])), Ok(vec![]));
    }

    #[test]
    fn moves_parse_in_order() {
        assert_eq!(
            parse_commands(&json!(["rotate", "move"])),
            Ok(vec![Command::Rotate, Command::Move])
        );
    }

    #[test]
    fn moves_error_message_is_shared_by_both_checks() {
        let expected = "Invalid moves data. Expects an array of strings \"move\" or \"rotate\".";
        assert_eq!(ValidationError::MovesFormat.to_string(), expected);
        assert_eq!(ValidationError::MovesValues.to_string(), expected);
    }

    // -----------------------------------------------------------------------
    // Coordinates
    // -----------------------------------------------------------------------

    #[test]
    fn coordinate_missing_fails_format() {
        assert_eq!(
            parse_coordinate(&Value::Null),
            Err(ValidationError::CoordinateFormat)
        );
    }

    #[test]
    fn coordinate_not_an_object_fails_format() {
        assert_eq!(
            parse_coordinate(&json!([1, 2])),
            Err(ValidationError::CoordinateFormat)
        );
    }

    #[test]
    fn coordinate_non_numeric_fails_values() {
        assert_eq!(
            parse_coordinate(&json!({ "x": "1", "y": 2 })),
            Err(ValidationError::CoordinateValues)
        );
    }

    #[test]
    fn coordinate_fractional_fails_values() {
        assert_eq!(
            parse_coordinate(&json!({ "x": 1, "y": 2.5 })),
            Err(ValidationError::CoordinateValues)
        );
    }

    #[test]
    fn coordinate_negative_values_pass() {
        // Range checks are not part of the contract.
        assert_eq!(
            parse_coordinate(&json!({ "x": -1, "y": -4 })),
            Ok(Coordinate::new(-1, -4))
        );
    }

    #[test]
    fn coordinate_error_message_is_shared_by_both_checks() {
        let expected =
            "Invalid coordinate data. Expects an object with x and y keys and whole number values.";
        assert_eq!(ValidationError::CoordinateFormat.to_string(), expected);
        assert_eq!(ValidationError::CoordinateValues.to_string(), expected);
    }

    // -----------------------------------------------------------------------
    // Mines
    // -----------------------------------------------------------------------

    #[test]
    fn mines_missing_fails_format() {
        assert_eq!(parse_mines(&Value::Null), Err(ValidationError::MinesFormat));
    }

    #[test]
    fn mines_not_an_array_fails_format() {
        assert_eq!(
            parse_mines(&json!({ "x": 1, "y": 1 })),
            Err(ValidationError::MinesFormat)
        );
        assert_eq!(
            ValidationError::MinesFormat.to_string(),
            "Invalid mines data. Expects an array of objects with keys x and y and whole number values."
        );
    }

    #[test]
    fn mine_entry_failures_reuse_the_coordinate_message() {
        let err = parse_mines(&json!([{ "x": 1, "y": 1 }, { "x": 1.5, "y": 2 }])).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid coordinate data. Expects an object with x and y keys and whole number values."
        );
    }

    #[test]
    fn mines_empty_list_is_legal() {
        assert_eq!(parse_mines(&json!([])), Ok(vec![]));
    }

    #[test]
    fn duplicate_mines_are_allowed() {
        let mines = parse_mines(&json!([{ "x": 2, "y": 2 }, { "x": 2, "y": 2 }])).unwrap();
        assert_eq!(mines, vec![Coordinate::new(2, 2), Coordinate::new(2, 2)]);
    }
}
