//! Shared test helpers for unit, property, and integration tests.
//!
//! Gated behind `#[cfg(any(test, feature = "test-utils"))]` so the same
//! fixtures serve `#[cfg(test)]` modules, `tests/`, and downstream crates
//! (via the `test-utils` feature).

use serde_json::{json, Value};

use crate::command::Command;
use crate::coord::{Coordinate, Grid};
use crate::engine::Engine;

// ===========================================================================
// Typed fixtures
// ===========================================================================

/// Build a command script from document tokens.
pub fn script(tokens: &[&str]) -> Vec<Command> {
    tokens
        .iter()
        .map(|token| Command::from_token(token).expect("known token"))
        .collect()
}

/// The 5x5 walkthrough playfield: start (1,0), exit (3,4), mines at (1,2),
/// (0,3), and (4,4).
pub fn classic_engine(commands: Vec<Command>) -> Engine {
    Engine::new(
        Grid::new(5, 5),
        commands,
        Coordinate::new(1, 0),
        Coordinate::new(3, 4),
        vec![
            Coordinate::new(1, 2),
            Coordinate::new(0, 3),
            Coordinate::new(4, 4),
        ],
    )
}

/// The 4x3 demo playfield: start (0,0), exit (4,2) on the inclusive right
/// edge, four mines (two of them on the inclusive bottom edge).
pub fn demo_engine(commands: Vec<Command>) -> Engine {
    Engine::new(
        Grid::new(4, 3),
        commands,
        Coordinate::new(0, 0),
        Coordinate::new(4, 2),
        vec![
            Coordinate::new(1, 1),
            Coordinate::new(3, 1),
            Coordinate::new(2, 3),
            Coordinate::new(3, 3),
        ],
    )
}

// ===========================================================================
// Document fixtures
// ===========================================================================

pub fn grid_value(w: i64, h: i64) -> Value {
    json!({ "w": w, "h": h })
}

pub fn coordinate_value(x: i64, y: i64) -> Value {
    json!({ "x": x, "y": y })
}

pub fn mines_value(mines: &[(i64, i64)]) -> Value {
    Value::Array(mines.iter().map(|&(x, y)| coordinate_value(x, y)).collect())
}

pub fn moves_value(tokens: &[&str]) -> Value {
    json!(tokens)
}
