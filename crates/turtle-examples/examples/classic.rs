//! The demo playfield: 4x3 grid, start (0,0), exit (4,2) on the inclusive
//! right edge, four mines. Runs each documented command script and prints
//! its outcome.
//!
//! Run with: `cargo run -p turtle-examples --example classic`

use turtle_core::command::Command;
use turtle_core::coord::{Coordinate, Grid};
use turtle_core::engine::Engine;

fn script(tokens: &[&str]) -> Vec<Command> {
    tokens
        .iter()
        .map(|token| Command::from_token(token).expect("known token"))
        .collect()
}

fn main() {
    let scripts: [(&str, &[&str]); 4] = [
        ("empty script", &[]),
        ("stops short", &["rotate", "rotate", "move", "move"]),
        ("walks into a mine", &["rotate", "move", "rotate", "move"]),
        (
            "reaches the exit",
            &[
                "rotate", "rotate", "move", "move", "rotate", "rotate", "rotate", "move", "move",
                "move", "move",
            ],
        ),
    ];

    for (label, tokens) in scripts {
        let engine = Engine::new(
            Grid::new(4, 3),
            script(tokens),
            Coordinate::new(0, 0),
            Coordinate::new(4, 2),
            vec![
                Coordinate::new(1, 1),
                Coordinate::new(3, 1),
                Coordinate::new(2, 3),
                Coordinate::new(3, 3),
            ],
        );
        println!("{label}: {}", engine.run());
    }
}
