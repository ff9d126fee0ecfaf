//! Builds an engine from raw JSON documents through the loading pipeline,
//! then shows a validation failure surfacing its fixed message.
//!
//! Run with: `cargo run -p turtle-examples --example from_documents`

use turtle_data::engine_from_json;

fn main() {
    let scenario = r#"{
        "grid": { "w": 5, "h": 5 },
        "start": { "x": 1, "y": 0 },
        "exit": { "x": 3, "y": 4 },
        "mines": [
            { "x": 1, "y": 2 },
            { "x": 0, "y": 3 },
            { "x": 4, "y": 4 }
        ]
    }"#;
    let moves = r#"{ "moves": ["rotate", "rotate", "move", "move"] }"#;

    match engine_from_json(scenario, moves) {
        Ok(engine) => println!("outcome: {}", engine.run()),
        Err(err) => println!("failed to load: {err}"),
    }

    // A fractional grid height is rejected with the fixed grid message.
    let broken = r#"{
        "grid": { "w": 5, "h": 2.5 },
        "start": { "x": 0, "y": 0 },
        "exit": { "x": 1, "y": 1 },
        "mines": []
    }"#;
    match engine_from_json(broken, moves) {
        Ok(_) => println!("unexpectedly loaded"),
        Err(err) => println!("rejected: {err}"),
    }
}
