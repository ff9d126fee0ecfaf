//! Serde structs for the two wire documents.
//!
//! Fields stay as raw [`serde_json::Value`]: shape and value checking is the
//! engine's contract, with a fixed message per data category, so the
//! document layer must not reject or default anything the engine would
//! classify itself. A missing key reaches validation as `Null`.

use serde::Deserialize;
use serde_json::Value;

/// The scenario document:
/// `{ "grid": {w, h}, "start": {x, y}, "exit": {x, y}, "mines": [{x, y}, ...] }`.
#[derive(Debug, Clone, Deserialize)]
pub struct ScenarioDocument {
    #[serde(default)]
    pub grid: Value,
    #[serde(default)]
    pub start: Value,
    #[serde(default)]
    pub exit: Value,
    #[serde(default)]
    pub mines: Value,
}

/// The moves document: `{ "moves": ["move" | "rotate", ...] }`.
#[derive(Debug, Clone, Deserialize)]
pub struct MovesDocument {
    #[serde(default)]
    pub moves: Value,
}
