//! Loading pipeline: JSON text or files into a validated engine.

use std::path::Path;

use turtle_core::engine::Engine;
use turtle_core::validate::ValidationError;

use crate::schema::{MovesDocument, ScenarioDocument};

// ===========================================================================
// Errors
// ===========================================================================

/// Errors that can occur while sourcing documents.
///
/// Validation failures pass through transparently so callers see the
/// engine's fixed per-category messages unchanged.
#[derive(Debug, thiserror::Error)]
pub enum DataLoadError {
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

// ===========================================================================
// Loading functions
// ===========================================================================

/// Decode a scenario document from a JSON string.
pub fn scenario_from_json(json: &str) -> Result<ScenarioDocument, DataLoadError> {
    Ok(serde_json::from_str(json)?)
}

/// Decode a moves document from a JSON string.
pub fn moves_from_json(json: &str) -> Result<MovesDocument, DataLoadError> {
    Ok(serde_json::from_str(json)?)
}

/// Hand two decoded documents to engine validation.
pub fn build_engine(
    scenario: &ScenarioDocument,
    moves: &MovesDocument,
) -> Result<Engine, DataLoadError> {
    Ok(Engine::from_values(
        &scenario.grid,
        &moves.moves,
        &scenario.start,
        &scenario.exit,
        &scenario.mines,
    )?)
}

/// Build a validated engine straight from two JSON strings.
pub fn engine_from_json(scenario_json: &str, moves_json: &str) -> Result<Engine, DataLoadError> {
    let scenario = scenario_from_json(scenario_json)?;
    let moves = moves_from_json(moves_json)?;
    build_engine(&scenario, &moves)
}

/// Read the two document files and build a validated engine.
pub fn load_engine(scenario_path: &Path, moves_path: &Path) -> Result<Engine, DataLoadError> {
    let scenario = std::fs::read_to_string(scenario_path)?;
    let moves = std::fs::read_to_string(moves_path)?;
    engine_from_json(&scenario, &moves)
}

// ===========================================================================
// Tests
// ===========================================================================
