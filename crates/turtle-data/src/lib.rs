//! Document sourcing for the simulation engine.
//!
//! The engine is a pure computation over already-decoded data; this crate is
//! the collaborator that produces that data. It reads the two JSON documents
//! (scenario and moves) from strings or files and hands their fragments to
//! engine validation. Shape and value failures surface the engine's own
//! fixed messages; this crate adds only syntax- and I/O-level errors.

pub mod loader;
pub mod schema;

pub use loader::{build_engine, engine_from_json, load_engine, DataLoadError};
pub use schema::{MovesDocument, ScenarioDocument};
