//! Turtle Core -- a scripted run across a mined grid.
//!
//! The engine validates a scenario (grid, start, exit, mines) plus a command
//! script, then walks the agent through the script one command at a time:
//!
//! 1. **Validate** -- decoded documents are parsed into typed configuration,
//!    failing fast with a fixed message per data category.
//! 2. **Walk** -- each command either advances one tile in the facing
//!    direction (the boundary acts as a wall) or rotates the facing through
//!    the fixed cycle Up -> Right -> Down -> Left.
//! 3. **Classify** -- after every command (and once before the first) the
//!    occupied tile is checked: the exit ends the run with
//!    [`outcome::Outcome::Success`], a mine with [`outcome::Outcome::MineHit`].
//!    Running out of commands yields [`outcome::Outcome::StillInDanger`].
//!
//! # Key Types
//!
//! - [`engine::Engine`] -- immutable run configuration and the simulation loop.
//! - [`coord::Grid`] / [`coord::Coordinate`] -- the inclusive `[0, w] x [0, h]`
//!   playfield and its tiles.
//! - [`command::Command`] -- the closed two-command vocabulary.
//! - [`direction::Direction`] -- facing, cyclic under rotation.
//! - [`validate::ValidationError`] -- per-category construction failures with
//!   fixed user-facing messages.

pub mod command;
pub mod coord;
pub mod direction;
pub mod engine;
pub mod outcome;
pub mod validate;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
