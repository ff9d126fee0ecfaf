//! The simulation engine: one scripted run over a bounded grid.
//!
//! [`Engine`] owns the immutable configuration for a run (grid, command
//! script, start, exit, mines). [`Engine::run`] executes the script against
//! that configuration and reports the terminal [`Outcome`]. All working
//! state (position, facing) lives on the call stack, so a shared `&Engine`
//! can run simulations from any number of threads.

use serde_json::Value;

use crate::command::Command;
use crate::coord::{Coordinate, Grid};
use crate::direction::Direction;
use crate::outcome::Outcome;
use crate::validate::{self, ValidationError};

// ---------------------------------------------------------------------------
// Engine
// ---------------------------------------------------------------------------

/// A single-run simulation over a bounded grid.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Engine {
    /// Bounding rectangle; reachable space is `[0, w] x [0, h]` inclusive.
    grid: Grid,
    /// The scripted command sequence, executed in order.
    commands: Vec<Command>,
    /// Tile the agent starts on, facing [`Direction::Up`].
    start: Coordinate,
    /// Goal tile; occupying it ends the run with [`Outcome::Success`].
    exit: Coordinate,
    /// Hazard tiles; occupying one ends the run with [`Outcome::MineHit`].
    mines: Vec<Coordinate>,
}

impl Engine {
    /// Create an engine from already-typed configuration.
    pub fn new(
        grid: Grid,
        commands: Vec<Command>,
        start: Coordinate,
        exit: Coordinate,
        mines: Vec<Coordinate>,
    ) -> Self {
        Self {
            grid,
            commands,
            start,
            exit,
            mines,
        }
    }

    /// Create an engine from decoded document fragments.
    ///
    /// Fragments are validated in a fixed order -- grid, moves, start, exit,
    /// mines -- failing fast with the first violation's categorized error.
    pub fn from_values(
        grid: &Value,
        moves: &Value,
        start: &Value,
        exit: &Value,
        mines: &Value,
    ) -> Result<Self, ValidationError> {
        let grid = validate::parse_grid(grid)?;
        let commands = validate::parse_commands(moves)?;
        let start = validate::parse_coordinate(start)?;
        let exit = validate::parse_coordinate(exit)?;
        let mines = validate::parse_mines(mines)?;
        Ok(Self::new(grid, commands, start, exit, mines))
    }

    // -----------------------------------------------------------------------
    // Simulation
    // -----------------------------------------------------------------------

    /// Run the command script from the start tile and report the outcome.
    ///
    /// The start tile is classified before the first command, so a start on
    /// the exit or a mine resolves without consuming the script. The same
    /// engine always reports the same outcome.
    pub fn run(&self) -> Outcome {
        let mut position = self.start;
        let mut facing = Direction::Up;

        if let Some(outcome) = self.tile_outcome(position) {
            return outcome;
        }

        for &command in &self.commands {
            match command {
                Command::Move => position = self.step(position, facing),
                Command::Rotate => facing = facing.rotated(),
            }
            if let Some(outcome) = self.tile_outcome(position) {
                return outcome;
            }
        }

        Outcome::StillInDanger
    }

    /// Terminal classification of a tile, if any. The exit check runs first,
    /// so a tile that is both exit and mine counts as the exit.
    fn tile_outcome(&self, position: Coordinate) -> Option<Outcome> {
        if position == self.exit {
            return Some(Outcome::Success);
        }
        if self.mines.contains(&position) {
            return Some(Outcome::MineHit);
        }
        None
    }

    /// One tile forward in `facing`, with the boundary acting as a wall:
    /// a move from a tile already on the edge is a no-op, never an error.
    ///
    /// The edge test compares the pre-move coordinate to the bound with
    /// equality, which makes `[0, w] x [0, h]` the reachable space,
    /// inclusive on both ends.
    fn step(&self, from: Coordinate, facing: Direction) -> Coordinate {
        let Coordinate { x, y } = from;
        match facing {
            Direction::Up if y != 0 => Coordinate::new(x, y - 1),
            Direction::Right if x != self.grid.w => Coordinate::new(x + 1, y),
            Direction::Down if y != self.grid.h => Coordinate::new(x, y + 1),
            Direction::Left if x != 0 => Coordinate::new(x - 1, y),
            _ => from,
        }
    }
}

// ===========================================================================
// Tests
// ===========================================================================
