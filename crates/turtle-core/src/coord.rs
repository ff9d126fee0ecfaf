//! Coordinate and grid value types.

// ---------------------------------------------------------------------------
// Coordinate
// ---------------------------------------------------------------------------

/// A tile position on the playfield.
///
/// Positions are whole numbers; validation does not reject negative values
/// or values outside the grid, so the type is a plain signed pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Coordinate {
    pub x: i64,
    pub y: i64,
}

impl Coordinate {
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}

// ---------------------------------------------------------------------------
// Grid
// ---------------------------------------------------------------------------

/// Bounding rectangle of the playfield.
///
/// `w` and `h` are the largest reachable coordinates, not exclusive bounds:
/// the usable space is the inclusive range `[0, w] x [0, h]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Grid {
    pub w: i64,
    pub h: i64,
}

impl Grid {
    pub fn new(w: i64, h: i64) -> Self {
        Self { w, h }
    }
}
