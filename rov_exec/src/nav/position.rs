//! Grid position type

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use serde::Serialize;
use std::fmt;

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// A cell on the grid.
///
/// Positions are plain values, a move produces a new `Position` rather than
/// modifying an existing one.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash, Serialize)]
pub struct Position {
    pub x: i32,
    pub y: i32
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Return the position offset by the given deltas.
    ///
    /// Saturates at the limits of `i32`, any saturated coordinate is already
    /// outside every possible grid.
    pub fn offset(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy)
        }
    }
}

impl From<[i32; 2]> for Position {
    fn from(xy: [i32; 2]) -> Self {
        Self::new(xy[0], xy[1])
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
