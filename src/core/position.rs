//! Grid coordinates.

use serde::{Deserialize, Serialize};

/// A `(row, col)` coordinate pair.
///
/// Positions carry no bounds invariant of their own; whether a position is
/// on a given board is answered by [`Board::cell_at`](super::Board::cell_at).
/// Coordinates are signed so jump probes may step off the board edge and
/// resolve to `Invalid` instead of failing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    /// Create a position.
    #[must_use]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// This position shifted by `(dr, dc)`.
    #[must_use]
    pub const fn offset(self, dr: i32, dc: i32) -> Self {
        Self {
            row: self.row + dr,
            col: self.col + dc,
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
