//! Cell occupancy states.

use serde::{Deserialize, Serialize};

/// One grid position's occupancy state.
///
/// `Invalid` marks positions that are physically not part of the board,
/// such as the 2x2 corner blocks of the English cross layout. `Empty` and
/// `Peg` are playable holes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Not a playable hole.
    Invalid,
    /// A hole with no peg in it.
    Empty,
    /// A hole holding a peg.
    Peg,
}

impl Cell {
    /// Check whether this cell is a playable hole (`Empty` or `Peg`).
    #[must_use]
    pub const fn is_hole(self) -> bool {
        !matches!(self, Cell::Invalid)
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let glyph = match self {
            Cell::Invalid => ' ',
            Cell::Empty => '.',
            Cell::Peg => 'o',
        };
        write!(f, "{glyph}")
    }
}
