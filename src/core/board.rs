//! Immutable board representation.
//!
//! A [`Board`] is a rectangular grid of [`Cell`]s. Boards never mutate in
//! place: every update returns a new `Board`. The backing storage is an
//! `im::Vector`, so a snapshot held by command history shares structure
//! with the session's current board instead of copying the whole grid.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::cell::Cell;
use super::moves::Move;
use super::position::Position;

/// An immutable rectangular grid of cells.
///
/// Two boards are equal iff they have the same dimensions and identical
/// cell-by-cell contents.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    rows: usize,
    cols: usize,
    /// Row-major cell storage, `rows * cols` entries.
    cells: Vector<Cell>,
}

impl Board {
    /// Create a board from a grid of rows.
    ///
    /// ```
    /// use peg_solitaire::{Board, Cell};
    ///
    /// let board = Board::new(vec![vec![Cell::Peg, Cell::Peg, Cell::Empty]]);
    /// assert_eq!(board.peg_count(), 2);
    /// ```
    ///
    /// ## Panics
    ///
    /// Panics if `grid` is empty or its rows are not all the same length.
    #[must_use]
    pub fn new(grid: Vec<Vec<Cell>>) -> Self {
        assert!(!grid.is_empty(), "board must have at least one row");

        let cols = grid[0].len();
        let mut cells = Vector::new();
        for row in &grid {
            assert_eq!(row.len(), cols, "board rows must all be the same length");
            cells.extend(row.iter().copied());
        }

        Self {
            rows: grid.len(),
            cols,
            cells,
        }
    }

    /// Number of rows.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Check whether `pos` lies within the grid.
    #[must_use]
    pub fn is_inside(&self, pos: Position) -> bool {
        pos.row >= 0
            && (pos.row as usize) < self.rows
            && pos.col >= 0
            && (pos.col as usize) < self.cols
    }

    /// Cell at `pos`, or `Cell::Invalid` for any out-of-bounds position.
    ///
    /// Never fails. Off-board jump probes are ordinary queries.
    #[must_use]
    pub fn cell_at(&self, pos: Position) -> Cell {
        if !self.is_inside(pos) {
            return Cell::Invalid;
        }
        self.cells[self.index(pos)]
    }

    /// New board identical except the single cell at `pos` is replaced.
    ///
    /// ## Panics
    ///
    /// Panics if `pos` is out of bounds. Callers restoring a snapshot
    /// always hold previously-valid positions.
    #[must_use]
    pub fn with_cell(&self, pos: Position, cell: Cell) -> Self {
        assert!(self.is_inside(pos), "position out of bounds: {pos}");

        Self {
            rows: self.rows,
            cols: self.cols,
            cells: self.cells.update(self.index(pos), cell),
        }
    }

    /// New board with `mv` applied: `from` and `over` cleared, `to` pegged.
    ///
    /// Performs no legality check; validation is the ruleset's job.
    /// Keeping rule knowledge out of `Board` lets the representation serve
    /// any ruleset or board layout unchanged.
    #[must_use]
    pub fn apply_unchecked(&self, mv: Move) -> Self {
        let cells = self
            .cells
            .update(self.index(mv.from), Cell::Empty)
            .update(self.index(mv.over), Cell::Empty)
            .update(self.index(mv.to), Cell::Peg);

        Self {
            rows: self.rows,
            cols: self.cols,
            cells,
        }
    }

    /// Count of `Peg` cells.
    #[must_use]
    pub fn peg_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c == Cell::Peg).count()
    }

    fn index(&self, pos: Position) -> usize {
        pos.row as usize * self.cols + pos.col as usize
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..self.rows {
            for col in 0..self.cols {
                if col > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", self.cell_at(Position::new(row as i32, col as i32)))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
