//! Jump moves.

use serde::{Deserialize, Serialize};

use super::position::Position;

/// A single jump: the peg at `from` leaps over the peg at `over` and lands
/// on `to`, capturing the peg at `over`.
///
/// `Move` is a pure value; nothing is validated at construction. Legality
/// is owned entirely by [`RuleSet`](crate::rules::RuleSet).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub from: Position,
    pub over: Position,
    pub to: Position,
}

impl Move {
    /// Create a move from its three positions.
    #[must_use]
    pub const fn new(from: Position, over: Position, to: Position) -> Self {
        Self { from, over, to }
    }

    /// Build a move from its endpoints, deriving `over` as the arithmetic
    /// midpoint. Odd displacements truncate; the resulting move is simply
    /// illegal under any jump ruleset.
    ///
    /// ```
    /// use peg_solitaire::{Move, Position};
    ///
    /// let mv = Move::between(Position::new(1, 3), Position::new(3, 3));
    /// assert_eq!(mv.over, Position::new(2, 3));
    /// ```
    #[must_use]
    pub const fn between(from: Position, to: Position) -> Self {
        let over = Position::new((from.row + to.row) / 2, (from.col + to.col) / 2);
        Self { from, over, to }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {} over {}", self.from, self.to, self.over)
    }
}
