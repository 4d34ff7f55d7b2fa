//! Ruleset trait and game status classification.

use serde::{Deserialize, Serialize};

use crate::core::{Board, Move};

/// Overall state of a game, derived from a board by a [`RuleSet`].
///
/// Never stored authoritatively: the only copy outside a board is the
/// cache inside [`GameSession`](crate::session::GameSession), recomputed on
/// every board replacement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// At least one legal move remains and the game is not yet won.
    Running,
    /// Exactly one peg remains.
    Won,
    /// Two or more pegs remain but no legal move exists.
    Stuck,
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            GameStatus::Running => "running",
            GameStatus::Won => "won",
            GameStatus::Stuck => "stuck",
        };
        write!(f, "{name}")
    }
}

/// Ruleset capability: move legality, legal-move enumeration, and status
/// classification over a board.
///
/// A ruleset is a pure function of its inputs: no internal state, no side
/// effects. Any implementation is substitutable without changing session
/// or command behavior.
pub trait RuleSet {
    /// Whether `mv` may be applied to `board`.
    fn is_legal(&self, board: &Board, mv: Move) -> bool;

    /// Every legal move on `board`.
    ///
    /// Origins are scanned row-major; from each origin the four jump
    /// directions are probed in the order up, down, left, right. Empty if
    /// no peg exists or no jump is legal.
    fn legal_moves(&self, board: &Board) -> Vec<Move>;

    /// Classify `board`.
    ///
    /// The single-peg win check takes priority over the stuck check: a
    /// one-peg board is `Won`, never `Stuck`, even though it trivially has
    /// no legal moves.
    fn status(&self, board: &Board) -> GameStatus;
}
