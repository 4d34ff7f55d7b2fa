//! Permissive placeholder ruleset.

use crate::core::{Board, Move};

use super::engine::{GameStatus, RuleSet};

/// A ruleset that allows everything and never ends the game.
///
/// Useful as a test double and for bootstrapping a session before real
/// rules exist: every move is legal, no moves are enumerated, and the game
/// is always `Running`.
#[derive(Clone, Copy, Debug, Default)]
pub struct StubRules;

impl RuleSet for StubRules {
    fn is_legal(&self, _board: &Board, _mv: Move) -> bool {
        true
    }

    fn legal_moves(&self, _board: &Board) -> Vec<Move> {
        Vec::new()
    }

    fn status(&self, _board: &Board) -> GameStatus {
        GameStatus::Running
    }
}
