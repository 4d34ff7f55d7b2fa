//! Reversible commands over a game session.

use tracing::debug;

use crate::core::{Board, Move};
use crate::session::GameSession;

/// A reversible action against a [`GameSession`].
///
/// `execute` attempts the action and reports whether it took effect.
/// `undo` reverses a previously-successful execution and is a no-op
/// otherwise. A command cycles Idle -> Applied -> Idle arbitrarily often;
/// that re-executability is what makes redo possible.
pub trait Command {
    /// Attempt the action. Returns whether it took effect.
    ///
    /// Must refuse (return `false` with no side effect) while already
    /// applied.
    fn execute(&mut self, session: &mut GameSession) -> bool;

    /// Reverse a previously-successful execution. No-op while idle.
    fn undo(&mut self, session: &mut GameSession);
}

/// Applies a single [`Move`], snapshotting the prior board for undo.
///
/// The snapshot is the whole board rather than the three touched cells, so
/// the restore stays correct even for a ruleset or board representation
/// that disturbs cells outside the move. Snapshots are cheap: boards share
/// structure.
///
/// The snapshot doubles as the applied flag: `Some` while applied, `None`
/// while idle, so "undo while idle" has no stale board to restore from.
#[derive(Debug)]
pub struct MoveCommand {
    mv: Move,
    snapshot: Option<Board>,
}

impl MoveCommand {
    /// Create an idle command for `mv`.
    #[must_use]
    pub fn new(mv: Move) -> Self {
        Self { mv, snapshot: None }
    }

    /// The move this command applies.
    #[must_use]
    pub fn game_move(&self) -> Move {
        self.mv
    }
}

impl Command for MoveCommand {
    fn execute(&mut self, session: &mut GameSession) -> bool {
        if self.snapshot.is_some() {
            debug!(mv = %self.mv, "already applied, refusing to execute again");
            return false;
        }
        if !session.is_legal(self.mv) {
            debug!(mv = %self.mv, "move is not legal");
            return false;
        }

        let before = session.board().clone();
        let after = before.apply_unchecked(self.mv);
        session.replace_board(after);

        self.snapshot = Some(before);
        true
    }

    fn undo(&mut self, session: &mut GameSession) {
        let Some(before) = self.snapshot.take() else {
            debug!(mv = %self.mv, "nothing to undo, command is idle");
            return;
        };

        debug!(mv = %self.mv, "undoing move");
        session.replace_board(before);
    }
}
