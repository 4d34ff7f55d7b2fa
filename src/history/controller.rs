//! Undo/redo stacks over opaque commands.

use tracing::debug;

use super::command::Command;
use crate::session::GameSession;

/// A linear undo/redo log of reversible commands.
///
/// Branching history is not supported: executing any fresh command forfeits
/// all pending redo history, so redo is only valid immediately after undo.
/// This is the sole mutation surface collaborators are meant to use; they
/// never replace a session's board directly.
#[derive(Default)]
pub struct HistoryController {
    undo_stack: Vec<Box<dyn Command>>,
    redo_stack: Vec<Box<dyn Command>>,
}

impl HistoryController {
    /// Create a controller with empty history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Execute `command` against `session`.
    ///
    /// On success the command is recorded for undo and the redo stack is
    /// cleared. On failure both stacks are untouched.
    pub fn execute(&mut self, session: &mut GameSession, mut command: Box<dyn Command>) -> bool {
        if !command.execute(session) {
            return false;
        }

        self.undo_stack.push(command);
        self.redo_stack.clear();
        true
    }

    /// Whether there is anything to undo.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Whether there is anything to redo.
    #[must_use]
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Undo the most recently executed command.
    ///
    /// Returns `false` if there is nothing to undo. Undo itself is not
    /// expected to fail; the popped command moves to the redo stack.
    pub fn undo(&mut self, session: &mut GameSession) -> bool {
        let Some(mut command) = self.undo_stack.pop() else {
            return false;
        };

        command.undo(session);
        self.redo_stack.push(command);
        true
    }

    /// Re-execute the most recently undone command.
    ///
    /// Returns `false` if there is nothing to redo. If re-execution fails
    /// the command is dropped outright rather than returned to either
    /// stack: a move that was legal before the undo and is not legal now
    /// means something else mutated the session in between.
    pub fn redo(&mut self, session: &mut GameSession) -> bool {
        let Some(mut command) = self.redo_stack.pop() else {
            return false;
        };

        if !command.execute(session) {
            debug!("redo re-execution failed, dropping command");
            return false;
        }

        self.undo_stack.push(command);
        true
    }

    /// Drop both stacks. The session's current board is untouched.
    pub fn clear_history(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}
