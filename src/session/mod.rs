//! Game session: current board, cached status, observer notification.
//!
//! A [`GameSession`] is the mutable holder of "the current game", as
//! distinct from the immutable [`Board`] values it cycles through. It owns
//! exactly one current board plus the [`RuleSet`] that interprets it, and
//! notifies registered [`GameListener`]s whenever the board is replaced.

use tracing::debug;

use crate::core::{Board, Move};
use crate::rules::{GameStatus, RuleSet};

/// Observer capability for session changes.
///
/// Callbacks are invoked synchronously on the calling thread, in listener
/// registration order, with all board-changed callbacks firing before any
/// status-changed callbacks. A listener living on another thread (a UI
/// loop, say) must marshal inside its own callback; the session never
/// defers delivery.
pub trait GameListener {
    /// The session installed a new board.
    fn on_board_changed(&mut self, board: &Board);

    /// The derived status changed value.
    fn on_status_changed(&mut self, status: GameStatus);
}

/// Handle identifying a registered listener, for later removal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(u32);

/// The mutable holder of the current game.
///
/// Invariant: the cached status always equals `rules.status(board)`. It is
/// recomputed on every board replacement and can never drift, because the
/// board changes only through [`replace_board`](Self::replace_board) and
/// that path is reachable only from the command layer.
pub struct GameSession {
    board: Board,
    rules: Box<dyn RuleSet>,
    status: GameStatus,
    listeners: Vec<(ListenerId, Box<dyn GameListener>)>,
    next_listener_id: u32,
}

impl GameSession {
    /// Create a session over an initial board and ruleset.
    ///
    /// The status is derived immediately; a session never exists in an
    /// unclassified state.
    #[must_use]
    pub fn new(initial_board: Board, rules: Box<dyn RuleSet>) -> Self {
        let status = rules.status(&initial_board);
        Self {
            board: initial_board,
            rules,
            status,
            listeners: Vec::new(),
            next_listener_id: 0,
        }
    }

    /// The current board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The cached status of the current board.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// The ruleset interpreting this session's boards.
    #[must_use]
    pub fn rules(&self) -> &dyn RuleSet {
        self.rules.as_ref()
    }

    /// Whether `mv` is legal on the current board.
    #[must_use]
    pub fn is_legal(&self, mv: Move) -> bool {
        self.rules.is_legal(&self.board, mv)
    }

    /// Register a listener; returns the handle that removes it.
    pub fn add_listener(&mut self, listener: Box<dyn GameListener>) -> ListenerId {
        let id = ListenerId(self.next_listener_id);
        self.next_listener_id += 1;
        self.listeners.push((id, listener));
        id
    }

    /// Remove a listener by handle.
    ///
    /// Removing an id that is not registered is a no-op returning `false`.
    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(registered, _)| *registered != id);
        self.listeners.len() != before
    }

    /// Install `new_board` as current, recompute status, notify listeners.
    ///
    /// Every listener hears `on_board_changed`; `on_status_changed` fires
    /// only when the derived status differs from the value before this
    /// call. Crate-internal: history commands are the sole mutation path,
    /// so collaborators can never bypass the undo log.
    pub(crate) fn replace_board(&mut self, new_board: Board) {
        self.board = new_board;

        let old_status = self.status;
        self.status = self.rules.status(&self.board);

        debug!(
            listeners = self.listeners.len(),
            "notifying listeners of board change"
        );
        for (_, listener) in &mut self.listeners {
            listener.on_board_changed(&self.board);
        }

        if old_status != self.status {
            debug!(status = %self.status, "notifying listeners of status change");
            for (_, listener) in &mut self.listeners {
                listener.on_status_changed(self.status);
            }
        }
    }
}
