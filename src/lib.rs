//! # peg-solitaire
//!
//! Rules engine and move-history controller for Peg Solitaire.
//!
//! ## Design Principles
//!
//! 1. **Immutable boards**: a [`Board`] never mutates in place. Every move
//!    produces a new value backed by persistent storage, so the session's
//!    current board and the snapshots held by undo history share structure.
//!
//! 2. **Rules behind a trait**: [`RuleSet`] owns legality, legal-move
//!    enumeration, and status classification. Boards know nothing about
//!    rules; rulesets are stateless and substitutable.
//!
//! 3. **History is the mutation surface**: collaborators change a session
//!    only by running commands through [`HistoryController`], which is what
//!    keeps every change undoable.
//!
//! ## Modules
//!
//! - `core`: `Cell`, `Position`, `Move`, `Board` value types
//! - `rules`: `RuleSet` trait, `EnglishRules`, `StubRules`, `GameStatus`
//! - `session`: `GameSession` with observer notification
//! - `history`: `Command`, `MoveCommand`, `HistoryController`
//! - `games`: standard board layouts and session wiring
//!
//! ## Example
//!
//! ```
//! use peg_solitaire::games::english;
//! use peg_solitaire::{Move, MoveCommand, Position};
//!
//! let (mut session, mut history) = english::new_game();
//!
//! // Jump the peg at (1, 3) into the empty center.
//! let mv = Move::between(Position::new(1, 3), Position::new(3, 3));
//! assert!(history.execute(&mut session, Box::new(MoveCommand::new(mv))));
//!
//! assert!(history.undo(&mut session));
//! assert_eq!(session.board(), &english::board());
//! ```

pub mod core;
pub mod games;
pub mod history;
pub mod rules;
pub mod session;

// Re-export commonly used types
pub use crate::core::{Board, Cell, Move, Position};
pub use crate::history::{Command, HistoryController, MoveCommand};
pub use crate::rules::{EnglishRules, GameStatus, RuleSet, StubRules};
pub use crate::session::{GameListener, GameSession, ListenerId};
