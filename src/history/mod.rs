//! Command-based undo/redo history.
//!
//! [`Command`] is the reversible-action capability, [`MoveCommand`] the
//! concrete command that applies one jump to a session, and
//! [`HistoryController`] the undo/redo log over any command.

pub mod command;
pub mod controller;

pub use command::{Command, MoveCommand};
pub use controller::HistoryController;
