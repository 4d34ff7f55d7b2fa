//! Board-domain value types: cells, positions, moves, and the board itself.
//!
//! Everything here is an immutable value with structural equality. Rule
//! knowledge lives in [`crate::rules`]; these types only describe state.

pub mod board;
pub mod cell;
pub mod moves;
pub mod position;

pub use board::Board;
pub use cell::Cell;
pub use moves::Move;
pub use position::Position;
