//! Standard game setups.
//!
//! Pure configuration: boards and wiring for well-known layouts. Nothing
//! here holds state; each call builds fresh values.

pub mod english;
