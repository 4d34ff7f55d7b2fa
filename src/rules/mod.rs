//! Rulesets: move legality, legal-move enumeration, status classification.
//!
//! The session and command layers only ever see the [`RuleSet`] trait;
//! swapping [`EnglishRules`] for another implementation changes which moves
//! are legal, never how sessions or history behave.

pub mod engine;
pub mod english;
pub mod stub;

pub use engine::{GameStatus, RuleSet};
pub use english::EnglishRules;
pub use stub::StubRules;
