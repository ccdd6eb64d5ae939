//! Game logic.
//!
//! Move sets, the rule matrix, prompt parsing and the round lifecycle.
//! Nothing here performs I/O.

pub mod engine;
pub mod input;
pub mod moves;
pub mod rules;

pub use engine::{CommittedRound, GameEngine, ResolvedRound};
pub use input::{Choice, InputError};
pub use moves::{validate, MoveId, MoveSet, MoveSetError, Violation};
pub use rules::{circular_outcome, Outcome, RuleMatrix};
