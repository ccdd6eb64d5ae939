//! Player Input
//!
//! Parses one line typed at the move prompt. Parsing never fails hard:
//! a bad line is an [`InputError`] and the caller re-prompts.

use super::moves::{MoveId, MoveSet};

/// Token that ends the session.
pub const EXIT_TOKEN: &str = "0";

/// Token that shows the rule table.
pub const HELP_TOKEN: &str = "?";

/// What the player asked for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Choice {
    /// Play this move.
    Play(MoveId),
    /// Show the rule table, keep waiting.
    Help,
    /// Leave without playing.
    Exit,
}

/// Rejected prompt input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    /// Nothing was typed.
    #[error("no command entered")]
    Empty,
    /// A number outside `0..=N`.
    #[error("{value} is not a listed move (expected 0 to {max})")]
    OutOfRange {
        /// Number entered.
        value: usize,
        /// Largest valid move number.
        max: usize,
    },
    /// Neither a number nor a known command.
    #[error("unrecognized command: {0:?}")]
    Unrecognized(String),
}

impl Choice {
    /// Parse a prompt line against the session's move set.
    ///
    /// Accepts a 1-based move number, `0` to exit, or `?` for help.
    /// Surrounding whitespace is ignored.
    pub fn parse(line: &str, moves: &MoveSet) -> Result<Self, InputError> {
        let token = line.trim();

        match token {
            "" => Err(InputError::Empty),
            EXIT_TOKEN => Ok(Self::Exit),
            HELP_TOKEN => Ok(Self::Help),
            _ => {
                let value: usize = token
                    .parse()
                    .map_err(|_| InputError::Unrecognized(token.to_string()))?;

                value
                    .checked_sub(1)
                    .and_then(|index| moves.get(index))
                    .map(Self::Play)
                    .ok_or(InputError::OutOfRange { value, max: moves.len() })
            }
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
