//! Rule Matrix
//!
//! Win/lose/draw relation over every ordered pair of moves.
//!
//! # Circular Distance
//!
//! Moves sit on a ring in set order. For your move at position `i` and the
//! opponent's at `j`, with `d = (j - i) mod N` and `h = (N - 1) / 2`:
//!
//! ```text
//! d == 0        draw
//! 1 <= d <= h   lose   (the next h moves around the ring beat you)
//! h <  d        win
//! ```
//!
//! Every move therefore beats exactly `h` moves and loses to exactly `h`.
//! For `[rock, paper, scissors]` this is the usual table.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::moves::{MoveId, MoveSet};

/// Result of a pairing, from the perspective of the first move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    /// First move beats the second.
    Win,
    /// First move loses to the second.
    Lose,
    /// Same move.
    Draw,
}

impl Outcome {
    /// The same pairing seen from the other side.
    pub const fn flip(self) -> Self {
        match self {
            Self::Win => Self::Lose,
            Self::Lose => Self::Win,
            Self::Draw => Self::Draw,
        }
    }

    /// Lowercase label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Win => "win",
            Self::Lose => "lose",
            Self::Draw => "draw",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Outcome for positions `you` and `opponent` on a ring of `size` moves.
///
/// Both positions must be below `size`.
#[inline]
pub fn circular_outcome(you: usize, opponent: usize, size: usize) -> Outcome {
    debug_assert!(you < size && opponent < size);

    let distance = (opponent + size - you) % size;
    let half = (size - 1) / 2;

    match distance {
        0 => Outcome::Draw,
        d if d <= half => Outcome::Lose,
        _ => Outcome::Win,
    }
}

/// Fully populated outcome table, row-major by your move.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RuleMatrix {
    size: usize,
    cells: Vec<Outcome>,
}

impl RuleMatrix {
    /// Build the table for a validated move set.
    pub fn build(moves: &MoveSet) -> Self {
        let size = moves.len();
        let cells = (0..size * size)
            .map(|cell| circular_outcome(cell / size, cell % size, size))
            .collect();

        Self { size, cells }
    }

    /// Number of moves.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Outcome of `you` against `opponent`.
    pub fn outcome(&self, you: MoveId, opponent: MoveId) -> Outcome {
        self.cells[you.index() * self.size + opponent.index()]
    }

    /// Outcomes of `you` against every move, in set order.
    pub fn row(&self, you: MoveId) -> &[Outcome] {
        let start = you.index() * self.size;
        &self.cells[start..start + self.size]
    }

    /// Moves that `you` beats.
    pub fn beaten_by(&self, you: MoveId) -> impl Iterator<Item = MoveId> + '_ {
        self.row(you)
            .iter()
            .enumerate()
            .filter(|(_, o)| **o == Outcome::Win)
            .map(|(i, _)| MoveId(i))
    }
}

// =============================================================================
// TESTS
// =============================================================================
