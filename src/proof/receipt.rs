//! Round Receipts
//!
//! Everything needed to re-check a finished round offline,
//! serialized as JSON.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::game::moves::{MoveSet, MoveSetError};
use crate::game::rules::{Outcome, RuleMatrix};
use crate::proof::commitment::{Commitment, CommitmentError, SecretKey};

/// Published record of a resolved round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundReceipt {
    /// Round identifier.
    pub round_id: Uuid,
    /// Move set in play, in set order.
    pub moves: Vec<String>,
    /// Commitment shown before the player answered.
    pub commitment: Commitment,
    /// Player's move.
    pub player_move: String,
    /// Opponent's committed move.
    pub opponent_move: String,
    /// Outcome from the player's perspective.
    pub outcome: Outcome,
    /// Revealed HMAC key (hex).
    pub key: String,
    /// When the key was revealed.
    pub revealed_at: DateTime<Utc>,
}

/// Why a receipt failed to check out.
#[derive(Debug, thiserror::Error)]
pub enum ReceiptError {
    /// Key field is not valid hex.
    #[error("malformed key: {0}")]
    MalformedKey(#[from] CommitmentError),

    /// The recorded move set is not a playable one.
    #[error(transparent)]
    InvalidMoveSet(#[from] MoveSetError),

    /// A move named in the receipt is not in its move set.
    #[error("move {0:?} is not in the move set")]
    UnknownMove(String),

    /// HMAC over the revealed move does not match the commitment.
    #[error("commitment does not match revealed key and move")]
    CommitmentMismatch,

    /// Recorded outcome disagrees with the rules for the recorded moves.
    #[error("recorded outcome {recorded} does not match rules ({expected})")]
    OutcomeMismatch {
        /// Outcome in the receipt.
        recorded: Outcome,
        /// Outcome the rules give.
        expected: Outcome,
    },
}

impl RoundReceipt {
    /// Recompute the commitment from the revealed key and opponent move,
    /// then re-score the recorded moves.
    pub fn verify(&self) -> Result<(), ReceiptError> {
        let moves = MoveSet::new(self.moves.clone())?;
        let find = |name: &String| {
            moves
                .find(name)
                .ok_or_else(|| ReceiptError::UnknownMove(name.clone()))
        };
        let player = find(&self.player_move)?;
        let opponent = find(&self.opponent_move)?;

        let key = SecretKey::from_hex(&self.key)?;
        if !self.commitment.verify(&key, &self.opponent_move) {
            return Err(ReceiptError::CommitmentMismatch);
        }

        let expected = RuleMatrix::build(&moves).outcome(player, opponent);
        if expected != self.outcome {
            return Err(ReceiptError::OutcomeMismatch {
                recorded: self.outcome,
                expected,
            });
        }
        Ok(())
    }

    /// Pretty JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Parse a JSON receipt.
    pub fn from_json(s: &str) -> serde_json::Result<Self> {
        serde_json::from_str(s)
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_receipt() -> RoundReceipt {
        let key = SecretKey::from_bytes(vec![5; 32]);
        RoundReceipt {
            round_id: Uuid::nil(),
            moves: vec!["rock".into(), "paper".into(), "scissors".into()],
            commitment: Commitment::commit(&key, "paper").unwrap(),
            player_move: "scissors".into(),
            opponent_move: "paper".into(),
            outcome: Outcome::Win,
            key: key.to_hex(),
            revealed_at: Utc::now(),
        }
    }

    #[test]
    fn test_valid_receipt() {
        assert!(create_test_receipt().verify().is_ok());
    }

    #[test]
    fn test_swapped_move_fails() {
        let mut receipt = create_test_receipt();
        receipt.opponent_move = "rock".into();
        assert!(matches!(receipt.verify(), Err(ReceiptError::CommitmentMismatch)));
    }

    #[test]
    fn test_tampered_outcome_fails() {
        // Same move on both sides is a draw, whatever the receipt claims.
        let mut receipt = create_test_receipt();
        receipt.player_move = "paper".into();
        receipt.outcome = Outcome::Lose;
        assert!(matches!(
            receipt.verify(),
            Err(ReceiptError::OutcomeMismatch {
                recorded: Outcome::Lose,
                expected: Outcome::Draw,
            })
        ));

        let mut receipt = create_test_receipt();
        receipt.outcome = Outcome::Lose;
        assert!(matches!(receipt.verify(), Err(ReceiptError::OutcomeMismatch { .. })));
    }

    #[test]
    fn test_invalid_move_set_fails() {
        let mut receipt = create_test_receipt();
        receipt.moves.push("lizard".into());
        assert!(matches!(receipt.verify(), Err(ReceiptError::InvalidMoveSet(_))));
    }

    #[test]
    fn test_unknown_move_fails() {
        let mut receipt = create_test_receipt();
        receipt.player_move = "spock".into();
        assert!(matches!(receipt.verify(), Err(ReceiptError::UnknownMove(_))));
    }

    #[test]
    fn test_bad_key_fails() {
        let mut receipt = create_test_receipt();
        receipt.key = "not hex".into();
        assert!(matches!(receipt.verify(), Err(ReceiptError::MalformedKey(_))));
    }

    #[test]
    fn test_json_survives() {
        let receipt = create_test_receipt();
        let json = receipt.to_json().unwrap();

        assert!(json.contains("\"outcome\": \"win\""));
        let parsed = RoundReceipt::from_json(&json).unwrap();
        assert_eq!(parsed, receipt);
        assert!(parsed.verify().is_ok());
    }
}
