//! Game Engine
//!
//! Round lifecycle as owned values:
//!
//! ```text
//! GameEngine::new        Configuring  -> move set validated, matrix built
//! GameEngine::start_round             -> CommittedRound (move drawn, key, HMAC)
//!   (caller reads input)  AwaitingChoice
//! CommittedRound::resolve             -> ResolvedRound (outcome, key revealed)
//! ```
//!
//! `CommittedRound` has no key accessor and `resolve` consumes it, so the
//! key cannot be revealed before the outcome exists and the opponent move
//! cannot change after the commitment is taken.

use rand::{CryptoRng, RngCore};
use tracing::{debug, info};
use uuid::Uuid;

use crate::core::rng::{fill_secure, uniform_index};
use crate::game::moves::{MoveId, MoveSet, MoveSetError};
use crate::game::rules::{Outcome, RuleMatrix};
use crate::proof::commitment::{Commitment, CommitmentError, SecretKey, DEFAULT_KEY_LEN};
use crate::proof::receipt::RoundReceipt;

/// Validated moves plus their rule matrix. Reused across rounds.
#[derive(Clone, Debug)]
pub struct GameEngine {
    moves: MoveSet,
    rules: RuleMatrix,
    key_len: usize,
}

impl GameEngine {
    /// Validate `names` and build the rule matrix.
    pub fn new(names: Vec<String>) -> Result<Self, MoveSetError> {
        let moves = MoveSet::new(names)?;
        let rules = RuleMatrix::build(&moves);
        debug!(moves = moves.len(), "rule matrix built");

        Ok(Self {
            moves,
            rules,
            key_len: DEFAULT_KEY_LEN,
        })
    }

    /// Use `len`-byte secret keys. Checked when a round starts.
    pub fn with_key_len(mut self, len: usize) -> Self {
        self.key_len = len;
        self
    }

    /// Move set in play.
    pub fn moves(&self) -> &MoveSet {
        &self.moves
    }

    /// Rule matrix.
    pub fn rules(&self) -> &RuleMatrix {
        &self.rules
    }

    /// Secret key length in bytes.
    pub fn key_len(&self) -> usize {
        self.key_len
    }

    /// Draw the opponent move, generate a key and commit.
    ///
    /// Every random draw comes from `rng`. The key is drawn first through the
    /// fallible path, so a dead entropy source surfaces as
    /// [`CommitmentError::Entropy`] before any infallible draw runs.
    pub fn start_round<R>(&self, rng: &mut R) -> Result<CommittedRound<'_>, CommitmentError>
    where
        R: RngCore + CryptoRng,
    {
        let key = SecretKey::generate(rng, self.key_len)?;

        let mut id_bytes = [0u8; 16];
        fill_secure(rng, &mut id_bytes)?;
        let id = uuid::Builder::from_random_bytes(id_bytes).into_uuid();

        let opponent = MoveId(uniform_index(rng, self.moves.len()));
        let commitment = Commitment::commit(&key, self.moves.name(opponent))?;

        // The opponent move stays out of the logs until the round resolves.
        info!(round = %id, commitment = %commitment, "round committed");

        Ok(CommittedRound {
            engine: self,
            id,
            opponent,
            key,
            commitment,
        })
    }
}

// =============================================================================
// ROUNDS
// =============================================================================

/// A round whose opponent move is fixed and committed.
///
/// No `Debug`: printing it would show the opponent move early.
pub struct CommittedRound<'a> {
    engine: &'a GameEngine,
    id: Uuid,
    opponent: MoveId,
    key: SecretKey,
    commitment: Commitment,
}

impl<'a> CommittedRound<'a> {
    /// Round identifier.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Commitment to publish before reading the player's move.
    pub fn commitment(&self) -> &Commitment {
        &self.commitment
    }

    /// Engine this round belongs to.
    pub fn engine(&self) -> &'a GameEngine {
        self.engine
    }

    /// Score the player's move and reveal the key.
    ///
    /// `player` must come from this engine's move set.
    pub fn resolve(self, player: MoveId) -> ResolvedRound<'a> {
        let outcome = self.engine.rules.outcome(player, self.opponent);

        info!(
            round = %self.id,
            player = self.engine.moves.name(player),
            opponent = self.engine.moves.name(self.opponent),
            %outcome,
            "round resolved"
        );

        ResolvedRound {
            engine: self.engine,
            id: self.id,
            player,
            opponent: self.opponent,
            outcome,
            key: self.key,
            commitment: self.commitment,
        }
    }
}

/// A finished round. The key is public now.
#[derive(Debug)]
pub struct ResolvedRound<'a> {
    engine: &'a GameEngine,
    id: Uuid,
    player: MoveId,
    opponent: MoveId,
    outcome: Outcome,
    key: SecretKey,
    commitment: Commitment,
}

impl ResolvedRound<'_> {
    /// Round identifier.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Player's move.
    pub fn player_move(&self) -> MoveId {
        self.player
    }

    /// Opponent's committed move.
    pub fn opponent_move(&self) -> MoveId {
        self.opponent
    }

    /// Name of the player's move.
    pub fn player_name(&self) -> &str {
        self.engine.moves.name(self.player)
    }

    /// Name of the opponent's move.
    pub fn opponent_name(&self) -> &str {
        self.engine.moves.name(self.opponent)
    }

    /// Outcome from the player's side.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// The commitment published at the start of the round.
    pub fn commitment(&self) -> &Commitment {
        &self.commitment
    }

    /// The key, for the player to recompute the commitment.
    pub fn revealed_key(&self) -> &SecretKey {
        &self.key
    }

    /// Recompute the commitment from the revealed key and opponent move.
    pub fn verify(&self) -> bool {
        self.commitment.verify(&self.key, self.opponent_name())
    }

    /// Serializable record of this round.
    pub fn receipt(&self) -> RoundReceipt {
        RoundReceipt {
            round_id: self.id,
            moves: self.engine.moves.names().to_vec(),
            commitment: self.commitment,
            player_move: self.player_name().to_string(),
            opponent_move: self.opponent_name().to_string(),
            outcome: self.outcome,
            key: self.key.to_hex(),
            revealed_at: chrono::Utc::now(),
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    /// Fails like the OS source: infallible draws panic, fallible ones error.
    struct FailingRng;

    impl RngCore for FailingRng {
        fn next_u32(&mut self) -> u32 {
            panic!("entropy source failed")
        }
        fn next_u64(&mut self) -> u64 {
            panic!("entropy source failed")
        }
        fn fill_bytes(&mut self, _dest: &mut [u8]) {
            panic!("entropy source failed")
        }
        fn try_fill_bytes(&mut self, _dest: &mut [u8]) -> Result<(), rand::Error> {
            Err(rand::Error::new(std::io::Error::new(
                std::io::ErrorKind::Other,
                "entropy source failed",
            )))
        }
    }

    impl CryptoRng for FailingRng {}

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn rpsls() -> GameEngine {
        GameEngine::new(names(&["rock", "spock", "paper", "lizard", "scissors"])).unwrap()
    }

    #[test]
    fn test_invalid_moves_rejected() {
        let err = GameEngine::new(names(&["rock", "paper"])).unwrap_err();
        assert_eq!(err.violations.len(), 2);
    }

    #[test]
    fn test_entropy_failure_is_error() {
        let engine = rpsls();
        assert!(matches!(
            engine.start_round(&mut FailingRng),
            Err(CommitmentError::Entropy(_))
        ));
    }

    #[test]
    fn test_round_verifies() {
        let engine = rpsls();
        let mut rng = StdRng::seed_from_u64(2024);

        for _ in 0..50 {
            let round = engine.start_round(&mut rng).unwrap();
            let shown = *round.commitment();
            let resolved = round.resolve(MoveId(0));

            assert_eq!(resolved.commitment(), &shown);
            assert!(resolved.verify());
            assert!(shown.verify(resolved.revealed_key(), resolved.opponent_name()));
        }
    }

    #[test]
    fn test_outcome_matches_matrix() {
        let engine = rpsls();
        let mut rng = StdRng::seed_from_u64(5);

        for player in engine.moves().ids() {
            let resolved = engine.start_round(&mut rng).unwrap().resolve(player);
            assert_eq!(
                resolved.outcome(),
                engine.rules().outcome(player, resolved.opponent_move())
            );
        }
    }

    #[test]
    fn test_fresh_key_every_round() {
        let engine = rpsls();
        let mut rng = StdRng::seed_from_u64(11);

        let a = engine.start_round(&mut rng).unwrap().resolve(MoveId(1));
        let b = engine.start_round(&mut rng).unwrap().resolve(MoveId(1));

        assert_ne!(a.revealed_key(), b.revealed_key());
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_same_seed_same_round() {
        let engine = rpsls();

        let a = engine.start_round(&mut StdRng::seed_from_u64(3)).unwrap();
        let b = engine.start_round(&mut StdRng::seed_from_u64(3)).unwrap();

        assert_eq!(a.commitment(), b.commitment());
        assert_eq!(a.id(), b.id());
    }

    #[test]
    fn test_key_length_configurable() {
        let engine = rpsls().with_key_len(256);
        let mut rng = StdRng::seed_from_u64(8);

        let resolved = engine.start_round(&mut rng).unwrap().resolve(MoveId(2));
        assert_eq!(resolved.revealed_key().len(), 256);

        let short = rpsls().with_key_len(8);
        assert!(matches!(
            short.start_round(&mut rng),
            Err(CommitmentError::KeyTooShort { .. })
        ));
    }

    #[test]
    fn test_opponent_selection_uniform() {
        let engine = rpsls();
        let mut rng = StdRng::seed_from_u64(77);
        let trials = 20_000;
        let mut counts = [0usize; 5];

        for _ in 0..trials {
            let resolved = engine.start_round(&mut rng).unwrap().resolve(MoveId(0));
            counts[resolved.opponent_move().index()] += 1;
        }

        // Expected 4000 each; sd ~57, so +/-400 is a very wide margin.
        for (i, count) in counts.iter().enumerate() {
            assert!((3600..=4400).contains(count), "move {} drawn {} times", i, count);
        }
    }

    #[test]
    fn test_receipt() {
        let engine = rpsls();
        let mut rng = StdRng::seed_from_u64(31);
        let resolved = engine.start_round(&mut rng).unwrap().resolve(MoveId(4));

        let receipt = resolved.receipt();
        assert_eq!(receipt.player_move, "scissors");
        assert_eq!(receipt.opponent_move, resolved.opponent_name());
        assert_eq!(receipt.outcome, resolved.outcome());
        assert!(receipt.verify().is_ok());
    }
}
