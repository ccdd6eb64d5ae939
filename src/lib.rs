//! # Fair RPS
//!
//! Rock-paper-scissors generalized to any odd number of moves, with a
//! commitment the player can check after every round.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                         FAIR RPS                             │
//! ├─────────────────────────────────────────────────────────────┤
//! │  core/           - Trusted primitives                        │
//! │  ├── hash.rs     - HMAC-SHA256                               │
//! │  └── rng.rs      - Secure randomness, uniform draws          │
//! │                                                              │
//! │  game/           - Game logic (no I/O)                       │
//! │  ├── moves.rs    - Move set validation                       │
//! │  ├── rules.rs    - Circular-distance rule matrix             │
//! │  ├── input.rs    - Prompt parsing                            │
//! │  └── engine.rs   - Round lifecycle                           │
//! │                                                              │
//! │  proof/          - Fairness                                  │
//! │  ├── commitment.rs - Secret key, commit, verify              │
//! │  └── receipt.rs  - JSON round receipts                       │
//! │                                                              │
//! │  cli/            - Terminal front end                        │
//! │  ├── config.rs   - Args and environment                      │
//! │  ├── render.rs   - Menus, tables, results                    │
//! │  └── session.rs  - Prompt loop                               │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Fairness Guarantee
//!
//! Each round the opponent's move is drawn and an HMAC of its name is
//! printed **before** the player's input is read. The HMAC key is printed
//! only **after** the outcome. Recomputing `HMAC-SHA256(key, move)` must
//! reproduce the printed value, so the opponent could not have changed its
//! move after seeing the player's.
//!
//! ```
//! use fair_rps::{GameEngine, MoveId};
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let engine = GameEngine::new(vec!["rock".into(), "paper".into(), "scissors".into()]).unwrap();
//! let round = engine.start_round(&mut StdRng::seed_from_u64(1)).unwrap();
//! let shown = *round.commitment();
//!
//! let resolved = round.resolve(MoveId(0));
//! assert!(shown.verify(resolved.revealed_key(), resolved.opponent_name()));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod cli;
pub mod core;
pub mod game;
pub mod proof;

// Re-export commonly used types
pub use game::engine::{CommittedRound, GameEngine, ResolvedRound};
pub use game::moves::{MoveId, MoveSet, MoveSetError, Violation};
pub use game::rules::{Outcome, RuleMatrix};
pub use proof::commitment::{Commitment, CommitmentError, SecretKey};
pub use proof::receipt::RoundReceipt;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
