//! Fairness Proofs
//!
//! The player cannot see the opponent's move in advance, and the opponent
//! cannot change it after the player answers.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    PROOF SYSTEM                             │
//! ├─────────────────────────────────────────────────────────────┤
//! │  commitment.rs   - Secret key, HMAC commit and verify       │
//! │  receipt.rs      - JSON record of a resolved round          │
//! └─────────────────────────────────────────────────────────────┘
//! ```

pub mod commitment;
pub mod receipt;

// Re-export key types
pub use commitment::{Commitment, CommitmentError, SecretKey, DEFAULT_KEY_LEN, MIN_KEY_LEN};
pub use receipt::{ReceiptError, RoundReceipt};
