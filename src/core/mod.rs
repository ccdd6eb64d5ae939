//! Core primitives.
//!
//! Keyed hashing and secure randomness. Everything the fairness
//! protocol trusts lives here.

pub mod hash;
pub mod rng;

// Re-export core types
pub use hash::{hmac_sha256, verify_hmac_sha256, Digest};
pub use rng::{fill_secure, system_rng, uniform_index};
