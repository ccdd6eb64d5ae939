//! Move Commitment Protocol
//!
//! Commit to the opponent's move before the player answers.
//! Reveal the key after the outcome so the player can check it.
//!
//! ```text
//! start:   key  <- CSPRNG
//!          hmac  = HMAC-SHA256(key, move name)     (published)
//! answer:  player picks a move
//! end:     move name + key                          (published)
//! check:   HMAC-SHA256(key, move name) == hmac
//! ```

use std::fmt;

use rand::{CryptoRng, RngCore};
use serde::{Deserialize, Serialize};

use crate::core::hash::{hmac_sha256, verify_hmac_sha256, Digest};
use crate::core::rng::fill_secure;

/// Smallest accepted key (256 bits).
pub const MIN_KEY_LEN: usize = 32;

/// Default key length in bytes.
pub const DEFAULT_KEY_LEN: usize = 256;

/// Errors from key generation, commitment, or parsing.
#[derive(Debug, thiserror::Error)]
pub enum CommitmentError {
    /// The secure random source failed. No safe fallback exists.
    #[error("entropy source failed: {0}")]
    Entropy(#[from] rand::Error),

    /// Requested key is shorter than [`MIN_KEY_LEN`].
    #[error("secret key must be at least {min} bytes, got {got}")]
    KeyTooShort {
        /// Minimum length.
        min: usize,
        /// Requested length.
        got: usize,
    },

    /// HMAC rejected the key.
    #[error("secret key rejected by HMAC")]
    InvalidKey,

    /// Hex input could not be decoded.
    #[error("invalid hex: {0}")]
    InvalidHex(#[from] hex::FromHexError),

    /// Decoded digest has the wrong length.
    #[error("commitment must be 32 bytes, got {0}")]
    InvalidDigestLength(usize),
}

impl From<crate::core::hash::InvalidKeyLength> for CommitmentError {
    fn from(_: crate::core::hash::InvalidKeyLength) -> Self {
        Self::InvalidKey
    }
}

// =============================================================================
// SECRET KEY
// =============================================================================

/// Per-round HMAC key.
///
/// `Debug` is redacted; the bytes only leave through [`SecretKey::to_hex`].
#[derive(Clone, PartialEq, Eq)]
pub struct SecretKey(Vec<u8>);

impl SecretKey {
    /// Draw a fresh key of `len` bytes from a secure generator.
    pub fn generate<R>(rng: &mut R, len: usize) -> Result<Self, CommitmentError>
    where
        R: RngCore + CryptoRng,
    {
        if len < MIN_KEY_LEN {
            return Err(CommitmentError::KeyTooShort { min: MIN_KEY_LEN, got: len });
        }

        let mut bytes = vec![0u8; len];
        fill_secure(rng, &mut bytes)?;
        Ok(Self(bytes))
    }

    /// Wrap existing key bytes (used when verifying a revealed key).
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    /// Parse a revealed hex key.
    pub fn from_hex(s: &str) -> Result<Self, CommitmentError> {
        Ok(Self(hex::decode(s.trim())?))
    }

    /// Raw key bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Key length in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True for a zero-length key.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Lowercase hex, as revealed to the player.
    pub fn to_hex(&self) -> String {
        hex::encode(&self.0)
    }
}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SecretKey(<{} bytes>)", self.0.len())
    }
}

// =============================================================================
// COMMITMENT
// =============================================================================

/// HMAC-SHA256 of a move name, published before the player answers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Commitment(Digest);

impl Commitment {
    /// Commit to `move_name` under `key`.
    pub fn commit(key: &SecretKey, move_name: &str) -> Result<Self, CommitmentError> {
        Ok(Self(hmac_sha256(key.as_bytes(), move_name.as_bytes())?))
    }

    /// Check a revealed (key, move) pair against this commitment.
    pub fn verify(&self, key: &SecretKey, move_name: &str) -> bool {
        verify_hmac_sha256(key.as_bytes(), move_name.as_bytes(), &self.0)
    }

    /// Parse a published hex commitment.
    pub fn from_hex(s: &str) -> Result<Self, CommitmentError> {
        let bytes = hex::decode(s.trim())?;
        let digest: Digest = bytes
            .as_slice()
            .try_into()
            .map_err(|_| CommitmentError::InvalidDigestLength(bytes.len()))?;
        Ok(Self(digest))
    }

    /// Raw digest.
    pub fn as_bytes(&self) -> &Digest {
        &self.0
    }

    /// Lowercase hex.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Display for Commitment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl From<Commitment> for String {
    fn from(c: Commitment) -> Self {
        c.to_hex()
    }
}

impl TryFrom<String> for Commitment {
    type Error = CommitmentError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::from_hex(&s)
    }
}

// =============================================================================
// TESTS
// =============================================================================
