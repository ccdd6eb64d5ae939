//! Keyed Digests
//!
//! HMAC-SHA256 helpers used by the commitment protocol.
//! Anyone holding the key and the message can recompute the digest
//! with a stock HMAC tool.

use hmac::{Hmac, Mac};
use sha2::Sha256;

/// Digest output type (256 bits / 32 bytes).
pub type Digest = [u8; 32];

/// Length of a hex-encoded digest.
pub const DIGEST_HEX_LEN: usize = 64;

type HmacSha256 = Hmac<Sha256>;

/// HMAC construction failed (key rejected by the MAC).
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("invalid HMAC key length")]
pub struct InvalidKeyLength;

fn keyed(key: &[u8], message: &[u8]) -> Result<HmacSha256, InvalidKeyLength> {
    let mut mac = HmacSha256::new_from_slice(key).map_err(|_| InvalidKeyLength)?;
    mac.update(message);
    Ok(mac)
}

/// Compute HMAC-SHA256 of `message` under `key`.
pub fn hmac_sha256(key: &[u8], message: &[u8]) -> Result<Digest, InvalidKeyLength> {
    Ok(keyed(key, message)?.finalize().into_bytes().into())
}

/// Check `expected` against a fresh HMAC of `message` under `key`.
///
/// Comparison goes through `Mac::verify_slice`.
pub fn verify_hmac_sha256(key: &[u8], message: &[u8], expected: &Digest) -> bool {
    match keyed(key, message) {
        Ok(mac) => mac.verify_slice(expected).is_ok(),
        Err(_) => false,
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rfc4231_case_2() {
        // RFC 4231 test case 2
        let digest = hmac_sha256(b"Jefe", b"what do ya want for nothing?").unwrap();
        assert_eq!(
            hex::encode(digest),
            "5bdcc146bf60754e6a042426089575c75a003f089d2739839dec58b964ec3843"
        );
    }

    #[test]
    fn test_hmac_determinism() {
        let a = hmac_sha256(&[7u8; 32], b"rock").unwrap();
        let b = hmac_sha256(&[7u8; 32], b"rock").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_key_changes_digest() {
        let a = hmac_sha256(&[1u8; 32], b"rock").unwrap();
        let b = hmac_sha256(&[2u8; 32], b"rock").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_verify() {
        let key = [9u8; 32];
        let digest = hmac_sha256(&key, b"spock").unwrap();

        assert!(verify_hmac_sha256(&key, b"spock", &digest));
        assert!(!verify_hmac_sha256(&key, b"lizard", &digest));
        assert!(!verify_hmac_sha256(&[8u8; 32], b"spock", &digest));
    }

    #[test]
    fn test_hex_length() {
        let digest = hmac_sha256(b"k", b"m").unwrap();
        assert_eq!(hex::encode(digest).len(), DIGEST_HEX_LEN);
    }
}
