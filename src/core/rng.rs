//! Secure Randomness
//!
//! Every random draw in a round (secret key bytes, opponent move) must come
//! from a cryptographically secure generator. Production code uses the OS
//! source; tests pass a seeded `StdRng`, which is also a `CryptoRng`.

use rand::rngs::OsRng;
use rand::{CryptoRng, Rng, RngCore};

/// The production entropy source.
pub fn system_rng() -> OsRng {
    OsRng
}

/// Fill `buf` with secure random bytes.
///
/// Failure of the underlying source is surfaced rather than retried.
pub fn fill_secure<R>(rng: &mut R, buf: &mut [u8]) -> Result<(), rand::Error>
where
    R: RngCore + CryptoRng,
{
    rng.try_fill_bytes(buf)
}

/// Draw a uniform index in `[0, n)`.
///
/// `gen_range` uses rejection sampling, so there is no modulo bias.
/// Returns 0 when `n` is 0.
pub fn uniform_index<R>(rng: &mut R, n: usize) -> usize
where
    R: RngCore + CryptoRng,
{
    if n == 0 {
        return 0;
    }
    rng.gen_range(0..n)
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_uniform_index_range() {
        let mut rng = StdRng::seed_from_u64(1234);

        for _ in 0..1000 {
            assert!(uniform_index(&mut rng, 7) < 7);
        }

        // Edge cases
        assert_eq!(uniform_index(&mut rng, 0), 0);
        assert_eq!(uniform_index(&mut rng, 1), 0);
    }

    #[test]
    fn test_uniform_index_determinism() {
        let mut rng1 = StdRng::seed_from_u64(42);
        let mut rng2 = StdRng::seed_from_u64(42);

        for _ in 0..100 {
            assert_eq!(uniform_index(&mut rng1, 5), uniform_index(&mut rng2, 5));
        }
    }

    #[test]
    fn test_fill_secure_system() {
        let mut a = [0u8; 32];
        let mut b = [0u8; 32];
        fill_secure(&mut system_rng(), &mut a).unwrap();
        fill_secure(&mut system_rng(), &mut b).unwrap();

        // 2^-256 chance of a false failure
        assert_ne!(a, b);
    }
}
