//! Configuration
//!
//! Defaults, then environment, then command-line flags.

use clap::Parser;

use crate::proof::commitment::{DEFAULT_KEY_LEN, MIN_KEY_LEN};

/// Environment variable for the secret key length in bytes.
pub const ENV_KEY_BYTES: &str = "FAIR_RPS_KEY_BYTES";
/// Environment variable that enables JSON receipts.
pub const ENV_RECEIPT: &str = "FAIR_RPS_RECEIPT";
/// Environment variable that disables the play-again prompt.
pub const ENV_ONCE: &str = "FAIR_RPS_ONCE";

/// Rock-paper-scissors for any odd number of moves, with an HMAC
/// commitment you can check after every round.
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "fair-rps", version)]
pub struct Args {
    /// Move names in ring order: an odd count of at least 3, all unique.
    /// Each move beats the (N-1)/2 moves before it on the ring.
    #[arg(value_name = "MOVE")]
    pub moves: Vec<String>,

    /// Secret key length in bytes (default 256, at least 32).
    #[arg(long, value_name = "BYTES")]
    pub key_bytes: Option<usize>,

    /// Play a single round, then exit.
    #[arg(long)]
    pub once: bool,

    /// Print a JSON receipt after each round.
    #[arg(long)]
    pub receipt: bool,
}

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// An environment variable holds an unusable value.
    #[error("invalid value for {var}: {value:?}")]
    InvalidEnv {
        /// Variable name.
        var: &'static str,
        /// Value found.
        value: String,
    },

    /// Key length below the minimum.
    #[error("key length must be at least {min} bytes, got {got}")]
    KeyTooShort {
        /// Minimum length.
        min: usize,
        /// Configured length.
        got: usize,
    },
}

/// Resolved runtime configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    /// Secret key length in bytes.
    pub key_bytes: usize,
    /// Ask to play again after each round.
    pub play_again: bool,
    /// Print a JSON receipt after each round.
    pub receipt: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            key_bytes: DEFAULT_KEY_LEN,
            play_again: true,
            receipt: false,
        }
    }
}

fn is_truthy(v: &str) -> bool {
    v == "true" || v == "1"
}

impl AppConfig {
    /// Create config from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Create config from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup(ENV_KEY_BYTES) {
            config.key_bytes = value
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidEnv { var: ENV_KEY_BYTES, value: value.clone() })?;
        }
        if let Some(value) = lookup(ENV_RECEIPT) {
            config.receipt = is_truthy(&value);
        }
        if let Some(value) = lookup(ENV_ONCE) {
            config.play_again = !is_truthy(&value);
        }

        Ok(config)
    }

    /// Overlay command-line flags. A flag that is absent leaves the
    /// environment value in place.
    pub fn apply_args(mut self, args: &Args) -> Self {
        if let Some(key_bytes) = args.key_bytes {
            self.key_bytes = key_bytes;
        }
        if args.once {
            self.play_again = false;
        }
        if args.receipt {
            self.receipt = true;
        }
        self
    }

    /// Reject unusable settings.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.key_bytes < MIN_KEY_LEN {
            return Err(ConfigError::KeyTooShort {
                min: MIN_KEY_LEN,
                got: self.key_bytes,
            });
        }
        Ok(())
    }
}

// =============================================================================
// TESTS
// =============================================================================
