//! Command-line front end.
//!
//! Argument and environment handling, the prompt loop and terminal output.
//! Decisions stay in `game` and `proof`; this layer only moves text.

pub mod config;
pub mod render;
pub mod session;

pub use config::{AppConfig, Args, ConfigError};
pub use session::{Session, SessionConfig, SessionEnd, SessionError, SessionSummary};
