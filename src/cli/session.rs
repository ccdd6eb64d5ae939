//! Interactive Session
//!
//! Drives rounds against a reader and a writer:
//!
//! ```text
//! loop {
//!     start round         -> print HMAC, menu
//!     loop {              -> prompt; help re-displays, bad input re-prompts
//!     }
//!     resolve             -> print moves, outcome, key (and receipt)
//!     play again?         -> next round or stop
//! }
//! ```
//!
//! No recursion: a long session never grows the stack.

use std::io::{self, BufRead, Write};

use rand::{CryptoRng, RngCore};
use tracing::{debug, info, instrument, warn};

use crate::cli::config::AppConfig;
use crate::cli::render;
use crate::game::engine::{GameEngine, ResolvedRound};
use crate::game::input::Choice;
use crate::game::rules::Outcome;
use crate::proof::commitment::CommitmentError;

/// Prompt for a move.
pub const MOVE_PROMPT: &str = "Enter your move: ";

/// Prompt after a finished round.
pub const AGAIN_PROMPT: &str = "Shall we play again? (y/n): ";

/// Session errors. All are fatal for the session.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// Terminal I/O failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Key generation or commitment failed.
    #[error("commitment error: {0}")]
    Commitment(#[from] CommitmentError),

    /// Receipt could not be serialized.
    #[error("receipt error: {0}")]
    Receipt(#[from] serde_json::Error),
}

/// Why the session stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// Player entered the exit token.
    Exit,
    /// Input stream closed.
    EndOfInput,
    /// Player declined another round, or single-round mode.
    Finished,
}

/// Tally of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    /// Rounds resolved.
    pub rounds: u32,
    /// Rounds the player won.
    pub wins: u32,
    /// Rounds the player lost.
    pub losses: u32,
    /// Drawn rounds.
    pub draws: u32,
    /// How the session ended.
    pub end: SessionEnd,
}

impl SessionSummary {
    fn new() -> Self {
        Self {
            rounds: 0,
            wins: 0,
            losses: 0,
            draws: 0,
            end: SessionEnd::Finished,
        }
    }

    fn record(&mut self, outcome: Outcome) {
        self.rounds += 1;
        match outcome {
            Outcome::Win => self.wins += 1,
            Outcome::Lose => self.losses += 1,
            Outcome::Draw => self.draws += 1,
        }
    }

    fn ended(mut self, end: SessionEnd) -> Self {
        self.end = end;
        self
    }
}

/// Session settings taken from [`AppConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    /// Ask to play again after each round.
    pub play_again: bool,
    /// Print a JSON receipt after each round.
    pub receipt: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            play_again: true,
            receipt: false,
        }
    }
}

impl From<&AppConfig> for SessionConfig {
    fn from(config: &AppConfig) -> Self {
        Self {
            play_again: config.play_again,
            receipt: config.receipt,
        }
    }
}

/// A player at a terminal.
pub struct Session<'e, In, Out, G> {
    engine: &'e GameEngine,
    input: In,
    output: Out,
    rng: G,
    config: SessionConfig,
}

impl<'e, In, Out, G> Session<'e, In, Out, G>
where
    In: BufRead,
    Out: Write,
    G: RngCore + CryptoRng,
{
    /// Create a session.
    pub fn new(engine: &'e GameEngine, input: In, output: Out, rng: G, config: SessionConfig) -> Self {
        Self {
            engine,
            input,
            output,
            rng,
            config,
        }
    }

    /// Give back the output writer.
    pub fn into_output(self) -> Out {
        self.output
    }

    /// Play until the player stops or input runs out.
    #[instrument(skip_all, fields(moves = self.engine.moves().len()))]
    pub fn run(&mut self) -> Result<SessionSummary, SessionError> {
        let engine = self.engine;
        let mut summary = SessionSummary::new();

        loop {
            // Committed: HMAC goes out before any input is read.
            let round = engine.start_round(&mut self.rng)?;
            render::write_commitment(&mut self.output, round.commitment())?;
            render::write_menu(&mut self.output, engine.moves())?;

            // AwaitingChoice
            let resolved = loop {
                let Some(line) = self.prompt(MOVE_PROMPT)? else {
                    debug!(round = %round.id(), "input closed while awaiting move");
                    return Ok(summary.ended(SessionEnd::EndOfInput));
                };

                match Choice::parse(&line, engine.moves()) {
                    Ok(Choice::Play(player)) => break round.resolve(player),
                    Ok(Choice::Help) => {
                        render::write_rule_table(&mut self.output, engine.moves(), engine.rules())?;
                    }
                    Ok(Choice::Exit) => {
                        info!(round = %round.id(), "player exited");
                        return Ok(summary.ended(SessionEnd::Exit));
                    }
                    Err(e) => {
                        debug!(error = %e, "rejected input");
                        writeln!(self.output, "Invalid command ({}). Try again.", e)?;
                    }
                }
            };

            // Resolved
            self.report(&resolved)?;
            summary.record(resolved.outcome());

            if !self.config.play_again {
                return Ok(summary.ended(SessionEnd::Finished));
            }
            match self.prompt(AGAIN_PROMPT)? {
                Some(answer) if wants_again(&answer) => continue,
                Some(_) => return Ok(summary.ended(SessionEnd::Finished)),
                None => return Ok(summary.ended(SessionEnd::EndOfInput)),
            }
        }
    }

    fn report(&mut self, resolved: &ResolvedRound<'_>) -> Result<(), SessionError> {
        render::write_resolution(&mut self.output, resolved)?;

        if !resolved.verify() {
            // Unreachable unless the HMAC backend is broken.
            warn!(round = %resolved.id(), "revealed key does not match commitment");
        }
        if self.config.receipt {
            writeln!(self.output, "{}", resolved.receipt().to_json()?)?;
        }
        Ok(())
    }

    /// Print `prompt`, read a line. `None` on end of input.
    fn prompt(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line))
    }
}

fn wants_again(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

// =============================================================================
// TESTS
// =============================================================================
