//! Fair RPS
//!
//! Interactive N-move rock-paper-scissors against a committed opponent.
//! Game output goes to stdout, logs to stderr.

use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use fair_rps::{
    cli::{render, AppConfig, Args, Session, SessionConfig},
    core::rng::system_rng,
    GameEngine, VERSION,
};

/// Exit code for a rejected move list.
const EXIT_INVALID_MOVES: u8 = 2;

fn main() -> ExitCode {
    let args = Args::parse();

    match run(args) {
        Ok(code) => code,
        Err(e) => {
            error!("{:#}", e);
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_logging() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set tracing subscriber")
}

fn run(args: Args) -> anyhow::Result<ExitCode> {
    init_logging()?;
    info!("Fair RPS v{}", VERSION);

    let config = AppConfig::from_env()
        .context("reading environment")?
        .apply_args(&args);
    config.validate().context("invalid configuration")?;

    let engine = match GameEngine::new(args.moves) {
        Ok(engine) => engine.with_key_len(config.key_bytes),
        Err(e) => {
            info!(violations = ?e.violations, "move set rejected");
            let mut stdout = io::stdout().lock();
            render::write_violations(&mut stdout, &e)?;
            stdout.flush()?;
            return Ok(ExitCode::from(EXIT_INVALID_MOVES));
        }
    };

    let mut session = Session::new(
        &engine,
        io::stdin().lock(),
        io::stdout().lock(),
        system_rng(),
        SessionConfig::from(&config),
    );
    let summary = session.run().context("session aborted")?;

    info!(
        rounds = summary.rounds,
        wins = summary.wins,
        losses = summary.losses,
        draws = summary.draws,
        end = ?summary.end,
        "session finished"
    );

    Ok(ExitCode::SUCCESS)
}
