use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use moon_quest::{Cli, GameConfig, Session};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(&cli.log_level)?;

    let config = GameConfig::from_cli(&cli).with_context(|| match &cli.stats {
        Some(path) => format!("Failed to load stat catalog from {}", path.display()),
        None => "Failed to build game configuration".to_string(),
    })?;
    tracing::info!(seed = ?config.seed, monster_regen = config.monster_regen, "starting session");

    let stdin = io::stdin();
    let mut session = Session::new(stdin.lock(), io::stdout(), config);
    session.run().context("Game crashed")?;
    Ok(())
}

/// Logs go to stderr so the game text on stdout stays readable.
/// `RUST_LOG` wins over `--log-level` when set.
fn setup_logging(level: &str) -> Result<()> {
    let filter = match std::env::var("RUST_LOG") {
        Ok(_) => EnvFilter::from_default_env(),
        Err(_) => EnvFilter::try_new(level).with_context(|| format!("Invalid log filter '{level}'"))?,
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
    Ok(())
}
