// src/config.rs
use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use combat::{GameRng, StatCatalog};
use error::GameError;
use tracing::info;

/// mOOn Quest - a turn-based text dungeon crawler
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "moon_quest")]
#[command(about = "Explore the maze, defeat the guardians and bring the four pillars home")]
#[command(version)]
pub struct Cli {
    /// Random seed for a reproducible run
    #[arg(long)]
    pub seed: Option<u64>,

    /// JSON stat catalog overriding the built-in stats
    #[arg(long, value_name = "PATH")]
    pub stats: Option<PathBuf>,

    /// Let monsters regenerate health during a fight
    #[arg(long)]
    pub monster_regen: bool,

    /// Print plain text without colours
    #[arg(long)]
    pub no_color: bool,

    /// Start every hero in god mode (debugging)
    #[arg(long)]
    pub god: bool,

    /// Log filter written to stderr, e.g. `debug` or `dungeon=trace`
    #[arg(long, value_name = "FILTER", default_value = "warn")]
    pub log_level: String,
}

/// Runtime settings shared by every game of a session.
#[derive(Debug, Clone)]
pub struct GameConfig {
    pub seed: Option<u64>,
    pub catalog: Arc<StatCatalog>,
    pub monster_regen: bool,
    pub color: bool,
    pub god_mode: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: None,
            catalog: Arc::new(StatCatalog::builtin()),
            monster_regen: false,
            color: false,
            god_mode: false,
        }
    }
}

impl GameConfig {
    /// Resolves the command line into a config, loading the stat file if one
    /// was given.
    pub fn from_cli(cli: &Cli) -> Result<Self, GameError> {
        let catalog = match &cli.stats {
            Some(path) => {
                info!(path = %path.display(), "loading stat catalog");
                StatCatalog::load(path)?
            }
            None => StatCatalog::builtin(),
        };
        Ok(Self {
            seed: cli.seed,
            catalog: Arc::new(catalog),
            monster_regen: cli.monster_regen,
            color: !cli.no_color,
            god_mode: cli.god,
        })
    }

    /// A fresh random source for one game.
    pub fn rng(&self) -> GameRng {
        match self.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_from_empty_command_line() {
        let cli = Cli::parse_from(["moon_quest"]);
        assert_eq!(cli.log_level, "warn");
        let config = GameConfig::from_cli(&cli).unwrap();
        assert!(config.color);
        assert!(!config.monster_regen);
        assert_eq!(config.catalog.len(), 10);
    }

    #[test]
    fn flags_carry_through() {
        let cli = Cli::parse_from([
            "moon_quest",
            "--seed",
            "42",
            "--monster-regen",
            "--no-color",
            "--god",
        ]);
        let config = GameConfig::from_cli(&cli).unwrap();
        assert_eq!(config.seed, Some(42));
        assert!(config.monster_regen && config.god_mode && !config.color);
        assert_eq!(config.rng().seed(), 42);
    }

    #[test]
    fn missing_stat_file_is_an_io_error() {
        let cli = Cli::parse_from(["moon_quest", "--stats", "/definitely/not/here.json"]);
        assert!(matches!(GameConfig::from_cli(&cli), Err(GameError::Io(_))));
    }
}
