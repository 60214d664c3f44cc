//! mOOn Quest: a turn-based text dungeon crawler.
//!
//! The member crates hold the rules (`combat`, `hero`, `dungeon`, `items`,
//! `error`); this crate wires them into a playable game.

pub mod battle;
pub mod config;
pub mod game;
pub mod render;
pub mod session;

pub use crate::battle::{BattleManager, BattleOutcome, BattleRules, HeroAction, RoundResult};
pub use crate::config::{Cli, GameConfig};
pub use crate::game::{ENTRANCE, Game, Phase, Turn};
pub use crate::session::Session;
