//! 游戏错误处理模块
//!
//! Error taxonomy shared by every crate of the game: stat lookups, command
//! rejections and internal invariant violations.

use std::fmt;

use thiserror::Error;

/// Which section of the stat catalog a lookup targeted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Hero,
    Monster,
    Guardian,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            EntityKind::Hero => "hero",
            EntityKind::Monster => "monster",
            EntityKind::Guardian => "guardian",
        })
    }
}

/// Errors that can occur while running the game.
#[derive(Debug, Error)]
pub enum GameError {
    /// 属性表中缺少条目
    #[error("no {kind} stats named {name}")]
    ConfigurationMissing { kind: EntityKind, name: String },

    /// A stat entry breaks the stat block invariants
    #[error("invalid stats: {0}")]
    InvalidStats(String),

    /// The player asked for something the current state does not allow
    #[error("{0}")]
    InvalidCommand(String),

    /// 内部不变量被破坏（程序缺陷）
    #[error("internal invariant violated: {0}")]
    UnknownEntityVariant(String),

    /// IO操作错误
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Stat file could not be parsed
    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

impl GameError {
    /// Shorthand for a player-facing rejection.
    pub fn invalid(message: impl Into<String>) -> Self {
        GameError::InvalidCommand(message.into())
    }

    /// Fatal errors signal a defect and end the session; everything else is
    /// recoverable.
    pub fn is_fatal(&self) -> bool {
        matches!(self, GameError::UnknownEntityVariant(_))
    }
}

/// Converts an error into the message shown to the player.
pub fn handle_error(error: &GameError) -> String {
    match error {
        GameError::InvalidCommand(message) => message.clone(),
        GameError::ConfigurationMissing { kind, name } => {
            format!("Unknown {kind} '{name}', using default stats.")
        }
        GameError::Io(e) => match e.kind() {
            std::io::ErrorKind::NotFound => "Stat file not found".to_string(),
            std::io::ErrorKind::PermissionDenied => {
                "Permission denied reading stat file".to_string()
            }
            _ => format!("IO error: {e}"),
        },
        _ => error.to_string(),
    }
}
