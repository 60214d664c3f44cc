//! HUD 渲染器
//!
//! Hero status line, position and open doorways.

use combat::{Combatant, Pillar};
use dungeon::Room;

use crate::game::Game;
use crate::render::Palette;

pub struct HudRenderer;

impl HudRenderer {
    /// `Hero: Knight | HP: 150/150 | Pillars: 0/4`
    pub fn status_line(game: &Game) -> String {
        let hero = game.hero();
        format!(
            "Hero: {} | HP: {}/{} | Pillars: {}/{}",
            hero.name(),
            hero.health(),
            hero.max_health(),
            hero.pillar_count(),
            Pillar::COUNT
        )
    }

    pub fn location(game: &Game) -> String {
        let (row, col) = game.maze().hero_location();
        format!("Location: [{row}, {col}]")
    }

    pub fn exits(room: &Room) -> String {
        let mut lines = vec!["Available exits:".to_string()];
        lines.extend(
            room.exits()
                .into_iter()
                .map(|direction| format!("- {direction} ({})", direction.key())),
        );
        if lines.len() == 1 {
            lines.push("- none".to_string());
        }
        lines.join("\n")
    }

    /// The traversal screen above the action list.
    pub fn render(game: &Game, palette: &Palette) -> String {
        [
            palette.heading("MAZE:"),
            Self::status_line(game),
            Self::location(game),
            Self::exits(game.maze().current_room()),
        ]
        .join("\n")
    }
}
