//! 文本渲染
//!
//! Every renderer turns game state into plain strings; the session decides
//! where they go. Colour is applied through [`Palette`] only, so the same
//! output can be compared in tests with colour switched off.
//! - `dungeon` - minimap of visited and revealed rooms
//! - `hud` - hero status, location and exits
//! - `inventory` - potion listing and choices
//! - `menu` - main, hero and difficulty menus, battle actions
//! - `game_over` - death and victory screens

pub mod dungeon;
pub mod game_over;
pub mod hud;
pub mod inventory;
pub mod menu;

pub use dungeon::DungeonRenderer;
pub use game_over::GameOverRenderer;
pub use hud::HudRenderer;
pub use inventory::InventoryRenderer;
pub use menu::MenuRenderer;

use crossterm::style::Stylize;

/// Optional terminal colours.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Palette {
    pub color: bool,
}

impl Palette {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    /// Screen titles such as `MAZE:` or `BATTLE:`.
    pub fn heading(&self, text: &str) -> String {
        if self.color {
            text.bold().yellow().to_string()
        } else {
            text.to_string()
        }
    }

    pub fn danger(&self, text: &str) -> String {
        if self.color {
            text.red().bold().to_string()
        } else {
            text.to_string()
        }
    }

    pub fn good(&self, text: &str) -> String {
        if self.color {
            text.green().to_string()
        } else {
            text.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_palette_is_identity() {
        let palette = Palette::new(false);
        assert_eq!(palette.heading("MAZE:"), "MAZE:");
        assert_eq!(palette.danger("GAME OVER"), "GAME OVER");
    }

    #[test]
    fn coloured_palette_wraps_in_escapes() {
        let palette = Palette::new(true);
        let text = palette.heading("MAZE:");
        assert!(text.contains("MAZE:"));
        assert!(text.contains('\u{1b}'));
    }
}
