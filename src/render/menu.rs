//! 菜单渲染器
//!
//! Numbered menus of the text session. The numbers are what the player types.

use combat::{Combatant, Species};
use dungeon::{Difficulty, Encounter};
use hero::Hero;
use strum::IntoEnumIterator;

use crate::render::Palette;

pub struct MenuRenderer;

impl MenuRenderer {
    pub fn main_menu(palette: &Palette) -> String {
        [
            palette.heading("MAIN MENU:"),
            "1. New Game".into(),
            "2. Load Game".into(),
            "3. Help".into(),
            "4. Exit".into(),
        ]
        .join("\n")
    }

    pub fn help(palette: &Palette) -> String {
        [
            palette.heading("HELP:"),
            "mOOn Quest is a dungeon crawler game where you battle monsters and collect pillars.".into(),
            "- Choose a hero with unique abilities".into(),
            "- Navigate through the maze using directional commands".into(),
            "- Collect items and defeat guardians to retrieve the four pillars".into(),
            "- Return to the entrance with all pillars to win".into(),
        ]
        .join("\n")
    }

    pub fn game_help(palette: &Palette) -> String {
        [
            palette.heading("GAME HELP:"),
            "- Move around using n (north), s (south), e (east), w (west)".into(),
            "- Use i to access your inventory and use items".into(),
            "- Use m to look at the map of explored rooms".into(),
            "- Collect the four pillars guarded by powerful bosses".into(),
            "- Return to the entrance with all pillars to win".into(),
            "- Use q to quit the game".into(),
        ]
        .join("\n")
    }

    /// Heroes in selection order, followed by the back option.
    pub fn hero_select(palette: &Palette) -> String {
        let mut lines = vec![palette.heading("CHARACTER SELECTION:")];
        let heroes: Vec<Species> = Species::heroes().collect();
        for (i, species) in heroes.iter().enumerate() {
            lines.push(format!("{}. {species} - {}", i + 1, species.blurb()));
        }
        lines.push(format!("{}. Back to main menu", heroes.len() + 1));
        lines.join("\n")
    }

    pub fn difficulty_select(palette: &Palette) -> String {
        let mut lines = vec![palette.heading("DIFFICULTY SELECTION:")];
        let levels: Vec<Difficulty> = Difficulty::iter().collect();
        for (i, difficulty) in levels.iter().enumerate() {
            lines.push(format!("{}. {difficulty} - {}", i + 1, difficulty.blurb()));
        }
        lines.push(format!("{}. Back to character selection", levels.len() + 1));
        lines.join("\n")
    }

    pub fn traversal_actions() -> String {
        [
            "ACTIONS:",
            "- Move: n, s, e, w",
            "- Inventory (i)",
            "- Map (m)",
            "- Help (h)",
            "- Quit (q)",
        ]
        .join("\n")
    }

    /// `Knight (HP: 150/150) vs Goblin (HP: 70/70)` and the action list.
    pub fn battle(hero: &Hero, encounter: &Encounter, palette: &Palette) -> String {
        let enemy = encounter.character();
        let flee = if encounter.is_boss() {
            "4. Run Away (not available for boss battles)"
        } else {
            "4. Run Away"
        };
        [
            palette.heading("BATTLE:"),
            format!(
                "{} (HP: {}/{}) vs {} (HP: {}/{})",
                hero.name(),
                hero.health(),
                hero.max_health(),
                enemy.name(),
                enemy.health(),
                enemy.max_health()
            ),
            enemy.describe(),
            String::new(),
            "ACTIONS:".into(),
            "1. Attack".into(),
            "2. Use Ultimate Ability".into(),
            "3. Access Inventory".into(),
            flee.into(),
        ]
        .join("\n")
    }
}
