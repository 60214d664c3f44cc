//! 游戏结束界面渲染器

use dungeon::Difficulty;
use hero::Hero;

use crate::render::Palette;

pub struct GameOverRenderer;

impl GameOverRenderer {
    pub fn death(message: &str, palette: &Palette) -> String {
        format!("{}\n{message}", palette.danger("GAME OVER"))
    }

    pub fn victory(hero: &Hero, difficulty: Difficulty, palette: &Palette) -> String {
        format!(
            "{}\nYou completed the game with the {} on {difficulty} difficulty.",
            palette.good("VICTORY!"),
            hero.class()
        )
    }
}
