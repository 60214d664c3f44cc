// src/dungeon/src/difficulty.rs
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum Difficulty {
    Easy,
    #[default]
    Normal,
    Hard,
}

impl Difficulty {
    /// Side length of the square maze.
    pub fn size(&self) -> usize {
        match self {
            Difficulty::Easy => 5,
            Difficulty::Normal => 8,
            Difficulty::Hard => 12,
        }
    }

    pub fn blurb(&self) -> &'static str {
        match self {
            Difficulty::Easy => "5x5 maze",
            Difficulty::Normal => "8x8 maze",
            Difficulty::Hard => "12x12 maze",
        }
    }
}
