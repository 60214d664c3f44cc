// src/dungeon/src/room.rs
use combat::{GameRng, Pillar};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

/// Chance that any one doorway of a room is open.
pub const DOOR_CHANCE: f64 = 0.7;
/// Chance that a room starts with a monster in it.
pub const MONSTER_CHANCE: f64 = 0.2;
/// Chance that a room starts with an item in it.
pub const ITEM_CHANCE: f64 = 0.1;

/// Compass direction of a move.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum Direction {
    #[strum(to_string = "North", serialize = "n")]
    North,
    #[strum(to_string = "South", serialize = "s")]
    South,
    #[strum(to_string = "East", serialize = "e")]
    East,
    #[strum(to_string = "West", serialize = "w")]
    West,
}

impl Direction {
    /// Row and column offset of one step.
    pub fn delta(&self) -> (isize, isize) {
        match self {
            Direction::North => (-1, 0),
            Direction::South => (1, 0),
            Direction::East => (0, 1),
            Direction::West => (0, -1),
        }
    }

    /// Single-letter command key.
    pub fn key(&self) -> char {
        match self {
            Direction::North => 'n',
            Direction::South => 's',
            Direction::East => 'e',
            Direction::West => 'w',
        }
    }
}

/// One cell of the maze.
///
/// Doorways are rolled per room, so an open east door does not imply an open
/// west door on the neighbour.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub north: bool,
    pub south: bool,
    pub east: bool,
    pub west: bool,
    pub visited: bool,
    /// Seen through a vision potion without being entered
    pub revealed: bool,
    pub monster: bool,
    pub item: bool,
    pub pillar: Option<Pillar>,
    pub exit: bool,
}

impl Room {
    /// Rolls doors and contents for a fresh room.
    pub fn generate(rng: &mut GameRng) -> Self {
        Self {
            north: rng.roll_chance(DOOR_CHANCE),
            south: rng.roll_chance(DOOR_CHANCE),
            east: rng.roll_chance(DOOR_CHANCE),
            west: rng.roll_chance(DOOR_CHANCE),
            monster: rng.roll_chance(MONSTER_CHANCE),
            item: rng.roll_chance(ITEM_CHANCE),
            ..Self::default()
        }
    }

    /// A room with every door open and nothing inside.
    pub fn open() -> Self {
        Self {
            north: true,
            south: true,
            east: true,
            west: true,
            ..Self::default()
        }
    }

    pub fn is_open(&self, direction: Direction) -> bool {
        match direction {
            Direction::North => self.north,
            Direction::South => self.south,
            Direction::East => self.east,
            Direction::West => self.west,
        }
    }

    pub fn set_open(&mut self, direction: Direction, open: bool) {
        match direction {
            Direction::North => self.north = open,
            Direction::South => self.south = open,
            Direction::East => self.east = open,
            Direction::West => self.west = open,
        }
    }

    /// Open doorways, in N/S/E/W order.
    pub fn exits(&self) -> Vec<Direction> {
        Direction::iter().filter(|d| self.is_open(*d)).collect()
    }

    /// Nothing left to trigger here.
    pub fn is_empty(&self) -> bool {
        !self.monster && !self.item && self.pillar.is_none()
    }
}
