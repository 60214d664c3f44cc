#![allow(dead_code)]

//! Builders for deterministic games: fully open mazes, forced stats and a
//! seeded random source.

use std::sync::Arc;

use combat::{Character, GameRng, Pillar, Role, Species, StatBlock, StatCatalog};
use dungeon::{Difficulty, Maze, Position, Room};
use hero::Hero;
use moon_quest::{BattleRules, Game};

pub struct TestGameBuilder {
    seed: u64,
    difficulty: Difficulty,
    class: Species,
    hero_stats: Option<StatBlock>,
    catalog: StatCatalog,
    pillars: Vec<Pillar>,
    start: Position,
    rooms: Vec<(Position, Box<dyn Fn(&mut Room)>)>,
    rules: BattleRules,
}

impl TestGameBuilder {
    /// Easy maze with every door open and no random content.
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            difficulty: Difficulty::Easy,
            class: Species::Knight,
            hero_stats: None,
            catalog: StatCatalog::builtin(),
            pillars: Vec::new(),
            start: (0, 0),
            rooms: Vec::new(),
            rules: BattleRules::default(),
        }
    }

    pub fn difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    pub fn hero_stats(mut self, stats: StatBlock) -> Self {
        self.hero_stats = Some(stats);
        self
    }

    /// Every monster species gets `stats`.
    pub fn monster_stats(mut self, stats: StatBlock) -> Self {
        for species in Species::monsters() {
            self.catalog.insert(Role::Monster, species.catalog_key(), stats.clone());
        }
        self
    }

    pub fn guardian_stats(mut self, species: Species, stats: StatBlock) -> Self {
        self.catalog.insert(Role::Guardian, species.catalog_key(), stats);
        self
    }

    pub fn pillars(mut self, pillars: &[Pillar]) -> Self {
        self.pillars = pillars.to_vec();
        self
    }

    pub fn start_at(mut self, position: Position) -> Self {
        self.start = position;
        self
    }

    pub fn room(mut self, position: Position, edit: impl Fn(&mut Room) + 'static) -> Self {
        self.rooms.push((position, Box::new(edit)));
        self
    }

    pub fn rules(mut self, rules: BattleRules) -> Self {
        self.rules = rules;
        self
    }

    pub fn build(self) -> Game {
        let catalog = Arc::new(self.catalog);
        let size = self.difficulty.size();
        let mut maze = Maze::from_rooms(self.difficulty, vec![Room::open(); size * size], catalog.clone());
        for (position, edit) in &self.rooms {
            if let Some(room) = maze.room_mut(*position) {
                edit(room);
            }
        }
        maze.place_hero(self.start).unwrap();

        let mut hero = match self.hero_stats {
            Some(stats) => Hero::from_character(Character::new(self.class, stats)).unwrap(),
            None => Hero::new(self.class, &catalog).unwrap(),
        };
        for pillar in self.pillars {
            hero.collect_pillar(pillar);
        }
        Game::from_parts(hero, maze, GameRng::new(self.seed), self.rules)
    }
}

pub const ALL_PILLARS: [Pillar; 4] = [
    Pillar::Abstraction,
    Pillar::Encapsulation,
    Pillar::Inheritance,
    Pillar::Polymorphism,
];

/// Hits every time for exactly `damage`, never blocks.
pub fn sure_hitter(health: i32, damage: i32) -> StatBlock {
    StatBlock::new("Knight", health, 3, 1.0, (damage, damage)).with_ultimate(1.0)
}

/// Never lands a hit.
pub fn harmless(name: &str, health: i32) -> StatBlock {
    StatBlock::new(name, health, 3, 0.0, (10, 20))
}
