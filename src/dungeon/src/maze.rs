// src/dungeon/src/maze.rs
use std::sync::Arc;

use combat::{Character, GameRng, Pillar, Species, StatCatalog};
use error::GameError;
use hero::Hero;
use items::ItemKind;
use tracing::{debug, info};

use crate::difficulty::Difficulty;
use crate::encounter::Encounter;
use crate::room::{Direction, Room};

/// `(row, col)`; the entrance is `(0, 0)`.
pub type Position = (usize, usize);

/// What happened when the hero stepped into a room.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoomEvent {
    FoundItem(ItemKind),
    Monster(Species),
    Guardian { pillar: Pillar, species: Species },
    /// Standing on the exit while holding every pillar
    Exit,
    Empty,
}

/// Result of a successful move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomEntry {
    pub position: Position,
    pub event: RoomEvent,
    pub narration: String,
}

/// Square grid of rooms plus the hero's position and the active encounter.
#[derive(Debug, Clone)]
pub struct Maze {
    rooms: Vec<Room>,
    size: usize,
    difficulty: Difficulty,
    hero: Position,
    encounter: Option<Encounter>,
    catalog: Arc<StatCatalog>,
}

impl Maze {
    /// 生成迷宫
    ///
    /// Doors and contents are rolled per room. Nothing checks that the exit or
    /// the pillars are reachable from the entrance.
    pub fn generate(difficulty: Difficulty, catalog: Arc<StatCatalog>, rng: &mut GameRng) -> Self {
        let size = difficulty.size();
        let rooms = (0..size * size).map(|_| Room::generate(rng)).collect();
        let maze = Self::from_rooms(difficulty, rooms, catalog);

        let monsters = maze.rooms.iter().filter(|r| r.monster).count();
        let items = maze.rooms.iter().filter(|r| r.item).count();
        info!(%difficulty, size, monsters, items, "maze generated");
        maze
    }

    /// Builds a maze around pre-made rooms, then applies the fixed layout:
    /// entrance visited, exit in the far corner, pillars in their cells.
    ///
    /// `rooms` is row-major and is padded with closed rooms or truncated to
    /// fit the difficulty's size.
    pub fn from_rooms(difficulty: Difficulty, mut rooms: Vec<Room>, catalog: Arc<StatCatalog>) -> Self {
        let size = difficulty.size();
        rooms.resize_with(size * size, Room::default);

        let mut maze = Self {
            rooms,
            size,
            difficulty,
            hero: (0, 0),
            encounter: None,
            catalog,
        };
        maze.rooms[0].visited = true;
        maze.rooms[size * size - 1].exit = true;
        for (pillar, position) in Self::pillar_cells(size) {
            maze.rooms[position.0 * size + position.1].pillar = Some(pillar);
        }
        maze
    }

    /// Fixed pillar placement for a maze of side `size`.
    pub fn pillar_cells(size: usize) -> [(Pillar, Position); 4] {
        [
            (Pillar::Abstraction, (1, size - 2)),
            (Pillar::Encapsulation, (size - 2, 1)),
            (Pillar::Inheritance, (size - 2, size - 2)),
            (Pillar::Polymorphism, (size / 2, size / 2)),
        ]
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn catalog(&self) -> &StatCatalog {
        &self.catalog
    }

    pub fn hero_location(&self) -> Position {
        self.hero
    }

    /// Teleports the hero without resolving the room.
    pub fn place_hero(&mut self, position: Position) -> Result<(), GameError> {
        let index = self.index(position).ok_or_else(|| {
            GameError::invalid(format!("({}, {}) is outside the maze.", position.0, position.1))
        })?;
        self.hero = position;
        self.rooms[index].visited = true;
        Ok(())
    }

    pub fn room(&self, position: Position) -> Option<&Room> {
        self.index(position).map(|i| &self.rooms[i])
    }

    pub fn room_mut(&mut self, position: Position) -> Option<&mut Room> {
        self.index(position).map(|i| &mut self.rooms[i])
    }

    pub fn current_room(&self) -> &Room {
        &self.rooms[self.hero.0 * self.size + self.hero.1]
    }

    fn current_room_mut(&mut self) -> &mut Room {
        &mut self.rooms[self.hero.0 * self.size + self.hero.1]
    }

    fn index(&self, (row, col): Position) -> Option<usize> {
        (row < self.size && col < self.size).then(|| row * self.size + col)
    }

    /// Neighbour of `from` in `direction`, if it lies inside the grid.
    pub fn neighbour(&self, from: Position, direction: Direction) -> Option<Position> {
        let (dr, dc) = direction.delta();
        let row = from.0.checked_add_signed(dr)?;
        let col = from.1.checked_add_signed(dc)?;
        self.index((row, col)).map(|_| (row, col))
    }

    /// Whether the hero could step `direction` right now, ignoring encounters.
    pub fn can_move(&self, direction: Direction) -> bool {
        self.current_room().is_open(direction) && self.neighbour(self.hero, direction).is_some()
    }

    pub fn encounter(&self) -> Option<&Encounter> {
        self.encounter.as_ref()
    }

    pub fn encounter_mut(&mut self) -> Option<&mut Encounter> {
        self.encounter.as_mut()
    }

    /// Clears the active monster. A guardian stays in place.
    pub fn pop_enemy(&mut self) -> Option<Character> {
        match self.encounter.take() {
            Some(Encounter::Monster(monster)) => Some(monster),
            other => {
                self.encounter = other;
                None
            }
        }
    }

    /// Clears the active guardian, handing back the pillar it held. A monster
    /// stays in place.
    pub fn pop_boss(&mut self) -> Option<(Character, Pillar)> {
        match self.encounter.take() {
            Some(Encounter::Guardian { boss, pillar }) => Some((boss, pillar)),
            other => {
                self.encounter = other;
                None
            }
        }
    }

    /// Moves the hero one room and resolves what is inside.
    ///
    /// Rejected with [`GameError::InvalidCommand`] when the move would leave
    /// the grid, the door is closed or a fight is in progress; nothing changes
    /// in that case.
    pub fn move_hero(
        &mut self,
        direction: Direction,
        hero: &mut Hero,
        rng: &mut GameRng,
    ) -> Result<RoomEntry, GameError> {
        if self.encounter.is_some() {
            return Err(GameError::invalid("You cannot leave while an enemy blocks your way!"));
        }
        let target = match self.neighbour(self.hero, direction) {
            Some(target) if self.current_room().is_open(direction) => target,
            _ => {
                debug!(%direction, position = ?self.hero, "move blocked");
                return Err(GameError::invalid(format!("You cannot move {direction} from here.")));
            }
        };

        self.hero = target;
        self.current_room_mut().visited = true;
        let (event, narration) = self.resolve_room(hero, rng);
        debug!(%direction, position = ?target, ?event, "hero entered room");

        Ok(RoomEntry {
            position: target,
            event,
            narration,
        })
    }

    /// Room resolution in priority order: item, monster, pillar, exit, empty.
    /// Triggered content is cleared so it cannot fire twice.
    fn resolve_room(&mut self, hero: &mut Hero, rng: &mut GameRng) -> (RoomEvent, String) {
        let room = self.current_room_mut();

        if room.item {
            room.item = false;
            let kind = if rng.roll_chance(0.5) {
                ItemKind::HealthPotion
            } else {
                ItemKind::VisionPotion
            };
            hero.inventory_mut().add_item(kind);
            return (RoomEvent::FoundItem(kind), format!("You found a {kind}!"));
        }

        if room.monster {
            room.monster = false;
            let species = Self::roll_monster(rng);
            let monster = Character::spawn(species, &self.catalog);
            let narration = format!("A {} appears!", monster.stats().name);
            info!(%species, "monster encounter");
            self.encounter = Some(Encounter::Monster(monster));
            return (RoomEvent::Monster(species), narration);
        }

        if let Some(pillar) = room.pillar.take() {
            let species = pillar.guardian();
            let boss = Character::spawn(species, &self.catalog);
            let narration = format!(
                "You found the {pillar} Pillar, but it's guarded by {}!",
                boss.stats().name
            );
            info!(%species, %pillar, "guardian encounter");
            self.encounter = Some(Encounter::Guardian { boss, pillar });
            return (RoomEvent::Guardian { pillar, species }, narration);
        }

        if room.exit && hero.has_all_pillars() {
            return (
                RoomEvent::Exit,
                "You found the exit! You can escape now that you have all four pillars.".into(),
            );
        }

        (RoomEvent::Empty, "You entered an empty room.".into())
    }

    /// Ogre 34%, then Goblin and Direwolf split the rest evenly.
    fn roll_monster(rng: &mut GameRng) -> Species {
        if rng.roll_chance(0.34) {
            Species::Ogre
        } else if rng.roll_chance(0.5) {
            Species::Goblin
        } else {
            Species::Direwolf
        }
    }

    /// Vision potion effect: marks the eight surrounding rooms as revealed and
    /// describes what is sensed in them. Room contents stay in place.
    pub fn reveal_area(&mut self) -> String {
        let (row, col) = self.hero;
        let mut lines = vec!["The vision potion reveals the surrounding area!".to_string()];

        for r in row.saturating_sub(1)..=(row + 1).min(self.size - 1) {
            for c in col.saturating_sub(1)..=(col + 1).min(self.size - 1) {
                if (r, c) == (row, col) {
                    continue;
                }
                let room = &mut self.rooms[r * self.size + c];
                room.revealed = true;

                let mut sensed = Vec::new();
                if room.monster {
                    sensed.push("a monster".to_string());
                }
                if room.item {
                    sensed.push("an item".to_string());
                }
                if let Some(pillar) = room.pillar {
                    sensed.push(format!("the {pillar} Pillar"));
                }
                if room.exit {
                    sensed.push("the exit".to_string());
                }
                if !sensed.is_empty() {
                    lines.push(format!("({r}, {c}): {}", sensed.join(", ")));
                }
            }
        }
        debug!(position = ?self.hero, "area revealed");
        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Arc<StatCatalog> {
        Arc::new(StatCatalog::builtin())
    }

    fn knight() -> Hero {
        Hero::new(Species::Knight, &StatCatalog::builtin()).unwrap()
    }

    /// Every door open, no random content.
    fn open_maze(difficulty: Difficulty) -> Maze {
        let size = difficulty.size();
        Maze::from_rooms(difficulty, vec![Room::open(); size * size], catalog())
    }

    #[test]
    fn generate_sizes_and_fixed_layout() {
        let mut rng = GameRng::new(1);
        for difficulty in [Difficulty::Easy, Difficulty::Normal, Difficulty::Hard] {
            let maze = Maze::generate(difficulty, catalog(), &mut rng);
            let n = difficulty.size();
            assert_eq!(maze.size(), n);
            assert_eq!(maze.hero_location(), (0, 0));
            assert!(maze.current_room().visited);
            assert!(maze.room((n - 1, n - 1)).unwrap().exit);
            assert_eq!(maze.room((1, n - 2)).unwrap().pillar, Some(Pillar::Abstraction));
            assert_eq!(maze.room((n - 2, 1)).unwrap().pillar, Some(Pillar::Encapsulation));
            assert_eq!(maze.room((n - 2, n - 2)).unwrap().pillar, Some(Pillar::Inheritance));
            assert_eq!(maze.room((n / 2, n / 2)).unwrap().pillar, Some(Pillar::Polymorphism));
            assert!(maze.room((n, 0)).is_none());
        }
    }

    #[test]
    fn boundary_and_closed_doors_block() {
        let mut maze = open_maze(Difficulty::Easy);
        let mut hero = knight();
        let mut rng = GameRng::new(3);

        let err = maze.move_hero(Direction::North, &mut hero, &mut rng).unwrap_err();
        assert_eq!(err.to_string(), "You cannot move North from here.");
        assert!(maze.move_hero(Direction::West, &mut hero, &mut rng).is_err());
        assert_eq!(maze.hero_location(), (0, 0));

        maze.room_mut((0, 0)).unwrap().set_open(Direction::East, false);
        assert!(maze.move_hero(Direction::East, &mut hero, &mut rng).is_err());
        assert_eq!(maze.hero_location(), (0, 0));
        assert!(!maze.room((0, 1)).unwrap().visited);
    }

    #[test]
    fn doors_are_one_way() {
        let mut maze = open_maze(Difficulty::Easy);
        let mut hero = knight();
        let mut rng = GameRng::new(3);
        maze.room_mut((0, 1)).unwrap().set_open(Direction::West, false);

        maze.move_hero(Direction::East, &mut hero, &mut rng).unwrap();
        assert_eq!(maze.hero_location(), (0, 1));
        assert!(maze.move_hero(Direction::West, &mut hero, &mut rng).is_err());
    }

    #[test]
    fn item_comes_before_monster_and_fires_once() {
        let mut maze = open_maze(Difficulty::Easy);
        let mut hero = knight();
        let mut rng = GameRng::new(5);
        {
            let room = maze.room_mut((1, 0)).unwrap();
            room.item = true;
            room.monster = true;
        }

        let entry = maze.move_hero(Direction::South, &mut hero, &mut rng).unwrap();
        assert!(matches!(entry.event, RoomEvent::FoundItem(_)));
        assert_eq!(hero.inventory().kinds_held(), 1);
        assert!(maze.encounter().is_none());

        maze.move_hero(Direction::North, &mut hero, &mut rng).unwrap();
        let entry = maze.move_hero(Direction::South, &mut hero, &mut rng).unwrap();
        assert!(matches!(entry.event, RoomEvent::Monster(_)));
        assert!(entry.narration.starts_with("A "));
        assert!(entry.narration.ends_with(" appears!"));

        maze.pop_enemy().unwrap();
        maze.move_hero(Direction::North, &mut hero, &mut rng).unwrap();
        let entry = maze.move_hero(Direction::South, &mut hero, &mut rng).unwrap();
        assert_eq!(entry.event, RoomEvent::Empty);
        assert_eq!(entry.narration, "You entered an empty room.");
    }

    #[test]
    fn active_encounter_blocks_movement() {
        let mut maze = open_maze(Difficulty::Easy);
        let mut hero = knight();
        let mut rng = GameRng::new(5);
        maze.room_mut((0, 1)).unwrap().monster = true;

        maze.move_hero(Direction::East, &mut hero, &mut rng).unwrap();
        assert!(maze.move_hero(Direction::East, &mut hero, &mut rng).is_err());
        assert_eq!(maze.hero_location(), (0, 1));
    }

    #[test]
    fn pillar_room_spawns_its_guardian() {
        let mut maze = open_maze(Difficulty::Easy);
        let mut hero = knight();
        let mut rng = GameRng::new(5);

        // Easy: Abstraction sits at (1, 3)
        maze.place_hero((1, 2)).unwrap();
        let entry = maze.move_hero(Direction::East, &mut hero, &mut rng).unwrap();
        assert_eq!(
            entry.event,
            RoomEvent::Guardian {
                pillar: Pillar::Abstraction,
                species: Species::Cerberus
            }
        );
        assert_eq!(
            entry.narration,
            "You found the ABSTRACTION Pillar, but it's guarded by Cerberus!"
        );
        assert!(maze.encounter().unwrap().is_boss());
        assert_eq!(maze.room((1, 3)).unwrap().pillar, None);
        // the pillar is only granted once the guardian falls
        assert_eq!(hero.pillar_count(), 0);

        assert!(maze.pop_enemy().is_none());
        let (boss, pillar) = maze.pop_boss().unwrap();
        assert_eq!(boss.species(), Species::Cerberus);
        assert_eq!(pillar, Pillar::Abstraction);
        assert!(maze.encounter().is_none());
    }

    #[test]
    fn exit_needs_all_pillars() {
        let mut maze = open_maze(Difficulty::Easy);
        let mut hero = knight();
        let mut rng = GameRng::new(5);

        maze.place_hero((4, 3)).unwrap();
        let entry = maze.move_hero(Direction::East, &mut hero, &mut rng).unwrap();
        assert_eq!(entry.event, RoomEvent::Empty);

        for pillar in [
            Pillar::Abstraction,
            Pillar::Encapsulation,
            Pillar::Inheritance,
            Pillar::Polymorphism,
        ] {
            hero.collect_pillar(pillar);
        }
        maze.move_hero(Direction::West, &mut hero, &mut rng).unwrap();
        let entry = maze.move_hero(Direction::East, &mut hero, &mut rng).unwrap();
        assert_eq!(entry.event, RoomEvent::Exit);
    }

    #[test]
    fn monster_mix_favours_ogres_slightly() {
        let mut rng = GameRng::new(11);
        let rolls: Vec<Species> = (0..3_000).map(|_| Maze::roll_monster(&mut rng)).collect();
        let share = |s: Species| rolls.iter().filter(|r| **r == s).count() as f64 / 3_000.0;
        assert!((0.30..0.38).contains(&share(Species::Ogre)));
        assert!((0.29..0.37).contains(&share(Species::Goblin)));
        assert!((0.29..0.37).contains(&share(Species::Direwolf)));
    }

    #[test]
    fn reveal_marks_neighbours_without_consuming() {
        let mut maze = open_maze(Difficulty::Easy);
        maze.room_mut((1, 1)).unwrap().monster = true;

        let text = maze.reveal_area();
        assert!(text.starts_with("The vision potion reveals the surrounding area!"));
        assert!(text.contains("(1, 1): a monster"));
        assert!(maze.room((0, 1)).unwrap().revealed);
        assert!(maze.room((1, 0)).unwrap().revealed);
        assert!(maze.room((1, 1)).unwrap().monster);
        assert!(!maze.room((2, 2)).unwrap().revealed);
        assert!(!maze.current_room().revealed);
    }
}
