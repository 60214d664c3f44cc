//! 游戏状态机
//!
//! Owns the hero, the maze and the random source, and exposes the discrete
//! commands a front end can issue. Every command returns the narration of what
//! happened together with the phase the game ended up in.
use combat::{Combatant, GameRng, Pillar, Species};
use dungeon::{Difficulty, Direction, Maze, Position};
use error::GameError;
use hero::Hero;
use items::{ItemKind, Potion};
use tracing::{debug, info};

use crate::battle::{BattleManager, BattleOutcome, BattleRules, HeroAction};
use crate::config::GameConfig;

/// The entrance, where the hero has to bring the pillars back to.
pub const ENTRANCE: Position = (0, 0);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Exploring,
    Battle { boss: bool },
    Won,
    Dead,
}

impl Phase {
    pub fn is_over(&self) -> bool {
        matches!(self, Phase::Won | Phase::Dead)
    }
}

/// Result of one accepted command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    pub narration: String,
    pub phase: Phase,
}

pub struct Game {
    hero: Hero,
    maze: Maze,
    rng: GameRng,
    rules: BattleRules,
    phase: Phase,
}

impl Game {
    /// Starts a new playthrough with a fresh hero and maze.
    pub fn new(class: Species, difficulty: Difficulty, config: &GameConfig) -> Result<Self, GameError> {
        let mut rng = config.rng();
        let mut hero = Hero::new(class, &config.catalog)?;
        if config.god_mode {
            hero.enable_god_mode();
        }
        let maze = Maze::generate(difficulty, config.catalog.clone(), &mut rng);
        info!(%class, %difficulty, seed = rng.seed(), "new game");

        Ok(Self::from_parts(
            hero,
            maze,
            rng,
            BattleRules {
                monster_regen: config.monster_regen,
            },
        ))
    }

    /// Assembles a game from prepared pieces. A maze with an active encounter
    /// starts in battle.
    pub fn from_parts(hero: Hero, maze: Maze, rng: GameRng, rules: BattleRules) -> Self {
        let phase = match maze.encounter() {
            Some(encounter) => Phase::Battle {
                boss: encounter.is_boss(),
            },
            None => Phase::Exploring,
        };
        Self {
            hero,
            maze,
            rng,
            rules,
            phase,
        }
    }

    pub fn hero(&self) -> &Hero {
        &self.hero
    }

    pub fn hero_mut(&mut self) -> &mut Hero {
        &mut self.hero
    }

    pub fn maze(&self) -> &Maze {
        &self.maze
    }

    pub fn maze_mut(&mut self) -> &mut Maze {
        &mut self.maze
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn rules(&self) -> BattleRules {
        self.rules
    }

    /// Pillars held and standing on the entrance.
    pub fn has_won(&self) -> bool {
        self.hero.pillar_count() == Pillar::COUNT && self.maze.hero_location() == ENTRANCE
    }

    pub fn move_hero(&mut self, direction: Direction) -> Result<Turn, GameError> {
        if self.phase.is_over() {
            return Err(Self::game_over());
        }
        if let Phase::Battle { .. } = self.phase {
            return Err(GameError::invalid("You can't move during a battle!"));
        }

        let entry = self.maze.move_hero(direction, &mut self.hero, &mut self.rng)?;
        let mut lines = vec![entry.narration];
        if let Some(encounter) = self.maze.encounter() {
            self.phase = Phase::Battle {
                boss: encounter.is_boss(),
            };
        }
        self.check_win(&mut lines);
        Ok(self.turn(lines))
    }

    pub fn attack(&mut self) -> Result<Turn, GameError> {
        self.battle_round(HeroAction::Attack)
    }

    pub fn use_ultimate(&mut self) -> Result<Turn, GameError> {
        self.battle_round(HeroAction::Ultimate)
    }

    pub fn flee(&mut self) -> Result<Turn, GameError> {
        self.battle_round(HeroAction::Flee)
    }

    /// Drinks a potion. In battle this takes the hero's turn; outside it a
    /// vision potion reveals the surrounding rooms.
    pub fn use_item(&mut self, kind: ItemKind) -> Result<Turn, GameError> {
        match self.phase {
            Phase::Battle { .. } => self.battle_round(HeroAction::UseItem(kind)),
            Phase::Won | Phase::Dead => Err(Self::game_over()),
            Phase::Exploring => {
                let narration = match self.hero.take_potion(kind)? {
                    Potion::Healing(amount) => self.hero.body_mut().heal(amount, &mut self.rng),
                    Potion::Vision => self.maze.reveal_area(),
                };
                Ok(self.turn(vec![narration]))
            }
        }
    }

    /// Same as [`Game::use_item`], looked up by inventory name.
    pub fn use_item_named(&mut self, name: &str) -> Result<Turn, GameError> {
        let kind = ItemKind::from_name(name)
            .ok_or_else(|| GameError::invalid(format!("There is no item called {name}.")))?;
        self.use_item(kind)
    }

    fn battle_round(&mut self, action: HeroAction) -> Result<Turn, GameError> {
        let boss = match self.phase {
            Phase::Battle { boss } => boss,
            Phase::Exploring => return Err(GameError::invalid("There is nothing to fight here.")),
            Phase::Won | Phase::Dead => return Err(Self::game_over()),
        };
        let encounter = self.maze.encounter_mut().ok_or_else(|| {
            GameError::UnknownEntityVariant("battle phase without an active encounter".into())
        })?;

        let round =
            BattleManager::process_round(&mut self.hero, encounter, action, self.rules, &mut self.rng)?;
        let mut lines = round.messages;

        match round.outcome {
            BattleOutcome::Ongoing => {}
            BattleOutcome::HeroDefeated => {
                info!(class = %self.hero.class(), "hero defeated");
                self.phase = Phase::Dead;
            }
            BattleOutcome::Fled => {
                self.maze.pop_enemy();
                self.phase = Phase::Exploring;
            }
            BattleOutcome::EnemyDefeated if boss => {
                let (_, pillar) = self.maze.pop_boss().ok_or_else(|| {
                    GameError::UnknownEntityVariant("defeated boss missing from the maze".into())
                })?;
                self.hero.collect_pillar(pillar);
                lines.push(format!(
                    "You collected a pillar! ({}/{})",
                    self.hero.pillar_count(),
                    Pillar::COUNT
                ));
                self.phase = Phase::Exploring;
                self.check_win(&mut lines);
            }
            BattleOutcome::EnemyDefeated => {
                self.maze.pop_enemy();
                self.phase = Phase::Exploring;
                self.check_win(&mut lines);
            }
        }
        debug!(?action, phase = ?self.phase, hero_hp = self.hero.health(), "battle command");
        Ok(self.turn(lines))
    }

    fn check_win(&mut self, lines: &mut Vec<String>) {
        if self.phase == Phase::Exploring && self.has_won() {
            info!("game won");
            self.phase = Phase::Won;
            lines.push(
                "Congratulations! You have collected all four pillars and escaped the dungeon!"
                    .into(),
            );
        }
    }

    fn turn(&self, lines: Vec<String>) -> Turn {
        Turn {
            narration: lines.join("\n"),
            phase: self.phase,
        }
    }

    fn game_over() -> GameError {
        GameError::invalid("The game is over.")
    }
}
