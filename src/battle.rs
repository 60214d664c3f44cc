//! Turn exchange between the hero and the active encounter.
//!
//! A round is the hero's action followed, if the enemy survives, by the
//! enemy's turn: an optional regeneration attempt and one basic attack.
use combat::{Combatant, GameRng};
use dungeon::Encounter;
use error::GameError;
use hero::Hero;
use items::ItemKind;
use tracing::debug;

/// What the hero does with a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeroAction {
    Attack,
    Ultimate,
    UseItem(ItemKind),
    Flee,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BattleOutcome {
    /// Both sides still standing
    Ongoing,
    EnemyDefeated,
    HeroDefeated,
    Fled,
}

/// Knobs that change how the enemy behaves.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BattleRules {
    /// Monsters roll their heal chance once at the start of each of their turns
    pub monster_regen: bool,
}

/// Narration and result of one round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundResult {
    pub messages: Vec<String>,
    pub outcome: BattleOutcome,
}

impl RoundResult {
    fn new() -> Self {
        Self {
            messages: Vec::new(),
            outcome: BattleOutcome::Ongoing,
        }
    }

    fn log(&mut self, message: impl Into<String>) {
        self.messages.push(message.into());
    }

    pub fn narration(&self) -> String {
        self.messages.join("\n")
    }
}

pub struct BattleManager;

impl BattleManager {
    /// Runs one round. Rejected actions (fleeing a boss, drinking a vision
    /// potion, an empty potion slot) return [`GameError::InvalidCommand`]
    /// before anything changes, and the enemy does not get a turn.
    pub fn process_round(
        hero: &mut Hero,
        encounter: &mut Encounter,
        action: HeroAction,
        rules: BattleRules,
        rng: &mut GameRng,
    ) -> Result<RoundResult, GameError> {
        let mut result = RoundResult::new();

        match action {
            HeroAction::Attack => {
                result.log(hero.attack(encounter.character_mut(), rng));
            }
            HeroAction::Ultimate => {
                result.log(hero.ultimate(encounter.character_mut(), rng)?);
            }
            HeroAction::UseItem(kind) => {
                result.log(Self::use_item(hero, kind, rng)?);
            }
            HeroAction::Flee => {
                if encounter.is_boss() {
                    return Err(GameError::invalid("You cannot run from a boss battle!"));
                }
                result.log("You managed to escape!");
                result.outcome = BattleOutcome::Fled;
                return Ok(result);
            }
        }

        let enemy = encounter.character();
        if !enemy.is_alive() {
            result.log(format!("You defeated the {}!", enemy.name()));
            result.outcome = BattleOutcome::EnemyDefeated;
            return Ok(result);
        }

        Self::enemy_turn(hero, encounter, rules, rng, &mut result);
        debug!(
            ?action,
            hero_hp = hero.health(),
            enemy_hp = encounter.character().health(),
            outcome = ?result.outcome,
            "battle round"
        );
        Ok(result)
    }

    fn use_item(hero: &mut Hero, kind: ItemKind, rng: &mut GameRng) -> Result<String, GameError> {
        if !kind.potion().usable_in_battle() {
            return Err(GameError::invalid(format!("You can't use a {kind} in battle.")));
        }
        hero.drink_health_potion(rng)
    }

    /// Enemy regeneration (monsters only, when enabled) then its counter-attack.
    fn enemy_turn(
        hero: &mut Hero,
        encounter: &mut Encounter,
        rules: BattleRules,
        rng: &mut GameRng,
        result: &mut RoundResult,
    ) {
        if rules.monster_regen && !encounter.is_boss() {
            result.log(encounter.character_mut().regenerate(rng));
        }

        result.log(encounter.character().attack(hero, rng));
        if !hero.is_alive() {
            result.log(format!("You were defeated by the {}...", encounter.character().name()));
            result.outcome = BattleOutcome::HeroDefeated;
        }
    }
}
