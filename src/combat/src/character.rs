// src/combat/src/character.rs
use std::ops::Range;

use error::GameError;
use tracing::debug;

use crate::catalog::StatCatalog;
use crate::combatant::Combatant;
use crate::rng::GameRng;
use crate::species::{Defense, Role, Species, Ultimate, UltimateEffect};
use crate::stats::StatBlock;

/// A combat-capable entity: hero body, monster or guardian.
///
/// Behaviour that differs between species (defense, ultimate) is looked up in
/// the species tables rather than overridden per type.
#[derive(Debug, Clone, PartialEq)]
pub struct Character {
    species: Species,
    stats: StatBlock,
    health: i32,
}

impl Character {
    pub fn new(species: Species, stats: StatBlock) -> Self {
        let health = stats.max_health;
        Self {
            species,
            stats,
            health,
        }
    }

    /// Builds a character from the catalog, falling back to compiled-in stats.
    pub fn spawn(species: Species, catalog: &StatCatalog) -> Self {
        Self::new(species, catalog.stats_for(species))
    }

    /// Replaces the stats and restores full health.
    pub fn load_from(&mut self, stats: StatBlock) {
        self.health = stats.max_health;
        self.stats = stats;
    }

    pub fn species(&self) -> Species {
        self.species
    }

    pub fn role(&self) -> Role {
        self.species.role()
    }

    pub fn stats(&self) -> &StatBlock {
        &self.stats
    }

    pub fn set_health(&mut self, health: i32) {
        self.health = health.min(self.stats.max_health);
    }

    /// Damage of one basic hit, upper bound exclusive.
    pub fn roll_damage(&self, rng: &mut GameRng) -> i32 {
        rng.roll_range(self.stats.min_damage..self.stats.max_damage)
    }

    /// Basic attack: one hit roll, then one damage instance on success.
    pub fn attack<D>(&self, defender: &mut D, rng: &mut GameRng) -> String
    where
        D: Combatant + ?Sized,
    {
        let hit = rng.roll_chance(self.stats.hit_chance);
        let amount = if hit { self.roll_damage(rng) } else { 0 };
        debug!(attacker = %self.stats.name, hit, amount, "basic attack");

        if amount > 0 {
            format!("{} attacks! {}", self.stats.name, defender.damage(amount, rng))
        } else {
            format!("{} missed...", self.stats.name)
        }
    }

    /// Block roll: returns the damage that gets through (all or nothing).
    pub fn block(&self, amount: i32, rng: &mut GameRng) -> i32 {
        if rng.roll_chance(self.stats.block_chance) {
            0
        } else {
            amount
        }
    }

    /// Species ultimate. A failed roll narrates the miss and changes nothing.
    ///
    /// Returns [`GameError::InvalidCommand`] for species without an ultimate.
    pub fn ultimate<D>(&mut self, defender: &mut D, rng: &mut GameRng) -> Result<String, GameError>
    where
        D: Combatant + ?Sized,
    {
        let Ultimate { name, effect } = self.species.ultimate().ok_or_else(|| {
            GameError::invalid(format!("{} has no ultimate ability.", self.stats.name))
        })?;
        let chance = self.stats.ultimate_chance;

        match effect {
            UltimateEffect::Flurry { rolls } => {
                let hits = (0..rolls).filter(|_| rng.roll_chance(chance)).count();
                debug!(user = %self.stats.name, hits, "flurry ultimate");
                match hits {
                    0 => Ok(format!("{} missed {name}...", self.stats.name)),
                    1 => {
                        let amount = self.roll_damage(rng);
                        Ok(format!(
                            "Partial success: single hit!\n{}",
                            defender.damage(amount, rng)
                        ))
                    }
                    2 => {
                        let first = self.roll_damage(rng);
                        let first = defender.damage(first, rng);
                        let second = self.roll_damage(rng);
                        let second = defender.damage(second, rng);
                        Ok(format!("Complete success: double hit!\n{first}\n{second}"))
                    }
                    n => Err(GameError::UnknownEntityVariant(format!(
                        "{name} landed {n} hits, expected at most 2"
                    ))),
                }
            }
            _ if !rng.roll_chance(chance) => {
                Ok(format!("{} failed to use {name}...", self.stats.name))
            }
            UltimateEffect::Strike { damage } => {
                let amount = rng.roll_range(damage);
                Ok(format!("{name}! {}", defender.damage(amount, rng)))
            }
            UltimateEffect::SelfHeal { amount } => Ok(format!("{name}! {}", self.heal(amount, rng))),
            UltimateEffect::Barrage { hits } => {
                let count = rng.roll_range(*hits.start()..hits.end() + 1);
                let mut lines = vec![format!("{name}!")];
                for _ in 0..count {
                    let amount = self.roll_damage(rng);
                    lines.push(defender.damage(amount, rng));
                }
                Ok(lines.join("\n"))
            }
        }
    }

    /// Heals a uniform amount in `amount` (upper bound exclusive), capped at
    /// max health.
    pub fn heal(&mut self, amount: Range<i32>, rng: &mut GameRng) -> String {
        let healed = rng.roll_range(amount);
        self.health = self.health.saturating_add(healed).min(self.stats.max_health);

        if self.health == self.stats.max_health {
            format!("{} healed to max health!", self.stats.name)
        } else {
            format!("{} healed for {healed} HP!", self.stats.name)
        }
    }

    /// Monster regeneration: restores `regeneration` HP on a successful heal roll.
    pub fn regenerate(&mut self, rng: &mut GameRng) -> String {
        let recovered = if rng.roll_chance(self.stats.heal_chance) {
            self.stats.regeneration
        } else {
            0
        };
        self.health = self.health.saturating_add(recovered).min(self.stats.max_health);

        if recovered == 0 {
            format!("{} did not regenerate health.", self.stats.name)
        } else {
            format!("{} regenerated {recovered} health!", self.stats.name)
        }
    }

    /// Debug cheat: an unkillable, unmissable character.
    pub fn empower(&mut self) {
        self.stats.block_chance = 1.0;
        self.stats.min_damage = 450_000;
        self.stats.max_damage = 500_000;
        self.stats.max_health = 500_000;
        self.stats.ultimate_chance = 1.0;
        self.stats.hit_chance = 1.0;
    }

    /// One-line stat summary.
    pub fn describe(&self) -> String {
        let s = &self.stats;
        let head = format!(
            "HP:{}/{} SPEED:{} ACCURACY:{}",
            self.health, s.max_health, s.speed, s.hit_chance
        );
        match self.role() {
            Role::Hero => format!("CLASS:{} {head} PROTECTION:{}", s.name, s.block_chance),
            Role::Monster => format!("MONSTER:{} {head} HEALCHANCE:{}", s.name, s.heal_chance),
            Role::Guardian if self.species.defense() == Defense::Block => format!(
                "GUARDIAN:{} {head} ULTCHANCE:{} BLOCKCHANCE:{}",
                s.name, s.ultimate_chance, s.block_chance
            ),
            Role::Guardian => format!("GUARDIAN:{} {head} ULTCHANCE:{}", s.name, s.ultimate_chance),
        }
    }
}

impl Combatant for Character {
    fn name(&self) -> &str {
        &self.stats.name
    }

    fn health(&self) -> i32 {
        self.health
    }

    fn max_health(&self) -> i32 {
        self.stats.max_health
    }

    fn damage(&mut self, amount: i32, rng: &mut GameRng) -> String {
        match self.species.defense() {
            Defense::Exposed => {
                self.health = self.health.saturating_sub(amount);
                format!("{} took {amount} damage.", self.stats.name)
            }
            Defense::Block => {
                let landed = self.block(amount, rng);
                self.health = self.health.saturating_sub(landed);
                if landed == 0 {
                    format!("{} blocked all incoming damage!", self.stats.name)
                } else {
                    format!("{} took {amount} damage!", self.stats.name)
                }
            }
        }
    }
}
