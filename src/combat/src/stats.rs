// src/combat/src/stats.rs
use error::GameError;
use serde::{Deserialize, Serialize};

use crate::pillar::Pillar;

/// Base attributes of one entity, as stored in the stat catalog.
///
/// Role-specific fields default to zero/none so hero, monster and guardian
/// entries share one shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatBlock {
    pub name: String,
    pub max_health: i32,
    pub speed: u32,
    pub hit_chance: f64,
    pub min_damage: i32,
    pub max_damage: i32,
    #[serde(default)]
    pub ultimate_chance: f64,
    #[serde(default)]
    pub block_chance: f64,
    #[serde(default)]
    pub heal_chance: f64,
    #[serde(default)]
    pub regeneration: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pillar: Option<Pillar>,
}

impl StatBlock {
    /// Common attributes; role-specific ones start at zero.
    pub fn new(
        name: impl Into<String>,
        max_health: i32,
        speed: u32,
        hit_chance: f64,
        damage: (i32, i32),
    ) -> Self {
        Self {
            name: name.into(),
            max_health,
            speed,
            hit_chance,
            min_damage: damage.0,
            max_damage: damage.1,
            ultimate_chance: 0.0,
            block_chance: 0.0,
            heal_chance: 0.0,
            regeneration: 0,
            pillar: None,
        }
    }

    pub fn with_ultimate(mut self, chance: f64) -> Self {
        self.ultimate_chance = chance;
        self
    }

    pub fn with_block(mut self, chance: f64) -> Self {
        self.block_chance = chance;
        self
    }

    pub fn with_regeneration(mut self, chance: f64, amount: i32) -> Self {
        self.heal_chance = chance;
        self.regeneration = amount;
        self
    }

    pub fn with_pillar(mut self, pillar: Pillar) -> Self {
        self.pillar = Some(pillar);
        self
    }

    /// Checks the stat block invariants: positive max health, ordered damage
    /// range, every chance within `[0, 1]`.
    pub fn validate(&self) -> Result<(), GameError> {
        if self.max_health <= 0 {
            return Err(GameError::InvalidStats(format!(
                "{}: max health must be positive, got {}",
                self.name, self.max_health
            )));
        }
        if self.min_damage > self.max_damage {
            return Err(GameError::InvalidStats(format!(
                "{}: min damage {} exceeds max damage {}",
                self.name, self.min_damage, self.max_damage
            )));
        }
        if self.regeneration < 0 {
            return Err(GameError::InvalidStats(format!(
                "{}: negative regeneration",
                self.name
            )));
        }
        let chances = [
            ("hit", self.hit_chance),
            ("ultimate", self.ultimate_chance),
            ("block", self.block_chance),
            ("heal", self.heal_chance),
        ];
        for (label, chance) in chances {
            if !(0.0..=1.0).contains(&chance) {
                return Err(GameError::InvalidStats(format!(
                    "{}: {label} chance {chance} outside [0, 1]",
                    self.name
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn goblin() -> StatBlock {
        StatBlock::new("Goblin", 70, 5, 0.8, (20, 35)).with_regeneration(0.3, 10)
    }

    #[test]
    fn catalog_entries_validate() {
        assert!(goblin().validate().is_ok());
    }

    #[test]
    fn inverted_damage_range_is_rejected() {
        let mut stats = goblin();
        stats.min_damage = 40;
        assert!(matches!(stats.validate(), Err(GameError::InvalidStats(_))));
    }

    #[test]
    fn chances_must_be_probabilities() {
        let stats = goblin().with_block(1.5);
        assert!(stats.validate().is_err());
        let stats = goblin().with_ultimate(-0.1);
        assert!(stats.validate().is_err());
    }

    #[test]
    fn role_fields_default_when_absent() {
        let json = r#"{
            "name": "Goblin",
            "max_health": 70,
            "speed": 5,
            "hit_chance": 0.8,
            "min_damage": 20,
            "max_damage": 35
        }"#;
        let stats: StatBlock = serde_json::from_str(json).unwrap();
        assert_eq!(stats.block_chance, 0.0);
        assert_eq!(stats.pillar, None);
    }
}
