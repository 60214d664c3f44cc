// src/combat/src/catalog.rs
use std::collections::HashMap;
use std::path::Path;

use error::{EntityKind, GameError};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::species::{Role, Species};
use crate::stats::StatBlock;

/// Read-only table of base stats, keyed by catalog name (`"KNIGHT"`,
/// `"MOON_DEMON"`, ...). Built once at start-up and shared by reference.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatCatalog {
    #[serde(default)]
    heroes: HashMap<String, StatBlock>,
    #[serde(default)]
    monsters: HashMap<String, StatBlock>,
    #[serde(default)]
    guardians: HashMap<String, StatBlock>,
}

impl StatCatalog {
    /// Catalog holding the compiled-in stats of every species.
    pub fn builtin() -> Self {
        let mut catalog = Self::default();
        for species in Species::heroes() {
            catalog.insert(species.role(), species.catalog_key(), species.default_stats());
        }
        for species in Species::monsters().chain(Species::guardians()) {
            catalog.insert(species.role(), species.catalog_key(), species.default_stats());
        }
        catalog
    }

    /// Parses a JSON catalog and validates every entry.
    pub fn from_json_str(json: &str) -> Result<Self, GameError> {
        let parsed: StatCatalog = serde_json::from_str(json)?;
        let mut catalog = Self::default();
        for (role, table) in [
            (Role::Hero, parsed.heroes),
            (Role::Monster, parsed.monsters),
            (Role::Guardian, parsed.guardians),
        ] {
            for (name, stats) in table {
                stats.validate()?;
                Self::check_pillar_tag(role, &name, &stats)?;
                catalog.insert(role, &name, stats);
            }
        }
        Ok(catalog)
    }

    /// Only guardians carry a pillar tag, and it must be the one their
    /// species is bound to.
    fn check_pillar_tag(role: Role, name: &str, stats: &StatBlock) -> Result<(), GameError> {
        let Some(tagged) = stats.pillar else {
            return Ok(());
        };
        let expected = match role {
            Role::Guardian => Species::from_catalog_key(name).and_then(|s| s.pillar()),
            Role::Hero | Role::Monster => None,
        };
        if expected == Some(tagged) {
            return Ok(());
        }
        Err(GameError::InvalidStats(match expected {
            Some(pillar) => format!("{name}: guards {pillar}, not {tagged}"),
            None => format!("{name}: cannot hold the {tagged} pillar"),
        }))
    }

    pub fn load(path: &Path) -> Result<Self, GameError> {
        let content = std::fs::read_to_string(path)?;
        let catalog = Self::from_json_str(&content)?;
        debug!(path = %path.display(), entries = catalog.len(), "loaded stat catalog");
        Ok(catalog)
    }

    pub fn insert(&mut self, role: Role, name: &str, stats: StatBlock) {
        self.table_mut(role).insert(name.to_ascii_uppercase(), stats);
    }

    pub fn len(&self) -> usize {
        self.heroes.len() + self.monsters.len() + self.guardians.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn hero_stats(&self, name: &str) -> Result<StatBlock, GameError> {
        self.lookup(Role::Hero, name)
    }

    pub fn monster_stats(&self, name: &str) -> Result<StatBlock, GameError> {
        self.lookup(Role::Monster, name)
    }

    pub fn guardian_stats(&self, name: &str) -> Result<StatBlock, GameError> {
        self.lookup(Role::Guardian, name)
    }

    /// Stats for `species`, falling back to the compiled-in defaults when the
    /// catalog has no entry. Never fails.
    pub fn stats_for(&self, species: Species) -> StatBlock {
        match self.lookup(species.role(), species.catalog_key()) {
            Ok(stats) => stats,
            Err(e) => {
                warn!(%species, error = %e, "stat lookup failed, using defaults");
                species.default_stats()
            }
        }
    }

    fn lookup(&self, role: Role, name: &str) -> Result<StatBlock, GameError> {
        self.table(role)
            .get(&name.to_ascii_uppercase())
            .cloned()
            .ok_or_else(|| GameError::ConfigurationMissing {
                kind: EntityKind::from(role),
                name: name.to_string(),
            })
    }

    fn table(&self, role: Role) -> &HashMap<String, StatBlock> {
        match role {
            Role::Hero => &self.heroes,
            Role::Monster => &self.monsters,
            Role::Guardian => &self.guardians,
        }
    }

    fn table_mut(&mut self, role: Role) -> &mut HashMap<String, StatBlock> {
        match role {
            Role::Hero => &mut self.heroes,
            Role::Monster => &mut self.monsters,
            Role::Guardian => &mut self.guardians,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_covers_every_species() {
        let catalog = StatCatalog::builtin();
        assert_eq!(catalog.len(), 10);
        assert_eq!(catalog.hero_stats("KNIGHT").unwrap().max_health, 150);
        assert_eq!(catalog.monster_stats("goblin").unwrap().regeneration, 10);
        assert_eq!(catalog.guardian_stats("RED_DRAGON").unwrap().max_health, 320);
    }

    #[test]
    fn unknown_names_are_configuration_missing() {
        let catalog = StatCatalog::builtin();
        let err = catalog.hero_stats("PALADIN").unwrap_err();
        assert!(matches!(
            err,
            GameError::ConfigurationMissing { kind: EntityKind::Hero, .. }
        ));
        // a monster is not a guardian
        assert!(catalog.guardian_stats("OGRE").is_err());
    }

    #[test]
    fn missing_entries_fall_back_to_defaults() {
        let catalog = StatCatalog::default();
        assert_eq!(catalog.stats_for(Species::Hydra), Species::Hydra.default_stats());
    }

    #[test]
    fn json_overrides_selected_entries() {
        let json = r#"{
            "heroes": {
                "KNIGHT": {
                    "name": "Knight",
                    "max_health": 500,
                    "speed": 3,
                    "hit_chance": 1.0,
                    "min_damage": 10,
                    "max_damage": 20,
                    "block_chance": 0.5
                }
            }
        }"#;
        let catalog = StatCatalog::from_json_str(json).unwrap();
        assert_eq!(catalog.stats_for(Species::Knight).max_health, 500);
        assert_eq!(catalog.stats_for(Species::Ogre).max_health, 200);
    }

    #[test]
    fn invalid_entries_are_rejected() {
        let json = r#"{
            "monsters": {
                "OGRE": {
                    "name": "Ogre",
                    "max_health": 200,
                    "speed": 3,
                    "hit_chance": 2.0,
                    "min_damage": 30,
                    "max_damage": 60
                }
            }
        }"#;
        assert!(matches!(
            StatCatalog::from_json_str(json),
            Err(GameError::InvalidStats(_))
        ));
        assert!(matches!(
            StatCatalog::from_json_str("{ not json"),
            Err(GameError::Parse(_))
        ));
    }

    fn guardian_json(key: &str, pillar: &str) -> String {
        format!(
            r#"{{
                "guardians": {{
                    "{key}": {{
                        "name": "Hydra",
                        "max_health": 250,
                        "speed": 3,
                        "hit_chance": 0.7,
                        "min_damage": 40,
                        "max_damage": 60,
                        "pillar": "{pillar}"
                    }}
                }}
            }}"#
        )
    }

    #[test]
    fn guardian_must_hold_its_own_pillar() {
        assert!(StatCatalog::from_json_str(&guardian_json("HYDRA", "POLYMORPHISM")).is_ok());
        assert!(matches!(
            StatCatalog::from_json_str(&guardian_json("HYDRA", "ABSTRACTION")),
            Err(GameError::InvalidStats(_))
        ));
        assert!(matches!(
            StatCatalog::from_json_str(&guardian_json("KRAKEN", "POLYMORPHISM")),
            Err(GameError::InvalidStats(_))
        ));
    }

    #[test]
    fn only_guardians_hold_pillars() {
        let json = r#"{
            "monsters": {
                "GOBLIN": {
                    "name": "Goblin",
                    "max_health": 70,
                    "speed": 5,
                    "hit_chance": 0.8,
                    "min_damage": 20,
                    "max_damage": 35,
                    "pillar": "ENCAPSULATION"
                }
            }
        }"#;
        assert!(matches!(
            StatCatalog::from_json_str(json),
            Err(GameError::InvalidStats(_))
        ));
    }
}
