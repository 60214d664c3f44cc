// src/combat/src/species.rs
use std::ops::{Range, RangeInclusive};

use error::EntityKind;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, IntoEnumIterator};

use crate::pillar::Pillar;
use crate::stats::StatBlock;

/// Broad role of a character in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Hero,
    Monster,
    Guardian,
}

impl From<Role> for EntityKind {
    fn from(role: Role) -> Self {
        match role {
            Role::Hero => EntityKind::Hero,
            Role::Monster => EntityKind::Monster,
            Role::Guardian => EntityKind::Guardian,
        }
    }
}

/// Every kind of character that can take part in a fight.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
pub enum Species {
    // 英雄
    Assassin,
    Knight,
    Mender,
    // 怪物
    Ogre,
    Goblin,
    Direwolf,
    // 守护者
    Cerberus,
    Hydra,
    #[strum(serialize = "Moon Demon")]
    MoonDemon,
    #[strum(serialize = "Red Dragon")]
    RedDragon,
}

/// How a species takes incoming damage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Defense {
    /// Every point of damage lands
    Exposed,
    /// A block roll against the block chance may negate the whole hit
    Block,
}

/// Payoff of an ultimate once its roll succeeds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UltimateEffect {
    /// `rolls` independent rolls, one hit in the user's damage range per success
    Flurry { rolls: u8 },
    /// One hit in a fixed damage range
    Strike { damage: Range<i32> },
    /// Heals the user; the defender is untouched
    SelfHeal { amount: Range<i32> },
    /// A random number of hits in the user's damage range
    Barrage { hits: RangeInclusive<i32> },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ultimate {
    pub name: &'static str,
    pub effect: UltimateEffect,
}

impl Species {
    pub fn role(&self) -> Role {
        match self {
            Species::Assassin | Species::Knight | Species::Mender => Role::Hero,
            Species::Ogre | Species::Goblin | Species::Direwolf => Role::Monster,
            Species::Cerberus | Species::Hydra | Species::MoonDemon | Species::RedDragon => {
                Role::Guardian
            }
        }
    }

    /// Key of this species in the stat catalog.
    pub fn catalog_key(&self) -> &'static str {
        match self {
            Species::Assassin => "ASSASSIN",
            Species::Knight => "KNIGHT",
            Species::Mender => "MENDER",
            Species::Ogre => "OGRE",
            Species::Goblin => "GOBLIN",
            Species::Direwolf => "DIREWOLF",
            Species::Cerberus => "CERBERUS",
            Species::Hydra => "HYDRA",
            Species::MoonDemon => "MOON_DEMON",
            Species::RedDragon => "RED_DRAGON",
        }
    }

    pub fn from_catalog_key(key: &str) -> Option<Self> {
        Species::iter().find(|s| s.catalog_key().eq_ignore_ascii_case(key))
    }

    pub fn heroes() -> impl Iterator<Item = Species> {
        Species::iter().filter(|s| s.role() == Role::Hero)
    }

    pub fn monsters() -> impl Iterator<Item = Species> {
        Species::iter().filter(|s| s.role() == Role::Monster)
    }

    pub fn guardians() -> impl Iterator<Item = Species> {
        Species::iter().filter(|s| s.role() == Role::Guardian)
    }

    /// The pillar a guardian is bound to.
    pub fn pillar(&self) -> Option<Pillar> {
        match self {
            Species::Cerberus => Some(Pillar::Abstraction),
            Species::MoonDemon => Some(Pillar::Encapsulation),
            Species::RedDragon => Some(Pillar::Inheritance),
            Species::Hydra => Some(Pillar::Polymorphism),
            _ => None,
        }
    }

    pub fn defense(&self) -> Defense {
        match self {
            Species::Assassin | Species::Knight | Species::Mender | Species::Cerberus => {
                Defense::Block
            }
            Species::Ogre
            | Species::Goblin
            | Species::Direwolf
            | Species::Hydra
            | Species::MoonDemon
            | Species::RedDragon => Defense::Exposed,
        }
    }

    /// Ultimate ability table. Monsters have none.
    pub fn ultimate(&self) -> Option<Ultimate> {
        let (name, effect) = match self {
            Species::Assassin => ("Rhythm Echo", UltimateEffect::Flurry { rolls: 2 }),
            Species::Knight => ("Crushing Blow", UltimateEffect::Strike { damage: 60..80 }),
            Species::Mender => ("Healing Light", UltimateEffect::SelfHeal { amount: 50..70 }),
            Species::Cerberus => ("Multi-Bite", UltimateEffect::Strike { damage: 50..65 }),
            Species::Hydra => ("Multi-Head Strike", UltimateEffect::Barrage { hits: 1..=3 }),
            Species::MoonDemon => ("Lunar Fury", UltimateEffect::Strike { damage: 70..90 }),
            Species::RedDragon => ("Dragon Breath", UltimateEffect::Strike { damage: 80..100 }),
            Species::Ogre | Species::Goblin | Species::Direwolf => return None,
        };
        Some(Ultimate { name, effect })
    }

    /// One-line pitch shown on the hero selection screen.
    pub fn blurb(&self) -> &'static str {
        match self {
            Species::Assassin => "Fast with high attack speed and moderate damage",
            Species::Knight => "Tanky with high defense and high damage",
            Species::Mender => "Balanced with healing abilities",
            Species::Ogre => "Slow and brutal",
            Species::Goblin => "Quick and sneaky",
            Species::Direwolf => "A hungry pack hunter",
            Species::Cerberus => "Three-headed keeper of Abstraction",
            Species::Hydra => "Many-headed keeper of Polymorphism",
            Species::MoonDemon => "Lunar keeper of Encapsulation",
            Species::RedDragon => "Fiery keeper of Inheritance",
        }
    }

    /// Compiled-in stats, used when the catalog has no entry for the species.
    pub fn default_stats(&self) -> StatBlock {
        let name = self.to_string();
        match self {
            Species::Assassin => StatBlock::new(name, 75, 6, 0.8, (35, 50))
                .with_ultimate(0.4)
                .with_block(0.3),
            Species::Knight => StatBlock::new(name, 150, 3, 0.7, (45, 65))
                .with_ultimate(0.3)
                .with_block(0.5),
            Species::Mender => StatBlock::new(name, 100, 4, 0.75, (30, 40))
                .with_ultimate(0.5)
                .with_block(0.25),
            Species::Ogre => {
                StatBlock::new(name, 200, 3, 0.7, (30, 60)).with_regeneration(0.2, 15)
            }
            Species::Goblin => {
                StatBlock::new(name, 70, 5, 0.8, (20, 35)).with_regeneration(0.3, 10)
            }
            Species::Direwolf => {
                StatBlock::new(name, 120, 4, 0.75, (25, 45)).with_regeneration(0.25, 12)
            }
            Species::Cerberus => StatBlock::new(name, 280, 3, 0.7, (30, 50))
                .with_ultimate(0.4)
                .with_block(0.25)
                .with_pillar(Pillar::Abstraction),
            Species::Hydra => StatBlock::new(name, 250, 4, 0.75, (35, 55))
                .with_ultimate(0.5)
                .with_pillar(Pillar::Polymorphism),
            Species::MoonDemon => StatBlock::new(name, 300, 2, 0.8, (40, 60))
                .with_ultimate(0.3)
                .with_pillar(Pillar::Encapsulation),
            Species::RedDragon => StatBlock::new(name, 320, 3, 0.7, (45, 65))
                .with_ultimate(0.4)
                .with_pillar(Pillar::Inheritance),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roles_split_three_three_four() {
        assert_eq!(Species::heroes().count(), 3);
        assert_eq!(Species::monsters().count(), 3);
        assert_eq!(Species::guardians().count(), 4);
    }

    #[test]
    fn monsters_have_no_ultimate_and_everyone_else_does() {
        for species in Species::iter() {
            assert_eq!(
                species.ultimate().is_some(),
                species.role() != Role::Monster,
                "{species}"
            );
        }
    }

    #[test]
    fn only_heroes_and_cerberus_block() {
        let blockers: Vec<_> = Species::iter()
            .filter(|s| s.defense() == Defense::Block)
            .collect();
        assert_eq!(
            blockers,
            vec![
                Species::Assassin,
                Species::Knight,
                Species::Mender,
                Species::Cerberus
            ]
        );
    }

    #[test]
    fn default_stats_are_valid_and_tagged() {
        for species in Species::iter() {
            let stats = species.default_stats();
            assert!(stats.validate().is_ok(), "{species}");
            assert_eq!(stats.pillar, species.pillar());
        }
    }

    #[test]
    fn catalog_keys_resolve_back() {
        assert_eq!(Species::from_catalog_key("MOON_DEMON"), Some(Species::MoonDemon));
        assert_eq!(Species::from_catalog_key("knight"), Some(Species::Knight));
        assert_eq!(Species::from_catalog_key("PALADIN"), None);
        assert_eq!(Species::MoonDemon.to_string(), "Moon Demon");
    }
}
