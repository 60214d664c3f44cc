// src/combat/src/pillar.rs
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use crate::species::Species;

/// The four collectible objectives, each guarded by exactly one guardian.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum Pillar {
    Abstraction,
    Encapsulation,
    Inheritance,
    Polymorphism,
}

impl Pillar {
    /// Number of pillars a hero needs to win.
    pub const COUNT: usize = 4;

    /// The guardian bound to this pillar.
    pub fn guardian(&self) -> Species {
        match self {
            Pillar::Abstraction => Species::Cerberus,
            Pillar::Encapsulation => Species::MoonDemon,
            Pillar::Inheritance => Species::RedDragon,
            Pillar::Polymorphism => Species::Hydra,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use strum::IntoEnumIterator;

    #[test]
    fn every_pillar_has_a_distinct_guardian() {
        let guardians: HashSet<_> = Pillar::iter().map(|p| p.guardian()).collect();
        assert_eq!(guardians.len(), Pillar::COUNT);
        for pillar in Pillar::iter() {
            assert_eq!(pillar.guardian().pillar(), Some(pillar));
        }
    }

    #[test]
    fn tags_display_in_caps() {
        assert_eq!(Pillar::Abstraction.to_string(), "ABSTRACTION");
        assert_eq!("POLYMORPHISM".parse::<Pillar>().ok(), Some(Pillar::Polymorphism));
    }
}
