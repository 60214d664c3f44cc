// src/dungeon/src/encounter.rs
use combat::{Character, Pillar};

/// The enemy currently engaged with the hero. At most one exists at a time.
#[derive(Debug, Clone, PartialEq)]
pub enum Encounter {
    Monster(Character),
    /// A guardian holds the pillar of the room it was found in
    Guardian { boss: Character, pillar: Pillar },
}

impl Encounter {
    /// Bosses cannot be fled from and drop a pillar.
    pub fn is_boss(&self) -> bool {
        matches!(self, Encounter::Guardian { .. })
    }

    pub fn character(&self) -> &Character {
        match self {
            Encounter::Monster(c) | Encounter::Guardian { boss: c, .. } => c,
        }
    }

    pub fn character_mut(&mut self) -> &mut Character {
        match self {
            Encounter::Monster(c) | Encounter::Guardian { boss: c, .. } => c,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use combat::{Combatant, Species, StatBlock};

    #[test]
    fn guardian_fights_with_its_boss() {
        let mut encounter = Encounter::Guardian {
            boss: Character::new(Species::Hydra, StatBlock::new("Hydra", 250, 3, 0.7, (40, 60))),
            pillar: Pillar::Polymorphism,
        };
        assert!(encounter.is_boss());
        encounter.character_mut().set_health(10);
        assert_eq!(encounter.character().species(), Species::Hydra);
        assert_eq!(encounter.character().health(), 10);
    }

    #[test]
    fn monsters_are_not_bosses() {
        let encounter = Encounter::Monster(Character::new(
            Species::Goblin,
            StatBlock::new("Goblin", 70, 5, 0.8, (20, 35)),
        ));
        assert!(!encounter.is_boss());
    }
}
