// src/hero/src/core.rs
use combat::{Character, Combatant, GameRng, Pillar, Role, Species, StatCatalog};
use error::GameError;
use items::{ItemKind, Potion};
use tracing::info;

use crate::inventory::Inventory;

/// 英雄核心数据结构
///
/// The player's character plus what only a hero carries: potions and the
/// pillars taken from defeated guardians. Lives for the whole playthrough.
#[derive(Clone, Debug, PartialEq)]
pub struct Hero {
    body: Character,
    inventory: Inventory,
    pillars: Vec<Pillar>,
}

impl Hero {
    /// Creates a hero of class `species` with stats from the catalog.
    pub fn new(species: Species, catalog: &StatCatalog) -> Result<Self, GameError> {
        Self::from_character(Character::spawn(species, catalog))
    }

    pub fn from_character(body: Character) -> Result<Self, GameError> {
        if body.role() != Role::Hero {
            return Err(GameError::UnknownEntityVariant(format!(
                "{} is not a hero class",
                body.species()
            )));
        }
        info!(class = %body.species(), "hero created");
        Ok(Self {
            body,
            inventory: Inventory::new(),
            pillars: Vec::new(),
        })
    }

    pub fn class(&self) -> Species {
        self.body.species()
    }

    pub fn body(&self) -> &Character {
        &self.body
    }

    pub fn body_mut(&mut self) -> &mut Character {
        &mut self.body
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn inventory_mut(&mut self) -> &mut Inventory {
        &mut self.inventory
    }

    pub fn pillars(&self) -> &[Pillar] {
        &self.pillars
    }

    pub fn pillar_count(&self) -> usize {
        self.pillars.len()
    }

    pub fn has_all_pillars(&self) -> bool {
        self.pillars.len() >= Pillar::COUNT
    }

    /// Records a pillar taken from a guardian. Returns false if it was
    /// already held.
    pub fn collect_pillar(&mut self, pillar: Pillar) -> bool {
        if self.pillars.contains(&pillar) {
            return false;
        }
        self.pillars.push(pillar);
        info!(%pillar, count = self.pillars.len(), "pillar collected");
        true
    }

    pub fn attack<D>(&self, defender: &mut D, rng: &mut GameRng) -> String
    where
        D: Combatant + ?Sized,
    {
        self.body.attack(defender, rng)
    }

    pub fn ultimate<D>(&mut self, defender: &mut D, rng: &mut GameRng) -> Result<String, GameError>
    where
        D: Combatant + ?Sized,
    {
        self.body.ultimate(defender, rng)
    }

    /// Takes one `kind` out of the inventory.
    pub fn take_potion(&mut self, kind: ItemKind) -> Result<Potion, GameError> {
        if !self.inventory.remove(kind) {
            return Err(GameError::invalid(format!("You don't have any {kind}s.")));
        }
        Ok(kind.potion())
    }

    /// Drinks a health potion from the inventory.
    pub fn drink_health_potion(&mut self, rng: &mut GameRng) -> Result<String, GameError> {
        match self.take_potion(ItemKind::HealthPotion)? {
            Potion::Healing(amount) => Ok(self.body.heal(amount, rng)),
            Potion::Vision => Err(GameError::UnknownEntityVariant(
                "health potion turned into a vision potion".into(),
            )),
        }
    }

    /// Debug cheat.
    pub fn enable_god_mode(&mut self) {
        self.body.empower();
        info!("god mode enabled");
    }

    pub fn describe(&self) -> String {
        self.body.describe()
    }
}

impl Combatant for Hero {
    fn name(&self) -> &str {
        self.body.name()
    }

    fn health(&self) -> i32 {
        self.body.health()
    }

    fn max_health(&self) -> i32 {
        self.body.max_health()
    }

    fn damage(&mut self, amount: i32, rng: &mut GameRng) -> String {
        self.body.damage(amount, rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn knight() -> Hero {
        Hero::new(Species::Knight, &StatCatalog::builtin()).unwrap()
    }

    #[test]
    fn new_hero_starts_empty_handed() {
        let hero = knight();
        assert_eq!(hero.pillar_count(), 0);
        assert!(hero.inventory().is_empty());
        assert_eq!(hero.health(), 150);
    }

    #[test]
    fn monsters_cannot_be_heroes() {
        let ogre = Character::spawn(Species::Ogre, &StatCatalog::builtin());
        assert!(matches!(
            Hero::from_character(ogre),
            Err(GameError::UnknownEntityVariant(_))
        ));
    }

    #[test]
    fn pillars_only_count_once() {
        let mut hero = knight();
        assert!(hero.collect_pillar(Pillar::Inheritance));
        assert!(!hero.collect_pillar(Pillar::Inheritance));
        assert_eq!(hero.pillar_count(), 1);
        assert!(!hero.has_all_pillars());
    }

    #[test]
    fn drinking_without_potions_is_rejected() {
        let mut hero = knight();
        let mut rng = GameRng::new(1);
        let err = hero.drink_health_potion(&mut rng).unwrap_err();
        assert_eq!(err.to_string(), "You don't have any Health Potions.");
    }

    #[test]
    fn health_potion_heals_and_is_consumed() {
        let mut hero = knight();
        let mut rng = GameRng::new(2);
        hero.inventory_mut().add_item(ItemKind::HealthPotion);
        hero.body_mut().set_health(10);

        let text = hero.drink_health_potion(&mut rng).unwrap();
        assert!(text.starts_with("Knight healed for"));
        assert!((50..70).contains(&hero.health()));
        assert_eq!(hero.inventory().count(ItemKind::HealthPotion), 0);
    }

    #[test]
    fn god_mode_blocks_everything() {
        let mut hero = knight();
        let mut rng = GameRng::new(3);
        hero.enable_god_mode();
        assert_eq!(hero.damage(1_000, &mut rng), "Knight blocked all incoming damage!");
    }
}
