//src/items/src/potion.rs
use std::ops::Range;

use crate::ItemKind;

/// Hit points restored by a health potion, upper bound exclusive.
pub const HEALTH_POTION_HEAL: Range<i32> = 40..60;

/// What drinking a potion does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Potion {
    /// Restores health to whoever drinks it
    Healing(Range<i32>),
    /// Reveals the rooms around the drinker
    Vision,
}

impl Potion {
    /// Whether the potion can be drunk in the middle of a fight.
    pub fn usable_in_battle(&self) -> bool {
        matches!(self, Potion::Healing(_))
    }
}

impl From<ItemKind> for Potion {
    fn from(kind: ItemKind) -> Self {
        match kind {
            ItemKind::HealthPotion => Potion::Healing(HEALTH_POTION_HEAL),
            ItemKind::VisionPotion => Potion::Vision,
        }
    }
}
