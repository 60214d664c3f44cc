//src/items/src/lib.rs

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

pub mod potion;

pub use crate::potion::{HEALTH_POTION_HEAL, Potion};

/// 物品类型枚举
///
/// The display string doubles as the inventory key ("Health Potion").
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
    IntoStaticStr,
)]
pub enum ItemKind {
    #[strum(serialize = "Health Potion")]
    HealthPotion,
    #[strum(serialize = "Vision Potion")]
    VisionPotion,
}

impl ItemKind {
    /// Inventory key of this item.
    pub fn name(&self) -> &'static str {
        self.into()
    }

    /// Looks an item up by its inventory key; unknown names yield `None`.
    pub fn from_name(name: &str) -> Option<Self> {
        name.parse().ok()
    }

    pub fn potion(&self) -> Potion {
        Potion::from(*self)
    }
}
