// src/hero/src/inventory.rs
use std::collections::BTreeMap;
use std::fmt;

use items::ItemKind;
use strum::IntoEnumIterator;

/// Counted item store owned by one hero. No capacity limit.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Inventory {
    items: BTreeMap<ItemKind, u32>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one item; always succeeds.
    pub fn add_item(&mut self, item: ItemKind) -> String {
        *self.items.entry(item).or_insert(0) += 1;
        format!("{item} added to Inventory!")
    }

    /// Removes one item by name. No-op when none are held or the name is unknown.
    pub fn remove_item(&mut self, name: &str) {
        if let Some(kind) = ItemKind::from_name(name) {
            self.remove(kind);
        }
    }

    /// Removes one `kind`; returns whether anything was removed.
    pub fn remove(&mut self, kind: ItemKind) -> bool {
        match self.items.get_mut(&kind) {
            Some(count) if *count > 0 => {
                *count -= 1;
                true
            }
            _ => false,
        }
    }

    /// Count held under `name`; 0 for unknown names.
    pub fn get_item(&self, name: &str) -> u32 {
        ItemKind::from_name(name).map_or(0, |kind| self.count(kind))
    }

    pub fn count(&self, kind: ItemKind) -> u32 {
        self.items.get(&kind).copied().unwrap_or(0)
    }

    /// 当前持有的物品种类数
    pub fn kinds_held(&self) -> usize {
        self.items.values().filter(|&&count| count > 0).count()
    }

    pub fn is_empty(&self) -> bool {
        self.kinds_held() == 0
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}

impl fmt::Display for Inventory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let entries: Vec<String> = ItemKind::iter()
            .map(|kind| format!("{kind}s: {}", self.count(kind)))
            .collect();
        write!(f, "[ {} ]", entries.join(", "))
    }
}
