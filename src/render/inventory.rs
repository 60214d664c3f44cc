//! 物品栏渲染器

use hero::Hero;
use items::ItemKind;

use crate::render::Palette;

pub struct InventoryRenderer;

impl InventoryRenderer {
    /// Out-of-combat inventory: both potions can be drunk.
    pub fn render(hero: &Hero, palette: &Palette) -> String {
        let inventory = hero.inventory();
        let mut lines = vec![
            palette.heading("INVENTORY:"),
            inventory.to_string(),
            String::new(),
            "ACTIONS:".to_string(),
        ];
        if inventory.count(ItemKind::HealthPotion) > 0 {
            lines.push("1. Use Health Potion".into());
        }
        if inventory.count(ItemKind::VisionPotion) > 0 {
            lines.push("2. Use Vision Potion".into());
        }
        lines.push("3. Back to game".into());
        lines.join("\n")
    }

    /// In-combat inventory: only health potions.
    pub fn render_battle(hero: &Hero, palette: &Palette) -> String {
        let inventory = hero.inventory();
        let mut lines = vec![
            palette.heading("BATTLE INVENTORY:"),
            inventory.to_string(),
            String::new(),
            "ACTIONS:".to_string(),
        ];
        if inventory.count(ItemKind::HealthPotion) > 0 {
            lines.push("1. Use Health Potion".into());
        }
        lines.push("2. Back to battle".into());
        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use combat::{Species, StatCatalog};
    use pretty_assertions::assert_eq;

    #[test]
    fn only_held_potions_are_offered() {
        let mut hero = Hero::new(Species::Assassin, &StatCatalog::builtin()).unwrap();
        hero.inventory_mut().add_item(ItemKind::VisionPotion);
        let palette = Palette::default();

        assert_eq!(
            InventoryRenderer::render(&hero, &palette),
            "INVENTORY:\n[ Health Potions: 0, Vision Potions: 1 ]\n\nACTIONS:\n2. Use Vision Potion\n3. Back to game"
        );
        assert_eq!(
            InventoryRenderer::render_battle(&hero, &palette),
            "BATTLE INVENTORY:\n[ Health Potions: 0, Vision Potions: 1 ]\n\nACTIONS:\n2. Back to battle"
        );
    }
}
