//! Name-keyed registries over the static catalogs.
//!
//! Built once at startup; the engine reaches them through the oracle traits.

use std::collections::HashMap;

use game_core::{
    ArmorDef, CatalogOracle, ConsumableDef, MonsterOracle, MonsterTemplate, WeaponDef,
};

use crate::{items, monsters};

/// Immutable registry implementing both content oracles.
pub struct ContentRegistry {
    monsters: Vec<MonsterTemplate>,
    monster_index: HashMap<&'static str, usize>,
    weapons: Vec<WeaponDef>,
    weapon_index: HashMap<&'static str, usize>,
    armors: Vec<ArmorDef>,
    armor_index: HashMap<&'static str, usize>,
    consumables: Vec<ConsumableDef>,
    consumable_index: HashMap<&'static str, usize>,
}

fn index_by_name<T>(entries: &[T], name_of: impl Fn(&T) -> &'static str) -> HashMap<&'static str, usize> {
    entries
        .iter()
        .enumerate()
        .map(|(i, entry)| (name_of(entry), i))
        .collect()
}

impl ContentRegistry {
    /// Load the full shipped catalogs.
    pub fn new() -> Self {
        let monsters = monsters::all_templates();
        let weapons = items::WEAPONS.to_vec();
        let armors = items::ARMORS.to_vec();
        let consumables = items::CONSUMABLES.to_vec();

        Self {
            monster_index: index_by_name(&monsters, |t| t.name),
            weapon_index: index_by_name(&weapons, |w| w.name),
            armor_index: index_by_name(&armors, |a| a.name),
            consumable_index: index_by_name(&consumables, |c| c.name),
            monsters,
            weapons,
            armors,
            consumables,
        }
    }
}

impl Default for ContentRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl MonsterOracle for ContentRegistry {
    fn template(&self, name: &str) -> Option<&MonsterTemplate> {
        self.monster_index.get(name).map(|&i| &self.monsters[i])
    }

    fn all_templates(&self) -> &[MonsterTemplate] {
        &self.monsters
    }
}

impl CatalogOracle for ContentRegistry {
    fn weapon(&self, name: &str) -> Option<&WeaponDef> {
        self.weapon_index.get(name).map(|&i| &self.weapons[i])
    }

    fn armor(&self, name: &str) -> Option<&ArmorDef> {
        self.armor_index.get(name).map(|&i| &self.armors[i])
    }

    fn consumable(&self, name: &str) -> Option<&ConsumableDef> {
        self.consumable_index.get(name).map(|&i| &self.consumables[i])
    }

    fn weapons(&self) -> &[WeaponDef] {
        &self.weapons
    }

    fn armors(&self) -> &[ArmorDef] {
        &self.armors
    }

    fn consumables(&self) -> &[ConsumableDef] {
        &self.consumables
    }
}
