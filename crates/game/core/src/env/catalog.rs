//! Item catalog definitions and oracle interface.
//!
//! Weapons, armors, and consumables are plain data: a name, the stat or
//! restoration they grant, and a dual-currency price. The `CatalogOracle`
//! trait exposes the catalog to the shop and inventory operations.

/// A weapon grants a flat attack bonus while equipped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WeaponDef {
    pub name: &'static str,
    pub attack_bonus: u32,
    pub price_gold: u32,
    pub price_tickets: u32,
    pub description: &'static str,
}

/// An armor grants a flat defense bonus while equipped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ArmorDef {
    pub name: &'static str,
    pub defense_bonus: u32,
    pub price_gold: u32,
    pub price_tickets: u32,
    pub description: &'static str,
}

/// A consumable restores HP and/or MP when used outside battle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ConsumableDef {
    pub name: &'static str,
    pub hp_restore: u32,
    pub mp_restore: u32,
    pub price_gold: u32,
    pub price_tickets: u32,
    pub description: &'static str,
}

/// Oracle providing the item catalog for shop and inventory operations.
pub trait CatalogOracle: Send + Sync {
    fn weapon(&self, name: &str) -> Option<&WeaponDef>;
    fn armor(&self, name: &str) -> Option<&ArmorDef>;
    fn consumable(&self, name: &str) -> Option<&ConsumableDef>;

    /// All weapons in registration order, for shop listings.
    fn weapons(&self) -> &[WeaponDef];
    /// All armors in registration order.
    fn armors(&self) -> &[ArmorDef];
    /// All consumables in registration order.
    fn consumables(&self) -> &[ConsumableDef];
}
