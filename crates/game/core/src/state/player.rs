//! Player progression: wallet, inventories, and the owned party.
//!
//! Every operation here is a complete transaction: a failed purchase,
//! equip, or item use leaves wallet and inventories exactly as they were.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::config::GameConfig;
use crate::env::catalog::{ArmorDef, CatalogOracle, ConsumableDef, WeaponDef};
use crate::error::{ErrorSeverity, GameError};
use crate::state::actor::Actor;
use crate::state::party::Party;

/// Which wallet a purchase draws from.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, strum::Display, strum::EnumString,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Currency {
    Gold,
    Tickets,
}

/// Errors from shop and inventory operations. None of them mutate state.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ShopError {
    #[error("no such catalog entry: {name}")]
    UnknownCatalogEntry { name: String },

    #[error("insufficient {currency}: need {required}, have {available}")]
    InsufficientFunds {
        currency: Currency,
        required: u32,
        available: u32,
    },

    #[error("item not owned: {name}")]
    ItemNotOwned { name: String },

    #[error("no party member at index {index}")]
    NoSuchMember { index: usize },
}

impl GameError for ShopError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::InsufficientFunds { .. } => ErrorSeverity::Recoverable,
            Self::UnknownCatalogEntry { .. }
            | Self::ItemNotOwned { .. }
            | Self::NoSuchMember { .. } => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownCatalogEntry { .. } => "UNKNOWN_CATALOG_ENTRY",
            Self::InsufficientFunds { .. } => "INSUFFICIENT_FUNDS",
            Self::ItemNotOwned { .. } => "ITEM_NOT_OWNED",
            Self::NoSuchMember { .. } => "NO_SUCH_MEMBER",
        }
    }
}

/// The player: dual-currency wallet, item inventories, and the party.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Player {
    pub gold: u32,
    pub tickets: u32,
    pub weapons: Vec<WeaponDef>,
    pub armors: Vec<ArmorDef>,
    /// Owned count per consumable name. Entries are removed at zero.
    pub consumables: BTreeMap<String, u32>,
    pub party: Party,
}

impl Player {
    /// New player with the starting wallet and a level-1 hero.
    pub fn new(hero_name: impl Into<String>) -> Self {
        let hero = Actor::new_human(
            hero_name,
            GameConfig::HERO_MAX_HP,
            GameConfig::HERO_MAX_MP,
            GameConfig::HERO_ATTACK,
            GameConfig::HERO_DEFENSE,
        );
        let mut party = Party::new();
        // a fresh party always has room for the hero
        let _ = party.add_member(hero);
        Self {
            gold: GameConfig::STARTING_GOLD,
            tickets: 0,
            weapons: Vec::new(),
            armors: Vec::new(),
            consumables: BTreeMap::new(),
            party,
        }
    }

    /// Atomic check-then-deduct on the gold wallet.
    pub fn spend_gold(&mut self, amount: u32) -> Result<(), ShopError> {
        if self.gold < amount {
            return Err(ShopError::InsufficientFunds {
                currency: Currency::Gold,
                required: amount,
                available: self.gold,
            });
        }
        self.gold -= amount;
        Ok(())
    }

    /// Atomic check-then-deduct on the ticket wallet.
    pub fn spend_tickets(&mut self, amount: u32) -> Result<(), ShopError> {
        if self.tickets < amount {
            return Err(ShopError::InsufficientFunds {
                currency: Currency::Tickets,
                required: amount,
                available: self.tickets,
            });
        }
        self.tickets -= amount;
        Ok(())
    }

    fn pay(&mut self, currency: Currency, amount: u32) -> Result<(), ShopError> {
        match currency {
            Currency::Gold => self.spend_gold(amount),
            Currency::Tickets => self.spend_tickets(amount),
        }
    }

    /// Buy a weapon from the catalog. Lookup and payment are one
    /// transaction: on any failure nothing changes.
    pub fn buy_weapon(
        &mut self,
        catalog: &dyn CatalogOracle,
        name: &str,
        currency: Currency,
    ) -> Result<(), ShopError> {
        let def = *catalog
            .weapon(name)
            .ok_or_else(|| ShopError::UnknownCatalogEntry {
                name: name.to_string(),
            })?;
        let price = match currency {
            Currency::Gold => def.price_gold,
            Currency::Tickets => def.price_tickets,
        };
        self.pay(currency, price)?;
        self.weapons.push(def);
        Ok(())
    }

    /// Buy an armor from the catalog.
    pub fn buy_armor(
        &mut self,
        catalog: &dyn CatalogOracle,
        name: &str,
        currency: Currency,
    ) -> Result<(), ShopError> {
        let def = *catalog
            .armor(name)
            .ok_or_else(|| ShopError::UnknownCatalogEntry {
                name: name.to_string(),
            })?;
        let price = match currency {
            Currency::Gold => def.price_gold,
            Currency::Tickets => def.price_tickets,
        };
        self.pay(currency, price)?;
        self.armors.push(def);
        Ok(())
    }

    /// Buy `quantity` of a consumable at `unit price * quantity`.
    pub fn buy_consumable(
        &mut self,
        catalog: &dyn CatalogOracle,
        name: &str,
        currency: Currency,
        quantity: u32,
    ) -> Result<(), ShopError> {
        if quantity == 0 {
            return Ok(());
        }
        let def = *catalog
            .consumable(name)
            .ok_or_else(|| ShopError::UnknownCatalogEntry {
                name: name.to_string(),
            })?;
        let unit = match currency {
            Currency::Gold => def.price_gold,
            Currency::Tickets => def.price_tickets,
        };
        // a total beyond u32::MAX can never be affordable
        let total = unit.checked_mul(quantity).ok_or(ShopError::InsufficientFunds {
            currency,
            required: u32::MAX,
            available: match currency {
                Currency::Gold => self.gold,
                Currency::Tickets => self.tickets,
            },
        })?;
        self.pay(currency, total)?;
        *self.consumables.entry(def.name.to_string()).or_insert(0) += quantity;
        Ok(())
    }

    /// Equip the first owned weapon with the given name on a party member.
    pub fn equip_weapon(&mut self, member_index: usize, name: &str) -> Result<(), ShopError> {
        let weapon = *self
            .weapons
            .iter()
            .find(|w| w.name == name)
            .ok_or_else(|| ShopError::ItemNotOwned {
                name: name.to_string(),
            })?;
        let member = self
            .party
            .get_mut(member_index)
            .ok_or(ShopError::NoSuchMember {
                index: member_index,
            })?;
        member.equip_weapon(weapon);
        Ok(())
    }

    /// Equip the first owned armor with the given name on a party member.
    pub fn equip_armor(&mut self, member_index: usize, name: &str) -> Result<(), ShopError> {
        let armor = *self
            .armors
            .iter()
            .find(|a| a.name == name)
            .ok_or_else(|| ShopError::ItemNotOwned {
                name: name.to_string(),
            })?;
        let member = self
            .party
            .get_mut(member_index)
            .ok_or(ShopError::NoSuchMember {
                index: member_index,
            })?;
        member.equip_armor(armor);
        Ok(())
    }

    /// Use one owned consumable on a party member, restoring HP/MP and
    /// decrementing the owned count (the entry disappears at zero).
    pub fn use_consumable(
        &mut self,
        catalog: &dyn CatalogOracle,
        member_index: usize,
        name: &str,
    ) -> Result<ConsumableDef, ShopError> {
        if self.consumables.get(name).copied().unwrap_or(0) == 0 {
            return Err(ShopError::ItemNotOwned {
                name: name.to_string(),
            });
        }
        let def = *catalog
            .consumable(name)
            .ok_or_else(|| ShopError::UnknownCatalogEntry {
                name: name.to_string(),
            })?;
        let member = self
            .party
            .get_mut(member_index)
            .ok_or(ShopError::NoSuchMember {
                index: member_index,
            })?;

        member.heal(def.hp_restore);
        member.restore_mp(def.mp_restore);

        if let Some(count) = self.consumables.get_mut(name) {
            *count -= 1;
            if *count == 0 {
                self.consumables.remove(name);
            }
        }
        Ok(def)
    }

    /// Gold penalty applied after a lost battle. Returns the gold lost.
    pub fn apply_defeat_penalty(&mut self) -> u32 {
        let lost = self.gold.min(GameConfig::DEFEAT_GOLD_PENALTY);
        self.gold -= lost;
        lost
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Shop {
        weapons: Vec<WeaponDef>,
        armors: Vec<ArmorDef>,
        consumables: Vec<ConsumableDef>,
    }

    impl CatalogOracle for Shop {
        fn weapon(&self, name: &str) -> Option<&WeaponDef> {
            self.weapons.iter().find(|w| w.name == name)
        }

        fn armor(&self, name: &str) -> Option<&ArmorDef> {
            self.armors.iter().find(|a| a.name == name)
        }

        fn consumable(&self, name: &str) -> Option<&ConsumableDef> {
            self.consumables.iter().find(|c| c.name == name)
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

    fn shop() -> Shop {
        Shop {
            weapons: vec![WeaponDef {
                name: "Ledger Blade",
                attack_bonus: 5,
                price_gold: 100,
                price_tickets: 2,
                description: "",
            }],
            armors: vec![ArmorDef {
                name: "Hedge Mail",
                defense_bonus: 4,
                price_gold: 600,
                price_tickets: 3,
                description: "",
            }],
            consumables: vec![ConsumableDef {
                name: "Dividend Potion",
                hp_restore: 30,
                mp_restore: 0,
                price_gold: 20,
                price_tickets: 1,
                description: "",
            }],
        }
    }

    #[test]
    fn new_player_has_starting_wallet_and_hero() {
        let player = Player::new("Taylor");
        assert_eq!(player.gold, 500);
        assert_eq!(player.tickets, 0);
        assert_eq!(player.party.len(), 1);
        let hero = player.party.get(0).unwrap();
        assert_eq!(hero.max_hp, 100);
        assert_eq!(hero.attack, 15);
    }

    #[test]
    fn buy_weapon_deducts_and_appends() {
        let shop = shop();
        let mut player = Player::new("Taylor");
        player.buy_weapon(&shop, "Ledger Blade", Currency::Gold).unwrap();
        assert_eq!(player.gold, 400);
        assert_eq!(player.weapons.len(), 1);
    }

    #[test]
    fn failed_purchase_mutates_nothing() {
        let shop = shop();
        let mut player = Player::new("Taylor");
        let err = player
            .buy_armor(&shop, "Hedge Mail", Currency::Gold)
            .unwrap_err();
        assert!(matches!(err, ShopError::InsufficientFunds { .. }));
        assert_eq!(player.gold, 500);
        assert!(player.armors.is_empty());

        let err = player
            .buy_weapon(&shop, "Vaporware Sword", Currency::Gold)
            .unwrap_err();
        assert!(matches!(err, ShopError::UnknownCatalogEntry { .. }));
        assert_eq!(player.gold, 500);
    }

    #[test]
    fn consumable_quantity_pricing_and_counts() {
        let shop = shop();
        let mut player = Player::new("Taylor");
        player
            .buy_consumable(&shop, "Dividend Potion", Currency::Gold, 3)
            .unwrap();
        assert_eq!(player.gold, 440);
        assert_eq!(player.consumables.get("Dividend Potion"), Some(&3));
    }

    #[test]
    fn overflowing_consumable_order_is_rejected_without_mutation() {
        let shop = shop();
        let mut player = Player::new("Taylor");
        // 214_748_365 * 20 gold overflows u32
        let err = player
            .buy_consumable(&shop, "Dividend Potion", Currency::Gold, 214_748_365)
            .unwrap_err();
        assert!(matches!(err, ShopError::InsufficientFunds { .. }));
        assert_eq!(player.gold, 500);
        assert!(player.consumables.is_empty());
    }

    #[test]
    fn equip_requires_ownership() {
        let shop = shop();
        let mut player = Player::new("Taylor");
        let err = player.equip_weapon(0, "Ledger Blade").unwrap_err();
        assert!(matches!(err, ShopError::ItemNotOwned { .. }));

        player.buy_weapon(&shop, "Ledger Blade", Currency::Gold).unwrap();
        player.equip_weapon(0, "Ledger Blade").unwrap();
        assert_eq!(player.party.get(0).unwrap().attack, 20);
    }

    #[test]
    fn using_the_last_consumable_removes_the_entry() {
        let shop = shop();
        let mut player = Player::new("Taylor");
        player
            .buy_consumable(&shop, "Dividend Potion", Currency::Gold, 1)
            .unwrap();
        player.party.get_mut(0).unwrap().hp = 50;

        player.use_consumable(&shop, 0, "Dividend Potion").unwrap();
        assert_eq!(player.party.get(0).unwrap().hp, 80);
        assert!(player.consumables.is_empty());

        let err = player.use_consumable(&shop, 0, "Dividend Potion").unwrap_err();
        assert!(matches!(err, ShopError::ItemNotOwned { .. }));
    }

    #[test]
    fn defeat_penalty_floors_at_zero() {
        let mut player = Player::new("Taylor");
        player.gold = 30;
        assert_eq!(player.apply_defeat_penalty(), 30);
        assert_eq!(player.gold, 0);
        assert_eq!(player.apply_defeat_penalty(), 0);
    }
}
