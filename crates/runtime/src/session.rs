//! Persisted session state.
//!
//! The service layer is stateless between calls: the whole game lives in a
//! [`SessionState`] blob the caller stores wherever it likes (cookie, row,
//! file) and hands back on every call. Live engine types are rebuilt from it
//! at the start of an operation and recorded back at the end.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use game_core::{
    ActorRecord, BattleRecord, CatalogOracle, EconomyState, MonsterOracle, Player, StateError,
    rehydrate_party,
};

use crate::error::ServiceError;

/// Persisted form of the player: wallet, inventories by name, party records.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerRecord {
    pub gold: u32,
    pub tickets: u32,
    pub weapons: Vec<String>,
    pub armors: Vec<String>,
    pub consumables: BTreeMap<String, u32>,
    pub party: Vec<ActorRecord>,
}

impl PlayerRecord {
    pub fn from_player(player: &Player) -> Self {
        Self {
            gold: player.gold,
            tickets: player.tickets,
            weapons: player.weapons.iter().map(|w| w.name.to_string()).collect(),
            armors: player.armors.iter().map(|a| a.name.to_string()).collect(),
            consumables: player.consumables.clone(),
            party: player.party.members().iter().map(ActorRecord::from_actor).collect(),
        }
    }

    /// Rebuild the live player. Inventory and party content resolve through
    /// the oracles; any unknown name is an integrity error.
    pub fn rehydrate(
        &self,
        monsters: &dyn MonsterOracle,
        catalog: &dyn CatalogOracle,
    ) -> Result<Player, StateError> {
        let mut weapons = Vec::with_capacity(self.weapons.len());
        for name in &self.weapons {
            let def = catalog
                .weapon(name)
                .ok_or_else(|| StateError::UnknownItem { name: name.clone() })?;
            weapons.push(*def);
        }
        let mut armors = Vec::with_capacity(self.armors.len());
        for name in &self.armors {
            let def = catalog
                .armor(name)
                .ok_or_else(|| StateError::UnknownItem { name: name.clone() })?;
            armors.push(*def);
        }

        Ok(Player {
            gold: self.gold,
            tickets: self.tickets,
            weapons,
            armors,
            consumables: self.consumables.clone(),
            party: rehydrate_party(&self.party, monsters, catalog)?,
        })
    }
}

/// One player's complete game, as persisted between calls.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    /// Base seed fixed at session start; with `nonce` it makes every random
    /// draw replayable.
    pub seed: u64,
    /// Session-level roll counter (battles carry their own).
    pub nonce: u64,
    pub player: PlayerRecord,
    pub economy: EconomyState,
    pub area: u32,
    pub story_progress: u32,
    /// Present while a battle is in progress.
    pub battle: Option<BattleRecord>,
}

impl SessionState {
    pub fn to_json(&self) -> Result<String, ServiceError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, ServiceError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Store the live player back into the session.
    pub fn record_player(&mut self, player: &Player) {
        self.player = PlayerRecord::from_player(player);
    }
}
