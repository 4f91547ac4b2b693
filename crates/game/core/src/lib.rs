//! Deterministic rules engine for the financial RPG.
//!
//! `game-core` defines the canonical game rules: actors and parties, the
//! battle engine, encounter generation, the economy condition machine, and
//! the player progression service. Everything is pure and seed-driven; the
//! runtime supplies content and entropy through the oracle traits in
//! [`env`] and persists state through the record types in [`state`].
pub mod battle;
pub mod config;
pub mod economy;
pub mod encounter;
pub mod env;
pub mod error;
pub mod spell;
pub mod state;
pub use battle::{
    ActionReport, Battle, BattleCommand, BattleError, BattleLog, BattleOutcome, BattleSummary,
    VictoryRewards,
};
pub use config::GameConfig;
pub use economy::{EconomyCondition, EconomyState};
pub use encounter::generate_enemy_party;
pub use env::{
    ArmorDef, CatalogOracle, ConsumableDef, MonsterOracle, MonsterTemplate, PcgRng, RngOracle,
    WeaponDef, compute_seed,
};
pub use error::{ErrorSeverity, GameError};
pub use spell::{SPELLS, Spell, SpellEffect, SpellError};
pub use state::{
    Actor, ActorKind, ActorRecord, BattleRecord, Currency, MonsterTraits, Party, PartyError,
    Player, ShopError, SpellOutcome, StateError, rehydrate_party,
};
