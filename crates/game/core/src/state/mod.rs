//! Game state: actors, parties, the player, and persistence records.

pub mod actor;
pub mod party;
pub mod player;
pub mod record;

pub use actor::{Actor, ActorKind, MonsterTraits, SpellOutcome};
pub use party::{Party, PartyError};
pub use player::{Currency, Player, ShopError};
pub use record::{ActorRecord, BattleRecord, StateError, rehydrate_party};
