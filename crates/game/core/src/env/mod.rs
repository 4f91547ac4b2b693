//! Environment oracles.
//!
//! The engine never owns content or entropy. Monster templates, the item
//! catalog, and randomness are all reached through oracle traits so the
//! content layer and tests can supply their own implementations.

pub mod catalog;
pub mod monsters;
pub mod rng;

pub use catalog::{ArmorDef, CatalogOracle, ConsumableDef, WeaponDef};
pub use monsters::{MonsterOracle, MonsterTemplate};
pub use rng::{PcgRng, RngOracle, compute_seed};
