//! Session and service layer over the game engine.
//!
//! `runtime` pairs the deterministic engine (`game-core`) with the shipped
//! content (`game-content`) and exposes the operations a web or CLI front
//! end calls. All state travels through [`SessionState`]; the service keeps
//! nothing between calls.
pub mod error;
pub mod service;
pub mod session;
pub use error::ServiceError;
pub use service::{
    BattleConclusion, BattleTurn, BattleView, ConsumableListing, EconomyReport, EncounterReport,
    EquipmentKind, EquipmentListing, GameService, ShopCatalog,
};
pub use session::{PlayerRecord, SessionState};
