//! Static game content: the monster roster and the item catalog.
//!
//! `game-content` owns the data tables and exposes them to the engine
//! through the `game-core` oracle traits via [`ContentRegistry`].
pub mod items;
pub mod monsters;
pub mod registry;
pub use registry::ContentRegistry;
