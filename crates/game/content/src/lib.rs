//! Data-driven content definitions and loaders.
//!
//! This crate houses the static game content and the loaders for its data
//! files:
//! - World layout: rooms, ground items, NPCs, enemies and exits (RON)
//! - Balance configuration (TOML)
//!
//! The reference world and default balance table are compiled in, so a
//! game can start without any data directory. A data directory, when given,
//! overrides them file by file.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{
    ConfigLoader, ContentFactory, EnemySpec, LoadResult, NpcSpec, RoomSpec, WorldLoader,
    WorldSpec,
};
