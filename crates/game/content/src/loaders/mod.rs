//! Content loaders for reading game data from files.
//!
//! Each loader has a `parse` entry point for in-memory text and a `load`
//! entry point for files on disk.

pub mod config;
pub mod factory;
pub mod world;

pub use config::ConfigLoader;
pub use factory::ContentFactory;
pub use world::{EnemySpec, NpcSpec, RoomSpec, WorldLoader, WorldSpec};

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
