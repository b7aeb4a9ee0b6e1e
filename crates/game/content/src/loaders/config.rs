//! Game configuration loader.

use std::path::Path;

use game_core::GameConfig;

use crate::loaders::{LoadResult, read_file};

/// Default balance table shipped with the crate.
pub const BUILTIN_CONFIG: &str = include_str!("../../data/config.toml");

/// Loader for game configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    pub fn load(path: &Path) -> LoadResult<GameConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse config from TOML text. Missing keys keep their defaults.
    pub fn parse(content: &str) -> LoadResult<GameConfig> {
        toml::from_str(content).map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))
    }

    /// The compiled-in balance table.
    pub fn builtin() -> LoadResult<GameConfig> {
        Self::parse(BUILTIN_CONFIG)
    }
}
