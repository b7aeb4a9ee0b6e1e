//! Runtime configuration structures and loaders.
use std::env;
use std::path::PathBuf;

/// Settings needed to build a [`Game`](crate::Game) and its save repository.
#[derive(Clone, Debug)]
pub struct RuntimeConfig {
    /// Directory holding `{slot}.sav` files.
    pub save_dir: PathBuf,
    pub save_slot: String,
    /// Fixed seed for reproducible runs. Random when unset.
    pub seed: Option<u64>,
    /// Directory with `world.ron` / `config.toml` overrides.
    pub data_dir: Option<PathBuf>,
}

impl RuntimeConfig {
    pub const DEFAULT_SAVE_SLOT: &'static str = "default";

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `MUD_SAVE_DIR` - Directory for save files (default: platform data dir)
    /// - `MUD_SAVE_SLOT` - Save slot name (default: `default`)
    /// - `MUD_SEED` - RNG seed (default: random)
    /// - `MUD_DATA_DIR` - Content override directory (default: built-in content)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(dir) = env::var("MUD_SAVE_DIR") {
            config.save_dir = PathBuf::from(dir);
        }

        if let Ok(slot) = env::var("MUD_SAVE_SLOT")
            && !slot.trim().is_empty()
        {
            config.save_slot = slot.trim().to_owned();
        }

        config.seed = read_env::<u64>("MUD_SEED");
        config.data_dir = env::var("MUD_DATA_DIR").ok().map(PathBuf::from);

        config
    }

    /// The configured seed, or a fresh random one.
    pub fn resolve_seed(&self) -> u64 {
        self.seed.unwrap_or_else(rand::random)
    }
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            save_dir: default_save_dir(),
            save_slot: Self::DEFAULT_SAVE_SLOT.to_owned(),
            seed: None,
            data_dir: None,
        }
    }
}

/// Platform data directory for saves.
///
/// - Linux: `~/.local/share/mud/saves`
/// - macOS: `~/Library/Application Support/mud/saves`
/// - Windows: `%APPDATA%\mud\saves`
/// - Fallback: `./save_data`
fn default_save_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", "mud")
        .map(|dirs| dirs.data_dir().join("saves"))
        .unwrap_or_else(|| PathBuf::from("./save_data"))
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = RuntimeConfig::default();
        assert_eq!(config.save_slot, "default");
        assert_eq!(config.seed, None);
        assert!(config.data_dir.is_none());
        assert!(config.save_dir.ends_with("saves") || config.save_dir.ends_with("save_data"));
    }

    #[test]
    fn fixed_seed_is_used() {
        let config = RuntimeConfig {
            seed: Some(7),
            ..RuntimeConfig::default()
        };
        assert_eq!(config.resolve_seed(), 7);
    }
}
