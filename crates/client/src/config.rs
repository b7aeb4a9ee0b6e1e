//! Client configuration structures and loaders.
use std::env;
use std::path::PathBuf;

use runtime::RuntimeConfig;

/// Everything the terminal client needs at startup.
#[derive(Clone, Debug)]
pub struct CliConfig {
    pub runtime: RuntimeConfig,
    /// Directory receiving `client.log`.
    pub log_dir: PathBuf,
    /// Subdirectory of `log_dir` for this run. Generated from the clock when unset.
    pub session_id: Option<String>,
}

impl CliConfig {
    /// Construct configuration from process environment variables.
    ///
    /// In addition to the [`RuntimeConfig`] variables:
    /// - `MUD_LOG_DIR` - Log directory (default: platform cache dir)
    /// - `MUD_SESSION_ID` - Log session name (default: `session_{unix time}`)
    pub fn from_env() -> Self {
        let mut config = Self {
            runtime: RuntimeConfig::from_env(),
            ..Self::default()
        };

        if let Some(dir) = read_env::<PathBuf>("MUD_LOG_DIR") {
            config.log_dir = dir;
        }
        config.session_id = read_env::<String>("MUD_SESSION_ID").filter(|id| !id.trim().is_empty());

        config
    }
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            runtime: RuntimeConfig::default(),
            log_dir: default_log_dir(),
            session_id: None,
        }
    }
}

/// Platform cache directory for logs.
///
/// - Linux: `~/.cache/mud/logs`
/// - macOS: `~/Library/Caches/mud/logs`
/// - Windows: `%LOCALAPPDATA%\mud\cache\logs`
/// - Fallback: `./logs`
fn default_log_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", "mud")
        .map(|dirs| dirs.cache_dir().join("logs"))
        .unwrap_or_else(|| PathBuf::from("./logs"))
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
