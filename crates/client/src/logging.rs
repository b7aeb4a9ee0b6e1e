//! File-only tracing setup. The terminal belongs to the game, so nothing is
//! logged to stdout or stderr.
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

pub const LOG_FILE: &str = "client.log";

/// Installs the global subscriber writing to `{log_dir}/{session}/client.log`.
///
/// Returns the session directory.
pub fn setup_logging(log_dir: &Path, session_id: Option<&str>) -> Result<PathBuf> {
    let session_id = session_id
        .map(str::to_owned)
        .unwrap_or_else(generate_session_id);

    let session_log_dir = log_dir.join(&session_id);
    std::fs::create_dir_all(&session_log_dir).with_context(|| {
        format!(
            "failed to create log directory {}",
            session_log_dir.display()
        )
    })?;

    let file_appender = tracing_appender::rolling::never(&session_log_dir, LOG_FILE);
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::INFO.into());

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .try_init()
        .context("a global tracing subscriber is already installed")?;

    // The writer thread must outlive main.
    std::mem::forget(guard);

    tracing::info!(session = %session_id, "Logging initialized");
    tracing::info!("Log file: {}", session_log_dir.join(LOG_FILE).display());

    Ok(session_log_dir)
}

fn generate_session_id() -> String {
    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or_default();
    format!("session_{timestamp}")
}
