//! Tracing setup: stderr plus a per-run log file.
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Result;
use directories::ProjectDirs;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Logs to stderr and to `<cache dir>/logs/<run>/client.log`.
///
/// `RUST_LOG` overrides the INFO default.
pub fn setup_logging() -> Result<()> {
    let run_id = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| format!("run_{}", elapsed.as_secs()))
        .unwrap_or_else(|_| "run".to_string());

    let run_log_dir = log_directory().join(&run_id);
    std::fs::create_dir_all(&run_log_dir)?;

    let file_appender = tracing_appender::rolling::never(&run_log_dir, "client.log");
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);
    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .with(file_layer)
        .init();

    // Leak the guard to keep file writer alive
    std::mem::forget(guard);

    tracing::info!(run = %run_id, "Logging initialized");
    tracing::debug!(path = %run_log_dir.join("client.log").display(), "Log file");

    Ok(())
}

fn log_directory() -> PathBuf {
    ProjectDirs::from("", "", "pairstrike")
        .map(|dirs| dirs.cache_dir().join("logs"))
        .unwrap_or_else(|| std::env::temp_dir().join("pairstrike").join("logs"))
}
