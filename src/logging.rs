use anyhow::{Context, Result};
use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Env var holding the log filter, e.g. `BUDGETY_LOG=debug`.
pub(crate) const LOG_ENV: &str = "BUDGETY_LOG";
const LOG_FILE: &str = "budgety.log";

/// Log to a file in the data directory when `BUDGETY_LOG` is set.
/// Stays silent otherwise so nothing draws over the terminal UI.
pub(crate) fn init() -> Result<()> {
    let Ok(directives) = std::env::var(LOG_ENV) else {
        return Ok(());
    };
    let filter = EnvFilter::try_new(&directives)
        .with_context(|| format!("Invalid {LOG_ENV} filter: {directives}"))?;
    let file = open_log_file(&data_dir()?)?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialise logging: {e}"))?;
    Ok(())
}

pub(crate) fn open_log_file(dir: &Path) -> Result<File> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create data directory: {}", dir.display()))?;
    let path = dir.join(LOG_FILE);
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file: {}", path.display()))
}

fn data_dir() -> Result<PathBuf> {
    let proj_dirs = directories::ProjectDirs::from("com", "budgety", "Budgety")
        .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))?;
    Ok(proj_dirs.data_dir().to_path_buf())
}
