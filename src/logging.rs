use std::fs::{self, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use thiserror::Error;
use tracing_subscriber::fmt::time::UtcTime;
use tracing_subscriber::util::TryInitError;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("Failed to open log file {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to install log subscriber: {0}")]
    Init(#[from] TryInitError),
}

/// `<config dir>/folio.log`.
pub fn default_log_path() -> PathBuf {
    Config::config_dir().join("folio.log")
}

/// Initialize tracing with output appended to `path`.
///
/// The terminal belongs to the UI, so nothing is written to stdout or
/// stderr. `RUST_LOG` overrides the default `info` filter.
pub fn init_tracing(path: &Path) -> Result<(), LoggingError> {
    let open_error = |source| LoggingError::Open {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(open_error)?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(open_error)?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let file_layer = fmt::layer()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .with_level(true)
        .with_timer(UtcTime::rfc_3339());

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .try_init()?;
    Ok(())
}
