use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::error::{AppError, AppResult};

/// Route `tracing` output to a file. The terminal belongs to the UI, so without a path
/// nothing is logged.
///
/// `RUST_LOG` wins over `default_filter` when set.
pub fn init_logging(path: Option<&Path>, default_filter: &str) -> AppResult<bool> {
    let Some(path) = path else {
        return Ok(false);
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| {
            AppError::io_with_context(source, format!("failed to open log file: {}", path.display()))
        })?;
    let filter = resolve_filter(default_filter)?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(|err| AppError::invalid_argument(format!("logger already installed: {err}")))?;
    Ok(true)
}

fn resolve_filter(default_filter: &str) -> AppResult<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    EnvFilter::try_new(default_filter).map_err(|err| {
        AppError::invalid_argument(format!("invalid log filter {default_filter:?}: {err}"))
    })
}
