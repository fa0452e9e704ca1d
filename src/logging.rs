//! Optional file logging via `tracing`.
//!
//! Log output never goes to the terminal: anything written there outside
//! the console would desynchronize the screen cache.

use std::fs::OpenOptions;
use std::io;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "screenkit=debug";

/// Build the active filter: `RUST_LOG` if set and valid, else `fallback`.
pub fn build_filter(rust_log: Option<&str>, fallback: &str) -> EnvFilter {
    rust_log
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(fallback))
}

/// Install a global subscriber that appends plain-text events to `path`.
///
/// `default_filter` applies when `RUST_LOG` is unset or invalid.
pub fn init_file_logging(path: &Path, default_filter: &str) -> io::Result<()> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let rust_log = std::env::var("RUST_LOG").ok();
    tracing_subscriber::fmt()
        .with_env_filter(build_filter(rust_log.as_deref(), default_filter))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(|e| io::Error::other(format!("failed to install log subscriber: {e}")))
}
