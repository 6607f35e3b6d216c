//! Logging setup
//!
//! The TUI owns the terminal, so it logs to a file; line-based commands log to
//! stderr.

use std::fs::File;
use std::path::Path;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Where log lines go
#[derive(Debug, Clone, Copy)]
pub enum LogTarget<'a> {
    Stderr,
    File(&'a Path),
}

/// Install the global subscriber
///
/// `RUST_LOG` takes precedence over `default_filter`. Returns `false` when a
/// global subscriber was already installed; that subscriber stays in place.
///
/// # Errors
/// Returns an I/O error if the log file cannot be created.
pub fn init(default_filter: &str, target: LogTarget<'_>) -> std::io::Result<bool> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    let installed = match target {
        LogTarget::Stderr => builder.with_writer(std::io::stderr).try_init(),
        LogTarget::File(path) => {
            let file = File::create(path)?;
            builder
                .with_writer(Arc::new(file))
                .with_ansi(false)
                .try_init()
        }
    };

    if let Err(err) = &installed {
        tracing::warn!(error = %err, "keeping the existing log subscriber");
    }
    Ok(installed.is_ok())
}
