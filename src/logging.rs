//! Structured logging bootstrap using `tracing`.
//!
//! Two sinks: a human-oriented stderr layer, and an append-only plain-text
//! layer writing `app.log` under the configured log directory. The file is
//! opened in append mode before the subscriber is installed so every exit
//! path, including early failures, reaches it.

use std::{
    fs::{self, OpenOptions},
    path::Path,
    sync::Mutex,
};

use anyhow::{Context, Result};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Install a global tracing subscriber with sensible defaults.
///
/// `verbosity` raises the stderr filter (0 = info, 1 = debug, 2+ = trace);
/// `RUST_LOG` overrides it. The file layer always records info and above.
pub fn init_tracing(log_path: &Path, verbosity: u8) -> Result<()> {
    if tracing::dispatcher::has_been_set() {
        return Ok(());
    }

    if let Some(dir) = log_path.parent() {
        fs::create_dir_all(dir)
            .with_context(|| format!("creating log directory {}", dir.display()))?;
    }
    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path)
        .with_context(|| format!("opening log file {}", log_path.display()))?;

    let stderr_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(match verbosity {
            0 => "briefly=info",
            1 => "briefly=debug",
            _ => "briefly=trace",
        })
    });

    let timer = fmt::time::UtcTime::rfc_3339();

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_timer(timer.clone())
        .with_target(false)
        .with_filter(stderr_filter);

    let file_layer = fmt::layer()
        .with_writer(Mutex::new(log_file))
        .with_timer(timer)
        .with_ansi(false)
        .with_target(true)
        .with_filter(EnvFilter::new("briefly=info"));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(file_layer)
        .init();

    tracing::debug!(path = %log_path.display(), "tracing initialised");
    Ok(())
}
