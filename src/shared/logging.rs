//! File logging for a consolidation run.
//!
//! The core never logs through global state directly; it reports through the
//! injected `ProgressReporter`, whose console adapter mirrors each line as a
//! `tracing` event. This module installs the subscriber that persists those
//! events to a log file.

use crate::shared::Result;
use anyhow::Context;
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

/// Default log file, created in the working directory
pub const DEFAULT_LOG_FILE: &str = "collection-sbom.log";

/// Installs a global `tracing` subscriber appending to `path`
///
/// # Errors
/// Returns an error if the log file cannot be opened or a global subscriber
/// is already installed.
pub fn init_file_logging(path: &Path) -> Result<()> {
    crate::shared::security::validate_not_symlink(path, "log")?;

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file: {}", path.display()))?;

    let subscriber = tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .with_max_level(tracing::Level::INFO)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to install log subscriber")?;

    Ok(())
}

/// Escapes carriage returns and line feeds so one message stays one log line
pub fn escape_crlf(message: &str) -> String {
    message.replace('\r', "\\r").replace('\n', "\\n")
}
