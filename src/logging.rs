//! Subscriber setup for the binary.
//!
//! Library code only emits `tracing` events. Without a debug log, events
//! at `warn` and above go to stderr, with `RUST_LOG` able to widen that.
//! With a debug log, everything at `debug` and above goes to the file so
//! the terminal UI stays clean.

use std::fs::File;
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Install the global subscriber.
///
/// # Errors
///
/// Returns an error if the debug log cannot be created.
pub fn init(debug_log: Option<&Path>) -> Result<()> {
    let Some(path) = debug_log else {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env().add_directive(Level::WARN.into()))
            .init();
        return Ok(());
    };

    let file = File::create(path)
        .with_context(|| format!("Failed to create debug log {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(Level::DEBUG.into()))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    tracing::debug!(path = %path.display(), "debug log opened");
    Ok(())
}
