use color_eyre::Result;
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::{fmt, EnvFilter};

fn env_filter(debug: bool) -> EnvFilter {
    let default = if debug { "debug" } else { "info" };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// Route tracing output to a file; the terminal belongs to the UI.
pub fn init_file_tracing(path: &Path, debug: bool) -> Result<()> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    fmt()
        .with_env_filter(env_filter(debug))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .with_thread_ids(false)
        .try_init()
        .map_err(|e| color_eyre::eyre::eyre!("Failed to initialize logging: {e}"))
}

/// Headless runs keep stdout for results and log to stderr.
pub fn init_stderr_tracing(debug: bool) -> Result<()> {
    fmt()
        .with_env_filter(env_filter(debug))
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_ids(false)
        .try_init()
        .map_err(|e| color_eyre::eyre::eyre!("Failed to initialize logging: {e}"))
}
