use std::{env, fs::OpenOptions};

use anyhow::{Context, Result};
use env_logger::{Builder, Env, Target};

pub const LOG_FILE_VAR: &str = "HABITS_LOG_FILE";
const DEFAULT_LOG_FILE: &str = "habits-tui.log";

/// Sends `log` records to a file, the terminal belongs to the UI.
///
/// The filter comes from `RUST_LOG` and defaults to `info`.
///
/// # Errors
/// Returns an error if the log file cannot be opened.
pub fn init() -> Result<()> {
    let path = env::var(LOG_FILE_VAR).unwrap_or_else(|_| DEFAULT_LOG_FILE.to_string());

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("cannot open log file '{path}'"))?;

    Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Pipe(Box::new(file)))
        .try_init()
        .context("logger already initialized")?;

    Ok(())
}
