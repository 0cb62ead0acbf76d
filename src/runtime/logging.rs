use std::fs::OpenOptions;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::LogSettings;

/// Install a file-backed subscriber when `settings.file` is set.
///
/// Returns `Ok(false)` when logging is off. The terminal belongs to the
/// dashboard, so nothing is ever logged to stdout or stderr.
pub fn init_logging(settings: &LogSettings) -> Result<bool, Box<dyn std::error::Error>> {
    let Some(path) = settings.file.as_ref() else {
        return Ok(false);
    };

    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let directives = std::env::var("RUST_LOG").unwrap_or_else(|_| settings.filter.clone());
    let filter = EnvFilter::try_new(&directives)?;

    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_env_filter(filter)
        .with_ansi(false)
        .try_init()
        .map_err(|e| -> Box<dyn std::error::Error> { e })?;
    Ok(true)
}
