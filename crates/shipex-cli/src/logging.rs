//! Logging initialization utilities.

use crate::types::LogLevel;
use anyhow::Result;
use tracing::Level;
use tracing_subscriber::fmt;

/// Initialize logging with the specified level.
///
/// Logs are written to stderr so stdout remains clean for the output path.
pub fn init_logging(level: LogLevel) -> Result<()> {
    let level: Level = level.into();

    let subscriber = fmt::Subscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr);

    subscriber.init();

    Ok(())
}
