//! Logging setup
//!
//! Installs a `tracing-subscriber` fmt subscriber on stderr. `RUST_LOG`
//! wins over the verbosity flags when set.

use crate::config::{CliConfig, Verbosity};
use crate::error::{CliError, CliResult};
use tracing_subscriber::EnvFilter;

/// Builds the filter for a verbosity level
#[must_use]
pub fn env_filter(verbosity: Verbosity) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(verbosity.log_directive()))
}

/// Initialize the global subscriber
pub fn init_logging(config: &CliConfig) -> CliResult<()> {
    let verbosity = config.verbosity;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(verbosity))
        .with_writer(std::io::stderr)
        .with_ansi(config.color.should_color())
        .with_target(false)
        .try_init()
        .map_err(|e| CliError::Logging {
            message: e.to_string(),
        })?;

    tracing::debug!(?verbosity, "logging initialized");
    Ok(())
}
