/* src/cli/core/src/logger.rs */

//! Diagnostics go to stderr through tracing; user-facing output stays in `ui`.

use anyhow::{Result, anyhow};
use tracing_subscriber::EnvFilter;

/// Install the global subscriber. `RUST_LOG` wins over the level picked here.
pub fn init(verbose: bool) -> Result<()> {
  let level = if verbose { "debug" } else { "warn" };
  let filter = EnvFilter::try_from_default_env()
    .or_else(|_| EnvFilter::try_new(level))
    .map_err(|e| anyhow!("invalid log level '{level}': {e}"))?;

  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(std::io::stderr)
    .with_target(false)
    .try_init()
    .map_err(|e| anyhow!("failed to set subscriber: {e}"))?;
  Ok(())
}
