use crate::error::CliError;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize logging with environment-based log level filtering.
///
/// Defaults to warn so interactive runs stay quiet; `--verbose` drops the
/// threshold to debug. RUST_LOG overrides both. Log lines go to stderr
/// because stdout belongs to the prompts.
pub fn init_logging(verbose: bool) -> Result<(), CliError> {
    let default_level = if verbose { "debug" } else { "warn" };

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .map_err(|e| CliError::Config(format!("Failed to create log filter: {}", e)))?;

    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| CliError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}
