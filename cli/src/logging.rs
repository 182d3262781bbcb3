use tracing_subscriber::{fmt, EnvFilter};

use crate::error::CliError;

/// Install the stderr subscriber. A second call in the same process is a no-op.
pub fn init_logging(filter: &str) -> Result<(), CliError> {
    let env_filter = EnvFilter::try_new(filter).map_err(|e| CliError::LogFilter {
        filter: filter.to_string(),
        reason: e.to_string(),
    })?;
    let _ = fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init();
    Ok(())
}
