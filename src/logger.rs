use flexi_logger::{Logger, LoggerHandle};

use crate::Result;

const DEFAULT_FILTER: &str = "info";

/// Starts logging to stderr, filtered by `RUST_LOG` (default `info`).
/// Keep the returned handle alive for as long as logs should be written.
pub fn initialize_logger() -> Result<LoggerHandle> {
    let handle = Logger::try_with_env_or_str(DEFAULT_FILTER)?
        .log_to_stderr()
        .start()?;
    Ok(handle)
}
