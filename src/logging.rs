//! Logger bootstrap for the binary.
//!
//! Library code only talks to the `log` facade; this wires it to stderr.
//! `RUST_LOG` overrides the default level.

use crate::errors::AppError;
use flexi_logger::{Logger, LoggerHandle};

pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Starts logging to stderr. Keep the returned handle alive for the whole run.
pub fn init_logging() -> Result<LoggerHandle, AppError> {
    let handle = Logger::try_with_env_or_str(DEFAULT_LOG_LEVEL)?
        .log_to_stderr()
        .start()?;
    Ok(handle)
}
