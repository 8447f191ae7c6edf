use flexi_logger::{Logger, LoggerHandle};

use super::error::Result;

/// Start the diagnostic log on stderr. The returned handle must be kept
/// alive for as long as logging is wanted.
pub fn init_logging(level: &str) -> Result<LoggerHandle> {
    let spec = if level.trim().is_empty() { "info" } else { level };
    let handle = Logger::try_with_str(spec)?
        .log_to_stderr()
        .format(flexi_logger::detailed_format)
        .start()?;
    Ok(handle)
}
