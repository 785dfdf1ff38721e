//! Stderr logging bootstrap
//!
//! Output on stdout is the product (tables, JSON, HTML), so diagnostics always
//! go to stderr. Initialization happens once per process and never panics.

use flexi_logger::{Logger, LoggerHandle};
use std::sync::OnceLock;

static LOGGER: OnceLock<LoggerHandle> = OnceLock::new();

pub(crate) fn level_for(debug: bool) -> &'static str {
    if debug { "debug" } else { "warn" }
}

/// Start the stderr logger. A second call is a no-op; a backend failure is
/// reported once and the program continues without logging.
pub(crate) fn init_logging(debug: bool) {
    if LOGGER.get().is_some() {
        return;
    }
    let started =
        Logger::try_with_str(level_for(debug)).and_then(|logger| logger.log_to_stderr().start());
    match started {
        Ok(handle) => {
            let _ = LOGGER.set(handle);
        }
        Err(e) => eprintln!("Warning: logging disabled: {e}"),
    }
}

/// Raise or lower the level after startup, e.g. once the config file is read
pub(crate) fn set_debug(debug: bool) {
    if let Some(handle) = LOGGER.get()
        && let Err(e) = handle.parse_new_spec(level_for(debug))
    {
        eprintln!("Warning: could not change log level: {e}");
    }
}
