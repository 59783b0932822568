//! `comisiones_log`: `env_logger` setup for the `log` facade.
//!
//! Filters come from `COMISIONES_LOG` using `env_logger` directive syntax
//! (`debug`, `comisiones_io_xlsx=trace`, ...), defaulting to `warn`.

use env_logger::Builder;
use log::{LevelFilter, SetLoggerError};

/// Environment variable holding the filter directives.
pub const C_ENV_LOG_LEVEL: &str = "COMISIONES_LOG";

/// Level used when the variable is unset.
pub const LEVEL_DEFAULT: LevelFilter = LevelFilter::Warn;

/// Stderr logger builder at [`LEVEL_DEFAULT`], overridden by `filters` when given.
pub fn derive_logger_builder(filters: Option<&str>) -> Builder {
    let mut builder = Builder::new();
    builder
        .filter_level(LEVEL_DEFAULT)
        .format_timestamp(None)
        .format_target(true);
    if let Some(filters) = filters {
        builder.parse_filters(filters);
    }
    builder
}

/// Install the global logger configured from `COMISIONES_LOG`.
pub fn init() -> Result<(), SetLoggerError> {
    let filters = std::env::var(C_ENV_LOG_LEVEL).ok();
    derive_logger_builder(filters.as_deref()).try_init()
}
