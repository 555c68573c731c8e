use env_logger::Builder;
use log::{LevelFilter, SetLoggerError};

/// Installs a stderr logger. `RUST_LOG` overrides the level selected by `--verbose`.
///
/// # Errors
///
/// Returns an error if the logger has already been initialized.
pub fn init(verbose: bool) -> Result<(), SetLoggerError> {
    builder(level(verbose)).parse_default_env().try_init()
}

fn builder(level: LevelFilter) -> Builder {
    let mut builder = Builder::new();
    builder.filter_level(level).format_timestamp_secs();
    builder
}

#[must_use]
pub fn level(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}
