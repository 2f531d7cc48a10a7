// src/logging.rs
// =============================================================================
// Sets up env_logger for debug output on stderr.
//
// User-facing messages (diagnostics, "saved in ..." lines) are printed with
// println! and are not affected by any of this.
// =============================================================================

use std::env;

use env_logger::{Builder, Target};
use log::LevelFilter;

/// Maps the number of -v flags to a level for this crate's log records
pub fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Off,
        1 => LevelFilter::Warn,
        2 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    }
}

/// Installs the global logger. An existing RUST_LOG always wins over `verbosity`.
pub fn initialize(verbosity: u8) {
    let mut builder = Builder::new();

    match env::var("RUST_LOG") {
        Ok(filters) => {
            builder.parse_filters(&filters);
        }
        Err(_) => {
            builder.filter_module(env!("CARGO_CRATE_NAME"), level_for(verbosity));
        }
    }

    builder.format_timestamp_millis().target(Target::Stderr);

    // Only fails if a logger is already installed
    if builder.try_init().is_err() {
        log::debug!("logger already initialized");
    }
}
