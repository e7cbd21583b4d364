//! Diagnostic logging
//!
//! Records go to stderr through `env_logger` so that stdout carries only
//! the result line. The filter is fixed at `Info`; the environment is
//! never consulted.

use env_logger::{Builder, Target};
use log::LevelFilter;

/// Installs the stderr logger.
///
/// Calling this more than once is harmless: later calls leave the first
/// logger in place.
pub fn init() {
    let _ = Builder::new()
        .filter_level(LevelFilter::Info)
        .format_timestamp(None)
        .target(Target::Stderr)
        .try_init();
}
