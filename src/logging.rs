//! `log` backend for the binaries.

use std::env;

use log::{LevelFilter, Log, Metadata, Record};

/// Writes records to stderr so they never interleave with the boards drawn on stdout.
struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("{} [{}] {}", record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

/// Install the stderr logger.
///
/// `BROADSIDE_LOG` picks the level (`trace` shows every chain update). Unset or
/// unparsable values fall back to `warn`, which keeps an interactive game quiet.
/// Calling this twice leaves the first installation in place.
pub fn init_logging() {
    let level = env::var("BROADSIDE_LOG")
        .ok()
        .and_then(|lvl| lvl.parse::<LevelFilter>().ok())
        .unwrap_or(LevelFilter::Warn);
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}
