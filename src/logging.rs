#![cfg(feature = "std")]

use std::env;
use log::{self, LevelFilter, Log, Metadata, Record};

/// Environment variable holding the log level, e.g. `SALVO_LOG=debug`.
pub const LOG_ENV: &str = "SALVO_LOG";

/// Writes `LEVEL [module] message` lines to stderr, keeping stdout free for
/// the game and the simulator's JSON.
struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let target = record.target();
        let module = target.strip_prefix("salvo::").unwrap_or(target);
        eprintln!("{:<5} [{}] {}", record.level(), module, record.args());
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

fn level_from(value: Option<&str>) -> LevelFilter {
    value
        .and_then(|lvl| lvl.trim().parse().ok())
        .unwrap_or(LevelFilter::Info)
}

/// Install the stderr logger at the level named by [`LOG_ENV`], `info` when
/// unset or unparseable. Calling it twice keeps the first logger.
pub fn init_logging() {
    let level = level_from(env::var(LOG_ENV).ok().as_deref());
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}
