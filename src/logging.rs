//! Stderr logging for the console game, configured from the environment.

use std::env;
use std::io::{self, Write};

use log::{Level, LevelFilter, Log, Metadata, Record};
use once_cell::sync::OnceCell;

/// Environment variable holding the log level (`off`, `error` ... `trace`).
pub const LOG_ENV: &str = "BATTLESHIPS_LOG";

/// Writes this crate's records to stderr so they never mix with the board.
struct StderrLogger {
    level: LevelFilter,
}

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level && metadata.target().starts_with("battleships")
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let mut err = io::stderr().lock();
        let _ = match record.level() {
            Level::Error | Level::Warn => writeln!(err, "[{:<5}] {}", record.level(), record.args()),
            _ => writeln!(
                err,
                "[{:<5}] {}: {}",
                record.level(),
                record.target(),
                record.args()
            ),
        };
    }

    fn flush(&self) {
        let _ = io::stderr().flush();
    }
}

static LOGGER: OnceCell<StderrLogger> = OnceCell::new();

/// Level named by [`LOG_ENV`], `info` when unset or unparsable.
pub fn level_from_env() -> LevelFilter {
    env::var(LOG_ENV)
        .ok()
        .and_then(|lvl| lvl.trim().parse().ok())
        .unwrap_or(LevelFilter::Info)
}

/// Install the stderr logger at the level taken from [`LOG_ENV`].
pub fn init_logging() -> LevelFilter {
    init_logging_at(level_from_env())
}

/// Install the stderr logger at `level`. Only the first call installs a
/// logger; every call returns the level actually in effect.
pub fn init_logging_at(level: LevelFilter) -> LevelFilter {
    let logger = LOGGER.get_or_init(|| StderrLogger { level });
    if log::set_logger(logger).is_ok() {
        log::set_max_level(logger.level);
    }
    logger.level
}
