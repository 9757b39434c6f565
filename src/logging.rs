#![cfg(feature = "std")]

//! Stderr logger for the shell and simulator binaries.

use std::env;
use log::{LevelFilter, Metadata, Record};

const CRATE_TARGET: &str = "salvo";

/// Keeps only records emitted by this crate; dependencies stay quiet.
struct EngineLogger;

impl log::Log for EngineLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level() && metadata.target().starts_with(CRATE_TARGET)
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let module = record
                .target()
                .strip_prefix(CRATE_TARGET)
                .and_then(|rest| rest.strip_prefix("::"))
                .unwrap_or("main");
            eprintln!("{:<5} {}: {}", record.level(), module, record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: EngineLogger = EngineLogger;

/// Parse a `SALVO_LOG` value: either a bare level (`debug`) or
/// `salvo=<level>`. Returns `None` for anything else.
pub fn parse_log_level(value: &str) -> Option<LevelFilter> {
    let value = value.trim();
    let level = match value.split_once('=') {
        Some((target, level)) if target.trim() == CRATE_TARGET => level,
        Some(_) => return None,
        None => value,
    };
    level.trim().parse().ok()
}

/// Initialize logging with a level taken from the `SALVO_LOG` environment variable.
/// Defaults to `info` if the variable is not set or invalid.
pub fn init_logging() {
    let level = env::var("SALVO_LOG")
        .ok()
        .and_then(|value| parse_log_level(&value))
        .unwrap_or(LevelFilter::Info);
    let _ = log::set_logger(&LOGGER).map(|()| log::set_max_level(level));
}
