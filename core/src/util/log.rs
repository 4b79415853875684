use std::str::FromStr;

use chrono::Local;
use lazy_static::lazy_static;
use log::{LevelFilter, Log, Metadata, Record, SetLoggerError};
use parking_lot::RwLock;

use crate::GenErr;

lazy_static! {
    static ref LOG_LEVEL: RwLock<LevelFilter> = RwLock::new(LevelFilter::Info);
}

struct DynamicLogger;

static LOGGER: DynamicLogger = DynamicLogger;

impl Log for DynamicLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= *LOG_LEVEL.read()
    }

    // stdout is reserved for the generated string
    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = Local::now();
            eprintln!(
                "[{}] [{}] - {}",
                now.format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                record.args()
            );
        }
    }

    fn flush(&self) {}
}

pub fn init_logger() -> Result<(), SetLoggerError> {
    log::set_logger(&LOGGER)?;
    log::set_max_level(LevelFilter::Trace);
    Ok(())
}

pub fn set_log_level(level: LevelFilter) {
    *LOG_LEVEL.write() = level;
}

pub fn log_level() -> LevelFilter {
    *LOG_LEVEL.read()
}

pub fn parse_log_level(level: &str) -> Result<LevelFilter, GenErr> {
    LevelFilter::from_str(level.trim())
        .map_err(|_| GenErr::InvalidArgument(format!("unknown log level '{}'", level)))
}
