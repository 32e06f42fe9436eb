//! Console logger for the `log` facade.
//!
//! Info and below go to stdout, warnings and errors to stderr, each line
//! prefixed with a local timestamp.

use log::{LevelFilter, Log, Metadata, Record};

struct SimpleLogger;

impl Log for SimpleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let timestamp = chrono::Local::now().format("%H:%M:%S%.3f");
        if record.level() <= log::Level::Warn {
            eprintln!("{} {:<5} - {}", timestamp, record.level(), record.args());
        } else {
            println!("{} {:<5} - {}", timestamp, record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: SimpleLogger = SimpleLogger;

/// Installs the logger at `Info`. Safe to call more than once.
pub fn init_logging() {
    let _ = log::set_logger(&LOGGER).map(|()| log::set_max_level(LevelFilter::Info));
}

/// Changes the active level, e.g. after the config has been read
pub fn set_level(level: LevelFilter) {
    log::set_max_level(level);
}
