// src/bridge.rs
//
// Routes records from the `log` facade macros to registry loggers.

use log::{LevelFilter, Log, Metadata, SetLoggerError};

use crate::level::Level;
use crate::logger::Logger;
use crate::record::Location;
use crate::registry::Registry;

/// `log::Log` backend backed by a [`Registry`].
///
/// A record with target `a::b::c` goes to the logger registered as
/// `a::b::c`, else `a::b`, else `a`, else to the default logger (or the
/// root when none is set).
pub struct LogBridge {
    registry: Registry,
    default: Option<Logger>,
}

impl LogBridge {
    pub fn new(registry: Registry) -> Self {
        Self {
            registry,
            default: None,
        }
    }

    pub fn with_default(mut self, logger: Logger) -> Self {
        self.default = Some(logger);
        self
    }

    /// Logger that handles records for `target`.
    pub fn route(&self, target: &str) -> Logger {
        let mut prefix = target;
        loop {
            if !prefix.is_empty() {
                if let Some(logger) = self.registry.lookup(prefix) {
                    return logger;
                }
            }
            match prefix.rfind("::") {
                Some(idx) => prefix = &prefix[..idx],
                None => break,
            }
        }
        self.default
            .clone()
            .unwrap_or_else(|| self.registry.root())
    }

    /// Installs the bridge as the global `log` backend.
    ///
    /// The facade's own filter is opened fully; thresholds are enforced by
    /// the loggers.
    pub fn install(self) -> Result<(), SetLoggerError> {
        log::set_boxed_logger(Box::new(self))?;
        log::set_max_level(LevelFilter::Trace);
        Ok(())
    }
}

impl Log for LogBridge {
    fn enabled(&self, metadata: &Metadata) -> bool {
        self.route(metadata.target())
            .is_enabled_for(Level::from(metadata.level()))
    }

    fn log(&self, record: &log::Record) {
        let logger = self.route(record.target());
        let level = Level::from(record.level());
        if !logger.is_enabled_for(level) {
            return;
        }
        let location = Location::new(
            record.module_path().unwrap_or(record.target()),
            record.file().unwrap_or(Location::UNKNOWN_FILE),
            record.line().unwrap_or(0),
            Location::UNKNOWN_FUNCTION,
        );
        logger.log(level, *record.args(), location);
    }

    fn flush(&self) {
        self.registry.flush();
    }
}
