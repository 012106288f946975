// src/setup.rs
//
// Single responsibility: provisioning a logger with its console sink.

use std::io::{self, Write};

use log::SetLoggerError;

use crate::bridge::LogBridge;
use crate::formatter::LevelFormatter;
use crate::level::Level;
use crate::logger::Logger;
use crate::registry::Registry;
use crate::sink::StreamSink;

/// Sets up `name` to write to stderr at `INFO`, without propagation.
///
/// Safe to call repeatedly: previously attached sinks are removed, so the
/// logger always ends up with exactly one.
pub fn setup_logger(registry: &Registry, name: &str) -> Logger {
    setup_logger_with(registry, name, io::stderr())
}

/// [`setup_logger`] writing to `writer` instead of stderr.
pub fn setup_logger_with<W>(registry: &Registry, name: &str, writer: W) -> Logger
where
    W: Write + Send + 'static,
{
    let logger = registry.get(name);
    logger.set_propagate(false);
    logger.set_level(Level::Info);

    let sink = StreamSink::new(writer, LevelFormatter::new(&logger));

    logger.clear_sinks();
    logger.add_sink(sink);

    logger
}

/// Initializes the logger for the entire application and routes the `log`
/// macros to it. Typically called early in `main()`.
pub fn init_logger(name: &str) -> Result<Logger, SetLoggerError> {
    let registry = Registry::global();
    let logger = setup_logger(registry, name);
    LogBridge::new(registry.clone())
        .with_default(logger.clone())
        .install()?;
    Ok(logger)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::SharedBuffer;

    #[test]
    fn repeated_setup_keeps_a_single_sink() {
        let registry = Registry::new();
        let buf = SharedBuffer::new();

        let first = setup_logger_with(&registry, "app", buf.clone());
        let second = setup_logger_with(&registry, "app", buf.clone());
        assert!(first.ptr_eq(&second));
        assert_eq!(second.sink_count(), 1);

        crate::logger_info!(second, "once");
        assert_eq!(buf.lines().len(), 1);
    }

    #[test]
    fn setup_disables_propagation_and_sets_info() {
        let registry = Registry::new();
        let logger = registry.get("app");
        logger.set_level(Level::Error);

        let logger = setup_logger(&registry, "app");
        assert!(!logger.propagates());
        assert_eq!(logger.level(), Some(Level::Info));
    }

    #[test]
    fn provisioning_root_by_name_stays_under_level_control() {
        let registry = Registry::new();
        let root = setup_logger_with(&registry, "root", SharedBuffer::new());
        assert!(root.ptr_eq(&registry.root()));

        let app = registry.get("app");
        root.set_level(Level::Debug);
        registry.set_level(Level::Debug, &app, false);
        assert_eq!(registry.root().level(), Some(Level::Warning));
    }

    #[test]
    fn root_receives_nothing_from_a_provisioned_logger() {
        let registry = Registry::new();
        let root_buf = SharedBuffer::new();
        setup_logger_with(&registry, "", root_buf.clone());

        let app_buf = SharedBuffer::new();
        let app = setup_logger_with(&registry, "app", app_buf.clone());
        crate::logger_warning!(app, "local only");

        assert_eq!(app_buf.lines().len(), 1);
        assert!(root_buf.contents().is_empty());
    }
}
