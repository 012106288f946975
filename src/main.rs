// src/main.rs
//
// Walks through the logger lifecycle: setup, a level change by name, and a
// record arriving through the `log` macros.

use level_logger::{logger_info, logger_warning, Level, LogBridge, LoggingConfig, Registry};

fn main() -> anyhow::Result<()> {
    let registry = Registry::global();
    let config = LoggingConfig::named("My project name").with_env();
    let logger = config.apply(registry);
    LogBridge::new(registry.clone())
        .with_default(logger.clone())
        .install()?;

    logger_info!(logger, "Running the main func");

    let level: Level = "warning".parse()?;
    registry.set_level(level, &logger, false);

    logger_info!(logger, "This message is no longer printed");
    logger_warning!(logger, "Logging level has been changed");
    log::warn!("{} loggers registered", registry.names().len());

    log::logger().flush();
    Ok(())
}
