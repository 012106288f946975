// src/config.rs
//
// Logger settings, with environment overrides.

use crate::control::set_logging_level;
use crate::level::Level;
use crate::logger::Logger;
use crate::registry::Registry;
use crate::setup::setup_logger;

pub const LEVEL_VAR: &str = "RUST_LOG";
pub const PROPAGATE_VAR: &str = "LOG_PROPAGATE";

/// Logger configuration.
///
/// `level` is a plain level name when read from `RUST_LOG` (e.g. "debug",
/// "warning"); values that do not parse leave the default in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    pub name: String,
    pub level: Level,
    pub propagate: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            name: env!("CARGO_PKG_NAME").to_owned(),
            level: Level::Info,
            propagate: false,
        }
    }
}

impl LoggingConfig {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_env(self) -> Self {
        self.with_vars(|key| std::env::var(key).ok())
    }

    /// Applies overrides from `lookup`, keyed by variable name.
    pub fn with_vars<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(level) = lookup(LEVEL_VAR).and_then(|raw| raw.parse().ok()) {
            self.level = level;
        }
        if let Some(raw) = lookup(PROPAGATE_VAR) {
            self.propagate = matches!(
                raw.trim().to_ascii_lowercase().as_str(),
                "1" | "true" | "yes" | "on"
            );
        }
        self
    }

    /// Provisions the configured logger in `registry` and applies its level,
    /// with the root as the upstream logger.
    pub fn apply(&self, registry: &Registry) -> Logger {
        let logger = setup_logger(registry, &self.name);
        set_logging_level(self.level, &logger, self.propagate, &[registry.root()]);
        logger
    }
}
