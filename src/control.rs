// src/control.rs
//
// Changing thresholds on a logger and the loggers of its dependencies.

use crate::level::Level;
use crate::logger::Logger;
use crate::registry::Registry;

/// Floor applied to upstream loggers when a level change is not propagated.
pub const UPSTREAM_FLOOR: Level = Level::Warning;

/// Sets `logger` to `level`.
///
/// With `propagate`, every logger in `upstream` follows it; otherwise they
/// are pinned at [`UPSTREAM_FLOOR`] so dependency chatter stays quiet while
/// the primary logger gets more verbose.
pub fn set_logging_level(level: Level, logger: &Logger, propagate: bool, upstream: &[Logger]) {
    logger.set_level(level);
    let upstream_level = if propagate { level } else { UPSTREAM_FLOOR };
    for other in upstream {
        other.set_level(upstream_level);
    }
}

impl Registry {
    /// [`set_logging_level`] with the root logger as the upstream set.
    pub fn set_level(&self, level: Level, logger: &Logger, propagate: bool) {
        set_logging_level(level, logger, propagate, &[self.root()]);
    }
}

/// A logger bound to its upstream set, for callers that change its level
/// from several places.
#[derive(Clone, Debug)]
pub struct LevelController {
    logger: Logger,
    upstream: Vec<Logger>,
}

impl LevelController {
    /// Controller for `logger` with the registry root as upstream.
    pub fn new(registry: &Registry, logger: Logger) -> Self {
        Self {
            logger,
            upstream: vec![registry.root()],
        }
    }

    pub fn with_upstream(mut self, upstream: Vec<Logger>) -> Self {
        self.upstream = upstream;
        self
    }

    pub fn logger(&self) -> &Logger {
        &self.logger
    }

    pub fn set_level(&self, level: Level, propagate: bool) {
        set_logging_level(level, &self.logger, propagate, &self.upstream);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unpropagated_change_pins_upstream_at_warning() {
        let registry = Registry::new();
        let app = registry.get("app");
        let quiet = registry.get("quiet");
        let loud = registry.get("loud");
        quiet.set_level(Level::Critical);
        loud.set_level(Level::Debug);

        set_logging_level(Level::Debug, &app, false, &[quiet.clone(), loud.clone()]);

        assert_eq!(app.level(), Some(Level::Debug));
        assert_eq!(quiet.level(), Some(Level::Warning));
        assert_eq!(loud.level(), Some(Level::Warning));
    }

    #[test]
    fn warning_without_propagation_overrides_any_upstream_threshold() {
        let registry = Registry::new();
        let app = registry.get("app");
        let chatty = registry.get("chatty");
        let silent = registry.get("silent");
        chatty.set_level(Level::Debug);
        silent.set_level(Level::Critical);

        set_logging_level(Level::Warning, &app, false, &[chatty.clone(), silent.clone()]);

        assert_eq!(app.level(), Some(Level::Warning));
        assert_eq!(chatty.level(), Some(Level::Warning));
        assert_eq!(silent.level(), Some(Level::Warning));
    }

    #[test]
    fn propagated_change_applies_to_upstream() {
        let registry = Registry::new();
        let app = registry.get("app");
        let dep = registry.get("dep");

        set_logging_level(Level::Debug, &app, true, &[dep.clone()]);
        assert_eq!(dep.level(), Some(Level::Debug));
    }

    #[test]
    fn registry_default_upstream_is_root() {
        let registry = Registry::new();
        let app = registry.get("app");

        registry.set_level(Level::Error, &app, true);
        assert_eq!(registry.root().level(), Some(Level::Error));

        registry.set_level(Level::Debug, &app, false);
        assert_eq!(app.level(), Some(Level::Debug));
        assert_eq!(registry.root().level(), Some(Level::Warning));
    }

    #[test]
    fn controller_reuses_its_upstream_set() {
        let registry = Registry::new();
        let dep = registry.get("dep");
        let controller =
            LevelController::new(&registry, registry.get("app")).with_upstream(vec![dep.clone()]);

        controller.set_level(Level::Info, true);
        assert_eq!(dep.level(), Some(Level::Info));
        assert_eq!(controller.logger().level(), Some(Level::Info));

        controller.set_level(Level::Debug, false);
        assert_eq!(dep.level(), Some(Level::Warning));
        assert_eq!(registry.root().level(), Some(Level::Warning));
    }
}
