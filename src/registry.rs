// src/registry.rs
//
// Named loggers, one per name, hanging off a shared root.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, OnceLock, PoisonError};

use crate::level::Level;
use crate::logger::Logger;

pub const ROOT_NAME: &str = "root";

/// Registry of named loggers.
///
/// Cloning a `Registry` yields another handle to the same set of loggers.
/// Tests create their own with [`Registry::new`]; binaries usually go
/// through [`Registry::global`].
#[derive(Clone, Debug)]
pub struct Registry {
    shared: Arc<Shared>,
}

#[derive(Debug)]
struct Shared {
    root: Logger,
    loggers: Mutex<HashMap<String, Logger>>,
}

impl Registry {
    /// Empty registry whose root logger sits at `WARNING` with no sinks.
    pub fn new() -> Self {
        Self {
            shared: Arc::new(Shared {
                root: Logger::new(ROOT_NAME, Some(Level::Warning), None),
                loggers: Mutex::new(HashMap::new()),
            }),
        }
    }

    /// The process-wide registry.
    pub fn global() -> &'static Registry {
        static GLOBAL: OnceLock<Registry> = OnceLock::new();
        GLOBAL.get_or_init(Registry::new)
    }

    pub fn root(&self) -> Logger {
        self.shared.root.clone()
    }

    /// Returns the logger registered under `name`, creating it on first use.
    ///
    /// New loggers inherit their threshold from the root and propagate to
    /// it. An empty name or `root` returns the root.
    pub fn get(&self, name: &str) -> Logger {
        if is_root_name(name) {
            return self.root();
        }
        let mut loggers = self
            .shared
            .loggers
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        loggers
            .entry(name.to_owned())
            .or_insert_with(|| Logger::new(name, None, Some(self.shared.root.clone())))
            .clone()
    }

    /// Like [`get`](Self::get) but never creates.
    pub fn lookup(&self, name: &str) -> Option<Logger> {
        if is_root_name(name) {
            return Some(self.root());
        }
        self.shared
            .loggers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(name)
            .cloned()
    }

    /// Names of every registered logger except the root, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .shared
            .loggers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .keys()
            .cloned()
            .collect();
        names.sort();
        names
    }

    pub fn flush(&self) {
        let loggers: Vec<Logger> = self
            .shared
            .loggers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .values()
            .cloned()
            .collect();
        for logger in loggers {
            logger.flush();
        }
        self.shared.root.flush();
    }
}

fn is_root_name(name: &str) -> bool {
    name.is_empty() || name == ROOT_NAME
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}
