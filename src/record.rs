// src/record.rs
//
// A single log event as seen by sinks and formatters.

use std::path::Path;

use chrono::{DateTime, Local};

use crate::level::Level;

/// Where a record was emitted from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Location<'a> {
    pub module_path: &'a str,
    pub file: &'a str,
    pub line: u32,
    pub function: &'a str,
}

impl<'a> Location<'a> {
    pub const UNKNOWN_FILE: &'static str = "(unknown file)";
    pub const UNKNOWN_FUNCTION: &'static str = "(unknown function)";

    pub fn new(module_path: &'a str, file: &'a str, line: u32, function: &'a str) -> Self {
        Self {
            module_path,
            file,
            line,
            function,
        }
    }

    /// Last segment of the module path (`my_crate::net::tcp` -> `tcp`).
    pub fn module(&self) -> &'a str {
        self.module_path
            .rsplit("::")
            .next()
            .unwrap_or(self.module_path)
    }

    /// Base name of the source file (`src/net/tcp.rs` -> `tcp.rs`).
    pub fn filename(&self) -> &'a str {
        Path::new(self.file)
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or(self.file)
    }
}

/// A log event, borrowed for the duration of one dispatch.
#[derive(Clone, Debug)]
pub struct Record<'a> {
    level: Level,
    logger: &'a str,
    message: &'a str,
    location: Location<'a>,
    created: DateTime<Local>,
}

impl<'a> Record<'a> {
    /// Builds a record stamped with the current local time.
    pub fn new(level: Level, logger: &'a str, message: &'a str, location: Location<'a>) -> Self {
        Self {
            level,
            logger,
            message,
            location,
            created: Local::now(),
        }
    }

    pub fn with_created(mut self, created: DateTime<Local>) -> Self {
        self.created = created;
        self
    }

    pub fn level(&self) -> Level {
        self.level
    }

    /// Name of the logger the record was emitted on.
    pub fn logger(&self) -> &'a str {
        self.logger
    }

    pub fn message(&self) -> &'a str {
        self.message
    }

    pub fn location(&self) -> &Location<'a> {
        &self.location
    }

    pub fn created(&self) -> &DateTime<Local> {
        &self.created
    }
}
