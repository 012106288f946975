// src/formatter.rs
//
// Line layouts, and the formatter that picks one from a logger's threshold.

use std::fmt::Write;

use crate::level::Level;
use crate::logger::{Logger, ThresholdView};
use crate::record::Record;

const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S,%3f";

/// Turns a record into one output line (without the trailing newline).
pub trait Format: Send + Sync {
    fn format(&self, record: &Record<'_>) -> String;
}

/// The two fixed line layouts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Layout {
    /// `time name [LEVEL] [module] message`
    Default,
    /// `time name (function @ file:line) [LEVEL] message`
    Debug,
}

impl Layout {
    pub fn render(self, record: &Record<'_>) -> String {
        let loc = record.location();
        let mut line = String::with_capacity(64 + record.message().len());
        let _ = write!(
            line,
            "{} {} ",
            record.created().format(TIME_FORMAT),
            record.logger()
        );
        let _ = match self {
            Layout::Default => write!(
                line,
                "[{}] [{}] {}",
                record.level(),
                loc.module(),
                record.message()
            ),
            Layout::Debug => write!(
                line,
                "({} @ {}:{}) [{}] {}",
                loc.function,
                loc.filename(),
                loc.line,
                record.level(),
                record.message()
            ),
        };
        line
    }
}

/// Chooses the layout from the tracked logger's configured threshold at the
/// time of formatting. The record's own severity plays no part.
#[derive(Clone, Debug)]
pub struct LevelFormatter {
    tracked: ThresholdView,
}

impl LevelFormatter {
    pub fn new(logger: &Logger) -> Self {
        Self {
            tracked: logger.view(),
        }
    }

    pub fn layout(&self) -> Layout {
        match self.tracked.level() {
            Some(Level::Debug) => Layout::Debug,
            Some(Level::Info) => Layout::Default,
            _ => Layout::Default,
        }
    }
}

impl Format for LevelFormatter {
    fn format(&self, record: &Record<'_>) -> String {
        self.layout().render(record)
    }
}
