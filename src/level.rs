// src/level.rs
//
// Severity levels and their textual names.

use std::fmt;
use std::str::FromStr;

/// Severity of a record and threshold of a logger.
///
/// Ordered from least to most severe. The numeric values are stable and are
/// what [`Level::value`] / [`Level::from_value`] exchange.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Level {
    Debug = 10,
    Info = 20,
    Warning = 30,
    Error = 40,
    Critical = 50,
}

impl Level {
    pub const ALL: [Level; 5] = [
        Level::Debug,
        Level::Info,
        Level::Warning,
        Level::Error,
        Level::Critical,
    ];

    /// Canonical upper-case name, as printed in log lines.
    pub fn as_str(self) -> &'static str {
        match self {
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Warning => "WARNING",
            Level::Error => "ERROR",
            Level::Critical => "CRITICAL",
        }
    }

    pub fn value(self) -> u8 {
        self as u8
    }

    pub fn from_value(value: u8) -> Option<Level> {
        Level::ALL.into_iter().find(|level| level.value() == value)
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Returned when a level name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLevelError {
    input: String,
}

impl fmt::Display for ParseLevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown logging level `{}`", self.input)
    }
}

impl std::error::Error for ParseLevelError {}

impl FromStr for Level {
    type Err = ParseLevelError;

    /// Case-insensitive; also accepts `WARN` and `FATAL`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "DEBUG" => Ok(Level::Debug),
            "INFO" => Ok(Level::Info),
            "WARNING" | "WARN" => Ok(Level::Warning),
            "ERROR" => Ok(Level::Error),
            "CRITICAL" | "FATAL" => Ok(Level::Critical),
            _ => Err(ParseLevelError {
                input: s.to_owned(),
            }),
        }
    }
}

impl From<log::Level> for Level {
    fn from(level: log::Level) -> Self {
        match level {
            log::Level::Error => Level::Error,
            log::Level::Warn => Level::Warning,
            log::Level::Info => Level::Info,
            log::Level::Debug | log::Level::Trace => Level::Debug,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_names_case_insensitively() {
        assert_eq!("warning".parse::<Level>(), Ok(Level::Warning));
        assert_eq!("Info".parse::<Level>(), Ok(Level::Info));
        assert_eq!(" DEBUG ".parse::<Level>(), Ok(Level::Debug));
        assert_eq!("warn".parse::<Level>(), Ok(Level::Warning));
        assert_eq!("fatal".parse::<Level>(), Ok(Level::Critical));
    }

    #[test]
    fn rejects_unknown_names() {
        let err = "verbose".parse::<Level>().unwrap_err();
        assert_eq!(err.to_string(), "unknown logging level `verbose`");
    }

    #[test]
    fn ordering_follows_severity() {
        assert!(Level::Debug < Level::Info);
        assert!(Level::Info < Level::Warning);
        assert!(Level::Warning < Level::Error);
        assert!(Level::Error < Level::Critical);
    }

    #[test]
    fn numeric_values_round_trip_only_for_known_levels() {
        assert_eq!(Level::from_value(30), Some(Level::Warning));
        assert_eq!(Level::from_value(0), None);
        assert_eq!(Level::from_value(25), None);
    }

    #[test]
    fn trace_folds_into_debug() {
        assert_eq!(Level::from(log::Level::Trace), Level::Debug);
        assert_eq!(Level::from(log::Level::Warn), Level::Warning);
    }
}
