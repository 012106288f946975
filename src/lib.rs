//! Named loggers with a level-aware console layout.
//!
//! [`setup_logger`] provisions a logger writing to stderr, and
//! [`set_logging_level`] changes its threshold while either cascading the
//! change to upstream loggers or holding them at `WARNING`. Lines are
//! rendered in a concise layout unless the logger itself is set to `DEBUG`,
//! in which case the calling function and `file:line` are included.

pub mod bridge;
pub mod config;
pub mod control;
pub mod formatter;
pub mod level;
pub mod logger;
mod macros;
pub mod record;
pub mod registry;
pub mod setup;
pub mod sink;

pub use bridge::LogBridge;
pub use config::LoggingConfig;
pub use control::{set_logging_level, LevelController};
pub use formatter::{Format, LevelFormatter, Layout};
pub use level::{Level, ParseLevelError};
pub use logger::{Logger, ThresholdView};
pub use record::{Location, Record};
pub use registry::Registry;
pub use setup::{init_logger, setup_logger, setup_logger_with};
pub use sink::{SharedBuffer, Sink, StreamSink};
