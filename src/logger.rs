// src/logger.rs
//
// Single responsibility: the named logger handle, its threshold and sinks.

use std::fmt;
use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};
use std::sync::{Arc, PoisonError, RwLock, Weak};

use crate::level::Level;
use crate::record::{Location, Record};
use crate::sink::Sink;

const UNSET: u8 = 0;

/// Handle to a named logger.
///
/// Clones share the same logger; handles are normally obtained from a
/// [`Registry`](crate::registry::Registry) so that one name maps to one
/// logger.
#[derive(Clone)]
pub struct Logger {
    inner: Arc<Inner>,
}

struct Inner {
    name: String,
    level: AtomicU8,
    propagate: AtomicBool,
    sinks: RwLock<Vec<Arc<dyn Sink>>>,
    parent: Option<Logger>,
}

impl Logger {
    pub(crate) fn new(
        name: impl Into<String>,
        level: Option<Level>,
        parent: Option<Logger>,
    ) -> Self {
        Self {
            inner: Arc::new(Inner {
                name: name.into(),
                level: AtomicU8::new(level.map_or(UNSET, Level::value)),
                propagate: AtomicBool::new(true),
                sinks: RwLock::new(Vec::new()),
                parent,
            }),
        }
    }

    pub fn name(&self) -> &str {
        &self.inner.name
    }

    /// Threshold configured on this logger, `None` when it inherits.
    pub fn level(&self) -> Option<Level> {
        Level::from_value(self.inner.level.load(Ordering::Relaxed))
    }

    pub fn set_level(&self, level: Level) {
        self.inner.level.store(level.value(), Ordering::Relaxed);
    }

    /// First configured threshold found walking up from this logger.
    pub fn effective_level(&self) -> Level {
        let mut current = Some(self);
        while let Some(logger) = current {
            if let Some(level) = logger.level() {
                return level;
            }
            current = logger.inner.parent.as_ref();
        }
        Level::Warning
    }

    pub fn is_enabled_for(&self, level: Level) -> bool {
        level >= self.effective_level()
    }

    pub fn propagates(&self) -> bool {
        self.inner.propagate.load(Ordering::Relaxed)
    }

    pub fn set_propagate(&self, propagate: bool) {
        self.inner.propagate.store(propagate, Ordering::Relaxed);
    }

    pub fn parent(&self) -> Option<&Logger> {
        self.inner.parent.as_ref()
    }

    pub fn add_sink<S: Sink + 'static>(&self, sink: S) {
        self.add_shared_sink(Arc::new(sink));
    }

    pub fn add_shared_sink(&self, sink: Arc<dyn Sink>) {
        self.inner
            .sinks
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(sink);
    }

    /// Detaches every sink, returning how many were removed.
    pub fn clear_sinks(&self) -> usize {
        let mut sinks = self
            .inner
            .sinks
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        let removed = sinks.len();
        sinks.clear();
        removed
    }

    pub fn sink_count(&self) -> usize {
        self.inner
            .sinks
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Emits a message if `level` passes the effective threshold.
    pub fn log(&self, level: Level, args: fmt::Arguments<'_>, location: Location<'_>) {
        if !self.is_enabled_for(level) {
            return;
        }
        let message = match args.as_str() {
            Some(text) => std::borrow::Cow::Borrowed(text),
            None => std::borrow::Cow::Owned(args.to_string()),
        };
        let record = Record::new(level, self.name(), &message, location);
        self.dispatch(&record);
    }

    /// Hands a record to this logger's sinks and, while propagating, to the
    /// sinks of every ancestor. Ancestor thresholds are not consulted.
    pub fn dispatch(&self, record: &Record<'_>) {
        let mut current = Some(self);
        while let Some(logger) = current {
            logger.emit_local(record);
            if !logger.propagates() {
                break;
            }
            current = logger.inner.parent.as_ref();
        }
    }

    fn emit_local(&self, record: &Record<'_>) {
        let sinks = self
            .inner
            .sinks
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        for sink in sinks.iter() {
            sink.emit(record);
        }
    }

    pub fn flush(&self) {
        let sinks = self
            .inner
            .sinks
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        for sink in sinks.iter() {
            sink.flush();
        }
    }

    /// Read-only view of this logger's threshold that does not keep the
    /// logger alive.
    pub fn view(&self) -> ThresholdView {
        ThresholdView {
            logger: Arc::downgrade(&self.inner),
        }
    }

    pub fn ptr_eq(&self, other: &Logger) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("name", &self.name())
            .field("level", &self.level())
            .field("propagate", &self.propagates())
            .field("sinks", &self.sink_count())
            .finish()
    }
}

/// Weak, read-only access to a logger's configured threshold.
#[derive(Clone, Debug)]
pub struct ThresholdView {
    logger: Weak<Inner>,
}

impl ThresholdView {
    /// The tracked logger's own threshold; `None` if it is unset or the
    /// logger is gone.
    pub fn level(&self) -> Option<Level> {
        self.logger
            .upgrade()
            .and_then(|inner| Level::from_value(inner.level.load(Ordering::Relaxed)))
    }
}
