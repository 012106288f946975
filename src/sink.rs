// src/sink.rs
//
// Output destinations for formatted records.

use std::io::{self, Write};
use std::sync::{Arc, Mutex, PoisonError};

use crate::formatter::Format;
use crate::record::Record;

/// Receives every record a logger decides to emit.
pub trait Sink: Send + Sync {
    fn emit(&self, record: &Record<'_>);

    fn flush(&self) {}
}

/// Writes one formatted line per record to a byte stream.
pub struct StreamSink<W: Write + Send> {
    writer: Mutex<W>,
    formatter: Box<dyn Format>,
}

impl StreamSink<io::Stderr> {
    /// Console sink on the process error stream.
    pub fn stderr<F: Format + 'static>(formatter: F) -> Self {
        Self::new(io::stderr(), formatter)
    }
}

impl<W: Write + Send> StreamSink<W> {
    pub fn new<F: Format + 'static>(writer: W, formatter: F) -> Self {
        Self {
            writer: Mutex::new(writer),
            formatter: Box::new(formatter),
        }
    }
}

impl<W: Write + Send> Sink for StreamSink<W> {
    fn emit(&self, record: &Record<'_>) {
        let line = self.formatter.format(record);
        let mut writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        // A failed write drops the line; logging never takes the caller down.
        let _ = writeln!(writer, "{line}");
    }

    fn flush(&self) {
        let mut writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        let _ = writer.flush();
    }
}

/// Cloneable in-memory writer. Every clone appends to the same buffer.
#[derive(Clone, Debug, Default)]
pub struct SharedBuffer {
    bytes: Arc<Mutex<Vec<u8>>>,
}

impl SharedBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> String {
        let bytes = self.bytes.lock().unwrap_or_else(PoisonError::into_inner);
        String::from_utf8_lossy(&bytes).into_owned()
    }

    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_owned).collect()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.bytes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::Level;
    use crate::record::Location;

    struct MessageOnly;

    impl Format for MessageOnly {
        fn format(&self, record: &Record<'_>) -> String {
            record.message().to_owned()
        }
    }

    struct Broken;

    impl Write for Broken {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }
    }

    fn record(message: &str) -> Record<'_> {
        Record::new(Level::Info, "app", message, Location::new("app", "main.rs", 1, "main"))
    }

    #[test]
    fn writes_one_line_per_record() {
        let buf = SharedBuffer::new();
        let sink = StreamSink::new(buf.clone(), MessageOnly);

        sink.emit(&record("first"));
        sink.emit(&record("second"));

        assert_eq!(buf.lines(), vec!["first", "second"]);
    }

    #[test]
    fn write_errors_are_swallowed() {
        let sink = StreamSink::new(Broken, MessageOnly);
        sink.emit(&record("lost"));
        sink.flush();
    }
}
