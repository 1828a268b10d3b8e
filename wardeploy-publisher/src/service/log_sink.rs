//! Build log sinks
//!
//! The dispatcher reports human-readable status lines through a [`LogSink`]
//! so the host decides where the build log goes.

use std::sync::{Arc, Mutex, PoisonError};

use wardeploy_core::domain::log::{LogEntry, LogLevel};

/// Line-oriented destination for build log output
pub trait LogSink: Send + Sync {
    /// Writes one line to the build log
    fn write(&self, level: LogLevel, message: &str);

    fn debug(&self, message: &str) {
        self.write(LogLevel::Debug, message);
    }

    fn info(&self, message: &str) {
        self.write(LogLevel::Info, message);
    }

    fn warn(&self, message: &str) {
        self.write(LogLevel::Warning, message);
    }

    fn error(&self, message: &str) {
        self.write(LogLevel::Error, message);
    }
}

/// In-memory build log
///
/// Clones share the same buffer, so one handle can be given to the
/// dispatcher while another drains it.
#[derive(Clone, Default)]
pub struct BufferedLogSink {
    buffer: Arc<Mutex<Vec<LogEntry>>>,
}

impl BufferedLogSink {
    /// Creates a new, empty buffer
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes and returns every buffered entry
    pub fn drain(&self) -> Vec<LogEntry> {
        let mut buffer = self.buffer.lock().unwrap_or_else(PoisonError::into_inner);
        buffer.drain(..).collect()
    }

    /// Copy of the buffered entries, left in place
    pub fn entries(&self) -> Vec<LogEntry> {
        self.buffer
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Buffered messages only, in order
    pub fn messages(&self) -> Vec<String> {
        self.entries().into_iter().map(|e| e.message).collect()
    }
}

impl LogSink for BufferedLogSink {
    fn write(&self, level: LogLevel, message: &str) {
        let entry = LogEntry::now(level, message);
        self.buffer
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(entry);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_buffer() {
        let sink = BufferedLogSink::new();
        let handle = sink.clone();

        sink.info("first");
        sink.error("second");

        let entries = handle.drain();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].level, LogLevel::Info);
        assert_eq!(entries[1].level, LogLevel::Error);
        assert_eq!(entries[1].message, "second");
        assert!(sink.entries().is_empty());
    }

    #[test]
    fn test_messages_keeps_entries() {
        let sink = BufferedLogSink::new();
        sink.warn("careful");
        assert_eq!(sink.messages(), vec!["careful".to_string()]);
        assert_eq!(sink.entries().len(), 1);
    }
}
