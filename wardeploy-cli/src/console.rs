//! Console build log

use colored::*;
use wardeploy_core::domain::log::{LogEntry, LogLevel};
use wardeploy_publisher::LogSink;

/// Prints build log lines to stdout as they are written
pub struct ConsoleLogSink;

impl LogSink for ConsoleLogSink {
    fn write(&self, level: LogLevel, message: &str) {
        print_log_entry(&LogEntry::now(level, message));
    }
}

/// Print a log entry
fn print_log_entry(log: &LogEntry) {
    let level_str = format!("{:?}", log.level).to_uppercase();
    let level_colored = match log.level {
        LogLevel::Debug => level_str.dimmed(),
        LogLevel::Info => level_str.cyan(),
        LogLevel::Warning => level_str.yellow(),
        LogLevel::Error => level_str.red(),
    };

    println!(
        "{} [{}] {}",
        log.timestamp.format("%H:%M:%S").to_string().dimmed(),
        level_colored,
        log.message
    );
}
