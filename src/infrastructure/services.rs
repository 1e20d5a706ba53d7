use crate::domain::logging::{LogEntry, LogLevel, Logger, TimeProvider};
use std::time::{SystemTime, UNIX_EPOCH};

/// Logger writing structured entries to stderr.
pub struct ConsoleLogger {
    min_level: LogLevel,
}

impl ConsoleLogger {
    pub fn new(min_level: LogLevel) -> Self {
        Self { min_level }
    }

    /// Everything from DEBUG up.
    pub fn new_development() -> Self {
        Self::new(LogLevel::Debug)
    }

    /// INFO and up.
    pub fn new_production() -> Self {
        Self::new(LogLevel::Info)
    }
}

impl Logger for ConsoleLogger {
    fn log(&self, entry: LogEntry) {
        if entry.level < self.min_level {
            return;
        }

        let clock = SystemTimeProvider::new();
        match &entry.metadata {
            Some(metadata) => eprintln!(
                "[{}] {:>5} [{}] {} | {}",
                clock.format_timestamp(entry.timestamp),
                entry.level,
                entry.component,
                entry.message,
                metadata
            ),
            None => eprintln!(
                "[{}] {:>5} [{}] {}",
                clock.format_timestamp(entry.timestamp),
                entry.level,
                entry.component,
                entry.message
            ),
        }
    }
}

/// Wall-clock time provider backed by the system clock.
pub struct SystemTimeProvider;

impl SystemTimeProvider {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SystemTimeProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeProvider for SystemTimeProvider {
    fn current_timestamp(&self) -> u64 {
        SystemTime::now().duration_since(UNIX_EPOCH).map(|d| d.as_secs()).unwrap_or(0)
    }

    fn format_timestamp(&self, timestamp: u64) -> String {
        let secs_of_day = timestamp % 86_400;
        format!(
            "{:02}:{:02}:{:02}",
            secs_of_day / 3_600,
            (secs_of_day % 3_600) / 60,
            secs_of_day % 60
        )
    }
}
