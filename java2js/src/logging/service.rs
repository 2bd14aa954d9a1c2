//! Logger backends and the level-filtering service in front of them

use super::events::{LogEvent, LogLevel};
use crate::config::compile_time::logging::LOG_BUFFER_SIZE;
use crate::config::runtime::LoggingPreferences;
use std::sync::{Arc, Mutex, MutexGuard};

pub trait Logger: Send + Sync {
    fn log(&self, event: &LogEvent);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    /// One JSON object per line
    Json,
}

/// Writes every event to stderr; stdout belongs to translation diagnostics
pub struct StderrLogger {
    format: OutputFormat,
}

impl StderrLogger {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }
}

impl Logger for StderrLogger {
    fn log(&self, event: &LogEvent) {
        let line = match self.format {
            OutputFormat::Text => event.format(),
            OutputFormat::Json => event.format_json().unwrap_or_else(|_| event.format()),
        };
        eprintln!("{}", line);
    }
}

/// Keeps the most recent [`LOG_BUFFER_SIZE`] events
#[derive(Default)]
pub struct MemoryLogger {
    events: Mutex<Vec<LogEvent>>,
}

impl MemoryLogger {
    pub fn new() -> Self {
        Self::default()
    }

    fn events(&self) -> MutexGuard<'_, Vec<LogEvent>> {
        self.events.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn snapshot(&self) -> Vec<LogEvent> {
        self.events().clone()
    }

    pub fn event_count(&self) -> usize {
        self.events().len()
    }

    pub fn has_code(&self, code: super::Code) -> bool {
        self.events().iter().any(|event| event.code == code)
    }
}

impl Logger for MemoryLogger {
    fn log(&self, event: &LogEvent) {
        let mut events = self.events();
        if events.len() == LOG_BUFFER_SIZE {
            events.remove(0);
        }
        events.push(event.clone());
    }
}

pub struct LoggingService {
    logger: Arc<dyn Logger>,
    min_level: LogLevel,
    performance_events: bool,
    file_context: bool,
}

impl LoggingService {
    pub fn new(logger: Arc<dyn Logger>, min_level: LogLevel) -> Self {
        Self {
            logger,
            min_level,
            performance_events: false,
            file_context: true,
        }
    }

    pub fn from_preferences(preferences: &LoggingPreferences) -> Self {
        let format = if preferences.use_structured_logging {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        };

        Self {
            logger: Arc::new(StderrLogger::new(format)),
            min_level: preferences.min_log_level,
            performance_events: preferences.log_performance_events,
            file_context: preferences.include_file_context,
        }
    }

    pub fn min_level(&self) -> LogLevel {
        self.min_level
    }

    pub fn should_log(&self, level: LogLevel) -> bool {
        level <= self.min_level
    }

    pub fn performance_events(&self) -> bool {
        self.performance_events
    }

    pub fn file_context(&self) -> bool {
        self.file_context
    }

    pub fn log_event(&self, event: LogEvent) {
        if self.should_log(event.level) {
            self.logger.log(&event);
        }
    }
}
