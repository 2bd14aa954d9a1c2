//! Process-wide structured logging
//!
//! Nothing is emitted until [`init_global_logging`] installs a service, so the
//! library can be embedded without any logging setup. Events raised while a
//! file is being translated are tagged with that file's path.

pub mod codes;
pub mod events;
pub mod macros;
pub mod service;

use crate::config::runtime;
use crate::utils::Span;
use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock};

pub use codes::Code;
pub use events::{LogEvent, LogLevel};
pub use service::{Logger, LoggingService, MemoryLogger, OutputFormat, StderrLogger};

static GLOBAL_LOGGER: OnceLock<Arc<LoggingService>> = OnceLock::new();

thread_local! {
    static CURRENT_FILE: RefCell<Option<PathBuf>> = const { RefCell::new(None) };
}

/// Install a stderr logger built from the runtime logging preferences
pub fn init_global_logging() -> Result<(), String> {
    let preferences = runtime::current().logging;
    init_global_logging_with_service(Arc::new(LoggingService::from_preferences(&preferences)))?;

    crate::log_success!(
        codes::success::SYSTEM_INITIALIZATION_COMPLETED,
        "Logging initialized",
        "min_level" => preferences.min_log_level.as_str()
    );
    Ok(())
}

pub fn init_global_logging_with_service(service: Arc<LoggingService>) -> Result<(), String> {
    GLOBAL_LOGGER
        .set(service)
        .map_err(|_| "Global logger already initialized".to_string())
}

pub fn is_initialized() -> bool {
    GLOBAL_LOGGER.get().is_some()
}

pub fn try_get_global_logger() -> Option<&'static LoggingService> {
    GLOBAL_LOGGER.get().map(Arc::as_ref)
}

/// Whether an event at `level` would reach the logger
pub fn is_enabled(level: LogLevel) -> bool {
    try_get_global_logger().is_some_and(|logger| logger.should_log(level))
}

pub fn performance_events_enabled() -> bool {
    try_get_global_logger().is_some_and(|logger| logger.performance_events())
}

/// Run `f` with events on this thread tagged by `file_path`
pub fn with_file_context<F, R>(file_path: &Path, f: F) -> R
where
    F: FnOnce() -> R,
{
    let previous = CURRENT_FILE.with(|current| current.replace(Some(file_path.to_path_buf())));
    let result = f();
    CURRENT_FILE.with(|current| *current.borrow_mut() = previous);
    result
}

pub fn current_file() -> Option<PathBuf> {
    CURRENT_FILE.with(|current| current.borrow().clone())
}

fn tag_with_file(event: LogEvent) -> LogEvent {
    match current_file() {
        Some(path) => event.with_context("file", &path.display().to_string()),
        None => event,
    }
}

/// Build and dispatch one event. The `log_*!` macros expand to this.
pub fn emit(
    level: LogLevel,
    code: Option<Code>,
    message: &str,
    span: Option<Span>,
    context: &[(&str, String)],
) {
    let Some(logger) = try_get_global_logger() else {
        return;
    };

    let mut event = LogEvent::new(level, code, message);
    if let Some(span) = span {
        event = event.with_span(span);
    }
    for (key, value) in context {
        event = event.with_context(key, value);
    }
    if logger.file_context() {
        event = tag_with_file(event);
    }
    logger.log_event(event);
}
