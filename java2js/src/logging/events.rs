//! A single log record and its text and JSON renderings

use super::codes::Code;
use crate::config::compile_time::logging::MAX_LOG_MESSAGE_LENGTH;
use crate::utils::Span;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

/// Ordered most to least severe, so `level <= threshold` means "emit"
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warning,
    Info,
    Debug,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Error => "ERROR",
            LogLevel::Warning => "WARN",
            LogLevel::Info => "INFO",
            LogLevel::Debug => "DEBUG",
        }
    }

    /// Placeholder code for events logged without one
    fn default_code(self) -> Code {
        match self {
            LogLevel::Error => super::codes::system::INTERNAL_ERROR,
            LogLevel::Warning => Code::new("W000"),
            LogLevel::Info => Code::new("I000"),
            LogLevel::Debug => Code::new("D000"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct LogEvent {
    pub timestamp: DateTime<Utc>,
    pub level: LogLevel,
    pub code: Code,
    pub message: String,
    pub span: Option<Span>,
    /// Context pairs in the order they were attached
    pub context: Vec<(String, String)>,
}

impl LogEvent {
    pub fn new(level: LogLevel, code: Option<Code>, message: &str) -> Self {
        Self {
            timestamp: Utc::now(),
            level,
            code: code.unwrap_or_else(|| level.default_code()),
            message: truncate(message),
            span: None,
            context: Vec::new(),
        }
    }

    pub fn with_span(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }

    pub fn with_context(mut self, key: &str, value: &str) -> Self {
        self.context.push((key.to_string(), value.to_string()));
        self
    }

    pub fn context_value(&self, key: &str) -> Option<&str> {
        self.context
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// `[LEVEL] CODE - message at line:col (key=value, ...)`
    pub fn format(&self) -> String {
        let mut line = format!("[{}] {} - {}", self.level.as_str(), self.code, self.message);
        if let Some(span) = &self.span {
            line.push_str(&format!(" at {}", span.start()));
        }
        if !self.context.is_empty() {
            let pairs: Vec<String> = self
                .context
                .iter()
                .map(|(k, v)| format!("{}={}", k, v))
                .collect();
            line.push_str(&format!(" ({})", pairs.join(", ")));
        }
        line
    }

    pub fn format_json(&self) -> Result<String, serde_json::Error> {
        let mut record = json!({
            "timestamp": self.timestamp.to_rfc3339(),
            "level": self.level.as_str(),
            "code": self.code.as_str(),
            "message": self.message,
        });

        if let Some(row) = self.code.metadata() {
            record["category"] = json!(row.category);
            record["severity"] = json!(row.severity.as_str());
            record["halts"] = json!(row.halts);
        }

        if let Some(span) = &self.span {
            record["span"] = serde_json::to_value(span)?;
        }

        if !self.context.is_empty() {
            let context: Map<String, Value> = self
                .context
                .iter()
                .map(|(k, v)| (k.clone(), Value::String(v.clone())))
                .collect();
            record["context"] = Value::Object(context);
        }

        serde_json::to_string(&record)
    }
}

fn truncate(message: &str) -> String {
    if message.len() <= MAX_LOG_MESSAGE_LENGTH {
        return message.to_string();
    }
    let mut cut = MAX_LOG_MESSAGE_LENGTH;
    while !message.is_char_boundary(cut) {
        cut -= 1;
    }
    format!("{}...", &message[..cut])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::codes;
    use crate::utils::Position;

    #[test]
    fn test_uncoded_events_get_placeholder_codes() {
        assert_eq!(LogEvent::new(LogLevel::Info, None, "x").code.as_str(), "I000");
        assert_eq!(LogEvent::new(LogLevel::Warning, None, "x").code.as_str(), "W000");
    }

    #[test]
    fn test_text_format() {
        let at = Position::new(12, 3, 7);
        let event = LogEvent::new(
            LogLevel::Error,
            Some(codes::lexical::UNTERMINATED_STRING),
            "String literal has no closing quote",
        )
        .with_span(Span::new(at, at.advance('"')))
        .with_context("file", "Main.java");

        assert_eq!(
            event.format(),
            "[ERROR] E021 - String literal has no closing quote at 3:7 (file=Main.java)"
        );
        assert_eq!(event.context_value("file"), Some("Main.java"));
    }

    #[test]
    fn test_long_messages_are_truncated() {
        let message = "é".repeat(MAX_LOG_MESSAGE_LENGTH);
        let event = LogEvent::new(LogLevel::Info, None, &message);
        assert!(event.message.len() <= MAX_LOG_MESSAGE_LENGTH + 3);
        assert!(event.message.ends_with("..."));
    }

    #[test]
    fn test_json_format() {
        let event = LogEvent::new(
            LogLevel::Error,
            Some(codes::transform::MISSING_IDENTIFIER),
            "missing IDENTIFIER",
        )
        .with_context("token", ";");

        let value: Value = serde_json::from_str(&event.format_json().unwrap()).unwrap();
        assert_eq!(value["level"], "ERROR");
        assert_eq!(value["code"], "E040");
        assert_eq!(value["category"], "Transform");
        assert_eq!(value["halts"], true);
        assert_eq!(value["context"]["token"], ";");
        assert!(value.get("span").is_none());
    }
}
