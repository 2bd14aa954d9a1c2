// RUNTIME PREFERENCES (User Experience)

use crate::config::compile_time::transform::{DEFAULT_INDENT_WIDTH, MAX_INDENT_WIDTH};
pub use crate::logging::LogLevel;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileProcessorPreferences {
    /// Whether to log read/write timings for each file
    pub enable_performance_logging: bool,

    /// Whether to replace an existing output file (always true for the CLI)
    pub overwrite_existing_output: bool,
}

impl Default for FileProcessorPreferences {
    fn default() -> Self {
        Self {
            enable_performance_logging: env::var(env_vars::ENABLE_PERFORMANCE_LOGGING)
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            overwrite_existing_output: env::var(env_vars::OVERWRITE_EXISTING_OUTPUT)
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LexicalPreferences {
    /// Whether to collect per-category token counts
    pub collect_detailed_metrics: bool,

    /// Whether to track operator usage patterns
    pub track_operator_patterns: bool,

    /// Whether to show position information in error messages
    pub include_position_in_errors: bool,
}

impl Default for LexicalPreferences {
    fn default() -> Self {
        Self {
            collect_detailed_metrics: env::var(env_vars::LEXICAL_DETAILED_METRICS)
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
            track_operator_patterns: env::var(env_vars::LEXICAL_TRACK_OPERATORS)
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            include_position_in_errors: env::var(env_vars::LEXICAL_INCLUDE_POSITIONS)
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransformPreferences {
    /// Spaces per indentation level in the generated JavaScript
    pub indent_width: usize,

    /// Whether to log a summary of rewritten declarations per file
    pub log_rewrite_summary: bool,
}

impl Default for TransformPreferences {
    fn default() -> Self {
        Self {
            indent_width: env::var(env_vars::TRANSFORM_INDENT_WIDTH)
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_INDENT_WIDTH),
            log_rewrite_summary: env::var(env_vars::TRANSFORM_LOG_SUMMARY)
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingPreferences {
    /// Whether to emit JSON lines instead of plain text
    pub use_structured_logging: bool,

    /// Minimum level that reaches the console
    pub min_log_level: LogLevel,

    /// Whether to log performance events (durations, sizes)
    pub log_performance_events: bool,

    /// Whether to include file context in log messages
    pub include_file_context: bool,
}

impl Default for LoggingPreferences {
    fn default() -> Self {
        Self {
            use_structured_logging: env::var(env_vars::LOGGING_USE_STRUCTURED)
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            min_log_level: env::var(env_vars::LOGGING_MIN_LEVEL)
                .ok()
                .and_then(|v| parse_log_level(&v))
                .unwrap_or(LogLevel::Warning),
            log_performance_events: env::var(env_vars::LOGGING_LOG_PERFORMANCE)
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            include_file_context: env::var(env_vars::LOGGING_INCLUDE_FILE_CONTEXT)
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
        }
    }
}

/// Parse log level from string (used for environment variables)
pub fn parse_log_level(level: &str) -> Option<LogLevel> {
    match level.to_lowercase().as_str() {
        "error" | "0" => Some(LogLevel::Error),
        "warning" | "warn" | "1" => Some(LogLevel::Warning),
        "info" | "2" => Some(LogLevel::Info),
        "debug" | "3" => Some(LogLevel::Debug),
        _ => None,
    }
}

/// Errors raised while loading or validating configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read configuration file '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid configuration file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid configuration value: {message}")]
    Invalid { message: String },

    #[error("Runtime configuration already installed")]
    AlreadyInstalled,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuntimeConfig {
    pub file_processor: FileProcessorPreferences,
    pub lexical: LexicalPreferences,
    pub transform: TransformPreferences,
    pub logging: LoggingPreferences,
}

impl RuntimeConfig {
    /// Parse a TOML document; missing sections and keys keep their env/default values
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: RuntimeConfig = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a TOML configuration file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&source)
    }

    /// Locate and load the configuration the CLI should use.
    ///
    /// `JAVA2JS_CONFIG` names an explicit file; otherwise `java2js.toml` in the
    /// working directory is used when present, and defaults when not.
    pub fn discover() -> Result<Self, ConfigError> {
        if let Ok(explicit) = env::var(env_vars::CONFIG_FILE) {
            return Self::load(Path::new(&explicit));
        }

        let local = Path::new(DEFAULT_CONFIG_FILE);
        if local.is_file() {
            return Self::load(local);
        }

        Ok(Self::default())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let width = self.transform.indent_width;
        if width == 0 || width > MAX_INDENT_WIDTH {
            return Err(ConfigError::Invalid {
                message: format!(
                    "transform.indent_width must be between 1 and {}, got {}",
                    MAX_INDENT_WIDTH, width
                ),
            });
        }
        Ok(())
    }
}

/// File name looked up in the working directory by [`RuntimeConfig::discover`]
pub const DEFAULT_CONFIG_FILE: &str = "java2js.toml";

static INSTALLED_CONFIG: OnceLock<RuntimeConfig> = OnceLock::new();

/// Install the process-wide configuration. Can only happen once.
pub fn install(config: RuntimeConfig) -> Result<(), ConfigError> {
    config.validate()?;
    INSTALLED_CONFIG
        .set(config)
        .map_err(|_| ConfigError::AlreadyInstalled)
}

/// The installed configuration, or env/default values when none was installed
pub fn current() -> RuntimeConfig {
    INSTALLED_CONFIG.get().cloned().unwrap_or_default()
}

/// Environment variable names for configuration
pub mod env_vars {
    pub const CONFIG_FILE: &str = "JAVA2JS_CONFIG";

    // File Processor
    pub const ENABLE_PERFORMANCE_LOGGING: &str = "JAVA2JS_ENABLE_PERFORMANCE_LOGGING";
    pub const OVERWRITE_EXISTING_OUTPUT: &str = "JAVA2JS_OVERWRITE_EXISTING_OUTPUT";

    // Lexical
    pub const LEXICAL_DETAILED_METRICS: &str = "JAVA2JS_LEXICAL_DETAILED_METRICS";
    pub const LEXICAL_TRACK_OPERATORS: &str = "JAVA2JS_LEXICAL_TRACK_OPERATORS";
    pub const LEXICAL_INCLUDE_POSITIONS: &str = "JAVA2JS_LEXICAL_INCLUDE_POSITIONS";

    // Transform
    pub const TRANSFORM_INDENT_WIDTH: &str = "JAVA2JS_TRANSFORM_INDENT_WIDTH";
    pub const TRANSFORM_LOG_SUMMARY: &str = "JAVA2JS_TRANSFORM_LOG_SUMMARY";

    // Logging
    pub const LOGGING_USE_STRUCTURED: &str = "JAVA2JS_LOGGING_USE_STRUCTURED";
    pub const LOGGING_MIN_LEVEL: &str = "JAVA2JS_LOGGING_MIN_LEVEL";
    pub const LOGGING_LOG_PERFORMANCE: &str = "JAVA2JS_LOGGING_LOG_PERFORMANCE";
    pub const LOGGING_INCLUDE_FILE_CONTEXT: &str = "JAVA2JS_LOGGING_INCLUDE_FILE_CONTEXT";
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_log_level_parsing() {
        assert_eq!(parse_log_level("error"), Some(LogLevel::Error));
        assert_eq!(parse_log_level("ERROR"), Some(LogLevel::Error));
        assert_eq!(parse_log_level("warn"), Some(LogLevel::Warning));
        assert_eq!(parse_log_level("1"), Some(LogLevel::Warning));
        assert_eq!(parse_log_level("info"), Some(LogLevel::Info));
        assert_eq!(parse_log_level("debug"), Some(LogLevel::Debug));
        assert_eq!(parse_log_level("invalid"), None);
    }

    #[test]
    fn test_partial_toml_keeps_other_values() {
        let config = RuntimeConfig::from_toml_str(
            r#"
            [transform]
            indent_width = 2

            [logging]
            min_log_level = "debug"
            "#,
        )
        .unwrap();

        assert_eq!(config.transform.indent_width, 2);
        assert_eq!(config.logging.min_log_level, LogLevel::Debug);
        assert_eq!(config.lexical, LexicalPreferences::default());
    }

    #[test]
    fn test_empty_toml_is_default() {
        let config = RuntimeConfig::from_toml_str("").unwrap();
        assert_eq!(config, RuntimeConfig::default());
    }

    #[test]
    fn test_invalid_indent_width_rejected() {
        let result = RuntimeConfig::from_toml_str("[transform]\nindent_width = 0\n");
        assert_matches!(result, Err(ConfigError::Invalid { .. }));
    }

    #[test]
    fn test_malformed_toml_rejected() {
        let result = RuntimeConfig::from_toml_str("[transform\nindent_width = 2");
        assert_matches!(result, Err(ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_CONFIG_FILE);
        std::fs::write(&path, "[lexical]\ntrack_operator_patterns = true\n").unwrap();

        let config = RuntimeConfig::load(&path).unwrap();
        assert!(config.lexical.track_operator_patterns);

        let missing = RuntimeConfig::load(&dir.path().join("absent.toml"));
        assert_matches!(missing, Err(ConfigError::Io { .. }));
    }

    #[test]
    fn test_env_var_names_exist() {
        assert!(env_vars::CONFIG_FILE.starts_with("JAVA2JS_"));
        assert!(env_vars::TRANSFORM_INDENT_WIDTH.starts_with("JAVA2JS_"));
        assert!(env_vars::LOGGING_MIN_LEVEL.starts_with("JAVA2JS_"));
    }
}
