//! Source reading and output writing with size and encoding checks

use crate::config::constants::compile_time::file_processing::{
    LARGE_FILE_THRESHOLD, MAX_FILE_SIZE, OUTPUT_EXTENSION, OUTPUT_FILE_MODE, SOURCE_EXTENSION,
};
use crate::config::runtime::FileProcessorPreferences;
use crate::logging::codes;
use crate::{log_debug, log_error, log_success, log_warning};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

/// File processor specific errors
#[derive(Debug, Clone, thiserror::Error)]
pub enum FileProcessorError {
    #[error("File not found: {path}")]
    FileNotFound { path: String },

    #[error("Not a .{SOURCE_EXTENSION} file: {path}")]
    InvalidExtension { path: String },

    #[error("File too large: {size} bytes (max: {max_size})")]
    FileTooLarge { size: u64, max_size: u64 },

    #[error("Permission denied: {path}")]
    PermissionDenied { path: String },

    #[error("Invalid UTF-8 encoding in file: {path}")]
    InvalidEncoding { path: String },

    #[error("I/O error reading file: {message}")]
    IoError { message: String },

    #[error("Invalid file path: {path}")]
    InvalidPath { path: String },

    #[error("Failed to write output file {path}: {message}")]
    OutputWriteFailed { path: String, message: String },
}

impl FileProcessorError {
    pub fn error_code(&self) -> crate::logging::Code {
        match self {
            FileProcessorError::FileNotFound { .. } => codes::file_processing::FILE_NOT_FOUND,
            FileProcessorError::InvalidExtension { .. } => {
                codes::file_processing::INVALID_EXTENSION
            }
            FileProcessorError::FileTooLarge { .. } => codes::file_processing::FILE_TOO_LARGE,
            FileProcessorError::PermissionDenied { .. } => {
                codes::file_processing::PERMISSION_DENIED
            }
            FileProcessorError::InvalidEncoding { .. } => codes::file_processing::INVALID_ENCODING,
            FileProcessorError::IoError { .. } => codes::file_processing::IO_ERROR,
            FileProcessorError::InvalidPath { .. } => codes::file_processing::INVALID_PATH,
            FileProcessorError::OutputWriteFailed { .. } => {
                codes::file_processing::OUTPUT_WRITE_FAILED
            }
        }
    }

    pub fn requires_halt(&self) -> bool {
        self.error_code().halts()
    }

    pub fn severity(&self) -> &'static str {
        self.error_code().severity().as_str()
    }

    pub fn category(&self) -> &'static str {
        self.error_code().category()
    }

    pub fn is_recoverable(&self) -> bool {
        !self.requires_halt()
    }
}

/// File metadata collected while reading
#[derive(Debug, Clone)]
pub struct FileMetadata {
    /// Path as given by the caller
    pub path: PathBuf,
    /// File size in bytes
    pub size: u64,
    /// Number of lines in file
    pub line_count: usize,
    pub modified: Option<std::time::SystemTime>,
}

impl FileMetadata {
    /// Get file size in human-readable format
    pub fn human_readable_size(&self) -> String {
        human_readable_size(self.size)
    }

    pub fn is_large_file(&self) -> bool {
        self.size > LARGE_FILE_THRESHOLD
    }
}

/// Source text of a `.java` file together with its metadata
#[derive(Debug, Clone)]
pub struct FileProcessingResult {
    pub source: String,
    pub metadata: FileMetadata,
    pub processing_duration: Duration,
}

impl FileProcessingResult {
    pub fn char_count(&self) -> usize {
        self.source.chars().count()
    }

    /// Only whitespace
    pub fn is_effectively_empty(&self) -> bool {
        self.source.trim().is_empty()
    }

    /// Characters read per millisecond
    pub fn processing_rate(&self) -> f64 {
        let duration_ms = self.processing_duration.as_secs_f64() * 1000.0;
        if duration_ms > 0.0 {
            self.char_count() as f64 / duration_ms
        } else {
            0.0
        }
    }

    /// Where the translation of this file is written
    pub fn output_path(&self) -> PathBuf {
        self.metadata.path.with_extension(OUTPUT_EXTENSION)
    }
}

/// Whether `path` names a Java source file by extension
pub fn is_java_file(path: &Path) -> bool {
    path.extension().and_then(|ext| ext.to_str()) == Some(SOURCE_EXTENSION)
}

/// `Foo.java` becomes `Foo.js` next to it; anything else has no output path
pub fn output_path_for(path: &Path) -> Option<PathBuf> {
    is_java_file(path).then(|| path.with_extension(OUTPUT_EXTENSION))
}

fn human_readable_size(size: u64) -> String {
    const UNITS: &[&str] = &["B", "KB", "MB", "GB"];
    let mut scaled = size as f64;
    let mut unit_index = 0;

    while scaled >= 1024.0 && unit_index < UNITS.len() - 1 {
        scaled /= 1024.0;
        unit_index += 1;
    }

    if unit_index == 0 {
        format!("{} {}", size, UNITS[unit_index])
    } else {
        format!("{:.2} {}", scaled, UNITS[unit_index])
    }
}

/// Reads `.java` sources and writes their `.js` translations
pub struct FileProcessor {
    pub enable_performance_logging: bool,
    pub overwrite_existing_output: bool,
}

impl FileProcessor {
    pub fn new() -> Self {
        Self {
            enable_performance_logging: false,
            overwrite_existing_output: true,
        }
    }

    pub fn from_preferences(prefs: &FileProcessorPreferences) -> Self {
        Self {
            enable_performance_logging: prefs.enable_performance_logging,
            overwrite_existing_output: prefs.overwrite_existing_output,
        }
    }

    pub fn with_performance_logging(mut self, enabled: bool) -> Self {
        self.enable_performance_logging = enabled;
        self
    }

    pub fn with_overwrite(mut self, enabled: bool) -> Self {
        self.overwrite_existing_output = enabled;
        self
    }

    pub fn max_file_size() -> u64 {
        MAX_FILE_SIZE
    }

    /// Read a `.java` file.
    ///
    /// Fails with [`FileProcessorError::InvalidExtension`] before touching the
    /// filesystem when the path does not end in `.java`.
    pub fn read_source(&self, path: &Path) -> Result<FileProcessingResult, FileProcessorError> {
        let start_time = Instant::now();
        let file_path = path.display().to_string();

        log_debug!("Starting file processing", "file" => file_path.as_str());

        if !is_java_file(path) {
            let error = FileProcessorError::InvalidExtension {
                path: file_path.clone(),
            };
            log_debug!("Skipping non-Java file", "file" => file_path.as_str());
            return Err(error);
        }

        self.validate_path(path, &file_path)?;
        let mut metadata = self.get_metadata(path, &file_path)?;

        if metadata.size > MAX_FILE_SIZE {
            let error = FileProcessorError::FileTooLarge {
                size: metadata.size,
                max_size: MAX_FILE_SIZE,
            };
            log_error!(error.error_code(), "File exceeds maximum size limit",
                "file" => file_path.as_str(),
                "size_human" => metadata.human_readable_size(),
                "limit_human" => human_readable_size(MAX_FILE_SIZE)
            );
            return Err(error);
        }
        if metadata.is_large_file() {
            log_warning!("Large source file",
                "file" => file_path.as_str(),
                "size_human" => metadata.human_readable_size()
            );
        }

        let source = self.read_file(path, &file_path)?;
        metadata.line_count = source.lines().count();

        let result = FileProcessingResult {
            source,
            metadata,
            processing_duration: start_time.elapsed(),
        };
        self.log_read_success(&result, &file_path);

        Ok(result)
    }

    /// Write `javascript` to the output path derived from `source_path`,
    /// creating or truncating it.
    pub fn write_output(
        &self,
        source_path: &Path,
        javascript: &str,
    ) -> Result<PathBuf, FileProcessorError> {
        let start_time = Instant::now();
        let output_path =
            output_path_for(source_path).ok_or_else(|| FileProcessorError::InvalidExtension {
                path: source_path.display().to_string(),
            })?;
        let output_str = output_path.display().to_string();

        if !self.overwrite_existing_output && output_path.exists() {
            let error = FileProcessorError::OutputWriteFailed {
                path: output_str.clone(),
                message: "output file already exists".to_string(),
            };
            log_error!(error.error_code(), "Refusing to overwrite existing output",
                "output" => output_str.as_str());
            return Err(error);
        }

        if let Err(e) = write_with_mode(&output_path, javascript.as_bytes()) {
            let error = match e.kind() {
                io::ErrorKind::PermissionDenied => FileProcessorError::PermissionDenied {
                    path: output_str.clone(),
                },
                _ => FileProcessorError::OutputWriteFailed {
                    path: output_str.clone(),
                    message: e.to_string(),
                },
            };
            log_error!(error.error_code(), "Failed to write output file",
                "output" => output_str.as_str(),
                "io_error" => e);
            return Err(error);
        }

        if self.enable_performance_logging {
            crate::log_performance!(codes::success::OUTPUT_WRITTEN, "Output written",
                duration = start_time.elapsed(),
                "output" => output_str.as_str(),
                "bytes" => javascript.len()
            );
        } else {
            log_success!(codes::success::OUTPUT_WRITTEN, "Output written",
                "output" => output_str.as_str(),
                "bytes" => javascript.len()
            );
        }

        Ok(output_path)
    }

    fn log_read_success(&self, result: &FileProcessingResult, file_path: &str) {
        if self.enable_performance_logging {
            crate::log_performance!(codes::success::FILE_PROCESSING_SUCCESS,
                "File read with performance metrics",
                duration = result.processing_duration,
                "file" => file_path,
                "size_human" => result.metadata.human_readable_size(),
                "lines" => result.metadata.line_count,
                "chars_per_ms" => format!("{:.2}", result.processing_rate())
            );
        } else {
            log_success!(codes::success::FILE_PROCESSING_SUCCESS, "File read",
                "file" => file_path,
                "size_bytes" => result.metadata.size,
                "lines" => result.metadata.line_count
            );
        }
    }

    fn validate_path(&self, path: &Path, file_path: &str) -> Result<(), FileProcessorError> {
        if file_path.is_empty() {
            let error = FileProcessorError::InvalidPath {
                path: file_path.to_string(),
            };
            log_error!(error.error_code(), "Empty file path provided");
            return Err(error);
        }

        if !path.exists() {
            let error = FileProcessorError::FileNotFound {
                path: file_path.to_string(),
            };
            log_error!(error.error_code(), "File not found", "path" => file_path);
            return Err(error);
        }

        if !path.is_file() {
            let error = FileProcessorError::InvalidPath {
                path: file_path.to_string(),
            };
            log_error!(error.error_code(), "Path is not a file", "path" => file_path);
            return Err(error);
        }

        Ok(())
    }

    fn get_metadata(&self, path: &Path, file_path: &str) -> Result<FileMetadata, FileProcessorError> {
        let metadata = fs::metadata(path).map_err(|e| {
            let error = match e.kind() {
                io::ErrorKind::PermissionDenied => FileProcessorError::PermissionDenied {
                    path: file_path.to_string(),
                },
                _ => FileProcessorError::IoError {
                    message: format!("Failed to read metadata for '{}': {}", file_path, e),
                },
            };
            log_error!(error.error_code(), "Failed to read file metadata",
                "path" => file_path,
                "io_error" => e);
            error
        })?;

        Ok(FileMetadata {
            path: path.to_path_buf(),
            size: metadata.len(),
            line_count: 0,
            modified: metadata.modified().ok(),
        })
    }

    fn read_file(&self, path: &Path, file_path: &str) -> Result<String, FileProcessorError> {
        fs::read_to_string(path).map_err(|e| {
            let error = match e.kind() {
                io::ErrorKind::PermissionDenied => FileProcessorError::PermissionDenied {
                    path: file_path.to_string(),
                },
                io::ErrorKind::InvalidData => FileProcessorError::InvalidEncoding {
                    path: file_path.to_string(),
                },
                _ => FileProcessorError::IoError {
                    message: format!("Failed to read file '{}': {}", file_path, e),
                },
            };
            log_error!(error.error_code(), "Failed to read source file",
                "file" => file_path,
                "io_error" => e);
            error
        })
    }
}

impl Default for FileProcessor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(unix)]
fn write_with_mode(path: &Path, contents: &[u8]) -> io::Result<()> {
    use std::os::unix::fs::OpenOptionsExt;

    let mut file = fs::OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .mode(OUTPUT_FILE_MODE)
        .open(path)?;
    file.write_all(contents)
}

#[cfg(not(unix))]
fn write_with_mode(path: &Path, contents: &[u8]) -> io::Result<()> {
    let mut file = fs::OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)?;
    file.write_all(contents)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_read_valid_file() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("Main.java");
        let content = "class Main {\n}\n";
        fs::write(&file_path, content).unwrap();

        let result = FileProcessor::new().read_source(&file_path).unwrap();
        assert_eq!(result.source, content);
        assert_eq!(result.metadata.line_count, 2);
        assert_eq!(result.char_count(), content.chars().count());
        assert!(!result.is_effectively_empty());
        assert_eq!(result.output_path(), dir.path().join("Main.js"));
    }

    #[test]
    fn test_empty_file_is_accepted() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("Empty.java");
        fs::write(&file_path, "").unwrap();

        let result = FileProcessor::new().read_source(&file_path).unwrap();
        assert!(result.is_effectively_empty());
    }

    #[test]
    fn test_file_not_found() {
        let dir = tempdir().unwrap();
        let result = FileProcessor::new().read_source(&dir.path().join("Missing.java"));
        assert_matches!(result, Err(FileProcessorError::FileNotFound { .. }));
    }

    #[test]
    fn test_non_java_file_is_rejected_before_reading() {
        let result = FileProcessor::new().read_source(Path::new("does/not/exist.txt"));
        assert_matches!(result, Err(FileProcessorError::InvalidExtension { .. }));
    }

    #[test]
    fn test_directory_named_like_source() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("pkg.java");
        fs::create_dir(&nested).unwrap();
        assert_matches!(
            FileProcessor::new().read_source(&nested),
            Err(FileProcessorError::InvalidPath { .. })
        );
    }

    #[test]
    fn test_invalid_utf8() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("Bad.java");
        fs::write(&file_path, [0x63, 0xff, 0xfe, 0x0a]).unwrap();
        assert_matches!(
            FileProcessor::new().read_source(&file_path),
            Err(FileProcessorError::InvalidEncoding { .. })
        );
    }

    #[test]
    fn test_file_size_limit() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("Large.java");
        let file = fs::File::create(&file_path).unwrap();
        file.set_len(MAX_FILE_SIZE + 1).unwrap();

        assert_matches!(
            FileProcessor::new().read_source(&file_path),
            Err(FileProcessorError::FileTooLarge { size, max_size })
                if size == MAX_FILE_SIZE + 1 && max_size == MAX_FILE_SIZE
        );
    }

    #[test]
    fn test_write_output_replaces_existing() {
        let dir = tempdir().unwrap();
        let source_path = dir.path().join("Main.java");
        let output_path = dir.path().join("Main.js");
        fs::write(&output_path, "old contents that are longer").unwrap();

        let written = FileProcessor::new()
            .write_output(&source_path, "new")
            .unwrap();
        assert_eq!(written, output_path);
        assert_eq!(fs::read_to_string(&output_path).unwrap(), "new");
    }

    #[cfg(unix)]
    #[test]
    fn test_write_output_mode() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempdir().unwrap();
        let source_path = dir.path().join("Main.java");
        let written = FileProcessor::new()
            .write_output(&source_path, "let x = 1;\n")
            .unwrap();

        // umask may clear bits but never adds them
        let mode = fs::metadata(&written).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode & !OUTPUT_FILE_MODE, 0);
        assert_ne!(mode & 0o600, 0);
    }

    #[test]
    fn test_write_output_without_overwrite() {
        let dir = tempdir().unwrap();
        let source_path = dir.path().join("Main.java");
        fs::write(dir.path().join("Main.js"), "keep").unwrap();

        let result = FileProcessor::new()
            .with_overwrite(false)
            .write_output(&source_path, "new");
        assert_matches!(result, Err(FileProcessorError::OutputWriteFailed { .. }));
        assert_eq!(
            fs::read_to_string(dir.path().join("Main.js")).unwrap(),
            "keep"
        );
    }

    #[test]
    fn test_output_path_for() {
        assert_eq!(
            output_path_for(Path::new("src/App.java")),
            Some(PathBuf::from("src/App.js"))
        );
        assert_eq!(
            output_path_for(Path::new("a.b.java")),
            Some(PathBuf::from("a.b.js"))
        );
        assert_eq!(output_path_for(Path::new("App.jav")), None);
        assert_eq!(output_path_for(Path::new("App.java.txt")), None);
        assert_eq!(output_path_for(Path::new("App")), None);
    }

    #[test]
    fn test_error_methods() {
        let error = FileProcessorError::FileNotFound {
            path: "Main.java".to_string(),
        };
        assert_eq!(error.error_code().as_str(), "E005");
        assert_eq!(error.category(), "FileProcessing");
        assert!(!error.is_recoverable());
        assert!(error.requires_halt());

        let skipped = FileProcessorError::InvalidExtension {
            path: "notes.txt".to_string(),
        };
        assert!(skipped.is_recoverable());
        assert!(!skipped.requires_halt());
    }

    #[test]
    fn test_human_readable_size() {
        assert_eq!(human_readable_size(512), "512 B");
        assert_eq!(human_readable_size(2048), "2.00 KB");
    }
}
