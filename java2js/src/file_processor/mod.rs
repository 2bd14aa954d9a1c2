//! File processing: reading `.java` sources and writing `.js` output

pub mod processor;

pub use processor::{
    is_java_file, output_path_for, FileMetadata, FileProcessingResult, FileProcessor,
    FileProcessorError,
};

use crate::config::constants::compile_time::file_processing::{LARGE_FILE_THRESHOLD, MAX_FILE_SIZE};
use crate::logging::codes;
use std::path::{Path, PathBuf};

/// Read a source file with preferences from the installed runtime config
pub fn read_source(path: &Path) -> Result<FileProcessingResult, FileProcessorError> {
    create_processor().read_source(path)
}

/// Write the translation of `source_path` next to it
pub fn write_output(source_path: &Path, javascript: &str) -> Result<PathBuf, FileProcessorError> {
    create_processor().write_output(source_path, javascript)
}

pub fn create_processor() -> FileProcessor {
    FileProcessor::from_preferences(&crate::config::runtime::current().file_processor)
}

/// Check the file processing codes and limits (for system startup)
pub fn validate_file_processor() -> Result<(), String> {
    let required = [
        codes::file_processing::FILE_NOT_FOUND,
        codes::file_processing::INVALID_EXTENSION,
        codes::file_processing::FILE_TOO_LARGE,
        codes::file_processing::PERMISSION_DENIED,
        codes::file_processing::INVALID_ENCODING,
        codes::file_processing::IO_ERROR,
        codes::file_processing::INVALID_PATH,
        codes::file_processing::OUTPUT_WRITE_FAILED,
    ];

    for code in &required {
        if code.metadata().is_none() {
            return Err(format!(
                "File processor error code {} not found in metadata registry",
                code.as_str()
            ));
        }
    }

    if LARGE_FILE_THRESHOLD >= MAX_FILE_SIZE {
        return Err("LARGE_FILE_THRESHOLD must be below MAX_FILE_SIZE".to_string());
    }

    Ok(())
}
