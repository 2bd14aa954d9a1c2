//! Event codes and the table classifying the error codes
//!
//! Every code the translator logs is declared here. Error codes also carry an
//! [`ErrorMetadata`] row; success codes do not.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Code(&'static str);

impl Code {
    pub const fn new(code: &'static str) -> Self {
        Self(code)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }

    pub fn metadata(self) -> Option<&'static ErrorMetadata> {
        REGISTRY.iter().find(|row| row.code == self)
    }

    /// Whether an error with this code stops translation of the current file
    pub fn halts(self) -> bool {
        self.metadata().is_some_and(|row| row.halts)
    }

    pub fn category(self) -> &'static str {
        self.metadata().map_or("Unknown", |row| row.category)
    }

    pub fn severity(self) -> Severity {
        self.metadata().map_or(Severity::Medium, |row| row.severity)
    }

    pub fn summary(self) -> &'static str {
        self.metadata().map_or("Unknown error", |row| row.summary)
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Critical => "Critical",
            Severity::High => "High",
            Severity::Medium => "Medium",
            Severity::Low => "Low",
        }
    }
}

#[derive(Debug)]
pub struct ErrorMetadata {
    pub code: Code,
    pub category: &'static str,
    pub severity: Severity,
    pub halts: bool,
    pub summary: &'static str,
}

pub mod system {
    use super::Code;

    pub const INTERNAL_ERROR: Code = Code::new("ERR001");
}

pub mod file_processing {
    use super::Code;

    pub const FILE_NOT_FOUND: Code = Code::new("E005");
    pub const INVALID_EXTENSION: Code = Code::new("E006");
    pub const FILE_TOO_LARGE: Code = Code::new("E007");
    pub const PERMISSION_DENIED: Code = Code::new("E009");
    pub const INVALID_ENCODING: Code = Code::new("E010");
    pub const IO_ERROR: Code = Code::new("E011");
    pub const INVALID_PATH: Code = Code::new("E012");
    pub const OUTPUT_WRITE_FAILED: Code = Code::new("E013");
}

pub mod lexical {
    use super::Code;

    pub const INVALID_CHARACTER: Code = Code::new("E020");
    pub const UNTERMINATED_STRING: Code = Code::new("E021");
    pub const INVALID_CHAR_LITERAL: Code = Code::new("E022");
    pub const UNTERMINATED_COMMENT: Code = Code::new("E023");
    pub const UNTERMINATED_ARRAY: Code = Code::new("E024");
    pub const MISSING_PARENTHESIS: Code = Code::new("E025");
    pub const TOO_MANY_TOKENS: Code = Code::new("E027");
}

pub mod transform {
    use super::Code;

    pub const MISSING_IDENTIFIER: Code = Code::new("E040");
    pub const MISSING_CLASS_NAME: Code = Code::new("E041");
    pub const UNTERMINATED_PARAMETER_LIST: Code = Code::new("E042");
}

pub mod success {
    use super::Code;

    pub const SYSTEM_INITIALIZATION_COMPLETED: Code = Code::new("I004");
    pub const FILE_PROCESSING_SUCCESS: Code = Code::new("I006");
    pub const OUTPUT_WRITTEN: Code = Code::new("I007");
    pub const TOKENIZATION_COMPLETE: Code = Code::new("I020");
    pub const TRANSFORM_COMPLETE: Code = Code::new("I040");
    pub const TRANSLATION_COMPLETE: Code = Code::new("I050");
}

const fn row(
    code: Code,
    category: &'static str,
    severity: Severity,
    halts: bool,
    summary: &'static str,
) -> ErrorMetadata {
    ErrorMetadata {
        code,
        category,
        severity,
        halts,
        summary,
    }
}

use Severity::{Critical, High, Low, Medium};

static REGISTRY: &[ErrorMetadata] = &[
    row(system::INTERNAL_ERROR, "System", Critical, true, "Internal translator error"),
    row(file_processing::FILE_NOT_FOUND, "FileProcessing", High, true, "Source file not found"),
    // Non-.java inputs are skipped, never fatal
    row(file_processing::INVALID_EXTENSION, "FileProcessing", Low, false, "Not a .java source file"),
    row(file_processing::FILE_TOO_LARGE, "FileProcessing", High, true, "Source file exceeds the size limit"),
    row(file_processing::PERMISSION_DENIED, "FileProcessing", High, true, "Permission denied"),
    row(file_processing::INVALID_ENCODING, "FileProcessing", High, true, "Source file is not valid UTF-8"),
    row(file_processing::IO_ERROR, "FileProcessing", High, true, "I/O error while reading source"),
    row(file_processing::INVALID_PATH, "FileProcessing", High, true, "Path is not a regular file"),
    row(file_processing::OUTPUT_WRITE_FAILED, "FileProcessing", High, true, "Output file could not be written"),
    row(lexical::INVALID_CHARACTER, "Lexical", Medium, true, "Unrecognized character in source"),
    row(lexical::UNTERMINATED_STRING, "Lexical", Medium, true, "String literal has no closing quote"),
    row(lexical::INVALID_CHAR_LITERAL, "Lexical", Medium, true, "Malformed character literal"),
    row(lexical::UNTERMINATED_COMMENT, "Lexical", Medium, true, "Block comment has no closing */"),
    row(lexical::UNTERMINATED_ARRAY, "Lexical", Medium, true, "Array initializer has no closing brace"),
    row(lexical::MISSING_PARENTHESIS, "Lexical", Medium, true, "Control-flow header has no parenthesis"),
    row(lexical::TOO_MANY_TOKENS, "Lexical", High, true, "Too many tokens in one file"),
    row(transform::MISSING_IDENTIFIER, "Transform", Medium, true, "new is not followed by an identifier"),
    row(transform::MISSING_CLASS_NAME, "Transform", Medium, true, "class keyword at end of input"),
    row(transform::UNTERMINATED_PARAMETER_LIST, "Transform", Medium, true, "Parameter list is never closed"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_unique() {
        for (index, row) in REGISTRY.iter().enumerate() {
            assert!(
                REGISTRY[index + 1..].iter().all(|other| other.code != row.code),
                "duplicate row for {}",
                row.code
            );
        }
    }

    #[test]
    fn test_classification() {
        assert_eq!(lexical::INVALID_CHARACTER.category(), "Lexical");
        assert_eq!(transform::MISSING_IDENTIFIER.category(), "Transform");
        assert_eq!(system::INTERNAL_ERROR.severity(), Severity::Critical);
        assert!(system::INTERNAL_ERROR.halts());
        assert!(!file_processing::INVALID_EXTENSION.halts());
    }

    #[test]
    fn test_success_codes_have_no_row() {
        assert!(success::TRANSLATION_COMPLETE.metadata().is_none());
        assert_eq!(success::TRANSLATION_COMPLETE.category(), "Unknown");
        assert_eq!(Code::new("Z999").summary(), "Unknown error");
    }
}
