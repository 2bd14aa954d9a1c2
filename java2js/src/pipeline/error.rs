use crate::file_processor::FileProcessorError;
use crate::lexical::LexerError;
use crate::logging::codes;
use crate::transform::TransformError;

/// Pipeline processing errors
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("File processing failed: {0}")]
    FileProcessing(#[from] FileProcessorError),

    #[error("{0}")]
    LexicalAnalysis(#[from] LexerError),

    #[error("{0}")]
    Transform(#[from] TransformError),

    #[error("Pipeline error: {message}")]
    Pipeline { message: String },
}

impl PipelineError {
    pub fn pipeline_error(message: &str) -> Self {
        Self::Pipeline {
            message: message.to_string(),
        }
    }

    /// Lexical or transform failure: the source was read but could not be translated
    pub fn is_translation_error(&self) -> bool {
        matches!(self, Self::LexicalAnalysis(_) | Self::Transform(_))
    }

    /// The input was not a `.java` file and was never read
    pub fn is_skipped_input(&self) -> bool {
        matches!(
            self,
            Self::FileProcessing(FileProcessorError::InvalidExtension { .. })
        )
    }

    pub fn error_code(&self) -> crate::logging::Code {
        match self {
            Self::FileProcessing(error) => error.error_code(),
            Self::LexicalAnalysis(error) => error.error_code(),
            Self::Transform(error) => error.error_code(),
            Self::Pipeline { .. } => codes::system::INTERNAL_ERROR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::Span;

    #[test]
    fn test_classification() {
        let lexical = PipelineError::from(LexerError::UnterminatedString { line: 1, column: 1 });
        assert!(lexical.is_translation_error());
        assert!(!lexical.is_skipped_input());

        let transform = PipelineError::from(TransformError::MissingClassName {
            span: Span::default(),
        });
        assert!(transform.is_translation_error());
        assert_eq!(transform.error_code().as_str(), "E041");

        let skipped = PipelineError::from(FileProcessorError::InvalidExtension {
            path: "notes.txt".to_string(),
        });
        assert!(skipped.is_skipped_input());
        assert!(!skipped.is_translation_error());

        let io = PipelineError::from(FileProcessorError::FileNotFound {
            path: "Main.java".to_string(),
        });
        assert!(!io.is_skipped_input());
        assert!(!io.is_translation_error());
    }

    #[test]
    fn test_translation_errors_display_their_own_message() {
        let error = PipelineError::from(TransformError::MissingIdentifier {
            found: ";".to_string(),
            span: None,
        });
        assert!(error.to_string().starts_with("missing IDENTIFIER"));
    }
}
