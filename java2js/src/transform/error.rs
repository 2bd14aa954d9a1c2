use crate::logging::codes;
use crate::utils::Span;

/// Errors raised while rewriting a token stream
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TransformError {
    /// `new` followed by something other than a class name
    #[error("missing IDENTIFIER after new, found '{found}'")]
    MissingIdentifier { found: String, span: Option<Span> },

    #[error("missing class name after class")]
    MissingClassName { span: Span },

    #[error("missing \")\" to close parameter list of {name}")]
    UnterminatedParameterList { name: String, span: Span },
}

impl TransformError {
    pub fn error_code(&self) -> crate::logging::Code {
        match self {
            TransformError::MissingIdentifier { .. } => codes::transform::MISSING_IDENTIFIER,
            TransformError::MissingClassName { .. } => codes::transform::MISSING_CLASS_NAME,
            TransformError::UnterminatedParameterList { .. } => {
                codes::transform::UNTERMINATED_PARAMETER_LIST
            }
        }
    }

    /// Source location of the token that triggered the error
    pub fn span(&self) -> Option<Span> {
        match self {
            TransformError::MissingIdentifier { span, .. } => *span,
            TransformError::MissingClassName { span } => Some(*span),
            TransformError::UnterminatedParameterList { span, .. } => Some(*span),
        }
    }
}
