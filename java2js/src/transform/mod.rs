//! Java-to-JavaScript rewriting of a token stream

pub mod context;
pub mod error;
pub mod transformer;

pub use context::{ClassContext, IndentDepth};
pub use error::TransformError;
pub use transformer::{TransformMetrics, Transformer};

use crate::logging::codes;
use crate::tokens::TokenStream;

/// Rewrite a token stream with preferences from the installed runtime config
pub fn transform(stream: TokenStream) -> Result<String, TransformError> {
    create_transformer().transform(stream)
}

pub fn create_transformer() -> Transformer {
    Transformer::with_preferences(crate::config::runtime::current().transform)
}

/// Check that every transform error code is registered (for system startup)
pub fn validate_transform() -> Result<(), String> {
    let required = [
        codes::transform::MISSING_IDENTIFIER,
        codes::transform::MISSING_CLASS_NAME,
        codes::transform::UNTERMINATED_PARAMETER_LIST,
    ];

    for code in &required {
        if code.metadata().is_none() {
            return Err(format!(
                "Transform error code {} not found in metadata registry",
                code.as_str()
            ));
        }
    }
    Ok(())
}
