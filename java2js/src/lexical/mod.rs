//! Lexical analysis
//!
//! Turns Java source text into a [`TokenStream`]. Scanning of individual
//! tokens lives in [`scanner`]; [`analyzer`] drives it across a whole file.

pub mod analyzer;
pub mod scanner;

use crate::config::constants::compile_time::lexical::*;
use crate::logging::codes;
use crate::tokens::TokenStream;

pub use analyzer::{LexerError, LexicalAnalyzer, LexicalMetrics};
pub use scanner::{scan, Scanned};

/// Tokenize source text with preferences from the installed runtime config
pub fn tokenize(source: &str) -> Result<TokenStream, LexerError> {
    create_analyzer().tokenize(source)
}

pub fn create_analyzer() -> LexicalAnalyzer {
    LexicalAnalyzer::with_preferences(crate::config::runtime::current().lexical)
}

/// Lexical error codes that must be present in the metadata registry
const LEXICAL_CODES: [crate::logging::Code; 7] = [
    codes::lexical::INVALID_CHARACTER,
    codes::lexical::UNTERMINATED_STRING,
    codes::lexical::INVALID_CHAR_LITERAL,
    codes::lexical::UNTERMINATED_COMMENT,
    codes::lexical::UNTERMINATED_ARRAY,
    codes::lexical::MISSING_PARENTHESIS,
    codes::lexical::TOO_MANY_TOKENS,
];

/// Check that every lexical error code is registered and the limits are sane.
/// Run once at startup.
pub fn validate_tokenization() -> Result<(), String> {
    for code in &LEXICAL_CODES {
        if code.metadata().is_none() {
            return Err(format!(
                "Lexical error code {} not found in metadata registry",
                code.as_str()
            ));
        }
    }

    if MAX_TOKEN_COUNT == 0 {
        return Err("MAX_TOKEN_COUNT cannot be zero".to_string());
    }
    if MAX_TOKEN_COUNT > 10_000_000 {
        return Err("MAX_TOKEN_COUNT exceeds reasonable limit".to_string());
    }

    crate::log_debug!("Lexical limits initialized",
        "max_token_count" => MAX_TOKEN_COUNT,
        "identifier_extra_chars" => IDENTIFIER_EXTRA_CHARS.iter().collect::<String>()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokens::TokenKind;

    #[test]
    fn test_validate_tokenization() {
        assert!(validate_tokenization().is_ok());
    }

    #[test]
    fn test_module_tokenize() {
        let stream = tokenize("import java.util.List;").unwrap();
        let kinds: Vec<_> = stream.tokens().iter().map(|t| t.kind).collect();
        assert_eq!(kinds, vec![TokenKind::Import, TokenKind::Semicolon]);
    }
}
