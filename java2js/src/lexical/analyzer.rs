//! Tokenizer driver
//!
//! Repeatedly asks the scanner for the next token, drops whitespace and
//! comments, tracks positions for diagnostics, and enforces the token limit.

use super::scanner::scan;
use crate::config::constants::compile_time::lexical::MAX_TOKEN_COUNT;
use crate::config::runtime::LexicalPreferences;
use crate::logging::codes;
use crate::tokens::{Token, TokenKind, TokenStream};
use crate::utils::{Position, Span};
use crate::{log_debug, log_error, log_success};
use std::collections::HashMap;

/// Lexical analysis errors
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LexerError {
    #[error("Unterminated block comment starting at line {line}, column {column}")]
    UnterminatedComment { line: u32, column: u32 },

    #[error("Unterminated string literal at line {line}, column {column}")]
    UnterminatedString { line: u32, column: u32 },

    #[error("Invalid character literal {literal} at line {line}, column {column}")]
    InvalidCharLiteral {
        literal: String,
        line: u32,
        column: u32,
    },

    #[error("Unterminated array initializer at line {line}, column {column}")]
    UnterminatedArrayInitializer { line: u32, column: u32 },

    #[error("missing \")\" in {keyword} statement at line {line}, column {column}")]
    MissingParenthesis {
        keyword: &'static str,
        line: u32,
        column: u32,
    },

    #[error("Unrecognized character found in source '{character}' at line {line}, column {column}")]
    UnrecognizedCharacter {
        character: char,
        line: u32,
        column: u32,
    },

    #[error("Too many tokens: {count} (max {MAX_TOKEN_COUNT})")]
    TooManyTokens { count: usize },
}

impl LexerError {
    pub fn error_code(&self) -> crate::logging::Code {
        match self {
            LexerError::UnterminatedComment { .. } => codes::lexical::UNTERMINATED_COMMENT,
            LexerError::UnterminatedString { .. } => codes::lexical::UNTERMINATED_STRING,
            LexerError::InvalidCharLiteral { .. } => codes::lexical::INVALID_CHAR_LITERAL,
            LexerError::UnterminatedArrayInitializer { .. } => codes::lexical::UNTERMINATED_ARRAY,
            LexerError::MissingParenthesis { .. } => codes::lexical::MISSING_PARENTHESIS,
            LexerError::UnrecognizedCharacter { .. } => codes::lexical::INVALID_CHARACTER,
            LexerError::TooManyTokens { .. } => codes::lexical::TOO_MANY_TOKENS,
        }
    }

    /// Line and column of the offending token, if the error has one
    pub fn location(&self) -> Option<(u32, u32)> {
        match self {
            LexerError::UnterminatedComment { line, column }
            | LexerError::UnterminatedString { line, column }
            | LexerError::InvalidCharLiteral { line, column, .. }
            | LexerError::UnterminatedArrayInitializer { line, column }
            | LexerError::MissingParenthesis { line, column, .. }
            | LexerError::UnrecognizedCharacter { line, column, .. } => Some((*line, *column)),
            LexerError::TooManyTokens { .. } => None,
        }
    }
}

/// Counters collected while tokenizing one source
#[derive(Debug, Default, Clone)]
pub struct LexicalMetrics {
    pub total_tokens: usize,
    pub keyword_tokens: usize,
    pub identifier_tokens: usize,
    pub operator_tokens: usize,
    pub literal_tokens: usize,
    pub decorator_tokens: usize,
    pub array_initializers: usize,
    pub comment_count: usize,
    pub whitespace_chars: usize,
    pub source_chars: usize,

    // Runtime preference-controlled metrics
    pub operator_usage_patterns: HashMap<String, usize>,
}

impl LexicalMetrics {
    pub(crate) fn record_token(&mut self, token: &Token, preferences: &LexicalPreferences) {
        self.total_tokens += 1;

        match token.kind {
            kind if kind.is_keyword() => self.keyword_tokens += 1,
            TokenKind::Identifier => self.identifier_tokens += 1,
            TokenKind::Decorator => self.decorator_tokens += 1,
            TokenKind::Array => self.array_initializers += 1,
            kind if kind.is_literal() => self.literal_tokens += 1,
            kind if kind.is_operator() => {
                self.operator_tokens += 1;

                if preferences.track_operator_patterns {
                    *self
                        .operator_usage_patterns
                        .entry(token.text.clone())
                        .or_insert(0) += 1;
                }
            }
            _ => {}
        }
    }

    pub(crate) fn record_skipped(&mut self, text: &str) {
        if text.starts_with('/') {
            self.comment_count += 1;
        } else {
            self.whitespace_chars += 1;
        }
    }

    /// Most frequently used operator spelling, if patterns were tracked
    pub fn most_used_operator(&self) -> Option<(&str, usize)> {
        self.operator_usage_patterns
            .iter()
            .max_by(|a, b| a.1.cmp(b.1).then_with(|| b.0.cmp(a.0)))
            .map(|(op, count)| (op.as_str(), *count))
    }
}

/// Turns Java source into a [`TokenStream`]
pub struct LexicalAnalyzer {
    metrics: LexicalMetrics,
    preferences: LexicalPreferences,
}

impl LexicalAnalyzer {
    pub fn new() -> Self {
        Self {
            metrics: LexicalMetrics::default(),
            preferences: LexicalPreferences::default(),
        }
    }

    pub fn with_preferences(preferences: LexicalPreferences) -> Self {
        Self {
            metrics: LexicalMetrics::default(),
            preferences,
        }
    }

    /// Tokenize a complete source text.
    ///
    /// Whitespace and comments never reach the stream. The first scanning
    /// error aborts the whole run.
    pub fn tokenize(&mut self, source: &str) -> Result<TokenStream, LexerError> {
        self.metrics = LexicalMetrics::default();

        let chars: Vec<char> = source.chars().collect();
        self.metrics.source_chars = chars.len();

        log_debug!("Starting lexical analysis",
            "char_count" => chars.len(),
            "max_tokens_allowed" => MAX_TOKEN_COUNT
        );

        let mut tokens = Vec::new();
        let mut offset = 0;
        let mut position = Position::start();

        while offset < chars.len() {
            let scanned = match scan(&chars[offset..], position) {
                Ok(scanned) => scanned,
                Err(error) => {
                    self.report_error(&error, position);
                    return Err(error);
                }
            };
            debug_assert!(scanned.consumed > 0, "scanner made no progress");

            let end = position.advance_chars(&chars[offset..offset + scanned.consumed]);

            if scanned.kind == TokenKind::Space {
                self.metrics.record_skipped(&scanned.text);
            } else {
                if tokens.len() >= MAX_TOKEN_COUNT {
                    let error = LexerError::TooManyTokens {
                        count: tokens.len() + 1,
                    };
                    log_error!(error.error_code(), "Token limit exceeded",
                        "token_count" => tokens.len() + 1,
                        "max_tokens" => MAX_TOKEN_COUNT
                    );
                    return Err(error);
                }

                let token = Token::new(scanned.kind, scanned.text, Span::new(position, end));
                self.metrics.record_token(&token, &self.preferences);
                tokens.push(token);
            }

            offset += scanned.consumed;
            position = end;
        }

        if self.preferences.collect_detailed_metrics {
            log_success!(codes::success::TOKENIZATION_COMPLETE,
                "Tokenization completed",
                "token_count" => self.metrics.total_tokens,
                "keywords" => self.metrics.keyword_tokens,
                "identifiers" => self.metrics.identifier_tokens,
                "operators" => self.metrics.operator_tokens,
                "literals" => self.metrics.literal_tokens,
                "comments" => self.metrics.comment_count,
                "lines" => position.line
            );
        } else {
            log_success!(codes::success::TOKENIZATION_COMPLETE,
                "Tokenization completed",
                "token_count" => self.metrics.total_tokens
            );
        }

        Ok(TokenStream::new(tokens))
    }

    pub fn metrics(&self) -> &LexicalMetrics {
        &self.metrics
    }

    fn report_error(&self, error: &LexerError, at: Position) {
        let message = if self.preferences.include_position_in_errors {
            error.to_string()
        } else {
            format!("Lexical error: {:?}", error.error_code().as_str())
        };
        let span = Span::new(at, at.advance(' '));
        log_error!(error.error_code(), &message, span = span,
            "line" => at.line,
            "column" => at.column
        );
    }
}

impl Default for LexicalAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}
