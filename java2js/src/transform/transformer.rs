//! Token-stream rewriter
//!
//! Walks the stream once, front to back, and appends JavaScript text for each
//! token or short token pattern. Declarations lose their types, methods lose
//! their modifiers and parameter types, and braces drive the indentation.

use super::context::{ClassContext, Emitter, IndentDepth};
use super::error::TransformError;
use crate::config::constants::compile_time::transform::MAX_INDENT_WIDTH;
use crate::config::runtime::TransformPreferences;
use crate::logging::codes;
use crate::tokens::{Token, TokenKind, TokenStream};
use crate::{log_debug, log_error, log_success};

/// What the rewriter did to one stream
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TransformMetrics {
    pub classes: usize,
    pub constructors: usize,
    /// Headers outside any class, emitted as `function name(`
    pub functions: usize,
    pub methods: usize,
    pub declarations: usize,
    pub max_depth: usize,
    /// Depth when the loop stopped; zero for brace-balanced input
    pub final_depth: usize,
}

struct RewriteState {
    emitter: Emitter,
    depth: IndentDepth,
    class: Option<ClassContext>,
}

impl RewriteState {
    fn newline(&mut self) {
        self.emitter.newline(self.depth);
    }
}

/// Rewrites Java tokens into JavaScript source text
pub struct Transformer {
    metrics: TransformMetrics,
    preferences: TransformPreferences,
}

impl Transformer {
    pub fn new() -> Self {
        Self::with_preferences(TransformPreferences::default())
    }

    pub fn with_preferences(preferences: TransformPreferences) -> Self {
        Self {
            metrics: TransformMetrics::default(),
            preferences,
        }
    }

    /// Rewrite a whole stream.
    ///
    /// A stream whose final token is the `EOF` marker produces no output.
    pub fn transform(&mut self, mut stream: TokenStream) -> Result<String, TransformError> {
        self.metrics = TransformMetrics::default();

        let indent_width = self.preferences.indent_width.min(MAX_INDENT_WIDTH);
        let mut state = RewriteState {
            emitter: Emitter::new(indent_width),
            depth: IndentDepth::default(),
            class: None,
        };

        log_debug!("Starting transform",
            "token_count" => stream.len(),
            "indent_width" => indent_width
        );

        let stop_at_eof = stream.ends_with_eof();
        while !stream.is_at_end() && !stop_at_eof {
            if let Err(error) = self.step(&mut stream, &mut state) {
                self.report_error(&error);
                return Err(error);
            }
        }

        self.metrics.final_depth = state.depth.get();

        if self.preferences.log_rewrite_summary {
            log_success!(codes::success::TRANSFORM_COMPLETE, "Transform completed",
                "classes" => self.metrics.classes,
                "constructors" => self.metrics.constructors,
                "functions" => self.metrics.functions,
                "methods" => self.metrics.methods,
                "declarations" => self.metrics.declarations,
                "max_depth" => self.metrics.max_depth
            );
        } else {
            log_success!(codes::success::TRANSFORM_COMPLETE, "Transform completed",
                "output_bytes" => state.emitter.as_str().len()
            );
        }

        Ok(state.emitter.into_string())
    }

    pub fn metrics(&self) -> &TransformMetrics {
        &self.metrics
    }

    /// Consume one token or token pattern from the front of the stream
    fn step(
        &mut self,
        stream: &mut TokenStream,
        state: &mut RewriteState,
    ) -> Result<(), TransformError> {
        let Some(token) = stream.current().cloned() else {
            return Ok(());
        };

        match token.kind {
            TokenKind::Package => {
                stream.skip_through(TokenKind::Semicolon);
                return Ok(());
            }
            kind if kind.is_java_only_modifier() => {}
            kind if kind.is_type_or_identifier() => {
                return self.rewrite_declaration(stream, state, &token);
            }
            TokenKind::Semicolon => {
                state.emitter.push(";");
                state.newline();
            }
            TokenKind::Import => {
                let path = token.text[TokenKind::Import.as_str().len()..].trim_start();
                state.emitter.push(&format!("import \"{}\";\n", path));
                stream.advance();
                stream.consume_if(TokenKind::Semicolon);
                return Ok(());
            }
            TokenKind::Assert => state.emitter.push("console.assert("),
            TokenKind::Break => {
                state.emitter.push("break;");
                state.depth = state.depth.shallower();
                state.newline();
            }
            TokenKind::Case => {
                state.emitter.push("case ");
                self.enter_block(state);
                state.newline();
            }
            TokenKind::Catch => {
                state.emitter.push("catch");
                self.enter_block(state);
            }
            TokenKind::Class => {
                let name = stream
                    .peek_ahead(1)
                    .map(|next| next.text.clone())
                    .ok_or(TransformError::MissingClassName { span: token.span })?;
                state.emitter.push(&format!("class {}", name));
                state.class = Some(ClassContext::new(name, state.depth));
                self.metrics.classes += 1;
                stream.advance_by(2);
                return Ok(());
            }
            TokenKind::LeftBrace => {
                state.emitter.push(" { ");
                self.enter_block(state);
                state.newline();
            }
            TokenKind::RightBrace => {
                state.emitter.dedent();
                state.emitter.push("}");
                let outer = state.depth.shallower();
                if state
                    .class
                    .as_ref()
                    .is_some_and(|class| class.opened_at == outer)
                {
                    state.class = None;
                }
                state.depth = outer;
                state.newline();
            }
            TokenKind::New => {
                let name = match stream.peek_ahead(1) {
                    Some(next) if next.kind == TokenKind::Identifier => next.text.clone(),
                    next => {
                        return Err(TransformError::MissingIdentifier {
                            found: next
                                .map(|t| t.text.clone())
                                .unwrap_or_else(|| "end of input".to_string()),
                            span: next.map(|t| t.span).or(Some(token.span)),
                        })
                    }
                };
                state.emitter.push(&format!("new {}", name));
                stream.advance_by(2);
                return Ok(());
            }
            TokenKind::Assign => state.emitter.push(" = "),
            TokenKind::Return => state.emitter.push("return "),
            TokenKind::Decorator => {
                state.emitter.push(&token.text);
                state.newline();
            }
            _ => state.emitter.push(&token.text),
        }

        stream.advance();
        Ok(())
    }

    /// A primitive type or identifier at the front of the stream
    fn rewrite_declaration(
        &mut self,
        stream: &mut TokenStream,
        state: &mut RewriteState,
        token: &Token,
    ) -> Result<(), TransformError> {
        match stream.kind_at(1) {
            Some(TokenKind::LeftParen) => {
                state.emitter.push(&token.text);
                stream.advance();
            }
            Some(TokenKind::Assign) => {
                state.emitter.push(&token.text);
                state.emitter.push(" = ");
                stream.advance_by(2);
            }
            Some(TokenKind::Identifier) => {
                let name = stream
                    .peek_ahead(1)
                    .map(|next| next.text.clone())
                    .unwrap_or_default();

                match stream.kind_at(2) {
                    Some(TokenKind::LeftParen) => {
                        return self.rewrite_header(stream, state, name, token);
                    }
                    Some(TokenKind::Assign | TokenKind::Semicolon) => {
                        self.push_binding(state, &name);
                    }
                    Some(TokenKind::Array) => {
                        self.push_binding(state, &name);
                        state.emitter.push(" ");
                    }
                    _ => state.emitter.push(&name),
                }
                stream.advance_by(2);
            }
            _ => {
                state.emitter.push(&token.text);
                stream.advance();
            }
        }
        Ok(())
    }

    /// Variables bind with `let` only outside class bodies
    fn push_binding(&mut self, state: &mut RewriteState, name: &str) {
        if state.class.is_none() {
            state.emitter.push("let ");
        }
        state.emitter.push(name);
        self.metrics.declarations += 1;
    }

    /// `Type name(params` up to, not including, the closing `)`
    fn rewrite_header(
        &mut self,
        stream: &mut TokenStream,
        state: &mut RewriteState,
        name: String,
        token: &Token,
    ) -> Result<(), TransformError> {
        let prefix = match &state.class {
            None => {
                self.metrics.functions += 1;
                format!("function {}(", name)
            }
            Some(class) if class.is_constructor(&name) => {
                self.metrics.constructors += 1;
                "constructor (".to_string()
            }
            Some(_) => {
                self.metrics.methods += 1;
                format!("{}(", name)
            }
        };
        state.emitter.push(&prefix);
        stream.advance_by(3);

        // Parameters come as `Type name` pairs; only the names survive
        let mut words = 0usize;
        loop {
            let Some(param) = stream.current() else {
                return Err(TransformError::UnterminatedParameterList {
                    name,
                    span: token.span,
                });
            };

            match param.kind {
                TokenKind::RightParen => break,
                TokenKind::Comma => state.emitter.push(", "),
                TokenKind::Decorator => {}
                kind if kind.is_java_only_modifier() => {}
                kind if kind.is_type_or_identifier() => {
                    words += 1;
                    if words % 2 == 0 {
                        state.emitter.push(&param.text);
                    }
                }
                _ => state.emitter.push(&param.text),
            }
            stream.advance();
        }

        Ok(())
    }

    fn enter_block(&mut self, state: &mut RewriteState) {
        state.depth = state.depth.deeper();
        self.metrics.max_depth = self.metrics.max_depth.max(state.depth.get());
    }

    fn report_error(&self, error: &TransformError) {
        let message = error.to_string();
        match error.span() {
            Some(span) => log_error!(error.error_code(), &message, span = span,
                "line" => span.start().line,
                "column" => span.start().column
            ),
            None => log_error!(error.error_code(), &message),
        }
    }
}

impl Default for Transformer {
    fn default() -> Self {
        Self::new()
    }
}
