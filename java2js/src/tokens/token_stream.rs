//! Cursor over the significant tokens of one source file

use crate::tokens::token::{Token, TokenKind};

/// Ordered token sequence with a forward-only cursor.
///
/// The sequence is built once by the tokenizer driver and never modified;
/// consuming a token only moves the cursor past it.
#[derive(Debug, Clone, Default)]
pub struct TokenStream {
    tokens: Vec<Token>,
    position: usize,
}

impl TokenStream {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            position: 0,
        }
    }

    /// The token under the cursor
    pub fn current(&self) -> Option<&Token> {
        self.tokens.get(self.position)
    }

    /// The token `n` positions past the cursor (`peek_ahead(0)` is `current()`)
    pub fn peek_ahead(&self, n: usize) -> Option<&Token> {
        self.tokens.get(self.position + n)
    }

    /// Kind of the token `n` positions past the cursor
    pub fn kind_at(&self, n: usize) -> Option<TokenKind> {
        self.peek_ahead(n).map(|token| token.kind)
    }

    pub fn check(&self, n: usize, kind: TokenKind) -> bool {
        self.kind_at(n) == Some(kind)
    }

    /// Consume the current token and return it
    pub fn advance(&mut self) -> Option<&Token> {
        let token = self.tokens.get(self.position);
        if token.is_some() {
            self.position += 1;
        }
        token
    }

    /// Consume up to `n` tokens
    pub fn advance_by(&mut self, n: usize) {
        self.position = (self.position + n).min(self.tokens.len());
    }

    /// Consume the current token if it has the given kind
    pub fn consume_if(&mut self, kind: TokenKind) -> bool {
        if self.check(0, kind) {
            self.position += 1;
            true
        } else {
            false
        }
    }

    /// Consume tokens through the first token of `kind` (inclusive); if none
    /// remains, consume everything.
    pub fn skip_through(&mut self, kind: TokenKind) {
        while let Some(token) = self.advance() {
            if token.kind == kind {
                break;
            }
        }
    }

    pub fn is_at_end(&self) -> bool {
        self.position >= self.tokens.len()
    }

    /// Whether the final token of the whole sequence is the explicit end marker
    pub fn ends_with_eof(&self) -> bool {
        self.tokens
            .last()
            .map(|token| token.kind == TokenKind::Eof)
            .unwrap_or(false)
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn remaining(&self) -> usize {
        self.tokens.len() - self.position
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }
}

impl From<Vec<Token>> for TokenStream {
    fn from(tokens: Vec<Token>) -> Self {
        Self::new(tokens)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::Span;

    fn stream(kinds: &[TokenKind]) -> TokenStream {
        TokenStream::new(
            kinds
                .iter()
                .map(|&kind| Token::new(kind, kind.as_str(), Span::default()))
                .collect(),
        )
    }

    #[test]
    fn test_navigation() {
        let mut tokens = stream(&[TokenKind::Int, TokenKind::Identifier, TokenKind::Semicolon]);

        assert_eq!(tokens.kind_at(0), Some(TokenKind::Int));
        assert!(tokens.check(2, TokenKind::Semicolon));
        assert_eq!(tokens.kind_at(3), None);

        assert_eq!(tokens.advance().map(|t| t.kind), Some(TokenKind::Int));
        assert_eq!(tokens.position(), 1);
        assert_eq!(tokens.remaining(), 2);

        tokens.advance_by(10);
        assert!(tokens.is_at_end());
        assert!(tokens.advance().is_none());
        assert_eq!(tokens.len(), 3);
    }

    #[test]
    fn test_consume_if() {
        let mut tokens = stream(&[TokenKind::Semicolon, TokenKind::RightBrace]);
        assert!(!tokens.consume_if(TokenKind::RightBrace));
        assert!(tokens.consume_if(TokenKind::Semicolon));
        assert_eq!(tokens.kind_at(0), Some(TokenKind::RightBrace));
    }

    #[test]
    fn test_skip_through() {
        let mut tokens = stream(&[
            TokenKind::Identifier,
            TokenKind::Dot,
            TokenKind::Semicolon,
            TokenKind::Class,
        ]);
        tokens.skip_through(TokenKind::Semicolon);
        assert_eq!(tokens.kind_at(0), Some(TokenKind::Class));

        tokens.skip_through(TokenKind::Semicolon);
        assert!(tokens.is_at_end());
    }

    #[test]
    fn test_ends_with_eof() {
        assert!(stream(&[TokenKind::Identifier, TokenKind::Eof]).ends_with_eof());
        assert!(!stream(&[TokenKind::Eof, TokenKind::Identifier]).ends_with_eof());
        assert!(!TokenStream::default().ends_with_eof());
    }
}
