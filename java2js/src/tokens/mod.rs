//! Token system for the Java lexer
//!
//! - **[`TokenKind`]** - closed enumeration of keyword, operator, literal and
//!   synthesized kinds
//! - **[`Token`]** - kind, literal text and source span
//! - **[`TokenStream`]** - the ordered token sequence, consumed front to back
//!   through a cursor by the transformer

pub mod token;
pub mod token_stream;

pub use token::{Token, TokenKind};
pub use token_stream::TokenStream;

pub use crate::utils::{Position, Span};
