//! Shared primitive types used by the lexer, transformer and logging.

pub mod span;

pub use span::{Position, Span};
