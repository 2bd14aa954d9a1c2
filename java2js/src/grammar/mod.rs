//! Java spellings recognized by the lexer

pub mod keywords;

pub use keywords::{keyword_kind, operator_kind, reserved_keywords, symbol_operators};
