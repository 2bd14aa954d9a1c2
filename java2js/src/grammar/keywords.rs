//! Keyword and operator tables
//!
//! Both tables are built once on first use and never change afterwards, so
//! any number of translation threads can read them without locking.
use crate::tokens::TokenKind;
use std::collections::HashMap;
use std::sync::OnceLock;

const KEYWORDS: &[(&str, TokenKind)] = &[
    ("abstract", TokenKind::Abstract),
    ("assert", TokenKind::Assert),
    ("boolean", TokenKind::Boolean),
    ("break", TokenKind::Break),
    ("byte", TokenKind::Byte),
    ("case", TokenKind::Case),
    ("catch", TokenKind::Catch),
    ("char", TokenKind::Char),
    ("class", TokenKind::Class),
    ("const", TokenKind::Const),
    ("continue", TokenKind::Continue),
    ("default", TokenKind::Default),
    ("do", TokenKind::Do),
    ("double", TokenKind::Double),
    ("else", TokenKind::Else),
    ("enum", TokenKind::Enum),
    ("exports", TokenKind::Exports),
    ("extends", TokenKind::Extends),
    ("final", TokenKind::Final),
    ("finally", TokenKind::Finally),
    ("float", TokenKind::Float),
    ("for", TokenKind::For),
    ("goto", TokenKind::Goto),
    ("if", TokenKind::If),
    ("implements", TokenKind::Implements),
    ("import", TokenKind::Import),
    ("instanceof", TokenKind::Instanceof),
    ("int", TokenKind::Int),
    ("interface", TokenKind::Interface),
    ("long", TokenKind::Long),
    ("module", TokenKind::Module),
    ("native", TokenKind::Native),
    ("new", TokenKind::New),
    ("open", TokenKind::Open),
    ("opens", TokenKind::Opens),
    ("package", TokenKind::Package),
    ("private", TokenKind::Private),
    ("protected", TokenKind::Protected),
    ("provides", TokenKind::Provides),
    ("public", TokenKind::Public),
    ("requires", TokenKind::Requires),
    ("return", TokenKind::Return),
    ("short", TokenKind::Short),
    ("static", TokenKind::Static),
    ("strictfp", TokenKind::Strictfp),
    ("super", TokenKind::Super),
    ("switch", TokenKind::Switch),
    ("synchronized", TokenKind::Synchronized),
    ("this", TokenKind::This),
    ("throw", TokenKind::Throw),
    ("throws", TokenKind::Throws),
    ("to", TokenKind::To),
    ("transient", TokenKind::Transient),
    ("transitive", TokenKind::Transitive),
    ("try", TokenKind::Try),
    ("uses", TokenKind::Uses),
    ("void", TokenKind::Void),
    ("volatile", TokenKind::Volatile),
    ("while", TokenKind::While),
    ("with", TokenKind::With),
    ("true", TokenKind::True),
    ("false", TokenKind::False),
    ("EOF", TokenKind::Eof),
];

const OPERATORS: &[(&str, TokenKind)] = &[
    ("]", TokenKind::RightBracket),
    ("[", TokenKind::LeftBracket),
    (")", TokenKind::RightParen),
    ("(", TokenKind::LeftParen),
    ("}", TokenKind::RightBrace),
    ("{", TokenKind::LeftBrace),
    (",", TokenKind::Comma),
    (":", TokenKind::Colon),
    (".", TokenKind::Dot),
    (";", TokenKind::Semicolon),
    ("*", TokenKind::Multiply),
    ("=", TokenKind::Assign),
    ("+=", TokenKind::AddAssign),
    ("-=", TokenKind::SubtractAssign),
    ("*=", TokenKind::MultiplyAssign),
    ("/=", TokenKind::DivideAssign),
    ("+", TokenKind::Add),
    ("-", TokenKind::Subtract),
    ("/", TokenKind::Divide),
    ("%", TokenKind::Modulo),
    ("++", TokenKind::Increment),
    ("--", TokenKind::Decrement),
    ("==", TokenKind::Equal),
    ("!=", TokenKind::NotEqual),
    (">", TokenKind::Greater),
    ("<", TokenKind::Less),
    (">=", TokenKind::GreaterEqual),
    ("<=", TokenKind::LessEqual),
    ("&&", TokenKind::LogicalAnd),
    ("||", TokenKind::LogicalOr),
    ("!", TokenKind::Not),
    ("?", TokenKind::Question),
    ("|", TokenKind::BitOr),
    ("&", TokenKind::BitAnd),
    ("^", TokenKind::BitXor),
    ("~", TokenKind::BitNot),
    (">>", TokenKind::ShiftRight),
    (">>>", TokenKind::UnsignedShiftRight),
    ("<<", TokenKind::ShiftLeft),
    ("<<<", TokenKind::UnsignedShiftLeft),
];

static KEYWORD_TABLE: OnceLock<HashMap<&'static str, TokenKind>> = OnceLock::new();
static OPERATOR_TABLE: OnceLock<HashMap<&'static str, TokenKind>> = OnceLock::new();

fn keyword_table() -> &'static HashMap<&'static str, TokenKind> {
    KEYWORD_TABLE.get_or_init(|| KEYWORDS.iter().copied().collect())
}

fn operator_table() -> &'static HashMap<&'static str, TokenKind> {
    OPERATOR_TABLE.get_or_init(|| OPERATORS.iter().copied().collect())
}

/// Kind of a reserved word, if `word` is one (case-sensitive)
pub fn keyword_kind(word: &str) -> Option<TokenKind> {
    keyword_table().get(word).copied()
}

/// Kind of an operator or punctuation spelling
pub fn operator_kind(symbol: &str) -> Option<TokenKind> {
    operator_table().get(symbol).copied()
}

/// Every spelling in the keyword table
pub fn reserved_keywords() -> impl Iterator<Item = &'static str> {
    KEYWORDS.iter().map(|(spelling, _)| *spelling)
}

/// Every spelling in the operator table
pub fn symbol_operators() -> impl Iterator<Item = &'static str> {
    OPERATORS.iter().map(|(spelling, _)| *spelling)
}
