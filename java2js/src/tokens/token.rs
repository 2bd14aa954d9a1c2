//! Token kinds and tokens produced by the lexer
//!
//! Every Java keyword and operator the translator recognizes has its own
//! kind, so the transformer dispatches on kinds alone and never re-reads
//! spellings.
use crate::utils::Span;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed set of token categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenKind {
    // === KEYWORDS ===
    Abstract,
    Assert,
    Boolean,
    Break,
    Byte,
    Case,
    Catch,
    Char,
    Class,
    Const,
    Continue,
    Default,
    Do,
    Double,
    Else,
    Enum,
    Exports,
    Extends,
    Final,
    Finally,
    Float,
    For,
    Goto,
    If,
    Implements,
    Import,
    Instanceof,
    Int,
    Interface,
    Long,
    Module,
    Native,
    New,
    Open,
    Opens,
    Package,
    Private,
    Protected,
    Provides,
    Public,
    Requires,
    Return,
    Short,
    Static,
    Strictfp,
    Super,
    Switch,
    Synchronized,
    This,
    Throw,
    Throws,
    To,
    Transient,
    Transitive,
    Try,
    Uses,
    Void,
    Volatile,
    While,
    With,
    True,
    False,

    // === OPERATORS AND PUNCTUATION ===
    LeftBracket,        // [
    RightBracket,       // ]
    LeftParen,          // (
    RightParen,         // )
    LeftBrace,          // {
    RightBrace,         // }
    Comma,              // ,
    Colon,              // :
    Dot,                // .
    Semicolon,          // ;
    Assign,             // =
    AddAssign,          // +=
    SubtractAssign,     // -=
    MultiplyAssign,     // *=
    DivideAssign,       // /=
    Add,                // +
    Subtract,           // -
    Multiply,           // *
    Divide,             // /
    Modulo,             // %
    Increment,          // ++
    Decrement,          // --
    Equal,              // ==
    NotEqual,           // !=
    Greater,            // >
    Less,               // <
    GreaterEqual,       // >=
    LessEqual,          // <=
    LogicalAnd,         // &&
    LogicalOr,          // ||
    Not,                // !
    Question,           // ?
    BitOr,              // |
    BitAnd,             // &
    BitXor,             // ^
    BitNot,             // ~
    ShiftRight,         // >>
    UnsignedShiftRight, // >>>
    ShiftLeft,          // <<
    UnsignedShiftLeft,  // <<<

    // === LITERALS ===
    Identifier,
    Number,
    /// String and char literals, quotes included
    String,

    // === STRUCTURAL ===
    /// Whitespace or a comment; dropped by the tokenizer driver
    Space,
    /// Explicit end-of-stream marker (the word `EOF`)
    Eof,

    // === SYNTHESIZED ===
    /// `@Annotation` word
    Decorator,
    /// `= { ... }` initializer already rewritten to `= [ ... ]`
    Array,
}

impl TokenKind {
    /// Canonical spelling, or an upper-case category name for literal kinds
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Abstract => "abstract",
            Self::Assert => "assert",
            Self::Boolean => "boolean",
            Self::Break => "break",
            Self::Byte => "byte",
            Self::Case => "case",
            Self::Catch => "catch",
            Self::Char => "char",
            Self::Class => "class",
            Self::Const => "const",
            Self::Continue => "continue",
            Self::Default => "default",
            Self::Do => "do",
            Self::Double => "double",
            Self::Else => "else",
            Self::Enum => "enum",
            Self::Exports => "exports",
            Self::Extends => "extends",
            Self::Final => "final",
            Self::Finally => "finally",
            Self::Float => "float",
            Self::For => "for",
            Self::Goto => "goto",
            Self::If => "if",
            Self::Implements => "implements",
            Self::Import => "import",
            Self::Instanceof => "instanceof",
            Self::Int => "int",
            Self::Interface => "interface",
            Self::Long => "long",
            Self::Module => "module",
            Self::Native => "native",
            Self::New => "new",
            Self::Open => "open",
            Self::Opens => "opens",
            Self::Package => "package",
            Self::Private => "private",
            Self::Protected => "protected",
            Self::Provides => "provides",
            Self::Public => "public",
            Self::Requires => "requires",
            Self::Return => "return",
            Self::Short => "short",
            Self::Static => "static",
            Self::Strictfp => "strictfp",
            Self::Super => "super",
            Self::Switch => "switch",
            Self::Synchronized => "synchronized",
            Self::This => "this",
            Self::Throw => "throw",
            Self::Throws => "throws",
            Self::To => "to",
            Self::Transient => "transient",
            Self::Transitive => "transitive",
            Self::Try => "try",
            Self::Uses => "uses",
            Self::Void => "void",
            Self::Volatile => "volatile",
            Self::While => "while",
            Self::With => "with",
            Self::True => "true",
            Self::False => "false",

            Self::LeftBracket => "[",
            Self::RightBracket => "]",
            Self::LeftParen => "(",
            Self::RightParen => ")",
            Self::LeftBrace => "{",
            Self::RightBrace => "}",
            Self::Comma => ",",
            Self::Colon => ":",
            Self::Dot => ".",
            Self::Semicolon => ";",
            Self::Assign => "=",
            Self::AddAssign => "+=",
            Self::SubtractAssign => "-=",
            Self::MultiplyAssign => "*=",
            Self::DivideAssign => "/=",
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
            Self::Modulo => "%",
            Self::Increment => "++",
            Self::Decrement => "--",
            Self::Equal => "==",
            Self::NotEqual => "!=",
            Self::Greater => ">",
            Self::Less => "<",
            Self::GreaterEqual => ">=",
            Self::LessEqual => "<=",
            Self::LogicalAnd => "&&",
            Self::LogicalOr => "||",
            Self::Not => "!",
            Self::Question => "?",
            Self::BitOr => "|",
            Self::BitAnd => "&",
            Self::BitXor => "^",
            Self::BitNot => "~",
            Self::ShiftRight => ">>",
            Self::UnsignedShiftRight => ">>>",
            Self::ShiftLeft => "<<",
            Self::UnsignedShiftLeft => "<<<",

            Self::Identifier => "IDENTIFIER",
            Self::Number => "NUMBER",
            Self::String => "STRING",
            Self::Space => "SPACE",
            Self::Eof => "EOF",
            Self::Decorator => "DECORATOR",
            Self::Array => "ARRAY",
        }
    }

    /// Modifiers and declarations JavaScript has no use for; the transformer drops them
    pub const fn is_java_only_modifier(self) -> bool {
        matches!(
            self,
            Self::Package
                | Self::Public
                | Self::Private
                | Self::Protected
                | Self::Static
                | Self::Final
                | Self::Abstract
        )
    }

    pub const fn is_primitive_type(self) -> bool {
        matches!(
            self,
            Self::Void
                | Self::Double
                | Self::Float
                | Self::Char
                | Self::Short
                | Self::Boolean
                | Self::Byte
                | Self::Long
                | Self::Int
        )
    }

    /// Kinds that may start or name a declaration: a primitive type or an identifier
    pub const fn is_type_or_identifier(self) -> bool {
        self.is_primitive_type() || matches!(self, Self::Identifier)
    }

    pub const fn is_keyword(self) -> bool {
        (self as u8) <= (Self::False as u8)
    }

    pub const fn is_operator(self) -> bool {
        (self as u8) >= (Self::LeftBracket as u8) && (self as u8) <= (Self::UnsignedShiftLeft as u8)
    }

    pub const fn is_literal(self) -> bool {
        matches!(
            self,
            Self::Identifier | Self::Number | Self::String | Self::True | Self::False
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A token: its kind, the (possibly rewritten) source text, and where it came from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            text: text.into(),
            span,
        }
    }

    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({:?})", self.kind, self.text)
    }
}
