//! Single-token scanner
//!
//! [`scan`] looks at the front of the remaining source and produces exactly one
//! token together with the number of characters it covers. It never reads past
//! the token it returns, so the driver can simply advance by `consumed`.

use super::analyzer::LexerError;
use crate::config::compile_time::lexical::{
    DECORATOR_PREFIX, FOR_LOOP_BINDING, IDENTIFIER_EXTRA_CHARS,
};
use crate::grammar::keywords::{keyword_kind, operator_kind};
use crate::tokens::TokenKind;
use crate::utils::Position;

/// One scanned token before it is given a span
#[derive(Debug, Clone, PartialEq)]
pub struct Scanned {
    pub kind: TokenKind,
    pub text: String,
    /// Source characters covered, which may differ from `text.chars().count()`
    /// for tokens whose text was rewritten
    pub consumed: usize,
}

impl Scanned {
    fn new(kind: TokenKind, text: impl Into<String>, consumed: usize) -> Self {
        Self {
            kind,
            text: text.into(),
            consumed,
        }
    }

    /// A token whose text is exactly the first `len` source characters
    fn verbatim(kind: TokenKind, source: &[char], len: usize) -> Self {
        Self::new(kind, source[..len].iter().collect::<String>(), len)
    }
}

/// Scan one token from the front of `source`.
///
/// `at` is the position of `source[0]` in the file and is only used for
/// error reporting.
pub fn scan(source: &[char], at: Position) -> Result<Scanned, LexerError> {
    let Some(&first) = source.first() else {
        return Ok(Scanned::new(TokenKind::Eof, "", 0));
    };
    let second = source.get(1).copied();

    match first {
        '/' if second == Some('/') => Ok(scan_line_comment(source)),
        '/' if second == Some('*') => scan_block_comment(source, at),
        '"' => scan_string(source, at),
        '\'' => scan_char(source, at),
        '<' | '>' => Ok(scan_relational(source)),
        '=' => scan_assignment(source, at),
        c if c.is_ascii_digit() => {
            let len = run_length(source, |c| c.is_ascii_digit());
            Ok(Scanned::verbatim(TokenKind::Number, source, len))
        }
        c if c.is_alphabetic() || c == DECORATOR_PREFIX => scan_word(source, at),
        c if c.is_whitespace() => Ok(Scanned::verbatim(TokenKind::Space, source, 1)),
        c => {
            if let Some(kind) = compound_operator(c, second) {
                return Ok(Scanned::verbatim(kind, source, 2));
            }
            let mut buffer = [0u8; 4];
            match operator_kind(c.encode_utf8(&mut buffer)) {
                Some(kind) => Ok(Scanned::verbatim(kind, source, 1)),
                None => Err(LexerError::UnrecognizedCharacter {
                    character: c,
                    line: at.line,
                    column: at.column,
                }),
            }
        }
    }
}

fn run_length(source: &[char], accept: impl Fn(char) -> bool) -> usize {
    source.iter().take_while(|&&c| accept(c)).count()
}

fn is_identifier_char(c: char) -> bool {
    c.is_alphabetic() || IDENTIFIER_EXTRA_CHARS.contains(&c)
}

fn scan_line_comment(source: &[char]) -> Scanned {
    let len = source
        .iter()
        .position(|&c| c == '\n')
        .unwrap_or(source.len());
    Scanned::verbatim(TokenKind::Space, source, len)
}

fn scan_block_comment(source: &[char], at: Position) -> Result<Scanned, LexerError> {
    source[2..]
        .windows(2)
        .position(|pair| pair == ['*', '/'])
        .map(|close| Scanned::verbatim(TokenKind::Space, source, close + 4))
        .ok_or(LexerError::UnterminatedComment {
            line: at.line,
            column: at.column,
        })
}

/// No escape processing: the literal ends at the next `"`.
fn scan_string(source: &[char], at: Position) -> Result<Scanned, LexerError> {
    source[1..]
        .iter()
        .position(|&c| c == '"')
        .map(|close| Scanned::verbatim(TokenKind::String, source, close + 2))
        .ok_or(LexerError::UnterminatedString {
            line: at.line,
            column: at.column,
        })
}

/// Only `'x'` and `'\x'` are accepted.
fn scan_char(source: &[char], at: Position) -> Result<Scanned, LexerError> {
    match (source.get(1), source.get(2), source.get(3)) {
        (Some('\\'), Some(_), Some('\'')) => Ok(Scanned::verbatim(TokenKind::String, source, 4)),
        (Some(c), Some('\''), _) if *c != '\\' => {
            Ok(Scanned::verbatim(TokenKind::String, source, 3))
        }
        _ => Err(LexerError::InvalidCharLiteral {
            literal: source.iter().take(4).collect(),
            line: at.line,
            column: at.column,
        }),
    }
}

/// `<`, `<=`, `<<`, `<<<` and their `>` mirrors, longest match first
fn scan_relational(source: &[char]) -> Scanned {
    let c = source[0];
    let repeats = |i: usize| source.get(i) == Some(&c);
    let less = c == '<';

    let (kind, len) = if source.get(1) == Some(&'=') {
        let kind = if less {
            TokenKind::LessEqual
        } else {
            TokenKind::GreaterEqual
        };
        (kind, 2)
    } else if repeats(1) && repeats(2) {
        let kind = if less {
            TokenKind::UnsignedShiftLeft
        } else {
            TokenKind::UnsignedShiftRight
        };
        (kind, 3)
    } else if repeats(1) {
        let kind = if less {
            TokenKind::ShiftLeft
        } else {
            TokenKind::ShiftRight
        };
        (kind, 2)
    } else {
        let kind = if less {
            TokenKind::Less
        } else {
            TokenKind::Greater
        };
        (kind, 1)
    };

    Scanned::verbatim(kind, source, len)
}

/// Two-character operators other than the relational family
fn compound_operator(first: char, second: Option<char>) -> Option<TokenKind> {
    let kind = match (first, second?) {
        ('!', '=') => TokenKind::NotEqual,
        ('&', '&') => TokenKind::LogicalAnd,
        ('|', '|') => TokenKind::LogicalOr,
        ('+', '+') => TokenKind::Increment,
        ('-', '-') => TokenKind::Decrement,
        ('+', '=') => TokenKind::AddAssign,
        ('-', '=') => TokenKind::SubtractAssign,
        ('*', '=') => TokenKind::MultiplyAssign,
        ('/', '=') => TokenKind::DivideAssign,
        _ => return None,
    };
    Some(kind)
}

/// `==`, `=`, or an array initializer `= { ... }` rewritten to `= [ ... ]`
fn scan_assignment(source: &[char], at: Position) -> Result<Scanned, LexerError> {
    if source.get(1) == Some(&'=') {
        return Ok(Scanned::verbatim(TokenKind::Equal, source, 2));
    }

    let open = 1 + run_length(&source[1..], char::is_whitespace);
    if source.get(open) != Some(&'{') {
        return Ok(Scanned::verbatim(TokenKind::Assign, source, 1));
    }

    let mut text: String = source[..open].iter().collect();
    text.push('[');

    let mut depth = 0usize;
    for (index, &c) in source.iter().enumerate().skip(open) {
        match c {
            '{' => {
                depth += 1;
                if depth > 1 {
                    text.push('[');
                }
            }
            '}' => {
                depth -= 1;
                if depth == 0 {
                    text.push(']');
                    return Ok(Scanned::new(TokenKind::Array, text, index + 1));
                }
                text.push(']');
            }
            _ => text.push(c),
        }
    }

    Err(LexerError::UnterminatedArrayInitializer {
        line: at.line,
        column: at.column,
    })
}

fn scan_word(source: &[char], at: Position) -> Result<Scanned, LexerError> {
    let len = 1 + run_length(&source[1..], is_identifier_char);
    let word: String = source[..len].iter().collect();

    match keyword_kind(&word) {
        Some(TokenKind::Import) => {
            let end = source[len..]
                .iter()
                .position(|&c| c == ';')
                .map(|offset| len + offset)
                .unwrap_or(source.len());
            Ok(Scanned::verbatim(TokenKind::Import, source, end))
        }
        Some(kind @ (TokenKind::For | TokenKind::While | TokenKind::If)) => {
            scan_header(source, kind, len, at)
        }
        Some(kind) => Ok(Scanned::new(kind, word, len)),
        None if source[0] == DECORATOR_PREFIX => Ok(Scanned::new(TokenKind::Decorator, word, len)),
        None => Ok(Scanned::new(TokenKind::Identifier, word, len)),
    }
}

/// Slurp a `for`/`while`/`if` header up to the opening `{` of its body.
///
/// For `for`, the characters between `(` and the first whitespace run (the
/// loop variable's type) are dropped and the run becomes `let `.
fn scan_header(
    source: &[char],
    kind: TokenKind,
    keyword_len: usize,
    at: Position,
) -> Result<Scanned, LexerError> {
    let mut text: String = source[..keyword_len].iter().collect();
    let mut index = keyword_len + run_length(&source[keyword_len..], char::is_whitespace);

    let mut splice_pending = kind == TokenKind::For;
    let mut paren_seen = false;

    while let Some(&c) = source.get(index) {
        if c == '{' {
            break;
        }

        if splice_pending && paren_seen {
            if c.is_whitespace() {
                // The whole run is consumed, so `int   i` and `int i` both give `let i`
                index += run_length(&source[index..], char::is_whitespace);
                text.push_str(FOR_LOOP_BINDING);
                splice_pending = false;
            } else {
                index += 1;
            }
            continue;
        }

        if c == '(' {
            paren_seen = true;
        }
        text.push(c);
        index += 1;
    }

    if text.trim_end().ends_with(')') {
        Ok(Scanned::new(kind, text, index))
    } else {
        Err(LexerError::MissingParenthesis {
            keyword: kind.as_str(),
            line: at.line,
            column: at.column,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn scan_str(source: &str) -> Result<Scanned, LexerError> {
        let chars: Vec<char> = source.chars().collect();
        scan(&chars, Position::start())
    }

    fn scanned(source: &str) -> (TokenKind, String, usize) {
        let token = scan_str(source).unwrap();
        (token.kind, token.text, token.consumed)
    }

    #[test]
    fn test_comments_are_space() {
        assert_eq!(
            scanned("// note\nint x;"),
            (TokenKind::Space, "// note".to_string(), 7)
        );
        assert_eq!(
            scanned("/* a\n b */int"),
            (TokenKind::Space, "/* a\n b */".to_string(), 10)
        );
        assert_matches!(
            scan_str("/* never closed"),
            Err(LexerError::UnterminatedComment { line: 1, column: 1 })
        );
    }

    #[test]
    fn test_string_literal_has_no_escapes() {
        assert_eq!(
            scanned("\"abc\" + x"),
            (TokenKind::String, "\"abc\"".to_string(), 5)
        );
        assert_eq!(
            scanned(r#""a\"b""#),
            (TokenKind::String, r#""a\""#.to_string(), 4)
        );
        assert_matches!(
            scan_str("\"abc"),
            Err(LexerError::UnterminatedString { .. })
        );
    }

    #[test]
    fn test_char_literals() {
        assert_eq!(scanned("'a';"), (TokenKind::String, "'a'".to_string(), 3));
        assert_eq!(
            scanned(r"'\n';"),
            (TokenKind::String, r"'\n'".to_string(), 4)
        );
        assert_matches!(
            scan_str("'ab'"),
            Err(LexerError::InvalidCharLiteral { literal, .. }) if literal == "'ab'"
        );
        assert_matches!(scan_str("'"), Err(LexerError::InvalidCharLiteral { .. }));
    }

    #[test]
    fn test_relational_operators_are_greedy() {
        assert_eq!(scanned("< b").0, TokenKind::Less);
        assert_eq!(scanned("<= b").0, TokenKind::LessEqual);
        assert_eq!(scanned("<< b").0, TokenKind::ShiftLeft);
        assert_eq!(scanned("<<< b").0, TokenKind::UnsignedShiftLeft);
        assert_eq!(scanned("> b").0, TokenKind::Greater);
        assert_eq!(scanned(">= b").0, TokenKind::GreaterEqual);
        assert_eq!(scanned(">> b").0, TokenKind::ShiftRight);
        assert_eq!(
            scanned(">>>= b"),
            (TokenKind::UnsignedShiftRight, ">>>".to_string(), 3)
        );
    }

    #[test]
    fn test_compound_operators() {
        assert_eq!(scanned("== b").0, TokenKind::Equal);
        assert_eq!(scanned("!= b").0, TokenKind::NotEqual);
        assert_eq!(scanned("! b").0, TokenKind::Not);
        assert_eq!(scanned("&& b").0, TokenKind::LogicalAnd);
        assert_eq!(scanned("|| b").0, TokenKind::LogicalOr);
        assert_eq!(scanned("++;").0, TokenKind::Increment);
        assert_eq!(scanned("--;").0, TokenKind::Decrement);
        assert_eq!(scanned("+= 1").0, TokenKind::AddAssign);
        assert_eq!(scanned("-= 1").0, TokenKind::SubtractAssign);
        assert_eq!(scanned("*= 1").0, TokenKind::MultiplyAssign);
        assert_eq!(scanned("/= 1").0, TokenKind::DivideAssign);
        assert_eq!(scanned("+ 1").0, TokenKind::Add);
        assert_eq!(scanned("/ 2").0, TokenKind::Divide);
        assert_eq!(scanned("& 2").0, TokenKind::BitAnd);
    }

    #[test]
    fn test_assignment_and_array_initializer() {
        assert_eq!(scanned("= 5;"), (TokenKind::Assign, "=".to_string(), 1));
        assert_eq!(
            scanned("=  { \"a\", \"b\" };"),
            (TokenKind::Array, "=  [ \"a\", \"b\" ]".to_string(), 15)
        );
        assert_eq!(
            scanned("={{1, 2}, {3}};"),
            (TokenKind::Array, "=[[1, 2], [3]]".to_string(), 14)
        );
        assert_matches!(
            scan_str("= { 1, 2"),
            Err(LexerError::UnterminatedArrayInitializer { .. })
        );
    }

    #[test]
    fn test_numbers_are_plain_digits() {
        assert_eq!(scanned("123;"), (TokenKind::Number, "123".to_string(), 3));
        assert_eq!(scanned("1.5"), (TokenKind::Number, "1".to_string(), 1));
    }

    #[test]
    fn test_words() {
        assert_eq!(scanned("class Foo"), (TokenKind::Class, "class".to_string(), 5));
        assert_eq!(
            scanned("List<String> xs"),
            (TokenKind::Identifier, "List<String>".to_string(), 12)
        );
        assert_eq!(scanned("int x"), (TokenKind::Int, "int".to_string(), 3));
        assert_eq!(
            scanned("int[] xs"),
            (TokenKind::Identifier, "int[]".to_string(), 5)
        );
        assert_eq!(
            scanned("String[] xs"),
            (TokenKind::Identifier, "String[]".to_string(), 8)
        );
        assert_eq!(
            scanned("x1 = 2"),
            (TokenKind::Identifier, "x".to_string(), 1)
        );
        assert_eq!(
            scanned("@Override\n"),
            (TokenKind::Decorator, "@Override".to_string(), 9)
        );
        assert_eq!(scanned("EOF"), (TokenKind::Eof, "EOF".to_string(), 3));
        assert_eq!(scanned("true)").0, TokenKind::True);
    }

    #[test]
    fn test_import_carries_path() {
        assert_eq!(
            scanned("import java.util.List;\nclass"),
            (TokenKind::Import, "import java.util.List".to_string(), 21)
        );
        assert_eq!(
            scanned("import a.b"),
            (TokenKind::Import, "import a.b".to_string(), 10)
        );
    }

    #[test]
    fn test_for_header_splices_let() {
        let source = "for (int i = 0; i < n; i++) {";
        let (kind, text, consumed) = scanned(source);
        assert_eq!(kind, TokenKind::For);
        assert_eq!(text, "for(let i = 0; i < n; i++) ");
        assert_eq!(consumed, source.len() - 1);
    }

    #[test]
    fn test_for_header_splice_takes_whole_whitespace_run() {
        let (_, text, _) = scanned("for (int  \t i = 0; i < n; i++) {");
        assert_eq!(text, "for(let i = 0; i < n; i++) ");

        // only the first run is replaced
        let (_, text, _) = scanned("for (final int i : xs) {");
        assert_eq!(text, "for(let int i : xs) ");
    }

    #[test]
    fn test_while_and_if_headers() {
        assert_eq!(
            scanned("while (x < 10) { x++; }"),
            (TokenKind::While, "while(x < 10) ".to_string(), 15)
        );
        assert_eq!(
            scanned("if(a == b){"),
            (TokenKind::If, "if(a == b)".to_string(), 10)
        );
    }

    #[test]
    fn test_header_without_closing_paren() {
        assert_matches!(
            scan_str("if (a == b {"),
            Err(LexerError::MissingParenthesis { keyword: "if", .. })
        );
        assert_matches!(
            scan_str("while {"),
            Err(LexerError::MissingParenthesis { keyword: "while", .. })
        );
    }

    #[test]
    fn test_whitespace_is_single_character() {
        assert_eq!(scanned("  x"), (TokenKind::Space, " ".to_string(), 1));
        assert_eq!(scanned("\n"), (TokenKind::Space, "\n".to_string(), 1));
    }

    #[test]
    fn test_unrecognized_character() {
        let chars: Vec<char> = "#".chars().collect();
        let at = Position::new(4, 2, 3);
        assert_matches!(
            scan(&chars, at),
            Err(LexerError::UnrecognizedCharacter {
                character: '#',
                line: 2,
                column: 3
            })
        );
    }

    #[test]
    fn test_punctuation_from_table() {
        assert_eq!(scanned(";").0, TokenKind::Semicolon);
        assert_eq!(scanned("{").0, TokenKind::LeftBrace);
        assert_eq!(scanned("?").0, TokenKind::Question);
        assert_eq!(scanned("~").0, TokenKind::BitNot);
    }
}
