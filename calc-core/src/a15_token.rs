use crate::pos::CharLen;
use crate::span::Span;
use std::fmt;

pub use TokenKind::*;
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    /* Literals */
    /// e.g. `1`, `042`
    Int(i64),
    /// e.g. `1.5`, `1.`
    Float(f64),

    /* Operators */
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Mul,
    /// `/`
    Div,

    /* Punctuation */
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `=`
    Eq,

    /// e.g. `x`, `_tmp1`
    Identifier(String),
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Int(x) => write!(f, "INT:{x}"),
            Float(x) => write!(f, "FLOAT:{x:?}"),
            Identifier(name) => write!(f, "IDENTIFIER:{name}"),
            Plus => write!(f, "PLUS"),
            Minus => write!(f, "MINUS"),
            Mul => write!(f, "MUL"),
            Div => write!(f, "DIV"),
            LParen => write!(f, "LPAREN"),
            RParen => write!(f, "RPAREN"),
            Eq => write!(f, "EQ"),
        }
    }
}

#[derive(Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, span: Span) -> Token {
        Token { kind, span }
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} [{:?}]", self.kind, self.span)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)
    }
}

/// Output of the raw lexer, before whitespace is dropped and positions are
/// assigned.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum RawKind {
    Token(TokenKind),
    Whitespace,
    /// A character that starts no token.
    Illegal(char),
    /// An integer literal that does not fit in an `i64`.
    IntTooLarge,
    Eof,
}

#[derive(Clone, PartialEq)]
pub(crate) struct RawToken {
    pub(crate) kind: RawKind,
    pub(crate) len: CharLen,
}

impl RawToken {
    pub(crate) fn new(kind: RawKind, len: CharLen) -> RawToken {
        RawToken { kind, len }
    }
}

impl fmt::Debug for RawToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} [len={}]", self.kind, u32::from(self.len))
    }
}
