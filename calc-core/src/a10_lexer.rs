use crate::errors::{err, Diag};
use crate::lexer_err as LE;
use crate::pos::{CharLen, CharPos};
use crate::span::span;
use crate::token::*;
use std::str::{Chars, FromStr};

/// Scans the whole input. The first illegal character aborts the scan, and
/// no tokens are returned alongside the error.
pub fn tokenize(input: &str) -> Result<Vec<Token>, Diag> {
    Lexer::new(input).collect()
}

pub(crate) struct Lexer<'a> {
    lexer: RawLexer<'a>,
    pos: CharPos,
    done: bool,
}

impl<'a> Lexer<'a> {
    pub(crate) fn new(input: &'a str) -> Lexer<'a> {
        Lexer {
            lexer: RawLexer::new(input),
            pos: CharPos(0),
            done: false,
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Result<Token, Diag>;

    fn next(&mut self) -> Option<Result<Token, Diag>> {
        if self.done {
            return None;
        }
        loop {
            let token = self.lexer.next_raw_token();
            let lo = self.pos;
            self.pos = lo + token.len;
            let sp = span(lo, self.pos);
            let result = match token.kind {
                // Just update position
                RawKind::Whitespace => continue,
                RawKind::Eof => {
                    self.done = true;
                    return None;
                }
                RawKind::Token(kind) => Ok(Token::new(kind, sp)),
                RawKind::Illegal(ch) => err(LE::IllegalChar { ch }.span(sp)),
                RawKind::IntTooLarge => {
                    let digits = self.lexer.last_slice().to_owned();
                    err(LE::IntegerTooLarge { digits }.span(sp))
                }
            };
            // Scanning stops at the first error.
            self.done = result.is_err();
            return Some(result);
        }
    }
}

/// Before any lexing, or after finishing a RawToken, `chars` points to the
/// first character that has not been in a token yet.
/// In the middle of finding the extent of a RawToken, `chars_token_start`
/// points to the first character that will be in this token.
pub(crate) struct RawLexer<'a> {
    /// Iterator pointing at the current character
    chars: Chars<'a>,
    /// Iterator pointing at the character which starts this token
    chars_token_start: Chars<'a>,
    /// Characters consumed since `chars_token_start`
    consumed: u32,
    /// Text of the last finished token
    last_token: &'a str,
}

const EOF_CHAR: char = '\0';

impl<'a> Iterator for RawLexer<'a> {
    type Item = RawToken;

    fn next(&mut self) -> Option<RawToken> {
        let token = self.next_raw_token();
        match token.kind {
            // Stop the iterator
            RawKind::Eof => None,
            // Common case
            _ => Some(token),
        }
    }
}

impl<'a> RawLexer<'a> {
    pub(crate) fn new(input: &'a str) -> RawLexer<'a> {
        RawLexer {
            chars: input.chars(),
            chars_token_start: input.chars(),
            consumed: 0,
            last_token: "",
        }
    }

    /// Return the char that `chars` points to, and shift it along.
    #[mutants::skip] // Will loop forever if it doesn't call next()
    fn consume(&mut self) -> Option<char> {
        let c = self.chars.next()?;
        self.consumed += 1;
        Some(c)
    }

    /// Peeks the next symbol from the input stream without consuming it.
    /// If requested position doesn't exist, `EOF_CHAR` is returned.
    /// However, getting `EOF_CHAR` doesn't always mean actual end of input,
    /// since a literal null byte reads the same. Nothing matches on '\0',
    /// so the difference never matters.
    fn peek(&self) -> char {
        // `.next()` optimizes better than `.nth(0)` according to Rust repo.
        self.chars.clone().next().unwrap_or(EOF_CHAR)
    }

    /// Eats symbols while predicate returns true, or until the end of input is reached.
    /// After calling this method, `chars` will point to one after the last
    /// character satisfying the predicate.
    fn eat_while(&mut self, mut predicate: impl FnMut(char) -> bool) {
        loop {
            let peek = self.peek();
            if !predicate(peek) {
                break;
            }
            if let EOF_CHAR = peek {
                break;
            }
            self.consume();
        }
    }
}

impl<'a> RawLexer<'a> {
    /// Length of the current token, in characters.
    fn len(&self) -> CharLen {
        CharLen(self.consumed)
    }

    /// Borrowed string slice containing all chars of the current token.
    fn slice(&self) -> &'a str {
        let start = self.chars_token_start.as_str();
        let num_bytes = start.len() - self.chars.as_str().len();
        &start[0..num_bytes]
    }

    /// Slice of the token most recently returned by `next_raw_token`.
    fn last_slice(&self) -> &'a str {
        self.last_token
    }

    /// Parses a token from the input string, including whitespace.
    fn next_raw_token(&mut self) -> RawToken {
        let first_char = match self.consume() {
            Some(c) => c,
            None => return RawToken::new(RawKind::Eof, CharLen(0)),
        };
        let kind = match first_char {
            c if is_whitespace(c) => {
                self.eat_while(is_whitespace);
                RawKind::Whitespace
            }

            c if is_id_start(c) => self.ident(),

            // Numeric literal.
            '0'..='9' => self.number(),

            '+' => RawKind::Token(Plus),
            '-' => RawKind::Token(Minus),
            '*' => RawKind::Token(Mul),
            '/' => RawKind::Token(Div),
            '=' => RawKind::Token(Eq),
            '(' => RawKind::Token(LParen),
            ')' => RawKind::Token(RParen),

            c => RawKind::Illegal(c),
        };
        let len = self.len();
        self.last_token = self.slice();
        self.chars_token_start = self.chars.clone();
        self.consumed = 0;
        RawToken::new(kind, len)
    }

    fn ident(&mut self) -> RawKind {
        self.eat_while(is_id_continue);
        RawKind::Token(Identifier(self.slice().to_owned()))
    }

    fn number(&mut self) -> RawKind {
        let mut saw_dot = false;
        loop {
            match self.peek() {
                '0'..='9' => {}
                // A second '.' ends the number and is left for the next token.
                '.' if !saw_dot => saw_dot = true,
                _ => break,
            }
            self.consume();
        }
        // consumed so far: `[digits]` or `[digits].[digits]`
        if saw_dot {
            match f64::from_str(self.slice()) {
                Ok(x) => RawKind::Token(Float(x)),
                // Should be unreachable: `1.` and `1.5` both parse.
                Err(_) => RawKind::Illegal('.'),
            }
        } else {
            match i64::from_str(self.slice()) {
                Ok(x) => RawKind::Token(Int(x)),
                // Only digits were consumed, so the only failure is overflow.
                Err(_) => RawKind::IntTooLarge,
            }
        }
    }
}

fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t')
}

fn is_id_start(c: char) -> bool {
    matches!(
        c,
        '_' | 'A'..='Z' | 'a'..='z'
    )
}

fn is_id_continue(c: char) -> bool {
    matches!(
        c,
        '_' | 'A'..='Z' | 'a'..='z' | '0'..='9'
    )
}
