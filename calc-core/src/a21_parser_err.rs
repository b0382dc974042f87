use crate::errors::{def_token_errors, Diag, Diagnostic};
use crate::pos::CharPos;
use crate::span::{Span, Spanned};
use crate::token;

def_token_errors! {
Syntax;
UnexpectedEof => format!("Unexpected end of input"),
}

def_token_errors! {
Syntax;
pub struct UnexpectedToken {
    pub found: token::TokenKind,
}
msg: self => format!("Unexpected token: {}", self.found);

pub struct ExpectedCloseParen {
    pub open_paren: CharPos,
}
msg: self => format!("Expected ')' to close the '(' at position {}", self.open_paren);

pub struct TrailingInput {
    pub found: token::TokenKind,
}
msg: self => format!("Unexpected token after end of statement: {}", self.found);
}
