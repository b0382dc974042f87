use crate::errors::{def_token_errors, Diag, Diagnostic};
use crate::span::{Span, Spanned};

def_token_errors! {
Lex;
pub struct IllegalChar {
    pub ch: char,
}
msg: self => format!("Illegal character '{}'", self.ch);

pub struct IntegerTooLarge {
    pub digits: String,
}
msg: self => format!("Integer literal '{}' is too large", self.digits);
}
