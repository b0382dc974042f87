use crate::pos::CharPos;
use crate::span::Span;
use std::fmt;

pub trait Diagnostic {
    #[must_use]
    fn into_diag(self) -> Diag;
}

/// Which half of the pipeline rejected the input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    /// The scanner met a character or literal it cannot turn into a token.
    Lex,
    /// The tokens do not form a statement.
    Syntax,
}

#[must_use]
#[derive(Clone, PartialEq)]
pub struct Diag {
    pub stage: Stage,
    pub message: String,
    pub span: Span,
}

impl Diag {
    /// Zero-based character offset the error points at.
    pub fn position(&self) -> CharPos {
        self.span.lo
    }

    /// The message without the position prefix.
    pub fn details(&self) -> &str {
        &self.message
    }
}

impl fmt::Debug for Diag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} at {:?}: {}", self.stage, self.span, &self.message)
    }
}

impl fmt::Display for Diag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Error at position {}: {}", self.position(), &self.message)
    }
}

impl std::error::Error for Diag {}

/// Errors to attach a span to with `.span(sp)`, then pass to `err`.
/// The leading `Lex;` or `Syntax;` picks the `Stage` of every error in the block.
macro_rules! def_token_errors {
    ($stage:ident; $(
        pub struct $Err:ident $def:tt
        msg: $self:ident => $msg:expr;
    )+) => {$(
        pub struct $Err $def
        impl $Err {
            pub fn span(self, span: Span) -> Spanned<$Err> {
                Spanned {node: self, span}
            }
            fn msg($self) -> String {
                $msg
            }
        }
        impl Diagnostic for Spanned<$Err> {
            fn into_diag(self) -> Diag {
                Diag {
                    stage: $crate::errors::Stage::$stage,
                    span: self.span,
                    message: self.node.msg(),
                }
            }
        }
    )+};

    ($stage:ident; $(
        $Err:ident => $msg:expr,
    )+) => {$(
        pub struct $Err;
        impl $Err {
            pub fn span(self, span: Span) -> Spanned<$Err> {
                Spanned {node: self, span}
            }
            fn msg(self) -> String {
                $msg
            }
        }
        impl Diagnostic for Spanned<$Err> {
            fn into_diag(self) -> Diag {
                Diag {
                    stage: $crate::errors::Stage::$stage,
                    span: self.span,
                    message: self.node.msg(),
                }
            }
        }
    )+};
}

pub(crate) use def_token_errors;

pub(crate) fn err<T>(x: impl Diagnostic) -> Result<T, Diag> {
    Err(x.into_diag())
}
