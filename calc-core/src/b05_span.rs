use crate::pos::{CharLen, CharPos};
use std::fmt;

/// A half-open span: (lo..hi) including lo and excluding hi.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub lo: CharPos,
    pub hi: CharPos,
}

impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.hi - self.lo == CharLen(1) {
            write!(f, "{}", self.lo)
        } else if self.hi - self.lo == CharLen(0) {
            write!(f, "(!{}!)", self.lo)
        } else {
            write!(f, "{}-{}", self.lo, CharPos(self.hi.0 - 1))
        }
    }
}

#[derive(Clone, Copy, PartialEq)]
pub struct Spanned<T> {
    pub node: T,
    pub span: Span,
}

impl<T: fmt::Debug> fmt::Debug for Spanned<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}({:?})", self.node, self.span)
    }
}

pub(crate) fn respan<T>(t: T, sp: Span) -> Spanned<T> {
    Spanned { node: t, span: sp }
}

pub(crate) fn span(lo: CharPos, hi: CharPos) -> Span {
    Span { lo, hi }
}

/// Zero-width span, used for errors at the end of the input.
pub(crate) fn point(at: CharPos) -> Span {
    Span { lo: at, hi: at }
}
