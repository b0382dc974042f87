use crate::span::{Span, Spanned};
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Lit {
    /// e.g. `1`
    Integer(i64),
    /// e.g. `1.5`
    Float(f64),
}

impl fmt::Display for Lit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Lit::Integer(x) => write!(f, "{x}"),
            Lit::Float(x) => write!(f, "{x:?}"),
        }
    }
}

pub use BinOpKind::*;
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BinOpKind {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
}

impl fmt::Display for BinOpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
        };
        write!(f, "{}", s)
    }
}

pub type Operator = Spanned<BinOpKind>;

#[derive(Clone, PartialEq)]
pub struct Ident {
    pub name: String,
    pub span: Span,
}

impl fmt::Display for Ident {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl fmt::Debug for Ident {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:?})Ident({:?})", self.span, self.name)
    }
}

pub use NodeKind::*;
#[derive(Clone, PartialEq)]
pub enum NodeKind {
    /// Number literal like `1` or `2.5`.
    Number(Lit),
    /// Variable read like `x`.
    VarAccess(String),
    /// Assignment statement `x = 3`.
    VarAssign(Ident, Box<Node>),
    /// Binary operation like `a + b`.
    BinOp(Operator, Box<Node>, Box<Node>),
}

/// A node of the syntax tree. Each node owns its children; nothing is shared.
#[derive(Clone, PartialEq)]
pub struct Node {
    pub kind: NodeKind,
    pub span: Span,
}

impl Node {
    pub fn new(kind: NodeKind, span: Span) -> Node {
        Node { kind, span }
    }
}

impl fmt::Debug for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number(x) => write!(f, "Number({x:?})"),
            VarAccess(x) => write!(f, "Var({x:?})"),
            VarAssign(ident, value) => f
                .debug_struct("VarAssign")
                .field("ident", ident)
                .field("value", value)
                .finish(),
            BinOp(op, left, right) => {
                // `{:?}` never has spacing but `{:#?}` puts newlines and indents.
                write!(f, "BinOp[{op:?}]")?;
                f.debug_tuple("").field(left).field(right).finish()
            }
        }
    }
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:?}){:#?}", self.span, self.kind)
    }
}
