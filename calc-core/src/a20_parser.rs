use crate::ast;
use crate::errors::{err, Diag};
use crate::parser_err as PE;
use crate::pos::CharPos;
use crate::span::{point, respan, span, Span};
use crate::token::*;

/// Knobs for `parse_with`. The default matches `parse`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Reject tokens left over after a complete statement instead of
    /// ignoring them.
    pub require_end_of_input: bool,
}

/// `Ok(None)` means there were no tokens at all.
pub type ParseResult = Result<Option<ast::Node>, Diag>;

type Bnode = Box<ast::Node>;
type NodeResult = Result<Bnode, Diag>;

/// Which operators a `bin_op` level accepts.
type OpSet = fn(&TokenKind) -> Option<ast::BinOpKind>;

fn node(kind: ast::NodeKind, span: Span) -> Bnode {
    Box::new(ast::Node::new(kind, span))
}

/// Parses one statement. Tokens after it are ignored.
pub fn parse(tokens: &[Token]) -> ParseResult {
    parse_with(tokens, &ParseOptions::default())
}

pub fn parse_with(tokens: &[Token], options: &ParseOptions) -> ParseResult {
    Parser::new(tokens).parse(options)
}

struct Parser<'a> {
    tokens: &'a [Token],
    /// Index of the next unconsumed token.
    cursor: usize,
}

macro_rules! consume_token {
    ($self:ident, $tok:pat, $err:expr) => {{
        let Some(next) = $self.peek() else {
            return err($err.span($self.eof_span()));
        };
        let $tok = next.kind else {
            return err($err.span(next.span));
        };
        $self.cursor += 1;
        next
    }};
}

impl<'a> Parser<'a> {
    fn new(tokens: &'a [Token]) -> Parser<'a> {
        Parser { tokens, cursor: 0 }
    }

    fn parse(&mut self, options: &ParseOptions) -> ParseResult {
        if self.peek().is_none() {
            return Ok(None);
        }
        let stmt = self.statement()?;
        if options.require_end_of_input {
            self.assert_stream_done()?;
        }
        Ok(Some(*stmt))
    }

    fn assert_stream_done(&self) -> Result<(), Diag> {
        match self.peek() {
            Some(tok) => err(PE::TrailingInput {
                found: tok.kind.clone(),
            }
            .span(tok.span)),
            None => Ok(()),
        }
    }

    fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.cursor)
    }

    fn peek_second(&self) -> Option<&'a Token> {
        self.tokens.get(self.cursor + 1)
    }

    fn next(&mut self) -> Option<&'a Token> {
        let tok = self.tokens.get(self.cursor)?;
        self.cursor += 1;
        Some(tok)
    }

    /// Empty span just past the last token.
    fn eof_span(&self) -> Span {
        let end = self.tokens.last().map_or(CharPos(0), |tok| tok.span.hi);
        point(end)
    }
}

/* Grammar */
impl<'a> Parser<'a> {
    /// statement := Identifier Eq expr | expr
    fn statement(&mut self) -> NodeResult {
        // Only commit to an assignment when both tokens are there, so that a
        // leading identifier can still start a plain expression.
        if let (
            Some(Token {
                kind: Identifier(name),
                span: name_span,
            }),
            Some(Token { kind: Eq, .. }),
        ) = (self.peek(), self.peek_second())
        {
            // x =
            self.cursor += 2;
            // 1 + 2
            let value = self.expr()?;
            let ident = ast::Ident {
                name: name.clone(),
                span: *name_span,
            };
            let s = span(name_span.lo, value.span.hi);
            return Ok(node(ast::VarAssign(ident, value), s));
        }
        self.expr()
    }

    /// expr := term ((Plus|Minus) term)*
    fn expr(&mut self) -> NodeResult {
        self.bin_op(Self::term, additive_op)
    }

    /// term := factor ((Mul|Div) factor)*
    fn term(&mut self) -> NodeResult {
        self.bin_op(Self::factor, multiplicative_op)
    }

    /// factor := Int | Float | Identifier | LParen expr RParen
    fn factor(&mut self) -> NodeResult {
        let Some(tok) = self.next() else {
            return err(PE::UnexpectedEof.span(self.eof_span()));
        };
        match &tok.kind {
            Int(x) => Ok(node(ast::Number(ast::Lit::Integer(*x)), tok.span)),
            Float(x) => Ok(node(ast::Number(ast::Lit::Float(*x)), tok.span)),
            Identifier(name) => Ok(node(ast::VarAccess(name.clone()), tok.span)),
            LParen => {
                let inner = self.expr()?;
                let close_paren = consume_token!(
                    self,
                    RParen,
                    PE::ExpectedCloseParen {
                        open_paren: tok.span.lo
                    }
                );
                // No node for the parens, but the span covers them.
                let ast::Node { kind, .. } = *inner;
                Ok(node(kind, span(tok.span.lo, close_paren.span.hi)))
            }
            Plus | Minus | Mul | Div | RParen | Eq => err(PE::UnexpectedToken {
                found: tok.kind.clone(),
            }
            .span(tok.span)),
        }
    }

    /// Parses `operand (op operand)*`, folding to the left so that
    /// `a - b - c` becomes `(a - b) - c`.
    fn bin_op(&mut self, operand: fn(&mut Self) -> NodeResult, op_set: OpSet) -> NodeResult {
        let mut left = operand(self)?;
        while let Some(tok) = self.peek() {
            let Some(op) = op_set(&tok.kind) else {
                break;
            };
            self.cursor += 1;
            let right = operand(self)?;
            let s = span(left.span.lo, right.span.hi);
            left = node(ast::BinOp(respan(op, tok.span), left, right), s);
        }
        Ok(left)
    }
}

fn additive_op(kind: &TokenKind) -> Option<ast::BinOpKind> {
    match kind {
        Plus => Some(ast::Add),
        Minus => Some(ast::Sub),
        _ => None,
    }
}

fn multiplicative_op(kind: &TokenKind) -> Option<ast::BinOpKind> {
    match kind {
        Mul => Some(ast::Mul),
        Div => Some(ast::Div),
        _ => None,
    }
}
