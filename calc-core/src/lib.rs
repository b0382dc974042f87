//! Front-end for a tiny arithmetic language: numbers, identifiers, `+ - * /`,
//! parentheses and a single `name = expr` assignment per line.
//!
//! ```
//! let tree = calc_lang::run("x = 1 + 2").unwrap().unwrap();
//! print!("{}", calc_lang::render_tree(&tree));
//! ```

#[path = "a10_lexer.rs"]
pub mod lexer;
#[path = "a11_lexer_err.rs"]
mod lexer_err;
#[path = "a15_token.rs"]
pub mod token;
#[path = "a20_parser.rs"]
pub mod parser;
#[path = "a21_parser_err.rs"]
mod parser_err;
#[path = "a25_ast.rs"]
pub mod ast;
#[path = "a30_print_tree.rs"]
pub mod print_tree;
#[path = "b04_pos.rs"]
pub mod pos;
#[path = "b05_span.rs"]
pub mod span;
#[path = "b10_errors.rs"]
pub mod errors;

pub use ast::Node;
pub use errors::{Diag, Stage};
pub use lexer::tokenize;
pub use parser::{parse, parse_with, ParseOptions, ParseResult};
pub use print_tree::render_tree;
pub use token::{Token, TokenKind};

/// Scans and parses one line. Blank input gives `Ok(None)`.
pub fn run(input: &str) -> ParseResult {
    run_with(input, &ParseOptions::default())
}

pub fn run_with(input: &str, options: &ParseOptions) -> ParseResult {
    let tokens = tokenize(input)?;
    parse_with(&tokens, options)
}

#[cfg(test)]
mod run_tests {
    use super::*;

    #[test]
    fn lex_errors_win_over_syntax_errors() {
        // `* )` is also bad syntax, but the scanner stops first.
        let diag = run("* ) @").unwrap_err();
        assert_eq!(diag.stage, Stage::Lex);
        assert_eq!(diag.to_string(), "Error at position 4: Illegal character '@'");
    }

    #[test]
    fn independent_calls() {
        assert!(run("(").is_err());
        let node = run("a = b").unwrap().unwrap();
        assert!(matches!(node.kind, ast::VarAssign(..)));
    }

    #[test]
    fn strict_mode() {
        let strict = ParseOptions {
            require_end_of_input: true,
        };
        assert!(run("1 1").unwrap().is_some());
        let diag = run_with("1 1", &strict).unwrap_err();
        assert_eq!(diag.stage, Stage::Syntax);
        assert_eq!(diag.position(), pos::CharPos(2));
    }
}
