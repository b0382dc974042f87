use calc_lang::{render_tree, run, tokenize};
use wasm_bindgen::prelude::*;

/// Parse tree of `input` as box-drawing text, or the error message.
/// Blank input gives an empty string.
#[wasm_bindgen]
pub fn parse_tree(input: &str) -> String {
    match run(input) {
        Ok(Some(tree)) => render_tree(&tree),
        Ok(None) => String::new(),
        Err(diag) => diag.to_string(),
    }
}

/// Space-separated tokens of `input`, or the error message.
#[wasm_bindgen]
pub fn token_list(input: &str) -> String {
    match tokenize(input) {
        Ok(tokens) => tokens
            .iter()
            .map(|t| t.to_string())
            .collect::<Vec<_>>()
            .join(" "),
        Err(diag) => diag.to_string(),
    }
}

#[cfg(test)]
mod web_tests {
    use super::*;
    use expect_test::expect;

    #[test]
    fn tree() {
        expect![[r#"
            └── -
                ├── Number(7)
                └── Var(y)
        "#]]
        .assert_eq(&parse_tree("7 - y"));
        expect!["Error at position 2: Expected ')' to close the '(' at position 0"]
            .assert_eq(&parse_tree("(7 "));
        expect![""].assert_eq(&parse_tree(""));
    }

    #[test]
    fn tokens() {
        expect!["IDENTIFIER:n EQ INT:3 DIV LPAREN FLOAT:0.5 RPAREN"].assert_eq(&token_list("n=3/(0.5)"));
        expect!["Error at position 1: Illegal character '!'"].assert_eq(&token_list("n!"));
    }
}
