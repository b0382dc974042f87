use crate::ast::*;
use std::fmt;

/// Box-drawing rendering of a syntax tree, one node per line:
///
/// ```text
/// └── =
///     ├── Var(x)
///     └── +
///         ├── Number(1)
///         └── Number(2)
/// ```
pub struct Tree<'a>(pub &'a Node);

pub fn render_tree(node: &Node) -> String {
    Tree(node).to_string()
}

impl fmt::Display for Tree<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_node(f, self.0, "", true)
    }
}

fn write_line(f: &mut fmt::Formatter<'_>, indent: &str, last: bool, label: &dyn fmt::Display) -> fmt::Result {
    let marker = if last { "└── " } else { "├── " };
    writeln!(f, "{indent}{marker}{label}")
}

fn child_indent(indent: &str, last: bool) -> String {
    let pad = if last { "    " } else { "│   " };
    format!("{indent}{pad}")
}

fn write_node(f: &mut fmt::Formatter<'_>, node: &Node, indent: &str, last: bool) -> fmt::Result {
    match &node.kind {
        Number(lit) => write_line(f, indent, last, &format_args!("Number({lit})")),
        VarAccess(name) => write_line(f, indent, last, &format_args!("Var({name})")),
        VarAssign(ident, value) => {
            write_line(f, indent, last, &"=")?;
            let indent = child_indent(indent, last);
            write_line(f, &indent, false, &format_args!("Var({ident})"))?;
            write_node(f, value, &indent, true)
        }
        BinOp(op, left, right) => {
            write_line(f, indent, last, &op.node)?;
            let indent = child_indent(indent, last);
            write_node(f, left, &indent, false)?;
            write_node(f, right, &indent, true)
        }
    }
}

#[cfg(test)]
mod print_tree_tests {
    use super::*;
    use crate::run;
    use expect_test::{expect, Expect};

    fn check_tree(input: &str, expect: Expect) {
        let actual = match run(input) {
            Ok(Some(node)) => render_tree(&node),
            Ok(None) => String::new(),
            Err(diag) => format!("{}\n", diag),
        };
        expect.assert_eq(&actual)
    }

    #[test]
    fn leaves() {
        check_tree(
            "42",
            expect![[r#"
                └── Number(42)
            "#]],
        );
        check_tree(
            "2.50",
            expect![[r#"
                └── Number(2.5)
            "#]],
        );
        check_tree(
            "speed",
            expect![[r#"
                └── Var(speed)
            "#]],
        );
    }

    #[test]
    fn assignment() {
        check_tree(
            "x = 1 + 2",
            expect![[r#"
                └── =
                    ├── Var(x)
                    └── +
                        ├── Number(1)
                        └── Number(2)
            "#]],
        );
    }

    #[test]
    fn nested_binary() {
        check_tree(
            "(a - 1) * (b / 2.0)",
            expect![[r#"
                └── *
                    ├── -
                    │   ├── Var(a)
                    │   └── Number(1)
                    └── /
                        ├── Var(b)
                        └── Number(2.0)
            "#]],
        );
    }

    #[test]
    fn errors_are_not_trees() {
        check_tree(
            "1 + #",
            expect![[r#"
                Error at position 4: Illegal character '#'
            "#]],
        );
        check_tree("", expect![""]);
    }
}
