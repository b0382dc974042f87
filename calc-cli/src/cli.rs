use calc_lang::{render_tree, run_with, tokenize, Diag, ParseOptions};
use std::io::{self, BufRead, Write};
use std::process::ExitCode;

const USAGE: &str = "\
Usage: calc [--strict] [--tokens] [-e <line>]

With no -e, reads one statement per line from stdin and prints its parse tree.
Type 'exit' or 'quit' (or send EOF) to leave.

Options:
  -e, --eval <line>  Parse a single line and exit
      --strict       Reject tokens left over after the statement
      --tokens       Print the token list before the tree
  -h, --help         Show this message";

const PROMPT: &str = "calc> ";

#[derive(Debug, Default, PartialEq)]
struct Config {
    options: ParseOptions,
    show_tokens: bool,
    eval: Option<String>,
}

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{}", err);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<ExitCode, String> {
    let Some(config) = parse_args(std::env::args().skip(1))? else {
        println!("{USAGE}");
        return Ok(ExitCode::SUCCESS);
    };
    let mut stdout = io::stdout();
    let mut stderr = io::stderr();
    match &config.eval {
        Some(line) => {
            let ok = process_line(line, &config, &mut stdout, &mut stderr)
                .map_err(|e| format!("{}", e))?;
            Ok(if ok {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
        None => {
            repl(&config).map_err(|e| format!("{}", e))?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// `Ok(None)` means help was requested.
fn parse_args(args: impl IntoIterator<Item = String>) -> Result<Option<Config>, String> {
    let mut config = Config::default();
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok(None),
            "--strict" => config.options.require_end_of_input = true,
            "--tokens" => config.show_tokens = true,
            "-e" | "--eval" => {
                let Some(line) = args.next() else {
                    return Err(format!("Missing line after '{arg}'.\n{USAGE}"));
                };
                config.eval = Some(line);
            }
            _ => return Err(format!("Unrecognized argument '{arg}'.\n{USAGE}")),
        }
    }
    Ok(Some(config))
}

#[mutants::skip] // Blocks on stdin
fn repl(config: &Config) -> io::Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut stdout = io::stdout();
    let mut stderr = io::stderr();
    loop {
        write!(stdout, "{PROMPT}")?;
        stdout.flush()?;
        let Some(line) = lines.next() else {
            // EOF: leave the shell prompt on a fresh line.
            writeln!(stdout)?;
            return Ok(());
        };
        let line = line?;
        if is_exit(&line) {
            return Ok(());
        }
        process_line(&line, config, &mut stdout, &mut stderr)?;
    }
}

fn is_exit(line: &str) -> bool {
    let cmd = line.trim().to_lowercase();
    cmd == "exit" || cmd == "quit"
}

/// Returns whether the line parsed.
fn process_line(
    line: &str,
    config: &Config,
    out: &mut impl Write,
    err_out: &mut impl Write,
) -> io::Result<bool> {
    if config.show_tokens {
        // A scan error is reported below by `run_with`.
        if let Ok(tokens) = tokenize(line) {
            let list: Vec<String> = tokens.iter().map(|t| t.to_string()).collect();
            writeln!(out, "Tokens: [{}]", list.join(", "))?;
        }
    }
    match run_with(line, &config.options) {
        Ok(Some(tree)) => {
            writeln!(out, "Parse Tree:")?;
            write!(out, "{}", render_tree(&tree))?;
            Ok(true)
        }
        Ok(None) => Ok(true),
        Err(diag) => {
            report(line, &diag, err_out)?;
            Ok(false)
        }
    }
}

/// Prints the error with a caret under the offending position.
fn report(line: &str, diag: &Diag, err_out: &mut impl Write) -> io::Result<()> {
    writeln!(err_out, "{}", diag)?;
    writeln!(err_out, "  {}", line)?;
    let column = usize::from(diag.position());
    writeln!(err_out, "  {:width$}^", "", width = column)
}

#[cfg(test)]
mod cli_tests {
    use super::*;
    use expect_test::{expect, Expect};

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn check_line(line: &str, config: &Config, expect: Expect) {
        let mut out = vec![];
        let mut err_out = vec![];
        let ok = process_line(line, config, &mut out, &mut err_out).unwrap();
        let actual = format!(
            "ok={ok}\n{}{}",
            String::from_utf8(out).unwrap(),
            String::from_utf8(err_out).unwrap()
        );
        expect.assert_eq(&actual)
    }

    #[test]
    fn arguments() {
        assert_eq!(parse_args(args(&[])), Ok(Some(Config::default())));
        assert_eq!(parse_args(args(&["--help"])), Ok(None));
        let config = parse_args(args(&["--strict", "--tokens", "-e", "x = 1"]))
            .unwrap()
            .unwrap();
        assert!(config.options.require_end_of_input);
        assert!(config.show_tokens);
        assert_eq!(config.eval.as_deref(), Some("x = 1"));
        assert!(parse_args(args(&["-e"])).is_err());
        assert!(parse_args(args(&["--verbose"])).is_err());
    }

    #[test]
    fn exit_commands() {
        assert!(is_exit("exit"));
        assert!(is_exit("  QUIT "));
        assert!(!is_exit("exits"));
        assert!(!is_exit("x = exit"));
    }

    #[test]
    fn prints_tree() {
        check_line(
            "a = (b + 1) * 2",
            &Config::default(),
            expect![[r#"
                ok=true
                Parse Tree:
                └── =
                    ├── Var(a)
                    └── *
                        ├── +
                        │   ├── Var(b)
                        │   └── Number(1)
                        └── Number(2)
            "#]],
        );
    }

    #[test]
    fn prints_tokens() {
        let config = Config {
            show_tokens: true,
            ..Config::default()
        };
        check_line(
            "rate = 1.5 * x",
            &config,
            expect![[r#"
                ok=true
                Tokens: [IDENTIFIER:rate, EQ, FLOAT:1.5, MUL, IDENTIFIER:x]
                Parse Tree:
                └── =
                    ├── Var(rate)
                    └── *
                        ├── Number(1.5)
                        └── Var(x)
            "#]],
        );
    }

    #[test]
    fn blank_line() {
        check_line(
            "   ",
            &Config::default(),
            expect![[r#"
                ok=true
            "#]],
        );
    }

    #[test]
    fn reports_errors() {
        check_line(
            "1 + @",
            &Config::default(),
            expect![[r#"
                ok=false
                Error at position 4: Illegal character '@'
                  1 + @
                      ^
            "#]],
        );
        let strict = Config {
            options: ParseOptions {
                require_end_of_input: true,
            },
            ..Config::default()
        };
        check_line(
            "1 + 2 3",
            &strict,
            expect![[r#"
                ok=false
                Error at position 6: Unexpected token after end of statement: INT:3
                  1 + 2 3
                        ^
            "#]],
        );
    }
}
