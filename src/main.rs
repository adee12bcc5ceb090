use std::{fs, process::ExitCode};

use calcrs::{
    error::InterpretError,
    evaluate,
    interpreter::{lexer::Token, notation::Notation},
    tokenize, translate,
};
use clap::{Parser, ValueEnum};
use miette::LabeledSpan;
use rustyline::{DefaultEditor, error::ReadlineError};

/// calcrs evaluates integer arithmetic expressions such as `3 + 7 * (2 - 1)`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells calcrs to read expressions from a file, one per line, instead of
    /// taking a single expression.
    #[arg(short, long)]
    file: bool,

    /// What to print for each expression.
    #[arg(short, long, value_enum, default_value_t = Mode::Value)]
    mode: Mode,

    /// The expression (or file path with `--file`). Starts an interactive
    /// prompt when omitted.
    contents: Option<String>,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Mode {
    /// The integer value of the expression.
    Value,
    /// The expression in reverse Polish notation.
    Rpn,
    /// The expression in Lisp prefix notation.
    Lisp,
    /// The token stream produced by the lexer.
    Tokens,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    match (args.contents, args.file) {
        (None, _) => run_repl(args.mode),
        (Some(path), true) => {
            let Ok(script) = fs::read_to_string(&path) else {
                eprintln!("Failed to read the input file '{path}'. Perhaps this file does not \
                           exist?");
                return ExitCode::from(2);
            };
            run_script(&script, args.mode)
        },
        (Some(expression), false) => {
            if run_line(&expression, args.mode) {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        },
    }
}

/// Runs every non-blank line of `script`, continuing past failures.
fn run_script(script: &str, mode: Mode) -> ExitCode {
    let mut failed = 0_usize;
    for line in script.lines().filter(|line| !line.trim().is_empty()) {
        if !run_line(line, mode) {
            failed += 1;
        }
    }

    if failed == 0 {
        ExitCode::SUCCESS
    } else {
        log::info!("{failed} expression(s) failed");
        ExitCode::FAILURE
    }
}

fn run_repl(mode: Mode) -> ExitCode {
    let mut rl = match DefaultEditor::new() {
        Ok(rl) => rl,
        Err(err) => {
            eprintln!("Failed to start the interactive prompt: {err}");
            return ExitCode::FAILURE;
        },
    };

    loop {
        match rl.readline("calc> ") {
            Ok(line) => {
                if line.trim().is_empty() {
                    continue;
                }
                if let Err(err) = rl.add_history_entry(line.as_str()) {
                    log::warn!("could not record history: {err}");
                }
                run_line(&line, mode);
            },
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
            Err(err) => {
                eprintln!("Error: {err}");
                return ExitCode::FAILURE;
            },
        }
    }

    ExitCode::SUCCESS
}

/// Interprets one expression and prints the outcome. Returns whether it
/// succeeded.
fn run_line(source: &str, mode: Mode) -> bool {
    let outcome = match mode {
        Mode::Value => evaluate(source).map(|value| value.to_string()),
        Mode::Rpn => translate(source, Notation::ReversePolish),
        Mode::Lisp => translate(source, Notation::Lisp),
        Mode::Tokens => tokenize(source).map(|tokens| render_tokens(&tokens))
                                         .map_err(InterpretError::from),
    };

    match outcome {
        Ok(rendered) => {
            println!("{rendered}");
            true
        },
        Err(e) => {
            eprintln!("{:?}", diagnostic(source, &e));
            false
        },
    }
}

fn render_tokens(tokens: &[(Token, usize)]) -> String {
    tokens.iter()
          .map(|(token, offset)| format!("{offset:>4}  {token}"))
          .collect::<Vec<_>>()
          .join("\n")
}

/// Wraps an interpreter error in a report that points at the failing offset.
fn diagnostic(source: &str, error: &InterpretError) -> miette::Report {
    miette::miette! {
        labels = vec![LabeledSpan::at_offset(error.offset(), "here")],
        "{error}",
    }.with_source_code(source.to_string())
}
