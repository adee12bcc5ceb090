//! # calcrs
//!
//! calcrs is an interpreter for integer arithmetic expressions written in
//! Rust. It lexes, parses and evaluates expressions built from integers, the
//! operators `+ - * /` and parentheses, honouring the usual precedence rules.
//! Parsing and evaluation happen in a single recursive-descent pass.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    error::{InterpretError, LexError},
    interpreter::{
        evaluator::core::Evaluator,
        lexer::{Lexer, Token},
        notation::{Lisp, Notation, ReversePolish},
        parser::core::Parser,
    },
};

/// Provides unified error types for lexing, parsing and evaluation.
///
/// Every failure carries structured context, such as the byte offset where it
/// was detected and the expected and found tokens, so callers can branch on
/// the kind of error instead of parsing messages.
///
/// # Responsibilities
/// - Defines one error enum per stage (lexer, parser, evaluator).
/// - Combines them into `InterpretError`, returned by the entry points.
pub mod error;
/// Orchestrates the interpretation pipeline.
///
/// This module ties together the lexer, the recursive-descent parser and the
/// semantics that turn recognised constructs into results.
///
/// # Responsibilities
/// - Coordinates the lexer, parser, evaluator and notation translators.
/// - Manages the flow of tokens and errors between phases.
pub mod interpreter;
/// The binary arithmetic operators and their precedence.
pub mod operator;

/// Evaluates an arithmetic expression and returns its value.
///
/// Each call owns an independent lexer and parser, so repeated or concurrent
/// calls never influence each other. Division truncates toward zero.
///
/// # Errors
/// Returns the first error encountered: a `LexError` for an unrecognized
/// character, a `SyntaxError` for malformed input (including empty input and
/// trailing tokens), or an `EvaluationError` for division by zero or overflow.
///
/// # Examples
/// ```
/// use calcrs::evaluate;
///
/// assert_eq!(evaluate("3 + 7 * 2").unwrap(), 17);
/// assert_eq!(evaluate("3+7*2+(3*4+(10*40/20*(2+3)))").unwrap(), 129);
///
/// // Two integers with no operator in between.
/// assert!(evaluate("3 4").is_err());
/// ```
pub fn evaluate(source: &str) -> Result<i64, InterpretError> {
    let value = Parser::new(source, Evaluator)?.parse()?;
    log::debug!("evaluated {source:?} to {value}");
    Ok(value)
}

/// Rewrites an arithmetic expression in another notation.
///
/// The expression is checked against the same grammar as [`evaluate`], but no
/// arithmetic is performed, so `5 / 0` translates without error.
///
/// # Errors
/// Returns a `LexError` or `SyntaxError` for malformed input.
///
/// # Examples
/// ```
/// use calcrs::{interpreter::notation::Notation, translate};
///
/// assert_eq!(translate("(3 + 4) * 2", Notation::ReversePolish).unwrap(), "3 4 + 2 *");
/// assert_eq!(translate("(3 + 4) * 2", Notation::Lisp).unwrap(), "(* (+ 3 4) 2)");
/// ```
pub fn translate(source: &str, notation: Notation) -> Result<String, InterpretError> {
    let translated = match notation {
        Notation::ReversePolish => Parser::new(source, ReversePolish)?.parse()?,
        Notation::Lisp => Parser::new(source, Lisp)?.parse()?,
    };
    log::debug!("translated {source:?} to {notation:?}: {translated}");
    Ok(translated)
}

/// Lexes the whole source and returns every token with its byte offset.
///
/// The final element is always `Token::EndOfInput`.
///
/// # Errors
/// Returns a `LexError` for the first character that cannot be classified.
///
/// # Examples
/// ```
/// use calcrs::{interpreter::lexer::Token, tokenize};
///
/// let tokens = tokenize("2*(1)").unwrap();
/// assert_eq!(tokens,
///            vec![(Token::Integer(2), 0),
///                 (Token::Star, 1),
///                 (Token::LParen, 2),
///                 (Token::Integer(1), 3),
///                 (Token::RParen, 4),
///                 (Token::EndOfInput, 5)]);
/// ```
pub fn tokenize(source: &str) -> Result<Vec<(Token, usize)>, LexError> {
    let mut lexer = Lexer::new(source);
    let mut tokens = Vec::new();

    loop {
        let (token, offset) = lexer.next_token()?;
        tokens.push((token, offset));
        if token == Token::EndOfInput {
            return Ok(tokens);
        }
    }
}
