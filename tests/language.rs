use std::{fs, thread};

use calcrs::{
    error::{EvaluationError, InterpretError, LexError, SyntaxError},
    evaluate,
    interpreter::{
        lexer::{Lexer, Token, TokenKind},
        notation::Notation,
        parser::core::MAX_NESTING_DEPTH,
    },
    operator::BinaryOperator,
    tokenize, translate,
};
use walkdir::WalkDir;

#[test]
fn case_files_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/cases").into_iter()
                                   .filter_map(Result::ok)
                                   .filter(|e| e.path().extension().is_some_and(|ext| ext == "calc"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (i, line) in content.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            count += 1;
            check_case(line).unwrap_or_else(|msg| panic!("{path:?}:{}: {msg}", i + 1));
        }
    }

    assert!(count > 0, "No cases found in tests/cases");
}

/// Runs one `expression => expected` line. Expressions prefixed with `rpn:` or
/// `lisp:` are translated instead of evaluated.
fn check_case(line: &str) -> Result<(), String> {
    let (source, expected) =
        line.rsplit_once("=>").ok_or_else(|| format!("missing '=>' in {line:?}"))?;
    let (source, expected) = (source.trim(), expected.trim());

    let actual = if let Some(source) = source.strip_prefix("rpn:") {
        translate(source, Notation::ReversePolish)
    } else if let Some(source) = source.strip_prefix("lisp:") {
        translate(source, Notation::Lisp)
    } else {
        evaluate(source).map(|value| value.to_string())
    };

    match (actual, expected) {
        (Err(_), "error") => Ok(()),
        (Ok(actual), expected) if actual == expected => Ok(()),
        (actual, expected) => Err(format!("{source:?}: expected {expected}, got {actual:?}")),
    }
}

fn assert_value(src: &str, expected: i64) {
    match evaluate(src) {
        Ok(value) => assert_eq!(value, expected, "wrong value for {src:?}"),
        Err(e) => panic!("Expression {src:?} failed: {e}"),
    }
}

fn assert_failure(src: &str) -> InterpretError {
    match evaluate(src) {
        Ok(value) => panic!("Expression {src:?} evaluated to {value} but was expected to fail"),
        Err(e) => e,
    }
}

#[test]
fn basic_arithmetic_matches_host_integers() {
    let samples = [0_i64, 1, 2, 7, 10, 99, 1234, 65_536];
    for a in samples {
        for b in samples {
            assert_value(&format!("{a} + {b}"), a + b);
            assert_value(&format!("{a} - {b}"), a - b);
            assert_value(&format!("{a} * {b}"), a * b);
            if b != 0 {
                assert_value(&format!("{a} / {b}"), a / b);
            }
        }
    }
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    assert_value("3 + 7 * 2", 17);
    assert_value("3 * 7 + 2", 23);
    assert_value("8 - 6 / 2", 5);
}

#[test]
fn operators_are_left_associative() {
    assert_value("10 - 3 - 2", 5);
    assert_value("64 / 4 / 2", 8);
    assert_value("2 * 9 / 4", 4);
    assert_value("9 / 4 * 2", 4);
}

#[test]
fn parentheses_override_precedence() {
    assert_value("(3 + 7) * 2", 20);
    assert_value("10 - (3 - 2)", 9);
    assert_value("3+7*2+(3*4+(10*40/20*(2+3)))", 129);
}

#[test]
fn whitespace_is_insignificant() {
    let expected = evaluate("3+7").unwrap();
    assert_eq!(evaluate(" 3 + 7 ").unwrap(), expected);
    assert_eq!(evaluate("3 +7").unwrap(), expected);
    assert_eq!(evaluate("\t3\n+\r\n7").unwrap(), expected);
}

#[test]
fn division_truncates_toward_zero() {
    assert_value("7 / 2", 3);
    assert_value("(0 - 7) / 2", -3);
}

#[test]
fn division_by_zero_is_error() {
    assert_eq!(assert_failure("5 / 0"),
               InterpretError::Evaluation(EvaluationError::DivisionByZero { offset: 2 }));
    assert!(matches!(assert_failure("1 / (2 - 2)"),
                     InterpretError::Evaluation(EvaluationError::DivisionByZero { .. })));
}

#[test]
fn overflow_is_error_not_wraparound() {
    let max = i64::MAX;
    assert_value(&format!("{max}"), max);
    assert_eq!(assert_failure(&format!("{max} + 1")),
               InterpretError::Evaluation(EvaluationError::Overflow { operator:
                                                                          BinaryOperator::Add,
                                                                      offset:   20, }));
    assert!(matches!(assert_failure(&format!("{max} * 2")),
                     InterpretError::Evaluation(EvaluationError::Overflow { .. })));
    assert!(matches!(assert_failure(&format!("(0 - {max} - 1) / (0 - 1)")),
                     InterpretError::Evaluation(EvaluationError::Overflow { operator:
                                                                                BinaryOperator::Div,
                                                                            .. })));
}

#[test]
fn oversized_literal_is_lex_error() {
    assert_eq!(assert_failure("1 + 99999999999999999999"),
               InterpretError::Lex(LexError::IntegerOverflow { literal:
                                                                   "99999999999999999999".to_string(),
                                                               offset:  4, }));
}

#[test]
fn empty_input_is_error() {
    assert_eq!(assert_failure(""), InterpretError::Syntax(SyntaxError::EmptyExpression));
    assert_eq!(assert_failure("   \t "), InterpretError::Syntax(SyntaxError::EmptyExpression));
}

#[test]
fn trailing_operator_is_error() {
    assert_eq!(assert_failure("3 +"),
               InterpretError::Syntax(SyntaxError::ExpectedOperand { found:  Token::EndOfInput,
                                                                     offset: 3, }));
}

#[test]
fn unclosed_parenthesis_is_error() {
    assert_eq!(assert_failure("(3 + 4"),
               InterpretError::Syntax(SyntaxError::UnclosedParenthesis { opened_at: 0,
                                                                         found:
                                                                             Token::EndOfInput,
                                                                         offset:    6, }));
    assert!(matches!(assert_failure("2 * (1 + (3 4))"),
                     InterpretError::Syntax(SyntaxError::UnclosedParenthesis { opened_at: 9,
                                                                               found:
                                                                                   Token::Integer(4),
                                                                               .. })));
}

#[test]
fn adjacent_integers_are_error() {
    assert_eq!(assert_failure("3 4"),
               InterpretError::Syntax(SyntaxError::TrailingInput { found:  Token::Integer(4),
                                                                   offset: 2, }));
}

#[test]
fn unmatched_closing_parenthesis_is_error() {
    assert!(matches!(assert_failure("(1 + 2))"),
                     InterpretError::Syntax(SyntaxError::TrailingInput { found:  Token::RParen,
                                                                         offset: 7, })));
}

#[test]
fn empty_parentheses_are_error() {
    assert!(matches!(assert_failure("()"),
                     InterpretError::Syntax(SyntaxError::ExpectedOperand { found:  Token::RParen,
                                                                           offset: 1, })));
}

#[test]
fn unrecognized_character_is_error() {
    assert_eq!(assert_failure("3 $ 4"),
               InterpretError::Lex(LexError::UnrecognizedCharacter { character: '$',
                                                                     offset:    2, }));
    assert!(matches!(assert_failure("2 ^ 3"),
                     InterpretError::Lex(LexError::UnrecognizedCharacter { character: '^',
                                                                           .. })));
    assert!(matches!(assert_failure("1.5"),
                     InterpretError::Lex(LexError::UnrecognizedCharacter { character: '.',
                                                                           .. })));
}

#[test]
fn unary_minus_is_not_supported() {
    assert!(matches!(assert_failure("-3"),
                     InterpretError::Syntax(SyntaxError::ExpectedOperand { found:  Token::Minus,
                                                                           offset: 0, })));
}

#[test]
fn first_error_wins() {
    // The syntax error at `)` is reached before the lexer ever sees `$`.
    assert!(matches!(assert_failure("()$"),
                     InterpretError::Syntax(SyntaxError::ExpectedOperand { .. })));
    // Division by zero happens before the dangling `4` is inspected.
    assert!(matches!(assert_failure("1 / 0 4"), InterpretError::Evaluation(_)));
}

#[test]
fn deep_nesting_is_bounded() {
    let ok = format!("{}1{}", "(".repeat(MAX_NESTING_DEPTH), ")".repeat(MAX_NESTING_DEPTH));
    assert_value(&ok, 1);

    let too_deep =
        format!("{}1{}", "(".repeat(MAX_NESTING_DEPTH + 1), ")".repeat(MAX_NESTING_DEPTH + 1));
    assert_eq!(assert_failure(&too_deep),
               InterpretError::Syntax(SyntaxError::NestingTooDeep { limit:  MAX_NESTING_DEPTH,
                                                                    offset: MAX_NESTING_DEPTH, }));
}

#[test]
fn evaluation_is_repeatable() {
    let source = "3+7*2+(3*4+(10*40/20*(2+3)))";
    let first = evaluate(source);
    for _ in 0..10 {
        assert_eq!(evaluate(source), first);
    }
    let failure = evaluate("3 +");
    assert_eq!(evaluate("3 +"), failure);
}

#[test]
fn concurrent_evaluations_are_independent() {
    let handles: Vec<_> = (0..8_i64).map(|n| thread::spawn(move || evaluate(&format!("({n} + 1) * 3"))))
                                    .collect();
    for (n, handle) in (0..8_i64).zip(handles) {
        assert_eq!(handle.join().unwrap(), Ok((n + 1) * 3));
    }
}

#[test]
fn lexer_returns_end_of_input_forever() {
    let mut lexer = Lexer::new(" 7 ");
    assert_eq!(lexer.next_token(), Ok((Token::Integer(7), 1)));
    for _ in 0..3 {
        assert_eq!(lexer.next_token(), Ok((Token::EndOfInput, 3)));
    }
}

#[test]
fn tokens_expose_kind_and_value() {
    let tokens = tokenize("12 - (3)").unwrap();
    let kinds: Vec<_> = tokens.iter().map(|(token, _)| token.kind()).collect();
    assert_eq!(kinds,
               vec![TokenKind::Integer,
                    TokenKind::Minus,
                    TokenKind::LParen,
                    TokenKind::Integer,
                    TokenKind::RParen,
                    TokenKind::EndOfInput]);
    assert_eq!(tokens[0].0.value(), Some(12));
    assert_eq!(tokens[1].0.value(), None);
}

#[test]
fn tokenize_reports_unrecognized_character() {
    assert_eq!(tokenize("1 + x"),
               Err(LexError::UnrecognizedCharacter { character: 'x',
                                                     offset:    4, }));
}

#[test]
fn translation_checks_syntax_but_not_arithmetic() {
    assert_eq!(translate("8 / 0", Notation::ReversePolish).unwrap(), "8 0 /");
    assert!(matches!(translate("(1 + 2", Notation::Lisp),
                     Err(InterpretError::Syntax(SyntaxError::UnclosedParenthesis { .. }))));
}

#[test]
fn error_messages_name_the_problem() {
    assert_eq!(assert_failure("3 $ 4").to_string(),
               "Error at offset 2: Unrecognized character '$'.");
    assert_eq!(assert_failure("(3 + 4").to_string(),
               "Error at offset 6: Expected ')' to close the '(' at offset 0, found end of input.");
    assert_eq!(assert_failure("5 / 0").to_string(), "Error at offset 2: Division by zero.");
    assert_eq!(assert_failure("3 4").offset(), 2);
}
