use thiserror::Error;

use crate::error::{EvaluationError, LexError, SyntaxError};

/// The first error met while interpreting an expression.
///
/// Each stage of the pipeline has its own error family; this enum lets callers
/// branch on the stage while `?` converts between them.
///
/// # Example
/// ```
/// use calcrs::{
///     error::{EvaluationError, InterpretError},
///     evaluate,
/// };
///
/// match evaluate("5 / 0") {
///     Err(InterpretError::Evaluation(EvaluationError::DivisionByZero { offset })) => {
///         assert_eq!(offset, 2);
///     },
///     other => panic!("unexpected outcome: {other:?}"),
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InterpretError {
    /// The source contains a character the lexer cannot classify.
    #[error(transparent)]
    Lex(#[from] LexError),
    /// The token stream does not match the grammar.
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
    /// The expression is well formed but cannot be computed.
    #[error(transparent)]
    Evaluation(#[from] EvaluationError),
}

impl InterpretError {
    /// Byte offset in the source where the error was detected.
    #[must_use]
    pub const fn offset(&self) -> usize {
        match self {
            Self::Lex(e) => e.offset(),
            Self::Syntax(e) => e.offset(),
            Self::Evaluation(e) => e.offset(),
        }
    }
}
