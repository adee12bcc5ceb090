use thiserror::Error;

use crate::interpreter::lexer::{Token, TokenKind};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Represents all errors that can occur while matching tokens against the
/// grammar.
pub enum SyntaxError {
    /// The input holds no tokens at all.
    #[error("Error at offset 0: Empty expression.")]
    EmptyExpression,
    /// A specific token was required but another one was found.
    #[error("Error at offset {offset}: Expected {expected}, found {found}.")]
    UnexpectedToken {
        /// The kind of token the grammar required.
        expected: TokenKind,
        /// The token actually found.
        found:    Token,
        /// Byte offset of the found token.
        offset:   usize,
    },
    /// A factor was required, but the token can start neither an integer nor
    /// a parenthesized expression.
    #[error("Error at offset {offset}: Expected an integer or '(', found {found}.")]
    ExpectedOperand {
        /// The token actually found.
        found:  Token,
        /// Byte offset of the found token.
        offset: usize,
    },
    /// An opening parenthesis was never closed.
    #[error("Error at offset {offset}: Expected ')' to close the '(' at offset {opened_at}, found \
             {found}.")]
    UnclosedParenthesis {
        /// Byte offset of the unmatched `(`.
        opened_at: usize,
        /// The token found where `)` was required.
        found:     Token,
        /// Byte offset of the found token.
        offset:    usize,
    },
    /// A complete expression was followed by more input, such as an extra `)`.
    #[error("Error at offset {offset}: Extra input after expression: {found}.")]
    TrailingInput {
        /// The first token after the complete expression.
        found:  Token,
        /// Byte offset of that token.
        offset: usize,
    },
    /// Parentheses are nested deeper than the parser allows.
    #[error("Error at offset {offset}: Parentheses nested deeper than {limit} levels.")]
    NestingTooDeep {
        /// The maximum supported depth.
        limit:  usize,
        /// Byte offset of the `(` that exceeded the limit.
        offset: usize,
    },
}

impl SyntaxError {
    /// Byte offset in the source where the error was detected.
    #[must_use]
    pub const fn offset(&self) -> usize {
        match self {
            Self::EmptyExpression => 0,
            Self::UnexpectedToken { offset, .. }
            | Self::ExpectedOperand { offset, .. }
            | Self::UnclosedParenthesis { offset, .. }
            | Self::TrailingInput { offset, .. }
            | Self::NestingTooDeep { offset, .. } => *offset,
        }
    }
}
