use crate::{
    error::SyntaxError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::core::{MAX_NESTING_DEPTH, ParseResult, Parser},
        semantics::Semantics,
    },
};

impl<S: Semantics> Parser<'_, S> {
    /// Parses an integer literal or a parenthesized expression.
    ///
    /// The rule is: `factor := INTEGER | "(" expr ")"`
    ///
    /// # Errors
    /// - `ExpectedOperand` if the lookahead starts neither alternative.
    /// - `UnclosedParenthesis` if the inner expression is not followed by `)`.
    /// - `NestingTooDeep` past [`MAX_NESTING_DEPTH`] open parentheses.
    pub(super) fn factor(&mut self) -> ParseResult<S::Output> {
        match self.current {
            (Token::Integer(value), _) => {
                self.eat(TokenKind::Integer)?;
                Ok(self.semantics.integer(value))
            },
            (Token::LParen, opened_at) => self.parenthesized(opened_at),
            (found, offset) => Err(SyntaxError::ExpectedOperand { found, offset }.into()),
        }
    }

    fn parenthesized(&mut self, opened_at: usize) -> ParseResult<S::Output> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(SyntaxError::NestingTooDeep { limit:  MAX_NESTING_DEPTH,
                                                     offset: opened_at, }.into());
        }

        self.eat(TokenKind::LParen)?;
        self.depth += 1;
        let inner = self.expr()?;
        self.depth -= 1;

        match self.current {
            (Token::RParen, _) => {
                self.eat(TokenKind::RParen)?;
                Ok(inner)
            },
            (found, offset) => Err(SyntaxError::UnclosedParenthesis { opened_at,
                                                                      found,
                                                                      offset }.into()),
        }
    }
}
