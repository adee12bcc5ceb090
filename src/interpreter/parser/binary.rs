use crate::{
    interpreter::{
        parser::core::{ParseResult, Parser},
        semantics::Semantics,
    },
    operator::BinaryOperator,
};

impl<S: Semantics> Parser<'_, S> {
    /// Parses addition and subtraction.
    ///
    /// The rule is: `expr := term (("+" | "-") term)*`
    ///
    /// Operands are folded left to right, so `10 - 3 - 2` reduces as
    /// `(10 - 3) - 2`.
    pub(super) fn expr(&mut self) -> ParseResult<S::Output> {
        let mut result = self.term()?;
        while let Some(op) = self.lookahead_operator()
              && op.is_additive()
        {
            let (_, offset) = self.eat(op.token_kind())?;
            let right = self.term()?;
            result = self.semantics.binary(op, result, right, offset)?;
        }
        Ok(result)
    }

    /// Parses multiplication and division.
    ///
    /// The rule is: `term := factor (("*" | "/") factor)*`
    pub(super) fn term(&mut self) -> ParseResult<S::Output> {
        let mut result = self.factor()?;
        while let Some(op) = self.lookahead_operator()
              && op.is_multiplicative()
        {
            let (_, offset) = self.eat(op.token_kind())?;
            let right = self.factor()?;
            result = self.semantics.binary(op, result, right, offset)?;
        }
        Ok(result)
    }

    fn lookahead_operator(&self) -> Option<BinaryOperator> {
        BinaryOperator::from_token(self.current.0)
    }
}
