use crate::{error::EvaluationError, operator::BinaryOperator};

/// What the parser does with each construct it recognises.
///
/// The parser calls [`Semantics::integer`] for every literal and
/// [`Semantics::binary`] for every operator application, in the left-to-right
/// order the grammar folds them. Implementations decide what a parse
/// produces: a number, a translated string, and so on.
pub trait Semantics {
    /// The value a parsed (sub-)expression reduces to.
    type Output;

    /// Produces the output for an integer literal.
    fn integer(&mut self, value: i64) -> Self::Output;

    /// Combines two operands with `op`.
    ///
    /// `offset` is the byte offset of the operator token in the source.
    ///
    /// # Errors
    /// Returns an `EvaluationError` if the operation cannot be carried out.
    fn binary(&mut self,
              op: BinaryOperator,
              left: Self::Output,
              right: Self::Output,
              offset: usize)
              -> Result<Self::Output, EvaluationError>;
}
