use crate::{
    error::EvaluationError,
    interpreter::semantics::Semantics,
    operator::BinaryOperator,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvaluationError` describing the failure.
pub type EvalResult<T> = Result<T, EvaluationError>;

/// Reduces an expression to its integer value.
///
/// The evaluator holds no state: every operator application is computed as
/// soon as the parser recognises it, using checked `i64` arithmetic.
///
/// ## Usage
///
/// Hand an `Evaluator` to a [`Parser`](crate::interpreter::parser::core::Parser),
/// or call [`evaluate`](crate::evaluate), which does exactly that.
#[derive(Debug, Clone, Copy, Default)]
pub struct Evaluator;

impl Semantics for Evaluator {
    type Output = i64;

    fn integer(&mut self, value: i64) -> i64 {
        value
    }

    fn binary(&mut self,
              op: BinaryOperator,
              left: i64,
              right: i64,
              offset: usize)
              -> EvalResult<i64> {
        Self::eval_scalar_op(op, left, right, offset)
    }
}
