use crate::{
    error::EvaluationError,
    interpreter::evaluator::core::{EvalResult, Evaluator},
    operator::BinaryOperator,
};

impl Evaluator {
    /// Evaluates a scalar arithmetic operation.
    ///
    /// Division truncates toward zero. Division by zero is checked explicitly,
    /// and every operator is checked for overflow instead of wrapping.
    ///
    /// # Parameters
    /// - `op`: The arithmetic operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `offset`: Byte offset of the operator for error reporting.
    ///
    /// # Returns
    /// An `EvalResult<i64>` containing the computed value.
    ///
    /// # Example
    /// ```
    /// use calcrs::{
    ///     error::EvaluationError, interpreter::evaluator::core::Evaluator,
    ///     operator::BinaryOperator,
    /// };
    ///
    /// assert_eq!(Evaluator::eval_scalar_op(BinaryOperator::Div, 7, 2, 0), Ok(3));
    /// assert_eq!(Evaluator::eval_scalar_op(BinaryOperator::Div, 7, 0, 4),
    ///            Err(EvaluationError::DivisionByZero { offset: 4 }));
    /// ```
    pub fn eval_scalar_op(op: BinaryOperator,
                          left: i64,
                          right: i64,
                          offset: usize)
                          -> EvalResult<i64> {
        use BinaryOperator::{Add, Div, Mul, Sub};

        let result = match op {
            Add => left.checked_add(right),
            Sub => left.checked_sub(right),
            Mul => left.checked_mul(right),
            Div => {
                if right == 0 {
                    return Err(EvaluationError::DivisionByZero { offset });
                }
                left.checked_div(right)
            },
        };

        result.ok_or(EvaluationError::Overflow { operator: op,
                                                 offset })
    }
}
