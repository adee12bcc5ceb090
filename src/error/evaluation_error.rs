use thiserror::Error;

use crate::operator::BinaryOperator;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Represents all errors that can occur while computing a value.
pub enum EvaluationError {
    /// Attempted division by zero.
    #[error("Error at offset {offset}: Division by zero.")]
    DivisionByZero {
        /// Byte offset of the `/` operator.
        offset: usize,
    },
    /// Arithmetic operation overflowed.
    #[error("Error at offset {offset}: Integer overflow while computing '{operator}'.")]
    Overflow {
        /// The operator whose result does not fit.
        operator: BinaryOperator,
        /// Byte offset of the operator.
        offset:   usize,
    },
}

impl EvaluationError {
    /// Byte offset of the operator that failed.
    #[must_use]
    pub const fn offset(&self) -> usize {
        match self {
            Self::DivisionByZero { offset } | Self::Overflow { offset, .. } => *offset,
        }
    }
}
