/// Core evaluation logic.
///
/// Contains the `Evaluator` semantics and the evaluator's result type.
pub mod core;

/// Scalar arithmetic.
///
/// Implements checked integer arithmetic for the four binary operators.
pub mod scalar;
