use crate::{
    error::EvaluationError,
    interpreter::semantics::Semantics,
    operator::BinaryOperator,
};

/// Target notations for [`translate`](crate::translate).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Notation {
    /// Postfix notation: `(3 + 4) * 2` becomes `3 4 + 2 *`.
    ReversePolish,
    /// Fully parenthesized prefix notation: `(3 + 4) * 2` becomes
    /// `(* (+ 3 4) 2)`.
    Lisp,
}

/// Rewrites an expression in reverse Polish (postfix) notation.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReversePolish;

impl Semantics for ReversePolish {
    type Output = String;

    fn integer(&mut self, value: i64) -> String {
        value.to_string()
    }

    fn binary(&mut self,
              op: BinaryOperator,
              left: String,
              right: String,
              _offset: usize)
              -> Result<String, EvaluationError> {
        Ok(format!("{left} {right} {op}"))
    }
}

/// Rewrites an expression in Lisp-style prefix notation.
#[derive(Debug, Clone, Copy, Default)]
pub struct Lisp;

impl Semantics for Lisp {
    type Output = String;

    fn integer(&mut self, value: i64) -> String {
        value.to_string()
    }

    fn binary(&mut self,
              op: BinaryOperator,
              left: String,
              right: String,
              _offset: usize)
              -> Result<String, EvaluationError> {
        Ok(format!("({op} {left} {right})"))
    }
}
