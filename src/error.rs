/// Lexical errors.
///
/// Raised by the lexer when a character cannot start any token or an integer
/// literal does not fit the value range.
pub mod lex_error;
/// Syntax errors.
///
/// Raised by the parser when the token stream does not match the grammar:
/// unexpected tokens, unclosed parentheses, empty input and dangling input.
pub mod syntax_error;
/// Evaluation errors.
///
/// Raised while folding operator applications into a value, such as division
/// by zero or integer overflow.
pub mod evaluation_error;
/// The umbrella error returned by the public entry points.
pub mod interpret_error;

pub use evaluation_error::EvaluationError;
pub use interpret_error::InterpretError;
pub use lex_error::LexError;
pub use syntax_error::SyntaxError;
