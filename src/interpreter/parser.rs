/// Parser state, token consumption and the top-level entry point.
///
/// Contains the `Parser` type, its lookahead slot and the `eat` primitive that
/// every grammar rule consumes tokens through.
pub mod core;

/// Binary operator levels of the grammar.
///
/// Implements the left-associative `expr` (`+`, `-`) and `term` (`*`, `/`)
/// rules.
pub mod binary;

/// Factors: integer literals and parenthesized sub-expressions.
pub mod factor;
