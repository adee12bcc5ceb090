/// The lexer module tokenizes source text on demand.
///
/// The lexer reads raw characters and hands out one classified token per
/// request, skipping whitespace and accumulating digit runs into integers.
/// It is the only stage that looks at characters.
///
/// # Responsibilities
/// - Converts the input character stream into tokens paired with offsets.
/// - Reports lexical errors for unrecognized characters and oversized
///   literals.
pub mod lexer;
/// The parser module drives the grammar over the token stream.
///
/// The parser keeps a single token of lookahead and recognises
/// `expr`, `term` and `factor` by recursive descent. It builds no tree:
/// each recognised literal or operator application is handed straight to a
/// [`semantics::Semantics`] implementation.
///
/// # Responsibilities
/// - Enforces precedence, left-associativity and parenthesis nesting.
/// - Reports syntax errors with the expected and found token.
pub mod parser;
/// The seam between the parser and what a parse produces.
pub mod semantics;
/// The evaluator computes integer results.
///
/// # Responsibilities
/// - Performs checked integer arithmetic for each operator application.
/// - Reports division by zero and overflow.
pub mod evaluator;
/// Translation into reverse Polish and Lisp prefix notation.
pub mod notation;
