use crate::{
    error::{InterpretError, SyntaxError},
    interpreter::{
        lexer::{Lexer, Token, TokenKind},
        semantics::Semantics,
    },
};

pub type ParseResult<T> = Result<T, InterpretError>;

/// Maximum number of parentheses that may be open at once.
///
/// Every level costs a few stack frames of recursive descent, so the limit
/// keeps hostile input from exhausting the stack.
pub const MAX_NESTING_DEPTH: usize = 256;

/// A recursive-descent parser with one token of lookahead.
///
/// The parser owns its [`Lexer`] and always holds the next unconsumed token in
/// its lookahead slot. Recognised constructs are reduced immediately through
/// `S`, so parsing and evaluation happen in one pass and no syntax tree is
/// built.
///
/// Grammar:
/// ```text
/// expr   := term ( ( '+' | '-' ) term )*
/// term   := factor ( ( '*' | '/' ) factor )*
/// factor := INTEGER | '(' expr ')'
/// ```
///
/// # Example
/// ```
/// use calcrs::interpreter::{evaluator::core::Evaluator, parser::core::Parser};
///
/// let parser = Parser::new("(3 + 7) * 2", Evaluator).unwrap();
/// assert_eq!(parser.parse().unwrap(), 20);
/// ```
pub struct Parser<'src, S> {
    pub(super) lexer:     Lexer<'src>,
    /// The next unconsumed token and its byte offset.
    pub(super) current:   (Token, usize),
    pub(super) semantics: S,
    /// Number of currently open parentheses.
    pub(super) depth:     usize,
}

impl<'src, S: Semantics> Parser<'src, S> {
    /// Creates a parser over `source` and primes the lookahead slot.
    ///
    /// # Errors
    /// Returns a `LexError` if the very first token cannot be lexed.
    pub fn new(source: &'src str, semantics: S) -> ParseResult<Self> {
        let mut lexer = Lexer::new(source);
        let current = lexer.next_token()?;

        Ok(Self { lexer,
                  current,
                  semantics,
                  depth: 0 })
    }

    /// Parses the whole source as one expression and returns its reduction.
    ///
    /// The input must contain exactly one expression: empty input and tokens
    /// left over after a complete expression are both rejected.
    ///
    /// # Errors
    /// Returns the first lexical, syntax or evaluation error encountered.
    pub fn parse(mut self) -> ParseResult<S::Output> {
        if let (Token::EndOfInput, _) = self.current {
            return Err(SyntaxError::EmptyExpression.into());
        }

        let output = self.expr()?;

        match self.current {
            (Token::EndOfInput, _) => Ok(output),
            (found, offset) => Err(SyntaxError::TrailingInput { found, offset }.into()),
        }
    }

    /// Consumes the lookahead token if it is of the `expected` kind.
    ///
    /// The lookahead slot is refilled from the lexer and the consumed token
    /// is returned with its offset.
    ///
    /// # Errors
    /// - `SyntaxError::UnexpectedToken` if the lookahead is of another kind.
    /// - Any `LexError` raised while lexing the replacement token.
    pub(super) fn eat(&mut self, expected: TokenKind) -> ParseResult<(Token, usize)> {
        let (found, offset) = self.current;
        if found.kind() != expected {
            return Err(SyntaxError::UnexpectedToken { expected,
                                                      found,
                                                      offset }.into());
        }

        let next = self.lexer.next_token()?;
        Ok(std::mem::replace(&mut self.current, next))
    }
}
