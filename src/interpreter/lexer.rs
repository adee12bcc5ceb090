use logos::Logos;

use crate::error::LexError;

/// Result type used by the lexer.
pub type LexResult<T> = Result<T, LexError>;

/// A lexical token of an arithmetic expression.
///
/// Tokens are produced one at a time by [`Lexer::next_token`] and carry no
/// position themselves; the lexer pairs each token with the byte offset of its
/// first character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token {
    /// A non-negative integer literal such as `42`.
    Integer(i64),
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `/`
    Slash,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// Returned once the source is exhausted, and on every call after that.
    EndOfInput,
}

/// The classification of a [`Token`] without its payload.
///
/// Used wherever a token is *expected* rather than *seen*, such as in
/// [`SyntaxError::UnexpectedToken`](crate::error::SyntaxError::UnexpectedToken).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Integer,
    Plus,
    Minus,
    Star,
    Slash,
    LParen,
    RParen,
    EndOfInput,
}

impl Token {
    /// Returns the kind of this token.
    #[must_use]
    pub const fn kind(self) -> TokenKind {
        match self {
            Self::Integer(_) => TokenKind::Integer,
            Self::Plus => TokenKind::Plus,
            Self::Minus => TokenKind::Minus,
            Self::Star => TokenKind::Star,
            Self::Slash => TokenKind::Slash,
            Self::LParen => TokenKind::LParen,
            Self::RParen => TokenKind::RParen,
            Self::EndOfInput => TokenKind::EndOfInput,
        }
    }

    /// Returns the literal value of an `Integer` token, `None` for all others.
    #[must_use]
    pub const fn value(self) -> Option<i64> {
        match self {
            Self::Integer(value) => Some(value),
            _ => None,
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(value) => write!(f, "integer {value}"),
            other => write!(f, "{}", other.kind()),
        }
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kind = match self {
            Self::Integer => "integer",
            Self::Plus => "'+'",
            Self::Minus => "'-'",
            Self::Star => "'*'",
            Self::Slash => "'/'",
            Self::LParen => "'('",
            Self::RParen => "')'",
            Self::EndOfInput => "end of input",
        };
        write!(f, "{kind}")
    }
}

/// Failure reported by the generated scanner before it is turned into a
/// [`LexError`] with position information.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
enum ScanFault {
    /// No rule matched the current character.
    #[default]
    Unrecognized,
    /// A digit run does not fit in an `i64`.
    IntegerOverflow,
}

/// Raw lexemes recognised by the generated scanner.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
#[logos(error = ScanFault)]
enum Lexeme {
    /// A maximal run of decimal digits.
    #[regex(r"[0-9]+", parse_integer)]
    Integer(i64),
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    /// Spaces, tabs, line breaks and feeds.
    #[regex(r"[ \t\r\n\f]+", logos::skip)]
    Ignored,
}

impl From<Lexeme> for Token {
    fn from(lexeme: Lexeme) -> Self {
        match lexeme {
            Lexeme::Integer(value) => Self::Integer(value),
            Lexeme::Plus => Self::Plus,
            Lexeme::Minus => Self::Minus,
            Lexeme::Star => Self::Star,
            Lexeme::Slash => Self::Slash,
            Lexeme::LParen => Self::LParen,
            Lexeme::RParen => Self::RParen,
            // skipped by the scanner, never yielded
            Lexeme::Ignored => Self::EndOfInput,
        }
    }
}

/// Parses an integer literal from the current token slice.
///
/// Digit runs too large for an `i64` are reported instead of wrapping.
fn parse_integer(lex: &logos::Lexer<Lexeme>) -> Result<i64, ScanFault> {
    lex.slice().parse().map_err(|_| ScanFault::IntegerOverflow)
}

/// Produces tokens on demand from a borrowed source string.
///
/// The lexer knows nothing about the grammar: it classifies characters,
/// skips whitespace and accumulates digit runs into integers. Its scanning
/// position only ever moves forward.
///
/// # Example
/// ```
/// use calcrs::interpreter::lexer::{Lexer, Token};
///
/// let mut lexer = Lexer::new("12 * (3)");
/// assert_eq!(lexer.next_token().unwrap(), (Token::Integer(12), 0));
/// assert_eq!(lexer.next_token().unwrap(), (Token::Star, 3));
/// assert_eq!(lexer.next_token().unwrap(), (Token::LParen, 5));
/// assert_eq!(lexer.next_token().unwrap(), (Token::Integer(3), 6));
/// assert_eq!(lexer.next_token().unwrap(), (Token::RParen, 7));
/// assert_eq!(lexer.next_token().unwrap(), (Token::EndOfInput, 8));
/// assert_eq!(lexer.next_token().unwrap(), (Token::EndOfInput, 8));
/// ```
pub struct Lexer<'src> {
    source:  &'src str,
    scanner: logos::Lexer<'src, Lexeme>,
}

impl<'src> Lexer<'src> {
    /// Creates a lexer positioned at the start of `source`.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self { source,
               scanner: Lexeme::lexer(source) }
    }

    /// The source this lexer reads from.
    #[must_use]
    pub const fn source(&self) -> &'src str {
        self.source
    }

    /// Returns the next token together with the byte offset it starts at.
    ///
    /// Once the source is exhausted this returns `Token::EndOfInput` at offset
    /// `source.len()` on every call.
    ///
    /// # Errors
    /// - `LexError::UnrecognizedCharacter` for any character that is neither
    ///   whitespace, a digit, nor one of `+ - * / ( )`.
    /// - `LexError::IntegerOverflow` for a literal larger than `i64::MAX`.
    pub fn next_token(&mut self) -> LexResult<(Token, usize)> {
        let Some(scanned) = self.scanner.next() else {
            return Ok((Token::EndOfInput, self.source.len()));
        };

        let offset = self.scanner.span().start;
        match scanned {
            Ok(lexeme) => {
                let token = Token::from(lexeme);
                log::trace!("lexed {token} at offset {offset}");
                Ok((token, offset))
            },
            Err(ScanFault::Unrecognized) => {
                let character = self.scanner.slice().chars().next().unwrap_or_default();
                Err(LexError::UnrecognizedCharacter { character, offset })
            },
            Err(ScanFault::IntegerOverflow) => {
                Err(LexError::IntegerOverflow { literal: self.scanner.slice().to_string(),
                                                offset })
            },
        }
    }
}
