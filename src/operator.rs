use crate::interpreter::lexer::{Token, TokenKind};

/// The four binary arithmetic operators.
///
/// Every operator is left-associative. `*` and `/` bind tighter than `+` and
/// `-`; see [`BinaryOperator::precedence`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// Addition (`+`).
    Add,
    /// Subtraction (`-`).
    Sub,
    /// Multiplication (`*`).
    Mul,
    /// Division (`/`), truncating toward zero.
    Div,
}

impl BinaryOperator {
    /// Maps a token to the operator it spells, if any.
    ///
    /// # Example
    /// ```
    /// use calcrs::{interpreter::lexer::Token, operator::BinaryOperator};
    ///
    /// assert_eq!(BinaryOperator::from_token(Token::Star), Some(BinaryOperator::Mul));
    /// assert_eq!(BinaryOperator::from_token(Token::LParen), None);
    /// ```
    #[must_use]
    pub const fn from_token(token: Token) -> Option<Self> {
        match token {
            Token::Plus => Some(Self::Add),
            Token::Minus => Some(Self::Sub),
            Token::Star => Some(Self::Mul),
            Token::Slash => Some(Self::Div),
            _ => None,
        }
    }

    /// The token kind that spells this operator.
    #[must_use]
    pub const fn token_kind(self) -> TokenKind {
        match self {
            Self::Add => TokenKind::Plus,
            Self::Sub => TokenKind::Minus,
            Self::Mul => TokenKind::Star,
            Self::Div => TokenKind::Slash,
        }
    }

    /// Binding strength: additive operators are `1`, multiplicative ones `2`.
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Add | Self::Sub => 1,
            Self::Mul | Self::Div => 2,
        }
    }

    /// Whether this operator belongs to the `expr` level of the grammar.
    #[must_use]
    pub const fn is_additive(self) -> bool {
        self.precedence() == 1
    }

    /// Whether this operator belongs to the `term` level of the grammar.
    #[must_use]
    pub const fn is_multiplicative(self) -> bool {
        self.precedence() == 2
    }

    /// The source symbol of the operator.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        }
    }
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
