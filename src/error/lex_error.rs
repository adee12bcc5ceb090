use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Represents all errors that can occur while turning characters into tokens.
pub enum LexError {
    /// A character that is not whitespace, a digit or an operator.
    #[error("Error at offset {offset}: Unrecognized character '{character}'.")]
    UnrecognizedCharacter {
        /// The offending character.
        character: char,
        /// Byte offset of the character in the source.
        offset:    usize,
    },
    /// An integer literal too large to be represented.
    #[error("Error at offset {offset}: Integer literal {literal} is too large.")]
    IntegerOverflow {
        /// The literal as written.
        literal: String,
        /// Byte offset of the literal's first digit.
        offset:  usize,
    },
}

impl LexError {
    /// Byte offset in the source where the error was detected.
    #[must_use]
    pub const fn offset(&self) -> usize {
        match self {
            Self::UnrecognizedCharacter { offset, .. } | Self::IntegerOverflow { offset, .. } => {
                *offset
            },
        }
    }
}
