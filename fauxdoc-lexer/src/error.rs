use thiserror::Error;

/// Lexer error, carrying the character offset into the original query text
/// at which the problem was found.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum LexerError {
    /// A `'...'` string literal was never closed.
    #[error("unterminated string literal starting at offset {offset}")]
    UnterminatedString {
        /// Character offset of the opening quote.
        offset: usize,
    },
    /// A character cannot start any valid token.
    #[error("unexpected character {ch:?} at offset {offset}")]
    UnexpectedChar {
        /// The offending character.
        ch: char,
        /// Character offset of `ch`.
        offset: usize,
    },
}

impl LexerError {
    /// The character offset the error occurred at.
    pub fn offset(&self) -> usize {
        match self {
            LexerError::UnterminatedString { offset } => *offset,
            LexerError::UnexpectedChar { offset, .. } => *offset,
        }
    }
}
