use fauxdoc_lexer::LexerError;
use thiserror::Error;

/// Parser error: either the lexer rejected the input, or the token stream
/// doesn't conform to the grammar.
#[derive(Clone, Debug, Error)]
pub enum ParserError {
    /// Tokenizing failed before parsing could start.
    #[error(transparent)]
    Tokenize(#[from] LexerError),
    /// The token stream does not match the grammar.
    #[error("{message} at offset {offset}")]
    Syntax {
        /// Human-readable description of what was expected.
        message: String,
        /// Character offset of the offending token (or of end-of-input).
        offset: usize,
    },
}

impl ParserError {
    pub(crate) fn syntax(message: impl Into<String>, offset: usize) -> ParserError {
        ParserError::Syntax {
            message: message.into(),
            offset,
        }
    }
}
