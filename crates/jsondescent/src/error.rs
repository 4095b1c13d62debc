use thiserror::Error;

/// Character carried by [`SyntaxError::UnexpectedCharacter`] when a value was
/// required but the input was already exhausted.
pub const END_OF_INPUT: char = '\0';

/// A grammar violation, reported at the position where it was detected.
///
/// Every error is fatal: parsing stops at the first one and no partial value
/// is returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{source} at {line}:{column}")]
pub struct ParseError {
    pub(crate) source: SyntaxError,
    pub(crate) offset: usize,
    pub(crate) line: usize,
    pub(crate) column: usize,
}

impl ParseError {
    /// The kind of grammar violation.
    #[must_use]
    pub fn syntax_error(&self) -> &SyntaxError {
        &self.source
    }

    /// Byte offset into the source, 0-based.
    #[must_use]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Line of the error, 1-based.
    #[must_use]
    pub fn line(&self) -> usize {
        self.line
    }

    /// Column of the error in characters, 1-based.
    #[must_use]
    pub fn column(&self) -> usize {
        self.column
    }
}

/// The ways a document can fall outside the grammar.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum SyntaxError {
    #[error("unexpected character {0:?}")]
    UnexpectedCharacter(char),
    #[error("unexpected end of input")]
    UnexpectedEndOfInput,
    #[error("extra data after JSON value")]
    TrailingData,
    #[error("number out of range")]
    NumberOutOfRange,
}
