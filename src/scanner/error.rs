//! Errors produced while scanning a token stream.
use std::{
    fmt::{Display, Formatter},
    io,
};

use thiserror::Error;

use crate::error::LineError;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ErrorType {
    #[error("Unrecognised character {0:?}")]
    UnrecognisedCharacter(char),
    #[error("Unterminated block comment")]
    UnterminatedComment,
    #[error("Integer literal does not fit in 64 bits")]
    IntegerOverflow,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub struct LexError {
    pub line: usize,
    pub error_type: ErrorType,
}

impl LexError {
    pub fn new(line: usize, error_type: ErrorType) -> Self {
        Self { line, error_type }
    }
}

impl Display for LexError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} on line {}", self.error_type, self.line)
    }
}

impl LineError for LexError {
    fn line(&self) -> usize {
        self.line
    }

    fn describe(&self) -> String {
        self.error_type.to_string()
    }
}

/// Any failure of a scan call. Lexical errors are kept apart from failures
/// of the underlying stream.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error("Failed to read source: {0}")]
    Io(#[from] io::Error),
}

impl ScanError {
    pub fn is_lexical(&self) -> bool {
        matches!(self, ScanError::Lex(_))
    }

    /// The lexical error, if this is one.
    pub fn as_lex_error(&self) -> Option<&LexError> {
        match self {
            ScanError::Lex(err) => Some(err),
            ScanError::Io(_) => None,
        }
    }
}
