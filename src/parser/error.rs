//! Errors raised while recovering a tree from legacy text.

use thiserror::Error;

/// A structural problem that makes the whole file unusable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A non-blank line inside a block has no `key : value` separator.
    #[error("line {line}: expected `key : value`, found `{text}`")]
    MissingColon { line: usize, text: String },

    /// The input ended before a block was closed.
    #[error("line {line}: unexpected end of input inside an open block")]
    UnexpectedEof { line: usize },

    /// A tag attribute is missing its `=` or its closing quote.
    #[error("line {line}: malformed attribute in `{text}`")]
    MalformedAttribute { line: usize, text: String },
}

impl ParseError {
    pub fn missing_colon(line: usize, text: impl Into<String>) -> Self {
        Self::MissingColon {
            line,
            text: text.into(),
        }
    }

    pub fn malformed_attribute(line: usize, text: impl Into<String>) -> Self {
        Self::MalformedAttribute {
            line,
            text: text.into(),
        }
    }

    /// Line the error was detected on.
    pub fn line(&self) -> usize {
        match self {
            Self::MissingColon { line, .. }
            | Self::UnexpectedEof { line }
            | Self::MalformedAttribute { line, .. } => *line,
        }
    }
}
