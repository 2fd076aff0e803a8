use std::fmt::{self, Display};

use crate::compiler::lexis::token::{Token, TokenKind};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    UnexpectedToken { expected: TokenKind, found: Token },
}

/// A recoverable failure; the statement it belongs to is dropped and parsing
/// carries on with the next token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub kind: ParseErrorKind,
}

impl Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ParseErrorKind::UnexpectedToken { expected, found } => {
                write!(
                    f,
                    "expected next token to be {expected}, got {} instead",
                    found.kind
                )
            }
        }
    }
}

impl std::error::Error for ParseError {}
