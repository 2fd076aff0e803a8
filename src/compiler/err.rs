use std::fmt::{self, Display};

use super::syntax::err::ParseError;

#[derive(Debug)]
pub enum CompileError {
    UnreadableSource { path: String, reason: String },

    Syntax(Vec<ParseError>),
}

impl Display for CompileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompileError::UnreadableSource { path, reason } => {
                write!(f, "failed to read source file {path}: {reason}")
            }
            CompileError::Syntax(errors) => {
                writeln!(f, "encountering {} syntax error(s):", errors.len())?;
                errors
                    .iter()
                    .try_for_each(|error| writeln!(f, "    {error}"))
            }
        }
    }
}

impl std::error::Error for CompileError {}
