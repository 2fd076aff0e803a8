use std::fmt::{self, Display};

use crate::compiler::lexis::token::Token;
use crate::util::pretty_format::{indent, PrettyFormat};

use super::expression::{Expression, Identifier};
use super::Node;

/// `let <name> = <value>;`
///
/// The right-hand side is not parsed yet, so `value` is `None` for every
/// statement produced by the parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetStatement {
    pub token: Token,
    pub name: Identifier,
    pub value: Option<Expression>,
}

impl Node for LetStatement {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }
}

impl Display for LetStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.token_literal(), self.name)?;
        if let Some(value) = &self.value {
            write!(f, " = {value}")?;
        }
        write!(f, ";")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    Let(LetStatement),
}

impl Node for Statement {
    fn token_literal(&self) -> &str {
        match self {
            Statement::Let(statement) => statement.token_literal(),
        }
    }
}

impl PrettyFormat for Statement {
    fn pretty_format(&self, f: &mut fmt::Formatter, indentation_num: usize) -> fmt::Result {
        let indentation = indent(indentation_num);
        match self {
            Statement::Let(LetStatement { name, value, .. }) => {
                writeln!(f, "{indentation}Let {name}")?;
                if let Some(value) = value {
                    value.pretty_format(f, indentation_num + 1)?;
                }
            }
        }
        Ok(())
    }
}

impl Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Statement::Let(statement) => write!(f, "{statement}"),
        }
    }
}
