use std::fmt::{self, Display};

use crate::util::pretty_format::{indent, PrettyFormat};

use self::statement::Statement;

pub mod expression;
pub mod statement;

/// Every node remembers the token it was built from, for diagnostics.
pub trait Node {
    fn token_literal(&self) -> &str;
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Program {
    pub statements: Vec<Statement>,
}

impl Node for Program {
    fn token_literal(&self) -> &str {
        self.statements
            .first()
            .map_or("", Node::token_literal)
    }
}

impl PrettyFormat for Program {
    fn pretty_format(&self, f: &mut fmt::Formatter, indentation_num: usize) -> fmt::Result {
        let indentation = indent(indentation_num);
        writeln!(f, "{indentation}Program")?;
        self.statements
            .iter()
            .try_for_each(|statement| statement.pretty_format(f, indentation_num + 1))
    }
}

impl Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.statements
            .iter()
            .try_for_each(|statement| write!(f, "{statement}"))
    }
}
