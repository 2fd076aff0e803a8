use std::fmt::{self, Display};

pub trait PrettyFormat {
    /// # Errors
    fn pretty_format(&self, f: &mut fmt::Formatter, indentation_num: usize) -> fmt::Result;
}

#[must_use]
pub fn indent(n: usize) -> String {
    "    ".repeat(n)
}

/// Adapts a [`PrettyFormat`] node to [`Display`], starting at column zero.
pub struct Pretty<'a, T: PrettyFormat>(pub &'a T);

impl<T: PrettyFormat> Display for Pretty<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Pretty(node) = self;
        node.pretty_format(f, 0)
    }
}
