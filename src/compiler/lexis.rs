pub mod lexer;
pub mod token;

mod text;
