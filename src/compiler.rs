pub mod err;
pub mod lexis;
pub mod syntax;
