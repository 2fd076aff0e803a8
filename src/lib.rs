use std::fs;
use std::path::Path;

use compiler::err::CompileError;
use compiler::lexis::lexer::Lexer;
use compiler::lexis::token::{Token, TokenKind};
use compiler::syntax::ast::Program;
use compiler::syntax::parser::Parser;

pub mod compiler;
pub mod constants;
pub mod util;

/// Every token of `code`, ending with exactly one [`TokenKind::Eof`].
#[must_use]
pub fn tokenize(code: &str) -> Vec<Token> {
    let mut lexer = Lexer::new(code);
    let mut tokens = Vec::new();
    loop {
        let token = lexer.next_token();
        let is_eof = token.is(TokenKind::Eof);
        tokens.push(token);
        if is_eof {
            return tokens;
        }
    }
}

/// # Errors
/// Fails with every diagnostic of the pass when any statement was dropped.
pub fn syntax_analyze(code: &str) -> Result<Program, CompileError> {
    let mut parser = Parser::new(Lexer::new(code));
    let program = parser.parse_program();
    if parser.errors().is_empty() {
        Ok(program)
    } else {
        Err(CompileError::Syntax(parser.errors().to_vec()))
    }
}

/// # Errors
pub fn read_source(path: &Path) -> Result<String, CompileError> {
    fs::read_to_string(path).map_err(|e| CompileError::UnreadableSource {
        path: path.display().to_string(),
        reason: e.to_string(),
    })
}
