use crate::compiler::lexis::{
    lexer::Lexer,
    token::{Token, TokenKind},
};

use super::{
    ast::{
        expression::Identifier,
        statement::{LetStatement, Statement},
        Program,
    },
    err::{ParseError, ParseErrorKind},
};

pub struct Parser {
    lexer: Lexer,
    current: Token,
    peek: Token,
    errors: Vec<ParseError>,
}

impl Parser {
    /// Primes both the current and the peeked token.
    #[must_use]
    pub fn new(lexer: Lexer) -> Parser {
        let mut lexer = lexer;
        let current = lexer.next_token();
        let peek = lexer.next_token();
        Parser {
            lexer,
            current,
            peek,
            errors: Vec::new(),
        }
    }

    /// Diagnostics recorded so far, in source order.
    #[must_use]
    pub fn errors(&self) -> &[ParseError] {
        &self.errors
    }

    pub fn parse_program(&mut self) -> Program {
        let mut statements = Vec::new();
        while !self.current.is(TokenKind::Eof) {
            if let Some(statement) = self.parse_statement() {
                statements.push(statement);
            }
            self.next();
        }
        Program { statements }
    }

    fn next(&mut self) {
        let peek = self.lexer.next_token();
        self.current = std::mem::replace(&mut self.peek, peek);
    }

    fn parse_statement(&mut self) -> Option<Statement> {
        match self.current.kind {
            TokenKind::Let => self.parse_let_statement().map(Statement::Let),
            _ => None,
        }
    }

    fn parse_let_statement(&mut self) -> Option<LetStatement> {
        let token = self.current.clone();
        if !self.expect_peek(TokenKind::Identifier) {
            return None;
        }
        let name = Identifier::new(self.current.clone());
        if !self.expect_peek(TokenKind::Assign) {
            return None;
        }
        // right-hand side is skipped up to the terminating semicolon
        while !self.current.is(TokenKind::Semicolon) && !self.current.is(TokenKind::Eof) {
            self.next();
        }
        Some(LetStatement {
            token,
            name,
            value: None,
        })
    }

    /// Advances only when the peeked token has the expected kind; otherwise
    /// records a diagnostic and leaves the cursor where it is.
    fn expect_peek(&mut self, expected: TokenKind) -> bool {
        if self.peek.is(expected) {
            self.next();
            return true;
        }
        self.errors.push(ParseError {
            kind: ParseErrorKind::UnexpectedToken {
                expected,
                found: self.peek.clone(),
            },
        });
        false
    }
}
