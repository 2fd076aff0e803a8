use super::text::Reader;
use super::token::{Token, TokenKind};

pub struct Lexer {
    reader: Reader,
}

impl Lexer {
    #[must_use]
    pub fn new(code: &str) -> Lexer {
        Lexer {
            reader: Reader::new(code),
        }
    }

    /// Consumes and returns the next token. Once the input is exhausted every
    /// call returns [`TokenKind::Eof`].
    pub fn next_token(&mut self) -> Token {
        self.reader.skip_spaces();
        let Some(c) = self.reader.peek() else {
            return Token::eof();
        };
        match c {
            'a'..='z' | 'A'..='Z' | '_' => self.digest_identifier_or_keyword(),
            '0'..='9' => self.digest_number(),
            _ => self.digest_symbol(c),
        }
    }

    fn digest_identifier_or_keyword(&mut self) -> Token {
        let identifier = self
            .reader
            .take_while(|c| matches!(c, 'a'..='z' | 'A'..='Z' | '_'));
        Token::new(TokenKind::lookup_identifier(&identifier), identifier)
    }

    fn digest_number(&mut self) -> Token {
        let number = self.reader.take_while(|c| c.is_ascii_digit());
        Token::new(TokenKind::Int, number)
    }

    fn expect(&mut self, expected: char) -> bool {
        if self.reader.peek_next() == Some(expected) {
            self.reader.forward();
            return true;
        }
        false
    }

    fn digest_symbol(&mut self, c: char) -> Token {
        let token = match c {
            '=' if self.expect('=') => Token::new(TokenKind::Equal, "=="),
            '!' if self.expect('=') => Token::new(TokenKind::NotEqual, "!="),
            c => match TokenKind::of_symbol(c) {
                Some(kind) => Token::new(kind, c),
                None => Token::new(TokenKind::Illegal, c),
            },
        };
        self.reader.forward();
        token
    }
}
