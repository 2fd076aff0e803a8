use std::collections::HashMap;
use std::fmt::{self, Display};

use once_cell::sync::Lazy;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Eof,
    Illegal,

    Identifier,
    Int,

    Assign,
    Plus,
    Minus,
    Bang,
    Slash,
    Asterisk,

    LessThan,
    GreaterThan,
    Equal,
    NotEqual,

    Semicolon,
    Comma,
    LeftBrace,
    RightBrace,
    LeftParenthesis,
    RightParenthesis,

    Let,
}

static KEYWORD_MAP: Lazy<HashMap<&'static str, TokenKind>> =
    Lazy::new(|| HashMap::from([("let", TokenKind::Let)]));

impl TokenKind {
    /// Classifies a run of identifier characters: a reserved keyword kind,
    /// or [`TokenKind::Identifier`] for everything else.
    #[must_use]
    pub fn lookup_identifier(s: &str) -> TokenKind {
        KEYWORD_MAP.get(s).copied().unwrap_or(TokenKind::Identifier)
    }

    #[must_use]
    pub fn of_symbol(c: char) -> Option<TokenKind> {
        let kind = match c {
            '=' => TokenKind::Assign,
            '+' => TokenKind::Plus,
            '-' => TokenKind::Minus,
            '!' => TokenKind::Bang,
            '/' => TokenKind::Slash,
            '*' => TokenKind::Asterisk,
            '<' => TokenKind::LessThan,
            '>' => TokenKind::GreaterThan,
            ';' => TokenKind::Semicolon,
            ',' => TokenKind::Comma,
            '{' => TokenKind::LeftBrace,
            '}' => TokenKind::RightBrace,
            '(' => TokenKind::LeftParenthesis,
            ')' => TokenKind::RightParenthesis,
            _ => return None,
        };
        Some(kind)
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            TokenKind::Eof => "EOF",
            TokenKind::Illegal => "ILLEGAL",
            TokenKind::Identifier => "IDENT",
            TokenKind::Int => "INT",
            TokenKind::Assign => "=",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Bang => "!",
            TokenKind::Slash => "/",
            TokenKind::Asterisk => "*",
            TokenKind::LessThan => "<",
            TokenKind::GreaterThan => ">",
            TokenKind::Equal => "==",
            TokenKind::NotEqual => "!=",
            TokenKind::Semicolon => ";",
            TokenKind::Comma => ",",
            TokenKind::LeftBrace => "{",
            TokenKind::RightBrace => "}",
            TokenKind::LeftParenthesis => "(",
            TokenKind::RightParenthesis => ")",
            TokenKind::Let => "LET",
        };
        write!(f, "{text}")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub literal: String,
}

impl Token {
    #[must_use]
    pub fn new(kind: TokenKind, literal: impl Into<String>) -> Token {
        Token {
            kind,
            literal: literal.into(),
        }
    }

    #[must_use]
    pub fn eof() -> Token {
        Token::new(TokenKind::Eof, "")
    }

    #[must_use]
    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Token { kind, literal } = self;
        match kind {
            TokenKind::Identifier | TokenKind::Int | TokenKind::Illegal => {
                write!(f, "{kind}({literal})")
            }
            _ => write!(f, "{kind}"),
        }
    }
}
