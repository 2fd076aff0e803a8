use doglang::compiler::err::CompileError;
use doglang::compiler::lexis::lexer::Lexer;
use doglang::compiler::lexis::token::{Token, TokenKind};
use doglang::compiler::syntax::ast::statement::{LetStatement, Statement};
use doglang::compiler::syntax::ast::{Node, Program};
use doglang::compiler::syntax::err::{ParseError, ParseErrorKind};
use doglang::compiler::syntax::parser::Parser;
use doglang::syntax_analyze;
use indoc::indoc;

fn parse(code: &str) -> (Program, Vec<ParseError>) {
    let mut parser = Parser::new(Lexer::new(code));
    let program = parser.parse_program();
    (program, parser.errors().to_vec())
}

fn let_names(program: &Program) -> Vec<&str> {
    program
        .statements
        .iter()
        .map(|Statement::Let(LetStatement { name, .. })| name.value.as_str())
        .collect()
}

#[test]
fn test_let_statement() {
    let (program, errors) = parse("let x = 5;");
    assert!(errors.is_empty());
    assert_eq!(program.statements.len(), 1);
    let Statement::Let(statement) = &program.statements[0];
    assert_eq!(statement.token_literal(), "let");
    assert_eq!(statement.name.value, "x");
    assert_eq!(statement.name.token_literal(), "x");
    assert_eq!(statement.name.token.kind, TokenKind::Identifier);
    assert_eq!(statement.value, None);
}

#[test]
fn test_let_statements_keep_source_order() {
    let code = indoc! {"
        let x = 5;
        let y = 10;
        let foobar = 838383;
    "};
    let (program, errors) = parse(code);
    assert!(errors.is_empty());
    assert_eq!(let_names(&program), ["x", "y", "foobar"]);
    assert_eq!(program.token_literal(), "let");
}

#[test]
fn test_missing_identifier_drops_statement() {
    let (program, errors) = parse("let = 5;");
    assert!(program.statements.is_empty());
    assert_eq!(
        errors,
        [ParseError {
            kind: ParseErrorKind::UnexpectedToken {
                expected: TokenKind::Identifier,
                found: Token::new(TokenKind::Assign, "="),
            },
        }]
    );
}

#[test]
fn test_missing_assign_drops_statement() {
    let (program, errors) = parse("let x 5;");
    assert!(program.statements.is_empty());
    assert_eq!(errors.len(), 1);
    assert_eq!(
        errors[0].to_string(),
        "expected next token to be =, got INT instead"
    );
}

#[test]
fn test_empty_program() {
    let (program, errors) = parse("");
    assert!(program.statements.is_empty());
    assert!(errors.is_empty());
    assert_eq!(program.token_literal(), "");
}

#[test]
fn test_malformed_statement_does_not_hide_the_next_one() {
    let (program, errors) = parse("let let y = 1; let = 2; let z = 3;");
    assert_eq!(let_names(&program), ["y", "z"]);
    assert_eq!(errors.len(), 2);
}

#[test]
fn test_unterminated_let_statement_is_kept() {
    let (program, errors) = parse("let x = 5 + 6");
    assert!(errors.is_empty());
    assert_eq!(let_names(&program), ["x"]);
}

#[test]
fn test_let_at_end_of_input() {
    let (program, errors) = parse("let");
    assert!(program.statements.is_empty());
    assert_eq!(errors.len(), 1);
    assert_eq!(
        errors[0].to_string(),
        "expected next token to be IDENT, got EOF instead"
    );
}

#[test]
fn test_other_statements_are_ignored_silently() {
    let (program, errors) = parse("x + 1; 5 == 5; @; let a = b;");
    assert!(errors.is_empty());
    assert_eq!(let_names(&program), ["a"]);
}

#[test]
fn test_right_hand_side_is_skipped() {
    let (program, _) = parse("let a = (1 + 2) * foo != bar; let b = 2;");
    assert_eq!(let_names(&program), ["a", "b"]);
    assert!(program
        .statements
        .iter()
        .all(|Statement::Let(statement)| statement.value.is_none()));
}

#[test]
fn test_syntax_analyze() {
    let program = syntax_analyze("let x = 5;").unwrap();
    assert_eq!(let_names(&program), ["x"]);

    let error = syntax_analyze("let x 5; let = 1;").unwrap_err();
    assert_eq!(
        error.to_string(),
        indoc! {"
            encountering 2 syntax error(s):
                expected next token to be =, got INT instead
                expected next token to be IDENT, got = instead
        "}
    );
    let CompileError::Syntax(errors) = error else {
        panic!("syntax errors expected");
    };
    assert_eq!(errors.len(), 2);
}
