use std::fmt::Write;
use std::path::Path;

use doglang::compiler::lexis::lexer::Lexer;
use doglang::compiler::syntax::parser::Parser;
use doglang::constants::common::{SOURCE_FILE, TEST_FILES};
use doglang::read_source;
use doglang::util::pretty_format::Pretty;

pub fn test_with(test_name: &str) {
    let path_to_test = Path::new(TEST_FILES).join(test_name);
    let program = read_source(&path_to_test.join(SOURCE_FILE)).unwrap();
    let expected = read_source(&path_to_test.join("output")).unwrap();
    assert_eq!(render(&program), expected);
}

/// The program tree followed by one line per diagnostic.
fn render(source_code: &str) -> String {
    let mut parser = Parser::new(Lexer::new(source_code));
    let program = parser.parse_program();
    let mut output = Pretty(&program).to_string();
    for error in parser.errors() {
        writeln!(output, "error: {error}").unwrap();
    }
    output
}
