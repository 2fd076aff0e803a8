use std::path::PathBuf;
use std::process;

use anyhow::Result;
use clap::{Parser as ClapParser, Subcommand};

use doglang::compiler::lexis::lexer::Lexer;
use doglang::compiler::syntax::parser::Parser;
use doglang::constants::common::DOGLANG;
use doglang::util::pretty_format::Pretty;
use doglang::{read_source, tokenize};

#[derive(ClapParser)]
#[command(name = DOGLANG)]
#[command(version)]
#[command(about = "Lexer and parser for the dog language")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the token stream of a source file
    Lex { file: PathBuf },
    /// Parse a source file and print the resulting program
    Parse {
        file: PathBuf,
        /// Print the program as an indented tree
        #[arg(long)]
        tree: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Lex { file } => {
            let code = read_source(&file)?;
            for token in tokenize(&code) {
                println!("{token}");
            }
        }
        Command::Parse { file, tree } => {
            let code = read_source(&file)?;
            let mut parser = Parser::new(Lexer::new(&code));
            let program = parser.parse_program();
            if tree {
                print!("{}", Pretty(&program));
            } else {
                println!("{program}");
            }
            if !parser.errors().is_empty() {
                for error in parser.errors() {
                    eprintln!("{error}");
                }
                process::exit(1);
            }
        }
    }

    Ok(())
}
