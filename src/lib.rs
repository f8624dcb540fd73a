//! # Basil
//!
//! A tiny expression language: a position-tracking lexer, a
//! recursive-descent parser, and a tree-walking evaluator over a lexically
//! scoped variable environment, with spanned diagnostics at every stage.
//!
//! Data flow: source text → [`Lexer`] → tokens → [`Parser`] → [`Expr`] →
//! [`Interpreter`] (+ [`Environment`]) → [`Value`] or [`Error`].
//!
//! ```
//! use basil_lang::{run, value::Number};
//!
//! let value = run("<doc>", "12 + 3 * 4").unwrap();
//! assert_eq!(value.number, Number::Integer(24));
//! ```

pub mod analysis;
pub mod ast;
#[cfg(feature = "cli")]
pub mod cli;
pub mod environment;
pub mod error;
pub mod interpreter;
pub mod lexer;
pub mod parser;
pub mod position;
pub mod value;

pub use ast::{BinOp, Expr, ExprKind, Keyword, Token, TokenKind, UnaryOp};
pub use environment::{Environment, GLOBALS};
pub use error::{Error, ErrorKind};
pub use interpreter::Interpreter;
pub use lexer::Lexer;
pub use parser::Parser;
pub use position::{Position, Span};
pub use value::{Number, Value};

/// Run a program: lex, parse, and evaluate `source_text`.
///
/// The predefined bindings `NULL = 0`, `FALSE = 0`, `TRUE = 1` are visible
/// in every run. Each call builds a fresh child environment over the frozen
/// defaults, so independent runs never observe each other's assignments.
///
/// The first failure at any stage is returned unchanged; because the lexer
/// deliberately scans past unknown characters, the first of those surfaces
/// here as an [`ErrorKind::IllegalCharacter`] once the full scan completes.
pub fn run(source_name: &str, source_text: &str) -> Result<Value, Error> {
    let tokens = Lexer::new(source_name, source_text).tokenize();
    if let Some(error) = lexer::first_illegal(&tokens) {
        return Err(error);
    }

    let expr = Parser::new(tokens).parse()?;

    let mut env = Environment::with_parent(&GLOBALS);
    Interpreter::new().eval(&expr, &mut env)
}
