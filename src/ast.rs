//! # Basil - Abstract Syntax Tree
//!
//! Token and expression types shared by the lexer, parser, and interpreter.
//!
//! ## Architecture Overview
//!
//! The AST module is organized into focused submodules:
//!
//! - **[tokens]** - Lexical tokens produced by the lexer
//! - **[expressions]** - Expression nodes (literals, signs, operations, variables)
//! - **[operators]** - Binary and unary operators
//!
//! ## The Grammar
//!
//! ```text
//! expr    := WORD '=' expr
//!          | term (('+' | '-') term)*
//! term    := factor (('*' | '/') factor)*
//! factor  := ('+' | '-') factor | INTEGER | WORD | '(' expr ')'
//! ```
//!
//! Everything else the lexer recognizes (keywords, bitwise operators,
//! punctuation) is tokenized for the analytics consumers but rejected by the
//! parser.

pub mod expressions;
pub mod operators;
pub mod tokens;

pub use expressions::{Expr, ExprKind};
pub use operators::{BinOp, UnaryOp};
pub use tokens::{Keyword, Token, TokenKind};
