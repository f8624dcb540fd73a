//! Execute basil programs and token dumps for the CLI.

use super::CliError;
use crate::analysis;
use crate::ast::Token;
use crate::lexer::{Lexer, annotate_parity};
use crate::value::Value;

/// Options shared by the eval and tokens commands.
#[derive(Debug, Clone, Default)]
pub struct EvalOptions {
    /// Display name for diagnostics (file name, `<stdin>`, ...)
    pub source_name: String,
    /// The program text
    pub source: String,
}

/// Run a program end to end.
pub fn execute_eval(options: &EvalOptions) -> Result<Value, CliError> {
    crate::run(&options.source_name, &options.source).map_err(CliError::Run)
}

/// Scan a program into its token stream, optionally applying the parity
/// post-pass.
pub fn execute_tokens(options: &EvalOptions, parity: bool) -> Vec<Token> {
    let tokens = Lexer::new(&options.source_name, &options.source).tokenize();
    if parity {
        annotate_parity(tokens)
    } else {
        tokens
    }
}

/// Totals reported by the count command.
#[derive(Debug, Clone, Copy)]
pub struct CountReport {
    pub totals: analysis::WhitespaceTotals,
    pub words: usize,
    pub tokens: usize,
}

pub fn execute_count(options: &EvalOptions) -> CountReport {
    CountReport {
        totals: analysis::count_lines_spaces_tabs(&options.source),
        words: analysis::count_words(&options.source),
        tokens: analysis::count_tokens(&options.source),
    }
}
