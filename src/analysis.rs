//! Text-analytics helpers over the token stream.
//!
//! These are standalone pure functions: they call the tokenizer for counting
//! purposes but contribute no control flow to the parser or evaluator.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::ast::TokenKind;
use crate::lexer::Lexer;

/// Word shape: alphanumeric runs joined by single spaces.
static WORD_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[a-zA-Z0-9]+(?: [a-zA-Z0-9]+)*").expect("word regex is valid")
});

/// Whitespace totals for a source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WhitespaceTotals {
    pub lines: usize,
    pub spaces: usize,
    pub tabs: usize,
}

impl fmt::Display for WhitespaceTotals {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Total lines: {}, Total spaces: {}, Total tabs: {}",
            self.lines, self.spaces, self.tabs
        )
    }
}

/// Sum the whitespace-run token payloads for a source text.
pub fn count_lines_spaces_tabs(text: &str) -> WhitespaceTotals {
    let tokens = Lexer::new("<count>", text).tokenize();

    let mut totals = WhitespaceTotals {
        lines: 0,
        spaces: 0,
        tabs: 0,
    };
    for token in &tokens {
        match token.kind {
            TokenKind::Line(n) => totals.lines += n,
            TokenKind::Space(n) => totals.spaces += n,
            TokenKind::Tab(n) => totals.tabs += n,
            _ => {}
        }
    }
    totals
}

/// Number of tokens the scanner produces for `text`, excluding the
/// terminal End.
pub fn count_tokens(text: &str) -> usize {
    Lexer::new("<count>", text).tokenize().len() - 1
}

/// Number of words in `text` under the word-matching rule.
pub fn count_words(text: &str) -> usize {
    WORD_RE.find_iter(text).count()
}
