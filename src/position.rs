//! Source positions and spans.
//!
//! Every token and AST node carries a [`Span`] so that diagnostics can point
//! at the exact place in the source text they came from. The lexer owns one
//! live cursor [`Position`] and clones it whenever a span boundary is
//! captured; the live cursor is never stored in a token or node.

/// A cursor into a named source buffer.
///
/// `line` and `column` are 0-based and maintained incrementally by
/// [`advance`](Position::advance); they are never recomputed by re-scanning
/// the text. A freshly started position sits at `index = -1`, `column = -1`
/// (before the first character) so that the first advance lands on index 0.
#[derive(Debug, Clone, PartialEq)]
pub struct Position {
    /// Character offset into the source, -1 before the first advance.
    pub index: i64,
    /// 0-based line number.
    pub line: i64,
    /// 0-based column number, -1 before the first advance.
    pub column: i64,
    /// Display name of the source buffer (file name, `<stdin>`, ...).
    pub source_name: String,
    /// The full source text, kept for diagnostic rendering.
    pub source_text: String,
}

impl Position {
    /// Starting position for a source buffer, before the first advance.
    pub fn start(source_name: &str, source_text: &str) -> Self {
        Position {
            index: -1,
            line: 0,
            column: -1,
            source_name: source_name.to_string(),
            source_text: source_text.to_string(),
        }
    }

    /// Move past `current`, the character the cursor is leaving behind.
    ///
    /// Leaving a newline bumps the line counter and resets the column to 0
    /// so the cursor lands on column 0 of the next line.
    pub fn advance(&mut self, current: Option<char>) {
        self.index += 1;
        self.column += 1;

        if current == Some('\n') {
            self.line += 1;
            self.column = 0;
        }
    }
}

/// A source region: inclusive start, exclusive end.
#[derive(Debug, Clone, PartialEq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

impl Span {
    pub fn new(start: Position, end: Position) -> Self {
        Span { start, end }
    }

    /// The union of two spans, from the start of `self` to the end of
    /// `other`. Used to derive a parent node's span from its children.
    pub fn to(&self, other: &Span) -> Span {
        Span {
            start: self.start.clone(),
            end: other.end.clone(),
        }
    }

    /// A synthetic span for values without a source location, such as the
    /// predefined constants.
    pub fn builtin() -> Span {
        let pos = Position::start("<builtins>", "");
        Span {
            start: pos.clone(),
            end: pos,
        }
    }
}
