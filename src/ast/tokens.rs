use crate::position::Span;

/// A classified lexical unit with its source span.
///
/// Tokens are immutable, produced in source order, and owned by the vector
/// returned from [`Lexer::tokenize`](crate::lexer::Lexer::tokenize).
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Token { kind, span }
    }
}

/// The closed set of lexical categories.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    // Literals
    /// Run of decimal digits, parsed to its integer value
    ///
    /// # Examples
    /// ```text
    /// 42
    /// 007
    /// ```
    Integer(i64),

    /// Maximal run of alphanumerics, possibly with single embedded spaces
    ///
    /// # Examples
    /// ```text
    /// hello
    /// item42
    /// hello world
    /// ```
    Word(String),

    /// A word that matched the reserved-word table
    ///
    /// Keywords are recognized by scanning a full word run and then looking
    /// it up, never by comparing single characters against keyword strings.
    /// No grammar rule consumes them; the parser rejects them.
    Keyword(Keyword),

    // Whitespace runs (consumed by the analytics helpers, skipped by the parser)
    /// Run of spaces, carrying the space count
    Space(usize),

    /// Run of tabs, carrying the tab count
    Tab(usize),

    /// Run of newlines, carrying the newline count
    Line(usize),

    // Arithmetic
    /// Addition or unary plus
    Plus,

    /// Subtraction or unary minus
    Minus,

    /// Multiplication
    Star,

    /// Division
    Slash,

    /// Modulo
    Percent,

    // Delimiters
    /// Left parenthesis for grouping
    LParen,

    /// Right parenthesis
    RParen,

    /// Comma
    Comma,

    /// Semicolon
    Semicolon,

    // Assignment and comparison
    /// Assignment (`=`)
    ///
    /// # Examples
    /// ```text
    /// x = 5
    /// ```
    Assign,

    /// Less than
    Less,

    /// Greater than
    Greater,

    // Bitwise
    /// Bitwise AND
    Ampersand,

    /// Bitwise OR
    Pipe,

    /// Bitwise XOR
    Caret,

    /// Bitwise NOT
    Tilde,

    /// Left shift (`<<`), matched by peeking the second character
    ShiftLeft,

    /// Right shift (`>>`), matched by peeking the second character
    ShiftRight,

    // Derived markers
    /// Parity marker added by [`annotate_parity`](crate::lexer::annotate_parity)
    Even,

    /// Parity marker added by [`annotate_parity`](crate::lexer::annotate_parity)
    Odd,

    /// Character that matched no token rule
    ///
    /// Scanning does not abort on these; they carry their own diagnostic
    /// position so one pass can surface every bad character.
    Unknown(char),

    /// End of input, always the final token
    End,
}

/// Reserved words recognized by the lexer.
///
/// The set comes from the object-language surface that shares this lexer;
/// none of them reach a grammar rule in the expression parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keyword {
    While,
    Else,
    For,
    Function,
    Static,
    Return,
    Public,
    Private,
    Null,
    New,
    Class,
}

impl Keyword {
    /// Classify a finished word run against the reserved-word table.
    pub fn lookup(word: &str) -> Option<Keyword> {
        match word {
            "while" => Some(Keyword::While),
            "else" => Some(Keyword::Else),
            "for" => Some(Keyword::For),
            "function" => Some(Keyword::Function),
            "static" => Some(Keyword::Static),
            "return" => Some(Keyword::Return),
            "Public" => Some(Keyword::Public),
            "Private" => Some(Keyword::Private),
            "null" => Some(Keyword::Null),
            "New" => Some(Keyword::New),
            "Class" => Some(Keyword::Class),
            _ => None,
        }
    }
}
