use std::fmt;

use crate::position::Span;

/// The stage-spanning diagnostic taxonomy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Character matched no token rule (lexing)
    IllegalCharacter,
    /// Current token does not fit the grammar position (parsing)
    UnexpectedToken,
    /// A required terminator is absent (parsing)
    MissingToken,
    /// Name has no binding anywhere in the environment chain (evaluation)
    UndefinedVariable,
    /// Right operand of `/` is exactly zero (evaluation)
    DivisionByZero,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::IllegalCharacter => "Illegal Character",
            ErrorKind::UnexpectedToken => "Unexpected Token",
            ErrorKind::MissingToken => "Missing Token",
            ErrorKind::UndefinedVariable => "Undefined Variable",
            ErrorKind::DivisionByZero => "Division by Zero",
        };
        write!(f, "{}", name)
    }
}

/// A position-annotated diagnostic.
///
/// Constructed once at the failure site and propagated by value up to the
/// [`run`](crate::run) boundary; no stage catches and recovers from an
/// error raised by an earlier stage.
#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    pub kind: ErrorKind,
    pub span: Span,
    pub message: String,
}

impl Error {
    pub fn new(kind: ErrorKind, span: Span, message: impl Into<String>) -> Self {
        Error {
            kind,
            span,
            message: message.into(),
        }
    }

    pub fn illegal_character(ch: char, span: Span) -> Self {
        Error::new(ErrorKind::IllegalCharacter, span, format!("'{}'", ch))
    }

    pub fn unexpected_token(details: impl Into<String>, span: Span) -> Self {
        Error::new(ErrorKind::UnexpectedToken, span, details)
    }

    pub fn missing_token(details: impl Into<String>, span: Span) -> Self {
        Error::new(ErrorKind::MissingToken, span, details)
    }

    pub fn undefined_variable(name: &str, span: Span) -> Self {
        Error::new(
            ErrorKind::UndefinedVariable,
            span,
            format!("'{}' is not defined", name),
        )
    }

    pub fn division_by_zero(span: Span) -> Self {
        Error::new(ErrorKind::DivisionByZero, span, "Division by zero")
    }
}

/// Renders `"<kind>: <details>"` followed by `"File <name>, line <n>"` with
/// a 1-based line number (positions are 0-based internally).
impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {}\nFile {}, line {}",
            self.kind,
            self.message,
            self.span.start.source_name,
            self.span.start.line + 1
        )
    }
}

impl std::error::Error for Error {}
