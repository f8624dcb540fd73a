use std::fmt;

use crate::ast::{BinOp, UnaryOp};
use crate::position::Span;
use crate::value::Number;

/// Abstract syntax tree node produced by the parser.
///
/// Each node owns its children exclusively (the AST is a tree, never shared
/// or cyclic) and carries the span covering the tokens it was built from.
#[derive(Debug, Clone, PartialEq)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
}

impl Expr {
    pub fn new(kind: ExprKind, span: Span) -> Self {
        Expr { kind, span }
    }
}

/// The closed set of expression shapes.
#[derive(Debug, Clone, PartialEq)]
pub enum ExprKind {
    /// Numeric literal
    ///
    /// # Example
    /// ```text
    /// 42
    /// ```
    Number(Number),

    /// Unary sign applied to a factor
    ///
    /// # Examples
    /// ```text
    /// -5
    /// --5
    /// ```
    Unary { op: UnaryOp, operand: Box<Expr> },

    /// Binary arithmetic operation
    ///
    /// # Example
    /// ```text
    /// 12 + 3 * 4
    /// ```
    Binary {
        op: BinOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },

    /// Variable read, resolved through the environment chain
    ///
    /// # Example
    /// ```text
    /// x + 1
    /// ```
    VariableRef(String),

    /// Variable binding in the innermost environment
    ///
    /// # Example
    /// ```text
    /// x = 5
    /// ```
    VariableAssign { name: String, value: Box<Expr> },
}

/// Pretty-print a re-lexable source form.
///
/// Binary operations and assignments are always parenthesized, so feeding
/// the printed text back through the lexer and parser reproduces an
/// equivalent tree.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ExprKind::Number(n) => write!(f, "{}", n),
            ExprKind::Unary { op, operand } => write!(f, "{}{}", op, operand),
            ExprKind::Binary { op, left, right } => {
                write!(f, "({} {} {})", left, op, right)
            }
            ExprKind::VariableRef(name) => write!(f, "{}", name),
            ExprKind::VariableAssign { name, value } => {
                write!(f, "({} = {})", name, value)
            }
        }
    }
}
