use crate::ast::{BinOp, Expr, ExprKind, UnaryOp};
use crate::environment::Environment;
use crate::error::Error;
use crate::position::Span;
use crate::value::Value;

/// The tree-walking evaluator.
///
/// Evaluation is a post-order walk parameterized by an [`Environment`]. The
/// dispatch is an exhaustive match over the closed set of node shapes, so a
/// new node variant without an evaluation rule is a compile error rather
/// than a runtime "no handler" failure. Any sub-evaluation error aborts the
/// walk immediately and propagates unchanged.
#[derive(Default)]
pub struct Interpreter;

impl Interpreter {
    pub fn new() -> Self {
        Self
    }

    pub fn eval(&self, expr: &Expr, env: &mut Environment) -> Result<Value, Error> {
        match &expr.kind {
            ExprKind::Number(n) => Ok(Value::new(n.clone(), expr.span.clone())),

            ExprKind::Unary { op, operand } => {
                let value = self.eval(operand, env)?;
                let value = match op {
                    UnaryOp::Plus => value,
                    UnaryOp::Negate => value.mul(&Value::integer(-1, Span::builtin()))?,
                };
                Ok(value.with_span(expr.span.clone()))
            }

            ExprKind::Binary { op, left, right } => {
                // Left fully before right, no interleaving
                let lhs = self.eval(left, env)?;
                let rhs = self.eval(right, env)?;
                let result = match op {
                    BinOp::Add => lhs.add(&rhs),
                    BinOp::Subtract => lhs.sub(&rhs),
                    BinOp::Multiply => lhs.mul(&rhs),
                    BinOp::Divide => lhs.div(&rhs),
                }?;
                Ok(result.with_span(expr.span.clone()))
            }

            ExprKind::VariableRef(name) => match env.get(name) {
                // Copy-on-read: the clone carries the reference's span while
                // the stored value keeps its own
                Some(value) => Ok(value.clone().with_span(expr.span.clone())),
                None => Err(Error::undefined_variable(name, expr.span.clone())),
            },

            ExprKind::VariableAssign { name, value } => {
                let bound = self.eval(value, env)?;
                env.set(name.clone(), bound.clone());
                Ok(bound)
            }
        }
    }
}
