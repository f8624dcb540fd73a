use std::fmt;

use rust_decimal::{Decimal, prelude::FromPrimitive, prelude::ToPrimitive};

use crate::error::Error;
use crate::position::Span;

/// A numeric quantity, preserved separately as integer or float.
///
/// Arithmetic keeps integer results as integers wherever the mathematics
/// allows: mixed integer/float operations are promoted through
/// high-precision decimals and collapsed back to an integer when the result
/// is whole, and integer division stays integral when it is exact. An
/// integer result outside the i64 range takes the same promotion route and
/// comes back as a float rather than panicking.
#[derive(Debug, Clone, PartialEq)]
pub enum Number {
    Integer(i64),
    Float(f64),
}

impl Number {
    fn to_decimal(&self) -> Option<Decimal> {
        match self {
            Number::Integer(n) => Decimal::from_i64(*n),
            Number::Float(n) => Decimal::from_f64(*n),
        }
    }

    fn to_f64(&self) -> f64 {
        match self {
            Number::Integer(n) => *n as f64,
            Number::Float(n) => *n,
        }
    }

    pub fn is_zero(&self) -> bool {
        match self {
            Number::Integer(n) => *n == 0,
            Number::Float(n) => *n == 0.0,
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Integer(n) => write!(f, "{}", n),
            Number::Float(n) => write!(f, "{}", n),
        }
    }
}

/// Collapse a decimal result back to an integer when it is whole.
fn collapse(d: Decimal) -> Option<Number> {
    if d.is_integer()
        && let Some(n) = d.to_i64()
    {
        return Some(Number::Integer(n));
    }
    d.to_f64().map(Number::Float)
}

/// Mixed-type arithmetic through decimals, falling back to plain floats
/// when the operands do not fit a decimal.
fn mixed_or_float(
    a: &Number,
    b: &Number,
    dec_op: fn(Decimal, Decimal) -> Decimal,
    float_op: fn(f64, f64) -> f64,
) -> Number {
    if let (Some(ad), Some(bd)) = (a.to_decimal(), b.to_decimal())
        && let Some(n) = collapse(dec_op(ad, bd))
    {
        return n;
    }
    Number::Float(float_op(a.to_f64(), b.to_f64()))
}

/// A computed numeric result with an attached source span.
///
/// The span is used purely for error attribution. It is overwritten, never
/// shared, whenever the value flows through an operation or is copied out of
/// the environment: reading a variable yields a clone carrying the
/// *reference's* span, independent of the span stored at assignment time.
#[derive(Debug, Clone, PartialEq)]
pub struct Value {
    pub number: Number,
    pub span: Span,
}

impl Value {
    pub fn new(number: Number, span: Span) -> Self {
        Value { number, span }
    }

    pub fn integer(n: i64, span: Span) -> Self {
        Value::new(Number::Integer(n), span)
    }

    /// Replace the attached span, consuming and returning the value.
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    pub fn add(&self, other: &Value) -> Result<Value, Error> {
        let number = match (&self.number, &other.number) {
            // A sum outside the i64 range promotes like any mixed operation
            (Number::Integer(a), Number::Integer(b)) => match a.checked_add(*b) {
                Some(n) => Number::Integer(n),
                None => mixed_or_float(&self.number, &other.number, |x, y| x + y, |x, y| x + y),
            },
            (Number::Float(a), Number::Float(b)) => Number::Float(a + b),
            (a, b) => mixed_or_float(a, b, |x, y| x + y, |x, y| x + y),
        };
        Ok(Value::new(number, self.span.clone()))
    }

    pub fn sub(&self, other: &Value) -> Result<Value, Error> {
        let number = match (&self.number, &other.number) {
            (Number::Integer(a), Number::Integer(b)) => match a.checked_sub(*b) {
                Some(n) => Number::Integer(n),
                None => mixed_or_float(&self.number, &other.number, |x, y| x - y, |x, y| x - y),
            },
            (Number::Float(a), Number::Float(b)) => Number::Float(a - b),
            (a, b) => mixed_or_float(a, b, |x, y| x - y, |x, y| x - y),
        };
        Ok(Value::new(number, self.span.clone()))
    }

    pub fn mul(&self, other: &Value) -> Result<Value, Error> {
        let number = match (&self.number, &other.number) {
            (Number::Integer(a), Number::Integer(b)) => match a.checked_mul(*b) {
                Some(n) => Number::Integer(n),
                None => mixed_or_float(&self.number, &other.number, |x, y| x * y, |x, y| x * y),
            },
            (Number::Float(a), Number::Float(b)) => Number::Float(a * b),
            (a, b) => mixed_or_float(a, b, |x, y| x * y, |x, y| x * y),
        };
        Ok(Value::new(number, self.span.clone()))
    }

    /// Division, checked for an exactly-zero right operand first.
    ///
    /// The error span is the right operand's span, pointing the diagnostic
    /// at the divisor rather than the whole expression.
    pub fn div(&self, other: &Value) -> Result<Value, Error> {
        if other.number.is_zero() {
            return Err(Error::division_by_zero(other.span.clone()));
        }
        let number = match (&self.number, &other.number) {
            // Exact division keeps the integer type; a quotient outside the
            // i64 range (i64::MIN / -1) falls to the float path
            (Number::Integer(a), Number::Integer(b)) => {
                match (a.checked_rem(*b), a.checked_div(*b)) {
                    (Some(0), Some(n)) => Number::Integer(n),
                    _ => Number::Float(*a as f64 / *b as f64),
                }
            }
            (Number::Float(a), Number::Float(b)) => Number::Float(a / b),
            (a, b) => mixed_or_float(a, b, |x, y| x / y, |x, y| x / y),
        };
        Ok(Value::new(number, self.span.clone()))
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number)
    }
}
