//! Structured JSON renderings of values and token streams.

use serde_json::json;

use crate::ast::{Token, TokenKind};
use crate::value::{Number, Value};

fn number_to_json(number: &Number) -> serde_json::Value {
    match number {
        Number::Integer(n) => json!(n),
        Number::Float(n) => serde_json::Number::from_f64(*n)
            .map(serde_json::Value::Number)
            .unwrap_or(serde_json::Value::Null),
    }
}

/// Render a computed value with its source attribution.
pub fn value_to_json(value: &Value) -> serde_json::Value {
    json!({
        "value": number_to_json(&value.number),
        "source": value.span.start.source_name,
        "line": value.span.start.line,
        "column": value.span.start.column,
    })
}

/// Render one token as `{kind, value?, line, column}`.
pub fn token_to_json(token: &Token) -> serde_json::Value {
    let (kind, payload) = match &token.kind {
        TokenKind::Integer(n) => ("Integer", Some(json!(n))),
        TokenKind::Word(w) => ("Word", Some(json!(w))),
        TokenKind::Keyword(k) => ("Keyword", Some(json!(format!("{:?}", k)))),
        TokenKind::Space(n) => ("Space", Some(json!(n))),
        TokenKind::Tab(n) => ("Tab", Some(json!(n))),
        TokenKind::Line(n) => ("Line", Some(json!(n))),
        TokenKind::Plus => ("Plus", None),
        TokenKind::Minus => ("Minus", None),
        TokenKind::Star => ("Star", None),
        TokenKind::Slash => ("Slash", None),
        TokenKind::Percent => ("Percent", None),
        TokenKind::LParen => ("LParen", None),
        TokenKind::RParen => ("RParen", None),
        TokenKind::Comma => ("Comma", None),
        TokenKind::Semicolon => ("Semicolon", None),
        TokenKind::Assign => ("Assign", None),
        TokenKind::Less => ("Less", None),
        TokenKind::Greater => ("Greater", None),
        TokenKind::Ampersand => ("Ampersand", None),
        TokenKind::Pipe => ("Pipe", None),
        TokenKind::Caret => ("Caret", None),
        TokenKind::Tilde => ("Tilde", None),
        TokenKind::ShiftLeft => ("ShiftLeft", None),
        TokenKind::ShiftRight => ("ShiftRight", None),
        TokenKind::Even => ("Even", None),
        TokenKind::Odd => ("Odd", None),
        TokenKind::Unknown(c) => ("Unknown", Some(json!(c.to_string()))),
        TokenKind::End => ("End", None),
    };

    let mut object = json!({
        "kind": kind,
        "line": token.span.start.line,
        "column": token.span.start.column,
    });
    if let (Some(map), Some(payload)) = (object.as_object_mut(), payload) {
        map.insert("value".to_string(), payload);
    }
    object
}

/// Render a whole token stream.
pub fn tokens_to_json(tokens: &[Token]) -> serde_json::Value {
    serde_json::Value::Array(tokens.iter().map(token_to_json).collect())
}
