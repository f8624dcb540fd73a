use std::collections::HashMap;
use std::sync::LazyLock;

use crate::position::Span;
use crate::value::{Number, Value};

/// A chained mapping of variable names to values.
///
/// Lookup checks the local mapping first, then delegates along the parent
/// chain. The parent is a non-owning borrow used only for lookup; the chain
/// is built strictly outward-to-inward, so it can never form a cycle.
/// Assignment always targets the innermost frame.
#[derive(Debug, Default)]
pub struct Environment<'a> {
    symbols: HashMap<String, Value>,
    parent: Option<&'a Environment<'a>>,
}

impl<'a> Environment<'a> {
    /// An empty environment with no parent.
    pub fn new() -> Self {
        Self::default()
    }

    /// A fresh child frame chained to `parent`.
    pub fn with_parent(parent: &'a Environment<'a>) -> Self {
        Environment {
            symbols: HashMap::new(),
            parent: Some(parent),
        }
    }

    /// Scoped lookup: local mapping first, then the parent chain.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.symbols
            .get(name)
            .or_else(|| self.parent.and_then(|p| p.get(name)))
    }

    /// Bind `name` in this frame, shadowing any outer binding.
    pub fn set(&mut self, name: String, value: Value) {
        self.symbols.insert(name, value);
    }
}

/// The process-wide default environment.
///
/// Initialized exactly once and never handed out mutably; every run builds
/// a private child chained to it, so two runs never observe each other's
/// assignments.
pub static GLOBALS: LazyLock<Environment<'static>> = LazyLock::new(|| {
    let mut env = Environment::new();
    env.set("NULL".to_string(), Value::new(Number::Integer(0), Span::builtin()));
    env.set("FALSE".to_string(), Value::new(Number::Integer(0), Span::builtin()));
    env.set("TRUE".to_string(), Value::new(Number::Integer(1), Span::builtin()));
    env
});
