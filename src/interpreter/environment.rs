use std::collections::HashMap;

use crate::util::num::format_number;

/// A stored variable value.
///
/// Only two kinds are observable in the language: doubles and byte
/// strings. A name may be reassigned with a value of the other kind; the
/// entry simply takes the kind of the most recent assignment.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A numeric value (double precision floating-point).
    Number(f64),
    /// A string value.
    Text(String),
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{}", format_number(*value)),
            Self::Text(text) => write!(f, "{text}"),
        }
    }
}

/// The variable environment of a script module.
///
/// A case-sensitive mapping from names to values, owned by the module and
/// mutated only through assignment. Reading a name that was never assigned
/// is not an error anywhere in the interpreter; the evaluator falls back
/// to treating the bare symbol as a string literal.
#[derive(Debug, Default)]
pub struct Environment {
    entries: HashMap<String, Value>,
}

impl Environment {
    /// Creates an empty environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The current value bound to `name`, if any.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.entries.get(name)
    }

    /// Creates or replaces the entry for `name`.
    ///
    /// The entry's kind follows the assigned value, so assigning a string
    /// over a number changes the variable's kind.
    ///
    /// # Example
    /// ```
    /// use linescript::interpreter::environment::{Environment, Value};
    ///
    /// let mut variables = Environment::new();
    /// variables.assign("x", Value::Number(5.0));
    /// variables.assign("x", Value::from("five"));
    ///
    /// assert_eq!(variables.get("x"), Some(&Value::from("five")));
    /// ```
    pub fn assign(&mut self, name: &str, value: Value) {
        self.entries.insert(name.to_string(), value);
    }
}
