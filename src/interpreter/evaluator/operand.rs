use crate::{interpreter::environment::Value, util::num::format_number};

/// A value on the evaluation stack.
///
/// Operands are transient: they are created while one postfix line
/// evaluates and dropped at the end of it. Constants come straight from
/// compiled tokens; the reference variants are materialized lazily when a
/// bare symbol matches an environment entry, and remember both the name
/// (so assignment can rebind through them) and the value observed at
/// materialization time.
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    /// A numeric value.
    Number(f64),
    /// A quoted string constant or a computed string.
    Text(String),
    /// A bare symbol with no environment binding; reads as its own
    /// spelling and may name a variable on the left of `=`.
    Symbol(String),
    /// A reference to a numeric variable.
    NumberRef {
        /// The variable's name.
        name:  String,
        /// The value observed when the reference was materialized.
        value: f64,
    },
    /// A reference to a string variable.
    TextRef {
        /// The variable's name.
        name:  String,
        /// The value observed when the reference was materialized.
        value: String,
    },
}

impl Operand {
    /// Materializes the operand a symbol or assignment produces for a
    /// freshly observed binding.
    #[must_use]
    pub fn from_binding(name: &str, value: &Value) -> Self {
        match value {
            Value::Number(number) => Self::NumberRef { name:  name.to_string(),
                                                       value: *number, },
            Value::Text(text) => Self::TextRef { name:  name.to_string(),
                                                 value: text.clone(), },
        }
    }

    /// The operand's numeric value, when it has the numeric kind.
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(value) | Self::NumberRef { value, .. } => Some(*value),
            _ => None,
        }
    }

    /// The operand's text, when it has the string kind.
    ///
    /// Unbound symbols count as strings; this is what lets a bare word
    /// flow into concatenation or be printed.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) | Self::Symbol(text) | Self::TextRef { value: text, .. } => Some(text),
            _ => None,
        }
    }

    /// Whether the operand has the string kind.
    #[must_use]
    pub fn is_text(&self) -> bool {
        self.as_text().is_some()
    }

    /// The variable name this operand can stand for on the left of `=`.
    ///
    /// Unbound symbols name the variable to create; references name the
    /// variable they point at. String constants and plain numbers are not
    /// assignable.
    #[must_use]
    pub fn variable_name(&self) -> Option<&str> {
        match self {
            Self::Symbol(name) | Self::NumberRef { name, .. } | Self::TextRef { name, .. } => {
                Some(name)
            },
            _ => None,
        }
    }

    /// The value this operand contributes to an assignment's right side.
    #[must_use]
    pub fn to_value(&self) -> Value {
        match self {
            Self::Number(value) | Self::NumberRef { value, .. } => Value::Number(*value),
            Self::Text(text) | Self::Symbol(text) | Self::TextRef { value: text, .. } => {
                Value::Text(text.clone())
            },
        }
    }

    /// Renders the operand for printing, concatenation and the prompt.
    #[must_use]
    pub fn render(&self) -> String {
        match self {
            Self::Number(value) | Self::NumberRef { value, .. } => format_number(*value),
            Self::Text(text) | Self::Symbol(text) | Self::TextRef { value: text, .. } => {
                text.clone()
            },
        }
    }
}

impl std::fmt::Display for Operand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.render())
    }
}
