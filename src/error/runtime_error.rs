#[derive(Debug)]
/// Represents all errors that can be raised while executing a compiled
/// script.
///
/// Every variant carries the 1-based index of the compiled line that was
/// executing when the failure occurred.
pub enum RuntimeError {
    /// The operand stack held fewer entries than the operator's arity.
    InvalidOperandCount {
        /// The operator symbol.
        symbol: &'static str,
        /// The compiled line where the error occurred.
        line:   usize,
    },
    /// No operation in the operator's dispatch list matched the operand
    /// kinds.
    InvalidOperands {
        /// The operator symbol.
        symbol: &'static str,
        /// The compiled line where the error occurred.
        line:   usize,
    },
    /// The operand stack held fewer entries than the function's arity.
    InvalidArgumentCount {
        /// The function name.
        name: &'static str,
        /// The compiled line where the error occurred.
        line: usize,
    },
    /// A function received parameters of the wrong kinds.
    WrongParameterTypes {
        /// The function name.
        name: &'static str,
        /// The compiled line where the error occurred.
        line: usize,
    },
    /// Attempted division by zero.
    DivisionByZero {
        /// The compiled line where the error occurred.
        line: usize,
    },
    /// Attempted modulo by zero.
    ModuloByZero {
        /// The compiled line where the error occurred.
        line: usize,
    },
    /// Evaluation finished with anything other than exactly one operand.
    NotAValidExpression {
        /// The compiled line where the error occurred.
        line: usize,
    },
}

impl RuntimeError {
    /// The 1-based compiled line the error refers to.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::InvalidOperandCount { line, .. }
            | Self::InvalidOperands { line, .. }
            | Self::InvalidArgumentCount { line, .. }
            | Self::WrongParameterTypes { line, .. }
            | Self::DivisionByZero { line }
            | Self::ModuloByZero { line }
            | Self::NotAValidExpression { line } => *line,
        }
    }

    /// The bare message without the `Runtime error on line N` prefix.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::InvalidOperandCount { symbol, .. } => {
                format!("Invalid number of operands for operator {symbol}")
            },

            Self::InvalidOperands { symbol, .. } => {
                format!("Invalid operands for operator {symbol}")
            },

            Self::InvalidArgumentCount { name, .. } => {
                format!("Invalid number of arguments for function {name}")
            },

            Self::WrongParameterTypes { name, .. } => {
                format!("Wrong parameter types for function {name}")
            },

            Self::DivisionByZero { .. } => "Division by zero".to_string(),

            Self::ModuloByZero { .. } => "Modulo by zero".to_string(),

            Self::NotAValidExpression { .. } => "Not a valid expression".to_string(),
        }
    }
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Runtime error on line {}: {}", self.line(), self.message())
    }
}

impl std::error::Error for RuntimeError {}
