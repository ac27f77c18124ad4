/// Runtime errors.
///
/// Contains all error types that can be raised while executing a compiled
/// script: wrong operand kinds for an operator, wrong parameter kinds for a
/// function, operand-stack underflow, division or modulo by zero, and
/// ill-formed final stacks.
pub mod runtime_error;
/// Compile errors.
///
/// Defines all error types that can occur while tokenizing a line and
/// lowering it to postfix: mismatched quotes or brackets, unknown
/// operators, and misplaced or unclosed block markers.
pub mod syntax_error;

pub use runtime_error::RuntimeError;
pub use syntax_error::SyntaxError;

#[derive(Debug)]
/// Either phase of a script failure.
///
/// The compile and execute phases report distinct error types; this wrapper
/// lets callers that run both phases propagate a single error.
pub enum ScriptError {
    /// The script failed to compile.
    Syntax(SyntaxError),
    /// The script compiled but failed during execution.
    Runtime(RuntimeError),
}

impl ScriptError {
    /// The bare message without the phase-and-line prefix.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Syntax(e) => e.message(),
            Self::Runtime(e) => e.message(),
        }
    }
}

impl From<SyntaxError> for ScriptError {
    fn from(error: SyntaxError) -> Self {
        Self::Syntax(error)
    }
}

impl From<RuntimeError> for ScriptError {
    fn from(error: RuntimeError) -> Self {
        Self::Runtime(error)
    }
}

impl std::fmt::Display for ScriptError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Syntax(e) => write!(f, "{e}"),
            Self::Runtime(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for ScriptError {}
