#[derive(Debug)]
/// Represents all errors that can be raised while compiling a script.
///
/// Every variant carries the 1-based index of the compiled line that was
/// being processed when the failure was detected.
pub enum SyntaxError {
    /// A quoted string was opened but never closed.
    MismatchedQuotes {
        /// The compiled line where the error occurred.
        line: usize,
    },
    /// An operator run did not match any registered operator.
    UnsupportedOperator {
        /// The offending run of operator characters.
        symbols: String,
        /// The compiled line where the error occurred.
        line:    usize,
    },
    /// A parenthesis had no matching partner on the same line.
    MismatchedBrackets {
        /// The compiled line where the error occurred.
        line: usize,
    },
    /// An `elseif` or `else` appeared without an open `if` chain.
    MisplacedBranch {
        /// The function that was misplaced (`elseif` or `else`).
        name: &'static str,
        /// The compiled line where the error occurred.
        line: usize,
    },
    /// An `end` appeared without any open block.
    MisplacedEnd {
        /// The compiled line where the error occurred.
        line: usize,
    },
    /// A block opener was never closed by an `end`.
    MissingEnd {
        /// The opener that is unclosed (`if`, `elseif`, `else` or `while`).
        opener: &'static str,
        /// The compiled line of the unclosed opener.
        line:   usize,
    },
    /// A block opener was used at the interactive prompt.
    BlockInInteractiveMode {
        /// The rejected function name.
        name: &'static str,
        /// The compiled line where the error occurred.
        line: usize,
    },
}

impl SyntaxError {
    /// The 1-based compiled line the error refers to.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::MismatchedQuotes { line }
            | Self::UnsupportedOperator { line, .. }
            | Self::MismatchedBrackets { line }
            | Self::MisplacedBranch { line, .. }
            | Self::MisplacedEnd { line }
            | Self::MissingEnd { line, .. }
            | Self::BlockInInteractiveMode { line, .. } => *line,
        }
    }

    /// The bare message without the `Syntax error on line N` prefix.
    ///
    /// The interactive prompt prints this directly after its own
    /// `Syntax error: ` marker.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::MismatchedQuotes { .. } => "Mismatched quotation marks (\")".to_string(),

            Self::UnsupportedOperator { symbols, .. } => {
                format!("Unsupported operator {symbols}")
            },

            Self::MismatchedBrackets { .. } => "Mismatched brackets".to_string(),

            Self::MisplacedBranch { name, .. } => {
                format!("Misplaced '{name}' without a preceding 'if'")
            },

            Self::MisplacedEnd { .. } => "Misplaced 'end' without an open block".to_string(),

            Self::MissingEnd { opener, .. } => {
                format!("'{opener}' is missing an 'end' specifier")
            },

            Self::BlockInInteractiveMode { name, .. } => {
                format!("'{name}' blocks are not available in interactive mode")
            },
        }
    }
}

impl std::fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Syntax error on line {}: {}", self.line(), self.message())
    }
}

impl std::error::Error for SyntaxError {}
