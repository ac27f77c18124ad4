/// Identifies the behavior behind a registered function name.
///
/// The set is closed: dispatch at both compile time (block resolution
/// hooks) and run time is a `match` on this enum rather than a table of
/// trait objects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FunctionKind {
    /// Square root of a numeric parameter.
    Sqrt,
    /// Prints a number or string, then returns 1.
    Print,
    /// Opens a conditional block.
    If,
    /// Continues a conditional chain with a new condition.
    Elseif,
    /// Continues a conditional chain unconditionally.
    Else,
    /// Opens a loop block.
    While,
    /// Closes the innermost open block.
    End,
}

impl FunctionKind {
    /// The registered spelling of this function.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sqrt => "sqrt",
            Self::Print => "print",
            Self::If => "if",
            Self::Elseif => "elseif",
            Self::Else => "else",
            Self::While => "while",
            Self::End => "end",
        }
    }

    /// Whether this function participates in block resolution.
    #[must_use]
    pub const fn is_block_marker(self) -> bool {
        !matches!(self, Self::Sqrt | Self::Print)
    }
}

/// Describes one registered function.
#[derive(Debug)]
pub struct FunctionDef {
    /// The function's spelling in source text.
    pub name:  &'static str,
    /// Number of parameters consumed from the operand stack.
    pub arity: usize,
    /// The behavior dispatched at compile and run time.
    pub kind:  FunctionKind,
}

/// Precedence shared by every function on the operator stack.
///
/// Equal to `^` so that an arriving exponentiation pops a pending function
/// under the non-strict binary rule, and an arriving unary operator does
/// not.
pub const FUNCTION_PRECEDENCE: u8 = 23;

/// Defines the function catalog as a static table.
///
/// Each entry provides a source spelling, an arity, and the kind that
/// selects its compile hook, parameter validator and executor.
macro_rules! function_table {
    (
        $(
            $name:literal => { arity: $arity:expr, kind: $kind:ident $(,)? }
        ),* $(,)?
    ) => {
        /// The process-wide function catalog, immutable after startup.
        pub static FUNCTIONS: &[FunctionDef] = &[
            $(
                FunctionDef { name:  $name,
                              arity: $arity,
                              kind:  FunctionKind::$kind, },
            )*
        ];
    };
}

function_table! {
    "sqrt"   => { arity: 1, kind: Sqrt },
    "print"  => { arity: 1, kind: Print },
    "if"     => { arity: 1, kind: If },
    "elseif" => { arity: 1, kind: Elseif },
    "else"   => { arity: 0, kind: Else },
    "while"  => { arity: 1, kind: While },
    "end"    => { arity: 0, kind: End },
}

/// An index into [`FUNCTIONS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FunctionId(usize);

impl FunctionId {
    /// The descriptor this id points at.
    #[must_use]
    pub fn def(self) -> &'static FunctionDef {
        &FUNCTIONS[self.0]
    }
}

/// Resolves a word against the function catalog.
///
/// # Parameters
/// - `name`: The scanned word.
///
/// # Returns
/// The id of the matching catalog entry, if any.
///
/// # Example
/// ```
/// use linescript::interpreter::registry::functions::lookup;
///
/// assert_eq!(lookup("sqrt").unwrap().def().arity, 1);
/// assert_eq!(lookup("end").unwrap().def().arity, 0);
/// assert!(lookup("total").is_none());
/// ```
#[must_use]
pub fn lookup(name: &str) -> Option<FunctionId> {
    FUNCTIONS.iter().position(|f| f.name == name).map(FunctionId)
}
