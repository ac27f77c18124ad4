/// A typed dispatch alternative of an operator.
///
/// Each operator carries an ordered list of these; at evaluation time the
/// first alternative whose operand kinds match is the one that runs. The
/// ordering is observable: `+` tries numeric addition before string
/// concatenation, so two numeric operands always add.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Writes the right operand into the variable named by the left.
    Assign,
    /// Numeric logical or; nonzero operands count as true.
    LogicalOr,
    /// Numeric logical and; nonzero operands count as true.
    LogicalAnd,
    /// Numeric equality within the global tolerance.
    Equals,
    /// Numeric inequality within the global tolerance.
    NotEquals,
    /// Numeric `>` under raw IEEE ordering.
    Greater,
    /// Numeric `<` under raw IEEE ordering.
    Less,
    /// Numeric `>=` under raw IEEE ordering.
    GreaterEqual,
    /// Numeric `<=` under raw IEEE ordering.
    LessEqual,
    /// Bitwise or over operands truncated to 32-bit integers.
    BitwiseOr,
    /// Bitwise and over operands truncated to 32-bit integers.
    BitwiseAnd,
    /// Left shift over a 64-bit widened left operand.
    ShiftLeft,
    /// Right shift over a 32-bit truncated left operand.
    ShiftRight,
    /// Numeric addition.
    Add,
    /// String concatenation; a numeric side is rendered as text first.
    Concatenate,
    /// Numeric subtraction.
    Subtract,
    /// Numeric multiplication.
    Multiply,
    /// Numeric division; a zero divisor is a runtime error.
    Divide,
    /// Integer modulo; a zero divisor is a runtime error.
    Modulo,
    /// Exponentiation over doubles.
    Power,
    /// Numeric negation.
    Negate,
    /// Logical not; the operand is truncated to a boolean.
    LogicalNot,
}

/// Describes one registered operator.
#[derive(Debug)]
pub struct OperatorDef {
    /// The operator's spelling in source text.
    pub symbol:     &'static str,
    /// Binding strength; larger binds tighter.
    pub precedence: u8,
    /// Number of operands consumed: 1 or 2.
    pub arity:      usize,
    /// Ordered dispatch alternatives; first kind match wins.
    pub operations: &'static [Operation],
}

/// Defines the operator catalog as a static table.
///
/// Each entry provides a source spelling, a precedence, an arity and the
/// ordered dispatch list. The macro produces the `OPERATORS` static in
/// declaration order; [`lookup`] resolves spellings against it, preferring
/// the entry whose arity fits the syntactic position.
macro_rules! operator_table {
    (
        $(
            $symbol:literal => {
                precedence: $precedence:expr,
                arity: $arity:expr,
                operations: [$($operation:ident),* $(,)?] $(,)?
            }
        ),* $(,)?
    ) => {
        /// The process-wide operator catalog, immutable after startup.
        ///
        /// Grouping parentheses are not listed: they are single-character
        /// lexemes handled structurally by the compiler and never reach
        /// the evaluator.
        pub static OPERATORS: &[OperatorDef] = &[
            $(
                OperatorDef { symbol:     $symbol,
                              precedence: $precedence,
                              arity:      $arity,
                              operations: &[$(Operation::$operation),*], },
            )*
        ];
    };
}

operator_table! {
    "="  => { precedence: 2,  arity: 2, operations: [Assign] },
    "||" => { precedence: 5,  arity: 2, operations: [LogicalOr] },
    "&&" => { precedence: 7,  arity: 2, operations: [LogicalAnd] },
    "==" => { precedence: 13, arity: 2, operations: [Equals] },
    "!=" => { precedence: 15, arity: 2, operations: [NotEquals] },
    ">"  => { precedence: 15, arity: 2, operations: [Greater] },
    "<"  => { precedence: 15, arity: 2, operations: [Less] },
    ">=" => { precedence: 15, arity: 2, operations: [GreaterEqual] },
    "<=" => { precedence: 15, arity: 2, operations: [LessEqual] },
    "|"  => { precedence: 16, arity: 2, operations: [BitwiseOr] },
    "&"  => { precedence: 16, arity: 2, operations: [BitwiseAnd] },
    "<<" => { precedence: 18, arity: 2, operations: [ShiftLeft] },
    ">>" => { precedence: 18, arity: 2, operations: [ShiftRight] },
    "+"  => { precedence: 19, arity: 2, operations: [Add, Concatenate] },
    "-"  => { precedence: 19, arity: 2, operations: [Subtract] },
    "*"  => { precedence: 21, arity: 2, operations: [Multiply] },
    "/"  => { precedence: 21, arity: 2, operations: [Divide] },
    "%"  => { precedence: 21, arity: 2, operations: [Modulo] },
    "^"  => { precedence: 23, arity: 2, operations: [Power] },
    "-"  => { precedence: 25, arity: 1, operations: [Negate] },
    "!"  => { precedence: 27, arity: 1, operations: [LogicalNot] },
}

/// An index into [`OPERATORS`].
///
/// Compiled tokens store these instead of descriptor pointers; the catalog
/// is static, so the index is valid for the life of the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperatorId(usize);

impl OperatorId {
    /// The descriptor this id points at.
    #[must_use]
    pub fn def(self) -> &'static OperatorDef {
        &OPERATORS[self.0]
    }
}

/// Resolves an operator run against the catalog.
///
/// `-` and `!` are registered twice, once unary and once binary (`!` only
/// unary), so resolution is positional: in operand position (start of
/// line, after another operator, after `(` or after a function name) the
/// unary entry is preferred, otherwise the binary one. Either way the
/// other arity is the fallback, and an unknown spelling resolves to
/// nothing.
///
/// # Parameters
/// - `symbol`: The scanned operator run.
/// - `operand_position`: Whether the compiler currently expects an
///   operand.
///
/// # Returns
/// The id of the matching catalog entry, if any.
///
/// # Example
/// ```
/// use linescript::interpreter::registry::operators::lookup;
///
/// let unary = lookup("-", true).unwrap();
/// let binary = lookup("-", false).unwrap();
///
/// assert_eq!(unary.def().arity, 1);
/// assert_eq!(binary.def().arity, 2);
/// assert!(lookup("+-", false).is_none());
/// ```
#[must_use]
pub fn lookup(symbol: &str, operand_position: bool) -> Option<OperatorId> {
    let of_arity =
        |arity: usize| OPERATORS.iter().position(|op| op.symbol == symbol && op.arity == arity);

    let index = if operand_position {
        of_arity(1).or_else(|| of_arity(2))
    } else {
        of_arity(2).or_else(|| of_arity(1))
    };

    index.map(OperatorId)
}
