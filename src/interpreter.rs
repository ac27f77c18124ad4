/// The block resolver pairs openers with their `end` lines.
///
/// A compile-time state tracker driven by the control-flow functions'
/// compile hooks. It maintains the nesting stack while lines are lowered
/// and produces the forward (opener → exit) and backward (end → opener)
/// jump tables the runtime steers by.
pub mod blocks;
/// The expression compiler lowers one source line to postfix.
///
/// A per-line shunting-yard pass: operands stream to the output while
/// operators and functions wait on a precedence-ordered stack. Emitting a
/// function reference fires its compile hook on the block resolver.
pub mod compiler;
/// The variable environment and stored value kinds.
pub mod environment;
/// The stack evaluator executes compiled postfix lines.
///
/// Walks the token stream of the currently selected line with a single
/// operand stack, materializes variable references lazily against the
/// environment, and dispatches operator and function references. Control
/// flow happens here only in the sense that function executors may move
/// the module's line cursor.
pub mod evaluator;
/// The lexical cursor splits a source line into lexemes.
///
/// A single-line scanner producing operand lexemes, operator runs and
/// quoted string literals. It knows nothing about precedence or meaning;
/// classification is the compiler's job.
pub mod lexer;
/// The operator and function registries.
///
/// Process-wide immutable catalogs: operator symbols with precedence,
/// arity and ordered dispatch lists, and function names with arity and
/// behavior kind.
pub mod registry;
/// The script module ties compilation and execution together.
pub mod script;
