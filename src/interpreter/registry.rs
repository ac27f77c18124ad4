/// The function catalog.
///
/// Declares every built-in function the language knows: the user-visible
/// `sqrt` and `print`, and the control-flow family `if`, `elseif`, `else`,
/// `while` and `end` whose compile hooks drive block resolution.
pub mod functions;
/// The operator catalog.
///
/// Declares every operator symbol with its precedence, arity and ordered
/// dispatch list. The catalog is a process-wide static: it is immutable
/// after startup and shared by every script module.
pub mod operators;
