/// The postfix walker.
///
/// Processes one compiled line at a time against an operand stack,
/// materializing variable references lazily and dispatching operator and
/// function references into their registries.
pub mod core;
/// Built-in function validators and executors, control flow included.
pub mod functions;
/// The runtime operand model.
pub mod operand;
/// Operator dispatch.
///
/// Walks each operator's ordered operation list and applies the first
/// alternative whose operand kinds match.
pub mod operators;
