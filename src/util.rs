/// Numeric helpers shared by the evaluator, the printer and the prompt.
///
/// This module provides the tolerance used by numeric equality, the
/// conversion from doubles to their canonical textual form, and nothing
/// else. Every place that renders a number goes through these helpers so
/// that `print`, concatenation and the interactive prompt agree on the
/// output format.
pub mod num;
