use std::io::Write;

use crate::{
    error::RuntimeError,
    interpreter::{
        blocks::{BlockTable, OnEnd},
        evaluator::{core::EvalResult, operand::Operand},
        registry::functions::FunctionKind,
        script::RunState,
    },
};

/// Checks a function's parameter kinds before execution.
///
/// `sqrt` and every condition-taking block marker require a numeric
/// parameter; `print` accepts any value; `else` and `end` take nothing.
///
/// # Parameters
/// - `kind`: The function being called.
/// - `params`: Popped parameters, left-most written argument first.
///
/// # Returns
/// `true` if the parameters fit the function.
#[must_use]
pub fn validate(kind: FunctionKind, params: &[Operand]) -> bool {
    match kind {
        FunctionKind::Sqrt | FunctionKind::If | FunctionKind::Elseif | FunctionKind::While => {
            params.first().is_some_and(|param| param.as_number().is_some())
        },
        FunctionKind::Print | FunctionKind::Else | FunctionKind::End => true,
    }
}

/// Executes a function call and returns its numeric result.
///
/// The control-flow markers are ordinary functions here: the evaluator has
/// no branching logic of its own, it only honors the absolute line-cursor
/// writes these executors perform through the run state. A jump makes its
/// target line execute next, so skipping a block lands on the chain's next
/// branch marker (which evaluates normally) or on the closing `end`, and
/// the loop-back lands on the `while` line so the condition is
/// re-evaluated.
///
/// Branch decisions ride on the run state's result stack:
///
/// - `if`/`while` record their condition and skip ahead when it is false.
/// - `elseif` pops the previous decision; it skips ahead when that was
///   true (the chain already ran) or its own condition is false, and
///   records the combined decision.
/// - `else` pops the previous decision and skips ahead when it was true.
/// - `end` runs its installed action, if any: the loop-back pops the
///   latest decision and re-enters the loop when it was true.
///
/// # Parameters
/// - `kind`: The function being called.
/// - `params`: Popped parameters, left-most written argument first.
/// - `blocks`: The module's jump tables.
/// - `state`: Mutable run state (environment, cursor, branch results).
/// - `index`: Compiled-line index of the executing line.
/// - `out`: Sink for `print`.
///
/// # Errors
/// `WrongParameterTypes` if a numeric parameter cannot be extracted; the
/// validator normally rules this out.
pub fn execute(kind: FunctionKind,
               params: &[Operand],
               blocks: &BlockTable,
               state: &mut RunState,
               index: usize,
               out: &mut dyn Write)
               -> EvalResult<f64> {
    let line = index + 1;

    match kind {
        FunctionKind::Sqrt => Ok(condition(params, kind, line)?.sqrt()),

        FunctionKind::Print => {
            let text = params.first().map(Operand::render).unwrap_or_default();
            let _ = writeln!(out, "{text}");
            Ok(1.0)
        },

        FunctionKind::If | FunctionKind::While => {
            let truthy = condition(params, kind, line)? != 0.0;
            if !truthy {
                jump_to_exit(blocks, state, index);
            }
            state.push_branch(truthy);
            Ok(f64::from(u8::from(truthy)))
        },

        FunctionKind::Elseif => {
            let previous = state.pop_branch();
            let truthy = condition(params, kind, line)? != 0.0;
            if previous || !truthy {
                jump_to_exit(blocks, state, index);
            }
            state.push_branch(previous || truthy);
            Ok(f64::from(u8::from(truthy)))
        },

        FunctionKind::Else => {
            if state.pop_branch() {
                jump_to_exit(blocks, state, index);
            }
            Ok(1.0)
        },

        FunctionKind::End => {
            if let Some(OnEnd::LoopBack { opener }) = blocks.action_of(index) {
                if state.pop_branch() {
                    state.go_to_line(opener);
                }
            }
            Ok(1.0)
        },
    }
}

/// Extracts the single numeric parameter of a condition-taking function.
fn condition(params: &[Operand], kind: FunctionKind, line: usize) -> EvalResult<f64> {
    params.first()
          .and_then(Operand::as_number)
          .ok_or(RuntimeError::WrongParameterTypes { name: kind.name(),
                                                     line })
}

/// Moves the cursor to the opener's forward target.
///
/// Block resolution makes the target total for every opener that
/// compiled, so a missing entry only means the line holds no opener
/// record and there is nowhere to go.
fn jump_to_exit(blocks: &BlockTable, state: &mut RunState, index: usize) {
    if let Some(exit) = blocks.exit_of(index) {
        state.go_to_line(exit);
    }
}
