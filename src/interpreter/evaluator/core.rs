use std::io::Write;

use crate::{
    error::RuntimeError,
    interpreter::{
        blocks::BlockTable,
        evaluator::{functions, operand::Operand, operators},
        script::RunState,
    },
    token::Token,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Evaluates one compiled postfix line.
///
/// The walk keeps a single operand stack. Constants push themselves; a
/// bare symbol resolves against the environment at this moment, becoming a
/// variable reference when a binding exists and staying a string-like
/// symbol otherwise. Operator references pop their operands (right side on
/// top), run their dispatch list and push the result; function references
/// pop their parameters in written order, validate, execute and push the
/// returned number.
///
/// A well-formed line leaves exactly one operand, which becomes the line's
/// result: the interactive prompt echoes it, file execution drops it.
///
/// # Parameters
/// - `tokens`: The compiled postfix stream.
/// - `blocks`: The module's jump tables, consulted by control flow.
/// - `state`: Mutable run state (environment, cursor, branch results).
/// - `index`: Compiled-line index of the line, for jumps and errors.
/// - `out`: Sink for `print`.
///
/// # Errors
/// Operand or argument underflow, unmatched operand kinds, failing
/// operations, or an ill-formed final stack.
pub fn evaluate_line(tokens: &[Token],
                     blocks: &BlockTable,
                     state: &mut RunState,
                     index: usize,
                     out: &mut dyn Write)
                     -> EvalResult<Operand> {
    let line = index + 1;
    let mut stack: Vec<Operand> = Vec::new();

    for token in tokens {
        match token {
            Token::Number(value) => stack.push(Operand::Number(*value)),

            Token::Text(text) => stack.push(Operand::Text(text.clone())),

            Token::Symbol(name) => {
                let operand = match state.variables.get(name) {
                    Some(value) => Operand::from_binding(name, value),
                    None => Operand::Symbol(name.clone()),
                };
                stack.push(operand);
            },

            Token::Operator(id) => {
                let def = id.def();
                if stack.len() < def.arity {
                    return Err(RuntimeError::InvalidOperandCount { symbol: def.symbol,
                                                                   line });
                }

                let result = if def.arity == 2 {
                    let rhs = stack.pop();
                    let lhs = stack.pop();
                    match lhs.zip(rhs) {
                        Some((lhs, rhs)) => {
                            operators::apply_binary(def, &lhs, &rhs, &mut state.variables, line)?
                        },
                        None => {
                            return Err(RuntimeError::InvalidOperandCount { symbol: def.symbol,
                                                                           line })
                        },
                    }
                } else {
                    match stack.pop() {
                        Some(operand) => operators::apply_unary(def, &operand, line)?,
                        None => {
                            return Err(RuntimeError::InvalidOperandCount { symbol: def.symbol,
                                                                           line })
                        },
                    }
                };

                stack.push(result);
            },

            Token::Function(id) => {
                let def = id.def();
                if stack.len() < def.arity {
                    return Err(RuntimeError::InvalidArgumentCount { name: def.name,
                                                                    line });
                }

                // Parameter 0 is the left-most written argument.
                let mut params = Vec::with_capacity(def.arity);
                for _ in 0..def.arity {
                    if let Some(param) = stack.pop() {
                        params.push(param);
                    }
                }
                params.reverse();

                if !functions::validate(def.kind, &params) {
                    return Err(RuntimeError::WrongParameterTypes { name: def.name,
                                                                   line });
                }

                let value = functions::execute(def.kind, &params, blocks, state, index, out)?;
                stack.push(Operand::Number(value));
            },
        }
    }

    match stack.pop() {
        Some(result) if stack.is_empty() => Ok(result),
        _ => Err(RuntimeError::NotAValidExpression { line }),
    }
}
