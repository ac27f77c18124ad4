use crate::{
    error::RuntimeError,
    interpreter::{
        environment::Environment,
        evaluator::{core::EvalResult, operand::Operand},
        registry::operators::{Operation, OperatorDef},
    },
    util::num::doubles_equal,
};

fn boolean(value: bool) -> Operand {
    Operand::Number(f64::from(u8::from(value)))
}

/// Applies a binary operator to two popped operands.
///
/// The operator's dispatch list is tried in order; the first operation
/// whose operand kinds match produces the result. An operation that
/// matches may still fail (division by zero), which aborts the line rather
/// than falling through to the next alternative.
///
/// # Parameters
/// - `def`: The operator descriptor.
/// - `lhs`: Left operand (popped second).
/// - `rhs`: Right operand (popped first).
/// - `variables`: The environment, mutated by `=`.
/// - `line`: 1-based compiled line for error reporting.
///
/// # Errors
/// `InvalidOperands` when no alternative matches, or the failure of a
/// matched operation.
pub fn apply_binary(def: &'static OperatorDef,
                    lhs: &Operand,
                    rhs: &Operand,
                    variables: &mut Environment,
                    line: usize)
                    -> EvalResult<Operand> {
    for operation in def.operations {
        if let Some(result) = try_binary(*operation, lhs, rhs, variables, line)? {
            return Ok(result);
        }
    }
    Err(RuntimeError::InvalidOperands { symbol: def.symbol,
                                        line })
}

/// Applies a unary operator to one popped operand.
///
/// # Parameters
/// - `def`: The operator descriptor.
/// - `operand`: The popped operand.
/// - `line`: 1-based compiled line for error reporting.
///
/// # Errors
/// `InvalidOperands` when no alternative matches.
pub fn apply_unary(def: &'static OperatorDef,
                   operand: &Operand,
                   line: usize)
                   -> EvalResult<Operand> {
    for operation in def.operations {
        let result = match operation {
            Operation::Negate => operand.as_number().map(|a| Operand::Number(-a)),
            Operation::LogicalNot => operand.as_number().map(|a| boolean(a == 0.0)),
            _ => None,
        };
        if let Some(result) = result {
            return Ok(result);
        }
    }
    Err(RuntimeError::InvalidOperands { symbol: def.symbol,
                                        line })
}

/// Tries one binary dispatch alternative.
///
/// Returns `Ok(None)` when the operand kinds do not fit this alternative,
/// letting the caller continue down the dispatch list.
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss, clippy::cast_sign_loss)]
fn try_binary(operation: Operation,
              lhs: &Operand,
              rhs: &Operand,
              variables: &mut Environment,
              line: usize)
              -> EvalResult<Option<Operand>> {
    let numbers = lhs.as_number().zip(rhs.as_number());

    let result = match operation {
        Operation::Assign => assign(lhs, rhs, variables),

        Operation::LogicalOr => numbers.map(|(a, b)| boolean(a != 0.0 || b != 0.0)),
        Operation::LogicalAnd => numbers.map(|(a, b)| boolean(a != 0.0 && b != 0.0)),

        Operation::Equals => numbers.map(|(a, b)| boolean(doubles_equal(a, b))),
        Operation::NotEquals => numbers.map(|(a, b)| boolean(!doubles_equal(a, b))),
        Operation::Greater => numbers.map(|(a, b)| boolean(a > b)),
        Operation::Less => numbers.map(|(a, b)| boolean(a < b)),
        Operation::GreaterEqual => numbers.map(|(a, b)| boolean(a >= b)),
        Operation::LessEqual => numbers.map(|(a, b)| boolean(a <= b)),

        Operation::BitwiseOr => {
            numbers.map(|(a, b)| Operand::Number(f64::from((a as i32) | (b as i32))))
        },
        Operation::BitwiseAnd => {
            numbers.map(|(a, b)| Operand::Number(f64::from((a as i32) & (b as i32))))
        },
        Operation::ShiftLeft => {
            numbers.map(|(a, b)| Operand::Number((a as i64).wrapping_shl(b as u32) as f64))
        },
        Operation::ShiftRight => {
            numbers.map(|(a, b)| Operand::Number(f64::from((a as i32).wrapping_shr(b as u32))))
        },

        Operation::Add => numbers.map(|(a, b)| Operand::Number(a + b)),
        Operation::Subtract => numbers.map(|(a, b)| Operand::Number(a - b)),
        Operation::Multiply => numbers.map(|(a, b)| Operand::Number(a * b)),

        Operation::Divide => match numbers {
            Some((_, b)) if b == 0.0 => return Err(RuntimeError::DivisionByZero { line }),
            Some((a, b)) => Some(Operand::Number(a / b)),
            None => None,
        },

        Operation::Modulo => match numbers {
            Some((a, b)) => {
                let divisor = b as i32;
                if divisor == 0 {
                    return Err(RuntimeError::ModuloByZero { line });
                }
                Some(Operand::Number(f64::from((a as i32).wrapping_rem(divisor))))
            },
            None => None,
        },

        Operation::Power => numbers.map(|(a, b)| Operand::Number(a.powf(b))),

        Operation::Concatenate => {
            if lhs.is_text() || rhs.is_text() {
                Some(Operand::Text(format!("{}{}", lhs.render(), rhs.render())))
            } else {
                None
            }
        },

        // Unary alternatives never appear in a binary dispatch list.
        Operation::Negate | Operation::LogicalNot => None,
    };

    Ok(result)
}

/// The `=` operation.
///
/// The left operand must name a variable: an unbound symbol or an existing
/// reference. The entry is created or replaced with the right operand's
/// value and kind, and the result is a fresh reference to the new entry,
/// which is what makes assignment usable inside a larger expression.
fn assign(lhs: &Operand, rhs: &Operand, variables: &mut Environment) -> Option<Operand> {
    let name = lhs.variable_name()?;
    let value = rhs.to_value();
    variables.assign(name, value.clone());
    Some(Operand::from_binding(name, &value))
}
