use logos::Logos;

use crate::{
    error::SyntaxError,
    interpreter::{
        blocks::BlockResolver,
        lexer::Lexeme,
        registry::{
            functions::{self, FunctionId, FUNCTION_PRECEDENCE},
            operators::{self, OperatorId},
        },
    },
    token::Token,
};

/// An entry on the compile-time operator stack.
#[derive(Debug, Clone, Copy)]
enum StackEntry {
    Operator(OperatorId),
    Function(FunctionId),
    OpenParen,
}

impl StackEntry {
    /// Binding strength of the entry, or `None` for `(` which is never
    /// popped by precedence.
    fn precedence(self) -> Option<u8> {
        match self {
            Self::Operator(id) => Some(id.def().precedence),
            Self::Function(_) => Some(FUNCTION_PRECEDENCE),
            Self::OpenParen => None,
        }
    }

    fn into_token(self) -> Option<Token> {
        match self {
            Self::Operator(id) => Some(Token::Operator(id)),
            Self::Function(id) => Some(Token::Function(id)),
            Self::OpenParen => None,
        }
    }
}

/// Lowers one source line into a postfix token sequence.
///
/// This is the shunting-yard pass. Operands go straight to the output;
/// operators and functions wait on a stack and are flushed by precedence,
/// by a closing parenthesis, or by the end of the line. Emitting a
/// function reference first fires its compile hook on the block resolver,
/// which is how `if`/`elseif`/`else`/`while`/`end` build the jump tables
/// while this pass runs.
///
/// Binary operators pop stack entries of equal or higher precedence
/// (making them left-associative, `^` included); unary operators pop only
/// strictly higher ones (making them right-associative and keeping a
/// pending function below them in place).
///
/// # Parameters
/// - `source`: The raw source line.
/// - `index`: Compiled-line index the line will occupy; used for jump
///   tables and 1-based error positions.
/// - `resolver`: Block resolution state shared across the module's lines.
///
/// # Errors
/// Mismatched quotes or brackets, unknown operator runs, and any failure
/// raised by a compile hook.
///
/// # Example
/// ```
/// use linescript::{
///     interpreter::{blocks::BlockResolver, compiler::compile_line},
///     token::Token,
/// };
///
/// let mut resolver = BlockResolver::new(false);
/// let tokens = compile_line("1 + 2 * 3", 0, &mut resolver).unwrap();
///
/// // Postfix: 1 2 3 * +
/// assert_eq!(tokens[0], Token::Number(1.0));
/// assert_eq!(tokens[1], Token::Number(2.0));
/// assert_eq!(tokens[2], Token::Number(3.0));
/// assert!(matches!(tokens[3], Token::Operator(_)));
/// assert!(matches!(tokens[4], Token::Operator(_)));
/// ```
pub fn compile_line(source: &str,
                    index: usize,
                    resolver: &mut BlockResolver)
                    -> Result<Vec<Token>, SyntaxError> {
    let line = index + 1;
    let mut output = Vec::new();
    let mut stack: Vec<StackEntry> = Vec::new();

    // True after a complete operand; decides unary vs binary for `-`/`!`.
    let mut operand_before = false;

    for lexeme in Lexeme::lexer(source) {
        let Ok(lexeme) = lexeme else {
            // Every character class has a lexeme; only an unclosed quote
            // can fail the scan.
            return Err(SyntaxError::MismatchedQuotes { line });
        };

        match lexeme {
            Lexeme::Number(value) => {
                output.push(Token::Number(value));
                operand_before = true;
            },

            Lexeme::Quoted(text) => {
                output.push(Token::Text(text));
                operand_before = true;
            },

            Lexeme::Word(word) => {
                if let Some(id) = functions::lookup(&word) {
                    resolver.on_function(id.def().kind, index)?;
                    stack.push(StackEntry::Function(id));
                    operand_before = false;
                } else {
                    output.push(Token::Symbol(word));
                    operand_before = true;
                }
            },

            Lexeme::LParen => {
                stack.push(StackEntry::OpenParen);
                operand_before = false;
            },

            Lexeme::RParen => {
                loop {
                    match stack.pop() {
                        Some(StackEntry::OpenParen) => break,
                        Some(entry) => {
                            if let Some(token) = entry.into_token() {
                                output.push(token);
                            }
                        },
                        None => return Err(SyntaxError::MismatchedBrackets { line }),
                    }
                }
                operand_before = true;
            },

            Lexeme::Symbols(run) => {
                let Some(id) = operators::lookup(&run, !operand_before) else {
                    return Err(SyntaxError::UnsupportedOperator { symbols: run,
                                                                  line });
                };
                let unary = id.def().arity == 1;
                let incoming = id.def().precedence;

                while let Some(top) = stack.last() {
                    let Some(waiting) = top.precedence() else { break };
                    let precedes = if unary { waiting > incoming } else { waiting >= incoming };
                    if !precedes {
                        break;
                    }
                    if let Some(token) = stack.pop().and_then(StackEntry::into_token) {
                        output.push(token);
                    }
                }

                stack.push(StackEntry::Operator(id));
                operand_before = false;
            },

            Lexeme::Ignored => {},
        }
    }

    while let Some(entry) = stack.pop() {
        match entry.into_token() {
            Some(token) => output.push(token),
            None => return Err(SyntaxError::MismatchedBrackets { line }),
        }
    }

    Ok(output)
}
