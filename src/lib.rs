//! # linescript
//!
//! linescript is a tiny imperative scripting language written in Rust.
//! Every non-blank source line is one expression over numbers and strings,
//! with variables, arithmetic, logical and bitwise operators, the built-in
//! functions `print` and `sqrt`, and block control flow through
//! `if`/`elseif`/`else`/`while` closed by `end`.
//!
//! Scripts run in two phases. Compilation lowers each line to a postfix
//! token stream and statically pairs block openers with their `end` lines;
//! execution walks the compiled lines with a single operand stack and a
//! line cursor that the control-flow functions reposition to skip or
//! repeat blocks.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use std::io::Write;

/// Provides unified error types for compilation and execution.
///
/// This module defines all errors that can be raised while tokenizing,
/// lowering or executing a script. Compile failures carry the 1-based
/// compiled-line index where they were detected; runtime failures carry
/// the line that was executing.
///
/// # Responsibilities
/// - Defines error enums for both phases with per-variant detail.
/// - Renders the user-visible `Syntax error on line N` and
///   `Runtime error on line N` diagnostics.
/// - Exposes the bare message separately for the interactive prompt.
pub mod error;
/// Orchestrates the entire process of script execution.
///
/// This module ties together the lexical cursor, the per-line expression
/// compiler, the block resolver, the operator and function registries and
/// the stack evaluator into a complete runtime for script modules.
///
/// # Responsibilities
/// - Coordinates all core components across the compile and execute
///   phases.
/// - Owns the script module: compiled lines, jump tables, environment and
///   cursor.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// The interactive prompt.
///
/// Reads one line at a time, evaluates it against a persistent module and
/// echoes the result token. Block control flow is unavailable at the
/// prompt.
pub mod repl;
/// Defines the compiled form of source lines.
///
/// This module declares the `Token` enum: the closed set of shapes the
/// expression compiler emits and the stack evaluator consumes. A compiled
/// line is nothing but a postfix sequence of these.
pub mod token;
/// General numeric utilities.
///
/// Holds the equality tolerance and the canonical double-to-text
/// rendering shared by printing, concatenation and the prompt.
pub mod util;

pub use crate::{error::ScriptError, interpreter::script::ScriptModule};

/// Compiles and executes a script against standard output.
///
/// This is the whole-file entry point: the source is compiled as one
/// module and, if compilation succeeds, executed from the first compiled
/// line. The per-line results are discarded; only `print` produces
/// output.
///
/// # Errors
/// Returns the first compile or runtime failure.
///
/// # Examples
/// ```
/// // Assignments and arithmetic succeed quietly.
/// let source = "x = 2 + 2\ny = x * 10";
/// assert!(linescript::run_source(source).is_ok());
///
/// // An unclosed block is a compile error.
/// assert!(linescript::run_source("while (1 < 2)").is_err());
/// ```
pub fn run_source(source: &str) -> Result<(), ScriptError> {
    run_with_output(source, &mut std::io::stdout())
}

/// Compiles and executes a script against a caller-supplied sink.
///
/// Identical to [`run_source`] except that `print` writes into `out`,
/// which is what the integration tests use to assert on script output.
///
/// # Errors
/// Returns the first compile or runtime failure.
///
/// # Examples
/// ```
/// let mut out = Vec::new();
/// linescript::run_with_output("print (\"total: \" + 6 * 7)", &mut out).unwrap();
///
/// assert_eq!(String::from_utf8(out).unwrap(), "total: 42\n");
/// ```
pub fn run_with_output(source: &str, out: &mut dyn Write) -> Result<(), ScriptError> {
    let mut module = ScriptModule::compile(source)?;
    module.execute(out)?;
    Ok(())
}
