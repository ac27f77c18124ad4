use std::io::{self, Write};

use crate::{
    error::{RuntimeError, ScriptError, SyntaxError},
    interpreter::{
        blocks::{BlockResolver, BlockTable},
        compiler::compile_line,
        environment::Environment,
        evaluator::{core::evaluate_line, operand::Operand},
    },
    token::Token,
};

/// Mutable state of an executing module.
///
/// Owned exclusively by the executing thread for the duration of a run.
/// The cursor is signed: the loop-back action of a `while` aims one line
/// before its target, which is index −1 when the loop starts the script.
#[derive(Debug)]
pub struct RunState {
    /// The module's variables.
    pub variables:  Environment,
    branch_results: Vec<bool>,
    cursor:         isize,
}

impl RunState {
    fn new() -> Self {
        Self { variables:      Environment::new(),
               branch_results: Vec::new(),
               cursor:         0, }
    }

    /// Moves the cursor so line `index` executes next.
    ///
    /// The cursor lands one below the target because the execute loop
    /// advances by one after the current line, jumps included.
    #[allow(clippy::cast_possible_wrap)]
    pub fn go_to_line(&mut self, index: usize) {
        self.cursor = index as isize - 1;
    }

    /// Records a branch decision.
    pub fn push_branch(&mut self, result: bool) {
        self.branch_results.push(result);
    }

    /// Takes the most recent branch decision.
    pub fn pop_branch(&mut self) -> bool {
        self.branch_results.pop().unwrap_or(false)
    }

    fn rewind(&mut self) {
        self.cursor = 0;
    }

    fn advance(&mut self) {
        self.cursor += 1;
    }

    fn line_index(&self) -> Option<usize> {
        usize::try_from(self.cursor).ok()
    }
}

/// A compiled script and its runtime state.
///
/// The unit compiled and executed together. Compilation lowers every
/// non-blank source line into a postfix token stream and resolves block
/// structure into jump tables; execution walks the compiled lines behind a
/// cursor that control-flow functions reposition. Two modules are fully
/// isolated from each other: each owns its lines, tables and environment.
#[derive(Debug)]
pub struct ScriptModule {
    compiled_lines: Vec<Vec<Token>>,
    blocks:         BlockTable,
    state:          RunState,
}

impl ScriptModule {
    /// Compiles a whole source text into an executable module.
    ///
    /// Blank lines are skipped and occupy no compiled-line slot, so jump
    /// tables and diagnostics both count non-blank lines only.
    ///
    /// # Errors
    /// Any tokenization, lowering or block-resolution failure, including
    /// an opener left unclosed at the end of the source.
    ///
    /// # Example
    /// ```
    /// use linescript::ScriptModule;
    ///
    /// assert!(ScriptModule::compile("x = 1 + 2").is_ok());
    /// assert!(ScriptModule::compile("if (1)").is_err());
    /// ```
    pub fn compile(source: &str) -> Result<Self, SyntaxError> {
        let mut resolver = BlockResolver::new(false);
        let mut compiled_lines = Vec::new();

        for line in source.lines() {
            if line.trim().is_empty() {
                continue;
            }
            compiled_lines.push(compile_line(line, compiled_lines.len(), &mut resolver)?);
        }

        Ok(Self { compiled_lines,
                  blocks: resolver.finish()?,
                  state: RunState::new() })
    }

    /// Creates an empty module for the interactive prompt.
    ///
    /// The module compiles nothing up front; prompt lines are fed through
    /// [`ScriptModule::eval_interactive`] one at a time while the
    /// environment persists between them.
    #[must_use]
    pub fn interactive() -> Self {
        Self { compiled_lines: Vec::new(),
               blocks:         BlockTable::default(),
               state:          RunState::new(), }
    }

    /// Executes the compiled lines from the top.
    ///
    /// After every line the cursor advances by one, including lines whose
    /// executor repositioned it; jumps account for that by aiming one line
    /// below their target. Execution ends when the cursor leaves the
    /// compiled range.
    ///
    /// # Parameters
    /// - `out`: Sink for `print` output.
    ///
    /// # Errors
    /// The first runtime failure aborts execution.
    pub fn execute(&mut self, out: &mut dyn Write) -> Result<(), RuntimeError> {
        self.state.rewind();

        loop {
            let Some(index) = self.state.line_index() else { break };
            let Some(tokens) = self.compiled_lines.get(index) else {
                break;
            };
            evaluate_line(tokens, &self.blocks, &mut self.state, index, out)?;
            self.state.advance();
        }

        Ok(())
    }

    /// Compiles and evaluates a single prompt line.
    ///
    /// The line is lowered in isolation; block markers fail their compile
    /// hook in interactive mode, so no cross-line structure can form. The
    /// environment carries over from previous prompt lines, and `print`
    /// writes to standard output.
    ///
    /// # Errors
    /// Compile failures of the line, or runtime failures of its
    /// evaluation.
    ///
    /// # Example
    /// ```
    /// use linescript::ScriptModule;
    ///
    /// let mut module = ScriptModule::interactive();
    /// module.eval_interactive("x = 6").unwrap();
    /// let result = module.eval_interactive("x * 7").unwrap();
    ///
    /// assert_eq!(result.render(), "42");
    /// ```
    pub fn eval_interactive(&mut self, source: &str) -> Result<Operand, ScriptError> {
        let mut resolver = BlockResolver::new(true);
        let tokens = compile_line(source, 0, &mut resolver)?;
        let result = evaluate_line(&tokens, &self.blocks, &mut self.state, 0, &mut io::stdout())?;
        Ok(result)
    }
}
