use std::collections::HashMap;

use crate::{error::SyntaxError, interpreter::registry::functions::FunctionKind};

/// The action an `end` line performs after closing its block.
///
/// Installed at compile time by the opener; `while` is currently the only
/// opener that installs one. The set is closed on purpose: an `end` either
/// does nothing or re-tests the loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnEnd {
    /// Re-enter the loop when the recorded condition result was true.
    ///
    /// `opener` is the compiled-line index of the `while` line to jump
    /// back to.
    LoopBack {
        /// The compiled line of the owning `while`.
        opener: usize,
    },
}

/// The jump tables produced by block resolution.
///
/// Both maps key on compiled-line indices. After a successful compile they
/// are total on block boundaries: every opener has a forward target and
/// every `end` knows its opener.
#[derive(Debug, Default)]
pub struct BlockTable {
    opener_to_end: HashMap<usize, usize>,
    end_to_opener: HashMap<usize, (usize, Option<OnEnd>)>,
}

impl BlockTable {
    /// The forward jump target of an opener line.
    ///
    /// For an `if` or `while` this is the next branch point of its chain:
    /// the following `elseif`/`else`, or the closing `end` when there is
    /// none.
    #[must_use]
    pub fn exit_of(&self, opener: usize) -> Option<usize> {
        self.opener_to_end.get(&opener).copied()
    }

    /// The opener an `end` line closes.
    #[must_use]
    pub fn opener_of(&self, end: usize) -> Option<usize> {
        self.end_to_opener.get(&end).map(|(opener, _)| *opener)
    }

    /// The action installed on an `end` line, if any.
    #[must_use]
    pub fn action_of(&self, end: usize) -> Option<OnEnd> {
        self.end_to_opener.get(&end).and_then(|(_, action)| *action)
    }
}

/// One live entry of the compile-time nesting stack.
#[derive(Debug)]
struct NestEntry {
    kind:   FunctionKind,
    line:   usize,
    on_end: Option<OnEnd>,
}

/// Pairs block openers with their `end` lines during compilation.
///
/// The resolver is driven by the compile hooks of the control-flow
/// functions: each hook fires when the compiler emits the function's
/// reference, pushing, replacing or popping nest entries and recording
/// jump-table rows. In interactive mode every hook fails instead, since a
/// prompt line cannot open a multi-line block.
#[derive(Debug)]
pub struct BlockResolver {
    nest:        Vec<NestEntry>,
    table:       BlockTable,
    interactive: bool,
}

impl BlockResolver {
    /// Creates a resolver for a whole-module compile (`interactive` false)
    /// or for a single prompt line (`interactive` true).
    #[must_use]
    pub fn new(interactive: bool) -> Self {
        Self { nest: Vec::new(),
               table: BlockTable::default(),
               interactive }
    }

    /// The compile hook invoked for every function reference the compiler
    /// emits.
    ///
    /// `sqrt` and `print` have no compile-time behavior. The block markers
    /// update the nesting stack and the jump tables:
    ///
    /// - `if` and `while` push a new nest entry; `while` also installs the
    ///   loop-back action its `end` will run.
    /// - `elseif` and `else` require an open `if`/`elseif` on top, point
    ///   that entry's forward jump at themselves, and take its place.
    /// - `end` points the top entry's forward jump at itself, records the
    ///   backward entry (with any installed action) and pops.
    ///
    /// # Parameters
    /// - `kind`: The function being compiled.
    /// - `line`: Compiled-line index of the line being compiled.
    ///
    /// # Errors
    /// Misplaced `elseif`/`else`/`end`, or any block marker in interactive
    /// mode.
    pub fn on_function(&mut self, kind: FunctionKind, line: usize) -> Result<(), SyntaxError> {
        if !kind.is_block_marker() {
            return Ok(());
        }
        if self.interactive {
            return Err(SyntaxError::BlockInInteractiveMode { name: kind.name(),
                                                             line: line + 1 });
        }

        match kind {
            FunctionKind::If => {
                self.nest.push(NestEntry { kind,
                                           line,
                                           on_end: None });
                Ok(())
            },

            FunctionKind::While => {
                self.nest.push(NestEntry { kind,
                                           line,
                                           on_end: Some(OnEnd::LoopBack { opener: line }) });
                Ok(())
            },

            FunctionKind::Elseif | FunctionKind::Else => match self.nest.last_mut() {
                Some(top) if matches!(top.kind, FunctionKind::If | FunctionKind::Elseif) => {
                    self.table.opener_to_end.insert(top.line, line);
                    *top = NestEntry { kind,
                                       line,
                                       on_end: None };
                    Ok(())
                },
                _ => Err(SyntaxError::MisplacedBranch { name: kind.name(),
                                                        line: line + 1 }),
            },

            FunctionKind::End => match self.nest.pop() {
                Some(top) => {
                    self.table.opener_to_end.insert(top.line, line);
                    self.table.end_to_opener.insert(line, (top.line, top.on_end));
                    Ok(())
                },
                None => Err(SyntaxError::MisplacedEnd { line: line + 1 }),
            },

            FunctionKind::Sqrt | FunctionKind::Print => Ok(()),
        }
    }

    /// Finishes resolution after the last line.
    ///
    /// # Errors
    /// Reports the innermost still-open block as missing its `end`.
    pub fn finish(self) -> Result<BlockTable, SyntaxError> {
        match self.nest.last() {
            Some(open) => Err(SyntaxError::MissingEnd { opener: open.kind.name(),
                                                        line:   open.line + 1, }),
            None => Ok(self.table),
        }
    }
}
