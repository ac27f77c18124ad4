use rustyline::{error::ReadlineError, DefaultEditor};

use crate::interpreter::script::ScriptModule;

/// Runs the interactive prompt until end-of-file or interrupt.
///
/// A single script module persists across prompt lines, so variables
/// assigned at one prompt are visible at the next. Every line is compiled
/// in isolation and evaluated immediately; the result token echoes back as
/// `Result >> `, failures as `Syntax error: `. Block markers are rejected
/// at compile time since a prompt line cannot span a block.
pub fn run() {
    let mut editor = match DefaultEditor::new() {
        Ok(editor) => editor,
        Err(error) => {
            eprintln!("Failed to initialize the interactive prompt: {error}");
            return;
        },
    };

    let mut module = ScriptModule::interactive();

    loop {
        match editor.readline(">> ") {
            Ok(line) => {
                if line.trim().is_empty() {
                    continue;
                }
                let _ = editor.add_history_entry(line.as_str());

                match module.eval_interactive(&line) {
                    Ok(result) => println!("Result >> {result}"),
                    Err(error) => println!("Syntax error: {}", error.message()),
                }
            },

            Err(ReadlineError::Eof | ReadlineError::Interrupted) => break,

            Err(error) => {
                eprintln!("Failed to read from the prompt: {error}");
                break;
            },
        }
    }
}
