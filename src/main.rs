use std::{fs, path::PathBuf, process};

use clap::Parser;

/// linescript is a tiny line-oriented scripting language with numeric and
/// string values, block control flow and an interactive prompt.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to a script file. Starts the interactive prompt when omitted.
    script: Option<PathBuf>,
}

fn main() {
    let args = Args::parse();

    match args.script {
        Some(path) => {
            let source = fs::read_to_string(&path).unwrap_or_else(|_| {
                             eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                                       path.display());
                             process::exit(1);
                         });

            if let Err(e) = linescript::run_source(&source) {
                eprintln!("{e}");
                process::exit(1);
            }
        },
        None => linescript::repl::run(),
    }
}
