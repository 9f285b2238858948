//! Forsh interpreter CLI

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "forsh", version, about = "Forsh - a tiny stack-based language")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Start an interactive session (the default)
    Repl,
    /// Interpret a source file
    Run {
        /// Source file to interpret
        file: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Some(Command::Run { file }) => run_file(&file),
        Some(Command::Repl) | None => run_repl(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run_repl() -> Result<(), Box<dyn std::error::Error>> {
    let mut repl = forsh::repl::Repl::new()?;
    repl.run()?;
    Ok(())
}

fn run_file(path: &PathBuf) -> Result<(), Box<dyn std::error::Error>> {
    let source = std::fs::read_to_string(path)?;

    let mut interpreter = forsh::Interpreter::new();
    for token in source.split_whitespace() {
        // Engine errors are non-fatal; report and keep going
        if let Err(err) = interpreter.interpret(token) {
            eprintln!("{err}");
        }
    }

    println!("{}", interpreter.describe());
    Ok(())
}
