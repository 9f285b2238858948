//! Forsh interpreter library
//!
//! A tiny interactive stack-based language: tokens are read one at a
//! time and either pushed as integer literals, dispatched as bound
//! operations, or bound as variable names.

pub mod interp;
pub mod repl;

pub use interp::{ErrorKind, Interpreter, RuntimeError, Value};
