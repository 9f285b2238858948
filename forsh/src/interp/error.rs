//! Runtime errors for the interpreter

use std::fmt;
use thiserror::Error;

/// Kinds of runtime errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ErrorKind {
    /// An operation needed an operand but the stack was empty
    #[error("EmptyStackError")]
    EmptyStack,
    /// An operand existed but was not the required variant
    #[error("IllegalTypeError")]
    IllegalType,
    /// Divide operand was zero
    #[error("DividedByZeroError")]
    DividedByZero,
    /// A variable-definition token failed the name grammar
    #[error("IllegalVariableNameError")]
    IllegalVariableName,
}

/// Runtime error carried as a value, never thrown
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeError {
    pub kind: ErrorKind,
    pub message: Option<String>,
}

impl RuntimeError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        RuntimeError {
            kind,
            message: Some(message.into()),
        }
    }

    pub fn empty_stack() -> Self {
        RuntimeError {
            kind: ErrorKind::EmptyStack,
            message: None,
        }
    }

    pub fn illegal_type(expected: &str, got: &str) -> Self {
        Self::new(
            ErrorKind::IllegalType,
            format!("expected {expected}, got {got}"),
        )
    }

    pub fn divided_by_zero() -> Self {
        RuntimeError {
            kind: ErrorKind::DividedByZero,
            message: None,
        }
    }

    pub fn illegal_variable_name(name: &str) -> Self {
        Self::new(
            ErrorKind::IllegalVariableName,
            format!("not a valid variable name: {name}"),
        )
    }
}

impl fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.message {
            Some(message) => write!(f, "{}: {}", self.kind, message),
            None => write!(f, "{}", self.kind),
        }
    }
}

impl std::error::Error for RuntimeError {}

/// Result type for interpreter operations
pub type InterpResult<T> = Result<T, RuntimeError>;
