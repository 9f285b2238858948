//! Token interpretation

use super::builtins;
use super::error::InterpResult;
use super::stack::Stack;
use super::table::SymbolTable;
use super::value::Value;

/// Keyword that makes the next token a variable name
const VARIABLE_KEYWORD: &str = "VARIABLE";

/// One interpreter session
///
/// Owns the operand stack, the symbol table (pre-seeded with the four
/// arithmetic words) and the one-token lookahead state used by
/// `VARIABLE`.
pub struct Interpreter {
    stack: Stack,
    symbols: SymbolTable,
    /// Set after `VARIABLE`; the next token is taken as a name
    awaiting_name: bool,
}

impl Interpreter {
    /// Create a new session with the built-ins bound
    pub fn new() -> Self {
        let mut symbols = SymbolTable::new();
        builtins::register(&mut symbols);
        Interpreter {
            stack: Stack::new(),
            symbols,
            awaiting_name: false,
        }
    }

    /// Interpret a single whitespace-delimited token
    ///
    /// Errors are non-fatal: the session stays usable and the stack is
    /// left as the failed operation's rollback defined it. A token that
    /// matches nothing is reported on stderr and ignored.
    pub fn interpret(&mut self, token: &str) -> InterpResult<()> {
        if self.awaiting_name {
            self.awaiting_name = false;
            return self.define_variable(token);
        }
        if token == VARIABLE_KEYWORD {
            self.awaiting_name = true;
            return Ok(());
        }
        if is_integer(token) {
            self.stack.push(Value::Int(parse_integer(token)));
            return Ok(());
        }
        match self.symbols.get(token) {
            Some(Value::Op(op)) => {
                let op = *op;
                op(&mut self.stack)
            }
            Some(value) => {
                let value = value.clone();
                self.stack.push(value);
                Ok(())
            }
            None => {
                eprintln!("Failed to interpret: {token}");
                Ok(())
            }
        }
    }

    fn define_variable(&mut self, name: &str) -> InterpResult<()> {
        // Note: a defined name is bound to a placeholder symbol holding
        // the name itself; it does NOT capture the current top of the
        // stack. Referencing the name later pushes that symbol.
        let symbol = Value::symbol(name)?;
        self.symbols.define(name, symbol);
        Ok(())
    }

    /// Render the stack bottom-to-top on one `#`-prefixed line
    ///
    /// Display only; the output is not re-parsed. Idempotent.
    pub fn describe(&self) -> String {
        let mut line = String::from("#");
        for value in self.stack.iter() {
            line.push(' ');
            line.push_str(&value.to_string());
        }
        line
    }

    /// Borrow the operand stack
    pub fn stack(&self) -> &Stack {
        &self.stack
    }

    /// Borrow the symbol table
    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

/// True for a non-empty string of decimal digits (no sign, no whitespace)
fn is_integer(token: &str) -> bool {
    !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit())
}

/// Accumulate decimal digits, wrapping on overflow
fn parse_integer(token: &str) -> i64 {
    token.bytes().fold(0i64, |acc, digit| {
        acc.wrapping_mul(10).wrapping_add(i64::from(digit - b'0'))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interp::error::ErrorKind;

    fn feed(interp: &mut Interpreter, tokens: &[&str]) {
        for token in tokens {
            interp.interpret(token).unwrap();
        }
    }

    #[test]
    fn test_literal_push() {
        let mut interp = Interpreter::new();
        feed(&mut interp, &["42"]);
        assert_eq!(interp.stack().len(), 1);
        assert_eq!(interp.stack().peek(), Some(&Value::Int(42)));
    }

    #[test]
    fn test_is_integer() {
        assert!(is_integer("0"));
        assert!(is_integer("007"));
        assert!(!is_integer(""));
        assert!(!is_integer("-1"));
        assert!(!is_integer("1x"));
        assert!(!is_integer(" 1"));
    }

    #[test]
    fn test_parse_integer_wraps() {
        assert_eq!(parse_integer("9223372036854775807"), i64::MAX);
        assert_eq!(parse_integer("9223372036854775808"), i64::MIN);
    }

    #[test]
    fn test_operation_dispatch() {
        let mut interp = Interpreter::new();
        feed(&mut interp, &["2", "3", "+"]);
        assert_eq!(interp.stack().peek(), Some(&Value::Int(5)));
        assert_eq!(interp.stack().len(), 1);
    }

    #[test]
    fn test_error_propagates_unchanged() {
        let mut interp = Interpreter::new();
        feed(&mut interp, &["5", "0"]);
        let err = interp.interpret("/").unwrap_err();
        assert_eq!(err.kind, ErrorKind::DividedByZero);
        let seen: Vec<i64> = interp.stack().iter().filter_map(Value::as_int).collect();
        assert_eq!(seen, vec![5, 0]);
    }

    #[test]
    fn test_variable_binding_round_trip() {
        let mut interp = Interpreter::new();
        feed(&mut interp, &["VARIABLE", "x"]);
        assert!(interp.symbols().contains("x"));

        // Referencing the name pushes its placeholder symbol
        feed(&mut interp, &["x"]);
        assert_eq!(interp.stack().peek(), Some(&Value::Symbol("x".to_string())));
    }

    #[test]
    fn test_variable_does_not_capture_stack_top() {
        let mut interp = Interpreter::new();
        feed(&mut interp, &["42", "VARIABLE", "x"]);
        assert_eq!(
            interp.symbols().get("x"),
            Some(&Value::Symbol("x".to_string()))
        );
        // The 42 is still on the stack, untouched by the definition
        assert_eq!(interp.stack().peek(), Some(&Value::Int(42)));
    }

    #[test]
    fn test_variable_rebind_no_growth() {
        let mut interp = Interpreter::new();
        feed(&mut interp, &["VARIABLE", "x"]);
        let size = interp.symbols().len();
        feed(&mut interp, &["VARIABLE", "x"]);
        assert_eq!(interp.symbols().len(), size);
    }

    #[test]
    fn test_variable_name_validation() {
        let mut interp = Interpreter::new();
        interp.interpret("VARIABLE").unwrap();
        let err = interp.interpret("1bad").unwrap_err();
        assert_eq!(err.kind, ErrorKind::IllegalVariableName);

        // The failed definition resets the mode
        feed(&mut interp, &["VARIABLE", "good2"]);
        assert!(interp.symbols().contains("good2"));
        assert!(!interp.symbols().contains("1bad"));
    }

    #[test]
    fn test_variable_keyword_has_no_stack_effect() {
        let mut interp = Interpreter::new();
        feed(&mut interp, &["1", "VARIABLE", "x", "2"]);
        let seen: Vec<i64> = interp.stack().iter().filter_map(Value::as_int).collect();
        assert_eq!(seen, vec![1, 2]);
    }

    #[test]
    fn test_unknown_token_is_ignored() {
        let mut interp = Interpreter::new();
        feed(&mut interp, &["1", "nonsense", "2"]);
        let seen: Vec<i64> = interp.stack().iter().filter_map(Value::as_int).collect();
        assert_eq!(seen, vec![1, 2]);
    }

    #[test]
    fn test_describe() {
        let mut interp = Interpreter::new();
        assert_eq!(interp.describe(), "#");
        feed(&mut interp, &["1", "2", "3"]);
        assert_eq!(interp.describe(), "# 1 2 3");
    }

    #[test]
    fn test_describe_is_idempotent() {
        let mut interp = Interpreter::new();
        feed(&mut interp, &["10", "20"]);
        assert_eq!(interp.describe(), interp.describe());
    }

    #[test]
    fn test_sessions_are_independent() {
        let mut a = Interpreter::new();
        let mut b = Interpreter::new();
        feed(&mut a, &["VARIABLE", "x", "1"]);
        assert!(!b.symbols().contains("x"));
        assert!(b.stack().is_empty());
        feed(&mut b, &["2"]);
        assert_eq!(a.stack().peek(), Some(&Value::Int(1)));
    }
}
