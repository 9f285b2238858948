//! Symbol table for variable and operation bindings

use std::collections::HashMap;

use super::value::Value;

/// Flat mapping from names to owned values
///
/// One table per session; there is no scope chain.
#[derive(Debug)]
pub struct SymbolTable {
    bindings: HashMap<String, Value>,
}

impl SymbolTable {
    /// Create an empty table
    pub fn new() -> Self {
        SymbolTable {
            bindings: HashMap::new(),
        }
    }

    /// Bind `name` to `value`, replacing any previous binding
    ///
    /// The key is retained on rebind; the old value is dropped.
    pub fn define(&mut self, name: impl Into<String>, value: Value) {
        self.bindings.insert(name.into(), value);
    }

    /// Look up a binding without taking ownership
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.bindings.get(name)
    }

    /// Check whether `name` is bound
    pub fn contains(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    /// Number of bindings
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new()
    }
}
