use rustc_hash::FxHashMap;

use crate::runtime::Value;

/// Keys must be valid runtime identifiers (basically, strings).
pub type SymbolTable = FxHashMap<String, Value>;

/// The attribute table backing modules and stand-in objects.
#[derive(Debug, PartialEq, Clone, Default)]
pub struct Scope {
    symbol_table: SymbolTable,
}

impl Scope {
    pub fn get(&self, name: &str) -> Option<Value> {
        self.symbol_table.get(name).cloned()
    }

    /// Insert a `Value` into this `Scope`. The `Scope` is returned to allow calls to be
    /// chained.
    pub fn insert(&mut self, name: &str, value: Value) -> &mut Self {
        self.symbol_table.insert(name.to_string(), value);
        self
    }

    /// Return a list of all the symbols available in this `Scope`.
    pub fn symbols(&self) -> Vec<String> {
        self.symbol_table.keys().cloned().collect()
    }
}
