use crate::runtime::{Scope, Value};

/// An anonymous attribute bag. Replacement doubles are usually one of these, and the
/// interception engine synthesizes a fresh one for every selective acquisition it serves.
#[derive(Debug, PartialEq, Clone, Default)]
pub struct Object {
    scope: Scope,
}

impl Object {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_fields<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = (S, Value)>,
        S: AsRef<str>,
    {
        let mut object = Self::new();
        for (name, value) in fields {
            object.set(name.as_ref(), value);
        }
        object
    }

    pub fn get(&self, name: &str) -> Option<Value> {
        self.scope.get(name)
    }

    pub fn set(&mut self, name: &str, value: Value) {
        self.scope.insert(name, value);
    }

    pub fn symbols(&self) -> Vec<String> {
        self.scope.symbols()
    }
}
