use std::fmt::{Display, Error, Formatter};

use crate::{
    core::Container,
    runtime::{Module, Object},
};

/// A module-like runtime value: whatever a resolver can hand back for an acquisition.
/// Replacements may be any of these, including `None` ("load nothing, store null").
#[derive(Debug, Clone)]
pub enum Value {
    None,
    Bool(bool),
    Int(i64),
    Str(String),
    Module(Container<Module>),
    Object(Container<Object>),
}

impl Value {
    /// Read an attribute from a module-like value. Scalars have no attributes.
    pub fn attr(&self, name: &str) -> Option<Value> {
        match self {
            Value::Module(module) => module.borrow().get(name),
            Value::Object(object) => object.borrow().get(name),
            _ => None,
        }
    }

    /// The runtime's notion of `is`: pointer identity for reference values, structural
    /// equality for scalars.
    pub fn same_identity(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Module(a), Value::Module(b)) => a.same_identity(b),
            (Value::Object(a), Value::Object(b)) => a.same_identity(b),
            (Value::None, Value::None) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            _ => false,
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Value::None)
    }
}

/// Reference values compare by identity. Structural comparison would recurse through
/// module scopes, which may be cyclic.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.same_identity(other)
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        match self {
            Value::None => write!(f, "None"),
            Value::Bool(true) => write!(f, "True"),
            Value::Bool(false) => write!(f, "False"),
            Value::Int(i) => write!(f, "{i}"),
            Value::Str(s) => write!(f, "{s}"),
            Value::Module(module) => write!(f, "<module '{}'>", module.borrow().name()),
            Value::Object(_) => write!(f, "<object>"),
        }
    }
}
