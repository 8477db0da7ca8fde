use crate::{
    domain::{Dunder, ModuleName},
    runtime::{Scope, Value},
};

/// A named attribute namespace. Created empty by the loader and populated by the module's
/// body.
#[derive(Debug, PartialEq, Clone)]
pub struct Module {
    name: ModuleName,
    package: Option<ModuleName>,
    scope: Scope,
}

impl Module {
    pub fn new(name: ModuleName, package: Option<ModuleName>) -> Self {
        let scope = init_scope(&name, package.as_ref());

        Self {
            name,
            package,
            scope,
        }
    }

    pub fn name(&self) -> &ModuleName {
        &self.name
    }

    /// The package context this module's body runs under: itself for a package, its
    /// parent for a plain module, `None` at top level.
    pub fn package(&self) -> Option<&ModuleName> {
        self.package.as_ref()
    }

    pub fn get(&self, name: &str) -> Option<Value> {
        self.scope.get(name)
    }

    pub fn insert(&mut self, name: &str, value: Value) {
        self.scope.insert(name, value);
    }

    pub fn symbols(&self) -> Vec<String> {
        self.scope.symbols()
    }
}

fn init_scope(name: &ModuleName, package: Option<&ModuleName>) -> Scope {
    let mut scope = Scope::default();
    scope.insert(&Dunder::Name, Value::Str(name.as_str()));

    let package_value = match package {
        Some(package) => Value::Str(package.as_str()),
        None => Value::None,
    };
    scope.insert(&Dunder::Package, package_value);

    scope
}
