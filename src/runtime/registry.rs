use rustc_hash::{FxHashMap, FxHashSet};

use crate::{domain::ModuleName, runtime::Value};

/// The runtime-wide table of already-acquired modules, keyed by the name each one was
/// requested under. Consulted before any loading happens, so a module's body runs at most
/// once per registration.
#[derive(Debug, Default)]
pub struct ModuleRegistry {
    modules: FxHashMap<ModuleName, Value>,
}

impl ModuleRegistry {
    pub fn get(&self, name: &ModuleName) -> Option<Value> {
        self.modules.get(name).cloned()
    }

    pub fn insert(&mut self, name: ModuleName, value: Value) {
        self.modules.insert(name, value);
    }

    /// Remove a single entry. Removing a name that is not present is a no-op.
    pub fn remove(&mut self, name: &ModuleName) -> Option<Value> {
        self.modules.remove(name)
    }

    /// Snapshot of every registered name. Interception teardown diffs two of these to
    /// decide what to unload.
    pub fn names(&self) -> FxHashSet<ModuleName> {
        self.modules.keys().cloned().collect()
    }
}
