use rustc_hash::FxHashMap;

use crate::{domain::ModuleName, runtime::Value};

/// What to hand back instead of really resolving. Keys are either bare module names
/// (`"alpha"`) or fully qualified attribute paths (`"alpha.beta"`); values are arbitrary.
///
/// Lookup is an exact match on the requested name as written, for relative requests too.
/// There is no pattern matching, and `"alpha"` and `"alpha.beta"` entries are unrelated
/// unless both are present.
#[derive(Debug, Clone, Default)]
pub struct Replacements {
    entries: FxHashMap<ModuleName, Value>,
}

impl Replacements {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: &str, value: Value) -> Self {
        self.entries.insert(ModuleName::from_dotted(name), value);
        self
    }

    pub fn get(&self, name: &ModuleName) -> Option<Value> {
        self.entries.get(name).cloned()
    }
}

impl<S: AsRef<str>> FromIterator<(S, Value)> for Replacements {
    fn from_iter<I: IntoIterator<Item = (S, Value)>>(iter: I) -> Self {
        let entries = iter
            .into_iter()
            .map(|(name, value)| (ModuleName::from_dotted(name.as_ref()), value))
            .collect();
        Self { entries }
    }
}
