mod loader;
mod module;
mod object;
mod registry;
mod resolver;
mod scope;
mod value;


pub use loader::ModuleLoader;
pub use module::Module;
pub use object::Object;
pub use registry::ModuleRegistry;
pub(crate) use resolver::resolve_request_name;
pub use resolver::Resolver;
pub use scope::{Scope, SymbolTable};
pub use value::Value;

use std::{mem, rc::Rc};

use rustc_hash::{FxHashMap, FxHashSet};
use tracing::trace;

use crate::{
    core::Container,
    domain::{AcquireRequest, ModuleName, WaylayError, WaylayResult},
};

/// A module body: runs with the runtime, to issue further acquisitions, and the module
/// container being populated.
pub(crate) type ModuleBody = Rc<dyn Fn(&Runtime, &Container<Module>) -> WaylayResult<()>>;

struct RuntimeState {
    registry: ModuleRegistry,
    definitions: FxHashMap<ModuleName, ModuleBody>,
    resolver: Rc<dyn Resolver>,
    loading: Vec<Option<ModuleName>>,
    intercepting: bool,
}

/// The host runtime: a registry of loaded modules, a table of module definitions, and the
/// resolver slot every acquisition dispatches through.
///
/// Handles are cheap clones sharing one state. Single-threaded by design.
#[derive(Clone)]
pub struct Runtime {
    state: Container<RuntimeState>,
}

impl Runtime {
    pub fn new() -> Self {
        let state = RuntimeState {
            registry: ModuleRegistry::default(),
            definitions: FxHashMap::default(),
            resolver: Rc::new(ModuleLoader),
            loading: Vec::new(),
            intercepting: false,
        };

        let runtime = Self {
            state: Container::new(state),
        };
        runtime.init_future();
        runtime
    }

    /// The forward-compatibility module ships preloaded, so acquisitions of it always
    /// have a real target.
    fn init_future(&self) {
        let name = ModuleName::future();
        let mut module = Module::new(name.clone(), None);
        module.insert("annotations", Value::Bool(true));
        module.insert("division", Value::Bool(true));
        self.store_module(name, Value::Module(Container::new(module)));
    }

    /// Register a module definition. The body runs the first time the module is acquired.
    pub fn define_module<F>(&self, name: &str, body: F)
    where
        F: Fn(&Runtime, &Container<Module>) -> WaylayResult<()> + 'static,
    {
        self.state
            .borrow_mut()
            .definitions
            .insert(ModuleName::from_dotted(name), Rc::new(body));
    }

    /// Dispatch an acquisition through whatever occupies the resolver slot.
    pub fn acquire(&self, request: &AcquireRequest) -> WaylayResult<Value> {
        trace!(module = %request.name, "acquire");
        self.resolver().resolve(self, request)
    }

    /// `import name`
    pub fn import_module(&self, name: &str) -> WaylayResult<Value> {
        let request = AcquireRequest::bare(ModuleName::from_dotted(name))
            .with_package(self.current_package());
        self.acquire(&request)
    }

    /// `from name import a, b`: acquire, then extract each requested attribute in order.
    pub fn import_from(&self, name: &str, attributes: &[&str]) -> WaylayResult<Vec<Value>> {
        self.import_from_level(0, name, attributes)
    }

    /// `from .name import a, b`, with `level` leading dots.
    pub fn import_from_within(
        &self,
        level: usize,
        name: &str,
        attributes: &[&str],
    ) -> WaylayResult<Vec<Value>> {
        self.import_from_level(level, name, attributes)
    }

    fn import_from_level(
        &self,
        level: usize,
        name: &str,
        attributes: &[&str],
    ) -> WaylayResult<Vec<Value>> {
        let request = AcquireRequest::selective(ModuleName::from_dotted(name), attributes)
            .with_level(level)
            .with_package(self.current_package());
        let value = self.acquire(&request)?;
        extract_attributes(&request.name, &value, attributes)
    }

    pub fn read_module(&self, name: &ModuleName) -> Option<Value> {
        self.state.borrow().registry.get(name)
    }

    pub fn store_module(&self, name: ModuleName, value: Value) {
        self.state.borrow_mut().registry.insert(name, value);
    }

    /// Drop a registry entry; absent names are a no-op.
    pub fn remove_module(&self, name: &ModuleName) -> Option<Value> {
        self.state.borrow_mut().registry.remove(name)
    }

    pub fn registry_names(&self) -> FxHashSet<ModuleName> {
        self.state.borrow().registry.names()
    }

    /// The slot's current occupant.
    pub fn resolver(&self) -> Rc<dyn Resolver> {
        self.state.borrow().resolver.clone()
    }

    /// Install a resolver into the slot, returning the displaced occupant.
    pub fn install_resolver(&self, resolver: Rc<dyn Resolver>) -> Rc<dyn Resolver> {
        let mut state = self.state.borrow_mut();
        mem::replace(&mut state.resolver, resolver)
    }

    pub(crate) fn module_definition(&self, name: &ModuleName) -> Option<ModuleBody> {
        self.state.borrow().definitions.get(name).cloned()
    }

    /// The package context a module's body runs under: the module itself when other
    /// definitions nest beneath it, its parent otherwise.
    pub(crate) fn package_of(&self, name: &ModuleName) -> Option<ModuleName> {
        if self.is_package(name) {
            Some(name.clone())
        } else {
            name.parent()
        }
    }

    fn is_package(&self, name: &ModuleName) -> bool {
        self.state
            .borrow()
            .definitions
            .keys()
            .any(|key| key.is_within(name))
    }

    pub(crate) fn current_package(&self) -> Option<ModuleName> {
        self.state.borrow().loading.last().cloned().flatten()
    }

    pub(crate) fn push_loading(&self, package: Option<ModuleName>) -> LoadFrame {
        self.state.borrow_mut().loading.push(package);
        LoadFrame {
            state: self.state.clone(),
        }
    }

    pub(crate) fn mark_intercepting(&self) -> WaylayResult<()> {
        let mut state = self.state.borrow_mut();
        if state.intercepting {
            return Err(WaylayError::AlreadyIntercepting);
        }
        state.intercepting = true;
        Ok(())
    }

    pub(crate) fn clear_intercepting(&self) {
        self.state.borrow_mut().intercepting = false;
    }
}

impl Default for Runtime {
    fn default() -> Self {
        Self::new()
    }
}

/// Pops the loading context when dropped, on success and failure alike.
pub(crate) struct LoadFrame {
    state: Container<RuntimeState>,
}

impl Drop for LoadFrame {
    fn drop(&mut self) {
        self.state.borrow_mut().loading.pop();
    }
}

fn extract_attributes(
    name: &ModuleName,
    value: &Value,
    attributes: &[&str],
) -> WaylayResult<Vec<Value>> {
    attributes
        .iter()
        .map(|attribute| {
            value
                .attr(attribute)
                .ok_or_else(|| WaylayError::AttributeNotFound {
                    module: name.clone(),
                    attribute: attribute.to_string(),
                })
        })
        .collect()
}
