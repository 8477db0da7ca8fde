use tracing::debug;

use crate::{
    core::Container,
    domain::{AcquireKind, AcquireRequest, ModuleName, WaylayError, WaylayResult},
    runtime::{resolve_request_name, Module, Resolver, Runtime, Value},
};

/// The real resolver: loads modules from the runtime's registered definitions, consulting
/// the registry first so each body runs at most once.
#[derive(Debug, Default)]
pub struct ModuleLoader;

impl Resolver for ModuleLoader {
    fn resolve(&self, runtime: &Runtime, request: &AcquireRequest) -> WaylayResult<Value> {
        let name = resolve_request_name(request)?;
        let value = self.read_or_load(runtime, &name)?;

        if let AcquireKind::Selective(attributes) = &request.kind {
            self.load_missing_submodules(runtime, &name, &value, attributes)?;
        }

        Ok(value)
    }
}

impl ModuleLoader {
    fn read_or_load(&self, runtime: &Runtime, name: &ModuleName) -> WaylayResult<Value> {
        if let Some(value) = runtime.read_module(name) {
            return Ok(value);
        }

        self.load(runtime, name)
    }

    fn load(&self, runtime: &Runtime, name: &ModuleName) -> WaylayResult<Value> {
        let body = runtime
            .module_definition(name)
            .ok_or_else(|| WaylayError::ModuleNotFound(name.clone()))?;

        debug!(module = %name, "loading module");

        let module = Container::new(Module::new(name.clone(), runtime.package_of(name)));

        // Store before executing the body so cyclic acquisitions see the partial module
        // instead of loading forever.
        runtime.store_module(name.clone(), Value::Module(module.clone()));

        let frame = runtime.push_loading(module.borrow().package().cloned());
        let result = body(runtime, &module);
        drop(frame);

        if let Err(err) = result {
            // A failed load leaves no trace in the registry.
            runtime.remove_module(name);
            return Err(err);
        }

        Ok(Value::Module(module))
    }

    /// A selective request may name submodules the base module's body never bound. Load
    /// each of those through the runtime, so an active interception sees the nested
    /// acquisitions, and bind them as attributes of the base.
    fn load_missing_submodules(
        &self,
        runtime: &Runtime,
        name: &ModuleName,
        value: &Value,
        attributes: &[String],
    ) -> WaylayResult<()> {
        let Value::Module(module) = value else {
            return Ok(());
        };

        for attribute in attributes {
            if module.borrow().get(attribute).is_some() {
                continue;
            }

            let submodule_name = name.attribute(attribute);
            match runtime.acquire(&AcquireRequest::bare(submodule_name.clone())) {
                Ok(submodule) => {
                    module.borrow_mut().insert(attribute, submodule);
                }
                // A requested name that is neither an attribute nor a submodule is left
                // for attribute extraction to report.
                Err(WaylayError::ModuleNotFound(missing)) if missing == submodule_name => {}
                Err(err) => return Err(err),
            }
        }

        Ok(())
    }
}
