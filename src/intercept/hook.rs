use std::rc::Rc;

use tracing::debug;

use crate::{
    domain::{AcquireRequest, ModuleName, WaylayResult},
    intercept::{depth::Depth, Replacements},
    runtime::{Resolver, Runtime, Value},
};

/// The resolver an activation installs into the runtime's slot.
///
/// Requests at depth zero name the code under test and pass through to the real resolver
/// untouched; everything deeper goes through the replacement policy and is registered
/// under the requested name.
pub(crate) struct Hook {
    pub(super) real: Rc<dyn Resolver>,
    pub(super) replacements: Replacements,
    pub(super) depth: Depth,
    pub(super) strict: bool,
    pub(super) verbose: bool,
}

impl Hook {
    pub fn new(
        real: Rc<dyn Resolver>,
        replacements: Replacements,
        strict: bool,
        verbose: bool,
    ) -> Self {
        Self {
            real,
            replacements,
            depth: Depth::default(),
            strict,
            verbose,
        }
    }
}

impl Resolver for Hook {
    fn resolve(&self, runtime: &Runtime, request: &AcquireRequest) -> WaylayResult<Value> {
        // Forward-compatibility acquisitions stay real at any depth, even when mapped.
        if request.name == ModuleName::future() {
            return self.real.resolve(runtime, request);
        }

        if self.verbose {
            debug!("{}{}", "..".repeat(self.depth.get()), request.name);
        }

        if self.depth.get() == 0 {
            let _guard = self.depth.enter();
            return self.real.resolve(runtime, request);
        }

        let value = {
            let _guard = self.depth.enter();
            self.substitute(runtime, request)?
        };
        runtime.store_module(request.name.clone(), value.clone());
        Ok(value)
    }
}
