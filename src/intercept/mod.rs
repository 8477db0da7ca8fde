//! Scoped interception of the runtime's resolver slot.
//!
//! An [`Interceptor`] describes one interception window: the replacement mapping plus the
//! fallback policy. [`Interceptor::activate`] snapshots the registry, wraps the slot's
//! occupant with a depth-tracking hook, and hands back an [`Activation`] that undoes all
//! of it when dropped.

mod depth;
mod hook;
mod replacements;
mod substitute;

pub use replacements::Replacements;

use std::rc::Rc;

use rustc_hash::FxHashSet;
use tracing::debug;

use crate::{
    domain::{ModuleName, WaylayResult},
    intercept::hook::Hook,
    runtime::{Resolver, Runtime},
};

/// Configuration for one interception window: what to substitute, and how to behave when
/// a nested request has no mapping.
#[derive(Debug, Clone, Default)]
pub struct Interceptor {
    replacements: Replacements,
    keep_loaded: bool,
    strict: bool,
    verbose: bool,
}

impl Interceptor {
    pub fn new(replacements: Replacements) -> Self {
        Self {
            replacements,
            ..Self::default()
        }
    }

    /// Leave modules registered during the window in the registry after it closes.
    pub fn keep_loaded(mut self) -> Self {
        self.keep_loaded = true;
        self
    }

    /// Refuse to fall back to the real resolver for unmapped nested requests.
    pub fn strict(mut self) -> Self {
        self.strict = true;
        self
    }

    /// Emit one diagnostic line per intercepted request, indented by depth.
    pub fn verbose(mut self) -> Self {
        self.verbose = true;
        self
    }

    /// Install the interception. The returned [`Activation`] keeps it live; dropping it
    /// restores the runtime. Activating while another interception is live on the same
    /// runtime is an error.
    pub fn activate(self, runtime: &Runtime) -> WaylayResult<Activation> {
        runtime.mark_intercepting()?;

        let snapshot = runtime.registry_names();
        let real = runtime.resolver();
        let hook = Hook::new(real.clone(), self.replacements, self.strict, self.verbose);
        runtime.install_resolver(Rc::new(hook));

        debug!("interception activated");

        Ok(Activation {
            runtime: runtime.clone(),
            real,
            snapshot,
            unload: !self.keep_loaded,
        })
    }
}

/// A live interception window.
///
/// Dropping it deactivates: the displaced resolver goes back into the slot first, then
/// every registry name the window added is unloaded (unless the window was configured to
/// keep them). Teardown runs on every exit path, early returns and panics included, and
/// none of its steps can fail.
#[must_use = "dropping the activation immediately ends the interception"]
pub struct Activation {
    runtime: Runtime,
    real: Rc<dyn Resolver>,
    snapshot: FxHashSet<ModuleName>,
    unload: bool,
}

impl Activation {
    /// End the interception now instead of at end of scope.
    pub fn deactivate(self) {}

    fn restore(&mut self) {
        self.runtime.install_resolver(self.real.clone());
        self.runtime.clear_intercepting();

        if self.unload {
            for name in self.runtime.registry_names() {
                if !self.snapshot.contains(&name) {
                    self.runtime.remove_module(&name);
                }
            }
        }

        debug!("interception deactivated");
    }
}

impl Drop for Activation {
    fn drop(&mut self) {
        self.restore();
    }
}
