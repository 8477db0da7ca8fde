use tracing::debug;

use crate::{
    core::Container,
    domain::{AcquireRequest, WaylayError, WaylayResult},
    intercept::hook::Hook,
    runtime::{Object, Runtime, Value},
};

impl Hook {
    /// Produce the value a nested request resolves to while the interception is active.
    ///
    /// An empty attribute list asks for nothing in particular, so it is treated as a bare
    /// request.
    pub(super) fn substitute(
        &self,
        runtime: &Runtime,
        request: &AcquireRequest,
    ) -> WaylayResult<Value> {
        match request.attributes() {
            None | Some([]) => self.replace_module(runtime, request),
            Some(attributes) => self.synthesize_selective(runtime, request, attributes),
        }
    }

    /// Replacement policy for a whole module: the mapping wins, strict mode refuses to
    /// fall back, anything else goes to the real resolver unchanged.
    fn replace_module(&self, runtime: &Runtime, request: &AcquireRequest) -> WaylayResult<Value> {
        if let Some(replacement) = self.replacements.get(&request.name) {
            debug!(module = %request.name, "substituting module");
            return Ok(replacement);
        }

        if self.strict {
            return Err(WaylayError::ReplacementMissing(request.name.clone()));
        }

        self.real.resolve(runtime, &request.as_bare())
    }

    /// Build the stand-in for a selective request: explicitly mapped attributes come from
    /// the mapping, the rest are copied off the bare-name resolution. A qualified entry
    /// always beats a bare entry for the same module.
    fn synthesize_selective(
        &self,
        runtime: &Runtime,
        request: &AcquireRequest,
        attributes: &[String],
    ) -> WaylayResult<Value> {
        let mut stand_in = Object::new();
        let mut deferred = Vec::new();

        for attribute in attributes {
            let qualified = request.name.attribute(attribute);
            match self.replacements.get(&qualified) {
                Some(value) => {
                    stand_in.set(attribute, value);
                }
                None => deferred.push(attribute),
            }
        }

        // Nothing deferred means nothing to resolve: the stand-in is complete without the
        // module ever being acquired.
        if !deferred.is_empty() {
            let base = self.replace_module(runtime, request)?;
            for attribute in deferred {
                let value =
                    base.attr(attribute)
                        .ok_or_else(|| WaylayError::AttributeNotFound {
                            module: request.name.clone(),
                            attribute: attribute.clone(),
                        })?;
                stand_in.set(attribute, value);
            }
        }

        Ok(Value::Object(Container::new(stand_in)))
    }
}
