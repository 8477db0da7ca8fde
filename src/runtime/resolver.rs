use crate::{
    domain::{AcquireRequest, ModuleName, WaylayError, WaylayResult},
    runtime::{Runtime, Value},
};

/// Anything that can occupy the runtime's resolver slot. The default occupant is
/// [`ModuleLoader`](crate::runtime::ModuleLoader); an interception swaps in a wrapper and
/// swaps it back out on teardown.
pub trait Resolver {
    fn resolve(&self, runtime: &Runtime, request: &AcquireRequest) -> WaylayResult<Value>;
}

/// Resolve the name a request actually refers to, applying relative dots against the
/// requesting package.
///
/// One leading dot refers to the current package; additional dots walk upward. Since
/// `package` already names the containing package, we strip `level - 1` segments to
/// compute the base.
pub(crate) fn resolve_request_name(request: &AcquireRequest) -> WaylayResult<ModuleName> {
    if !request.is_relative() {
        return Ok(request.name.clone());
    }

    let package = request
        .package
        .as_ref()
        .ok_or(WaylayError::NoParentPackage)?;
    let base = package
        .strip_last(request.level - 1)
        .ok_or(WaylayError::BeyondTopLevel)?;

    Ok(base.join(request.name.segments()))
}
