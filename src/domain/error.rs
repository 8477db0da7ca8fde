use thiserror::Error;

use crate::domain::ModuleName;

pub type WaylayResult<T> = Result<T, WaylayError>;

/// Errors surfaced by module acquisition, whether from the real resolver or from an
/// active interception. The interceptor never translates real-resolver errors; they
/// propagate from here unmodified.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum WaylayError {
    #[error("No module named '{0}'")]
    ModuleNotFound(ModuleName),

    #[error("module '{module}' has no attribute '{attribute}'")]
    AttributeNotFound {
        module: ModuleName,
        attribute: String,
    },

    /// Strict interception only: the requested name has no replacement and falling back
    /// to the real resolver is disabled.
    #[error("no replacement for module '{0}'")]
    ReplacementMissing(ModuleName),

    #[error("attempted relative import with no known parent package")]
    NoParentPackage,

    #[error("attempted relative import beyond top-level package")]
    BeyondTopLevel,

    #[error("an interception is already active on this runtime")]
    AlreadyIntercepting,
}
