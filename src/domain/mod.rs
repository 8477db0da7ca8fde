mod dunder;
mod error;
mod module_name;
mod request;


pub use dunder::Dunder;
pub use error::{WaylayError, WaylayResult};
pub use module_name::ModuleName;
pub use request::{AcquireKind, AcquireRequest};
