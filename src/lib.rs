//! Scoped, reversible interception of module acquisition.
//!
//! A [`Runtime`] resolves every module-acquisition request through whatever occupies its
//! resolver slot. An [`Interceptor`] temporarily wraps that slot: requests written directly
//! by the caller still resolve for real, while everything those modules pull in underneath
//! can be swapped for values from a [`Replacements`] mapping. Dropping the [`Activation`]
//! restores the slot and unloads whatever the window registered, so the runtime comes out
//! the way it went in.
//!
//! ```
//! use waylay::{Interceptor, ModuleName, Replacements, Runtime, Value};
//!
//! let runtime = Runtime::new();
//! runtime.define_module("config", |_, module| {
//!     module.borrow_mut().insert("mode", Value::Str("production".into()));
//!     Ok(())
//! });
//! runtime.define_module("service", |rt, module| {
//!     let config = rt.import_module("config")?;
//!     module.borrow_mut().insert("config", config);
//!     Ok(())
//! });
//!
//! let doubles = Replacements::new().with("config", Value::Str("test".into()));
//! let activation = Interceptor::new(doubles).activate(&runtime)?;
//!
//! // `service` is named directly, so it loads for real; the `config` it pulls in
//! // underneath is substituted.
//! let service = runtime.import_module("service")?;
//! assert_eq!(service.attr("config"), Some(Value::Str("test".into())));
//!
//! activation.deactivate();
//! assert!(runtime.read_module(&ModuleName::from_dotted("config")).is_none());
//! # Ok::<(), waylay::WaylayError>(())
//! ```

pub mod core;
pub mod domain;
pub mod intercept;
pub mod runtime;


pub use crate::core::Container;
pub use domain::{AcquireKind, AcquireRequest, ModuleName, WaylayError, WaylayResult};
pub use intercept::{Activation, Interceptor, Replacements};
pub use runtime::{Module, ModuleLoader, Object, Resolver, Runtime, Value};
