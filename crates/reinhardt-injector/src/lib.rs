//! # Reinhardt Injector
//!
//! A small service container for providers built by `reinhardt-factory`.
//!
//! ## Features
//!
//! - **Lazy singletons**: [`Injector::provide`] builds on first lookup, once
//! - **Transients**: [`Injector::provide_transient`] builds on every lookup
//! - **Values**: eager values, named values and explicit "no value" entries
//! - **Overrides**: replace any registration, for tests or late configuration
//!
//! Lookups go through the [`Container`](reinhardt_factory::Container) trait,
//! so a provider's parameters are resolved against the same injector that
//! runs it.
//!
//! ## Example
//!
//! ```rust
//! use reinhardt_factory::to_provider;
//! use reinhardt_injector::Injector;
//! use std::sync::Arc;
//!
//! struct Service {
//!     name: String,
//! }
//!
//! fn new_service(name: String, fail: bool) -> Result<Arc<Service>, &'static str> {
//!     if fail {
//!         return Err("ERROR");
//!     }
//!     Ok(Arc::new(Service { name }))
//! }
//!
//! let injector = Injector::builder().name("example").build();
//! injector.provide_value(String::from("MyService")).unwrap();
//! injector.provide_value(false).unwrap();
//! injector
//!     .provide_transient(to_provider::<Arc<Service>, _>(new_service))
//!     .unwrap();
//!
//! assert_eq!(injector.invoke::<Arc<Service>>().unwrap().name, "MyService");
//!
//! injector.override_value(true);
//! let err = injector.invoke::<Arc<Service>>().err().unwrap();
//! assert_eq!(err.to_string(), "ERROR");
//! ```

mod injector;
mod registration;

pub use injector::{Injector, InjectorBuilder};
