//! # dofactory
//!
//! Register plain constructor functions with a dependency-injection
//! container, without writing container-shaped wrappers by hand.
//!
//! A factory is any function whose parameters are registered services and
//! whose return is either the service itself or a `Result` of it.
//! [`to_provider`] turns it into a [`Provider`]; the container then looks
//! every parameter up by its canonical type name each time it runs the
//! provider.
//!
//! ## Feature Flags
//!
//! - `injector` (default) - the [`Injector`] service container
//!
//! ## Example
//!
//! ```rust
//! use dofactory::{Injector, to_provider};
//! use std::sync::Arc;
//!
//! struct Service {
//!     name: String,
//! }
//!
//! fn new_service(name: String) -> Arc<Service> {
//!     Arc::new(Service { name })
//! }
//!
//! let injector = Injector::new();
//! injector.provide_value(String::from("MyService")).unwrap();
//! injector.provide(to_provider::<Arc<Service>, _>(new_service)).unwrap();
//!
//! assert_eq!(injector.invoke::<Arc<Service>>().unwrap().name, "MyService");
//! ```
//!
//! ## Modules
//!
//! - [`factory`] - shape validation, parameter resolution and providers
//! - [`injector`] - the service container (`injector` feature)

/// Factory adaptation
pub mod factory {
	pub use reinhardt_factory::*;
}

/// Service container
#[cfg(feature = "injector")]
pub mod injector {
	pub use reinhardt_injector::*;
}

pub use reinhardt_factory::{
	BoxError, Candidate, Container, Dependency, Descriptor, DiError, DiResult, Factory, Provider,
	Service, ShapeError, canonical_name, to_provider, to_provider_dyn, validate,
};

#[cfg(feature = "injector")]
pub use reinhardt_injector::{Injector, InjectorBuilder};
