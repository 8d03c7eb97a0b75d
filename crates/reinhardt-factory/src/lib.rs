//! # Reinhardt Factory
//!
//! Adapts ordinary constructor functions into the provider shape a
//! dependency-injection container registers.
//!
//! ## Overview
//!
//! A container registers providers: functions that receive the container and
//! return a value or an error. Writing those by hand for every service means
//! repeating the same lookups over and over. This crate lets callers register
//! the constructor itself:
//!
//! - [`validate`] checks that a factory has an acceptable shape
//! - [`resolve`] looks each parameter up by its canonical type name
//! - [`to_provider`] ties both together into a [`Provider<T>`]
//!
//! ## Accepted shapes
//!
//! A factory for `T` takes any number of [`Dependency`] parameters (up to
//! twelve on the typed surface) and returns either `T` or `Result<T, E>`
//! where `E` converts into a boxed error. Callables that only exist at
//! runtime are described with [`Candidate::function`] and adapted through
//! [`to_provider_dyn`]; they are checked against the same rules.
//!
//! ## Example
//!
//! ```rust
//! use reinhardt_factory::{Container, DiError, DiResult, Service, to_provider};
//! use std::sync::Arc;
//!
//! struct Config;
//!
//! impl Container for Config {
//!     fn lookup_named(&self, name: &str) -> DiResult<Option<Service>> {
//!         match name {
//!             "u16" => Ok(Some(Arc::new(8080u16))),
//!             _ => Err(DiError::NotFound(name.to_string())),
//!         }
//!     }
//! }
//!
//! fn address(port: u16) -> Result<String, std::fmt::Error> {
//!     Ok(format!("127.0.0.1:{}", port))
//! }
//!
//! let provider = to_provider::<String, _>(address);
//! assert_eq!(provider.provide(&Config).unwrap(), "127.0.0.1:8080");
//! ```

mod candidate;
mod container;
mod dependency;
mod error;
mod factory;
mod provider;
mod resolver;
mod signature;
mod type_name;

pub use candidate::{Body, Candidate, Function, FunctionBuilder, Output, Parameter, ReturnType};
pub use container::{Container, Service};
pub use dependency::Dependency;
pub use error::{BoxError, DiError, DiResult, ShapeError};
pub use factory::{Factory, Fallible, Plain};
pub use provider::{Provider, to_provider, to_provider_dyn};
pub use resolver::resolve;
pub use signature::{Descriptor, validate};
pub use type_name::{TypeName, canonical_name};
