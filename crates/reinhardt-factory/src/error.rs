//! Error types
//!
//! Two disjoint classes:
//!
//! - [`ShapeError`]: a factory does not have an acceptable signature. Raised once,
//!   at registration, and treated as a programming error.
//! - [`DiError`]: a runtime failure while resolving parameters or running a
//!   factory. Returned from providers as an ordinary error value.

use thiserror::Error;

/// Boxed error returned by fallible factories.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors raised while resolving or building a service.
///
/// These are runtime conditions: a dependency that was never registered, a
/// registration holding no value, or a factory reporting its own failure.
#[derive(Debug, Error)]
pub enum DiError {
	/// No service is registered under the name.
	#[error("could not find service `{0}`")]
	NotFound(String),

	/// A service is already registered under the name.
	#[error("service `{0}` has already been declared")]
	AlreadyDeclared(String),

	/// The registration explicitly holds no value and the requested type has no zero value.
	#[error("service `{0}` holds no value and its type has no zero value")]
	Absent(String),

	/// The value registered under the name is not of the declared parameter type.
	#[error("service `{name}` does not match the type of parameter {position}")]
	TypeMismatch {
		/// Canonical name the value was looked up under
		name: String,
		/// Zero-based parameter position
		position: usize,
	},

	/// A factory output could not be converted to the declared result type.
	#[error("factory output {position} cannot be converted to `{expected}`")]
	OutputConversion {
		/// Type the output was expected to have
		expected: &'static str,
		/// Zero-based output position
		position: usize,
	},

	/// The factory itself returned an error.
	#[error(transparent)]
	Factory(BoxError),
}

pub type DiResult<T> = Result<T, DiError>;

/// A factory signature that cannot be adapted into a provider.
///
/// `shape` is the rendered signature of the rejected candidate and `target`
/// the canonical name of the requested result type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShapeError {
	#[error("cannot use {shape} as Factory fn(..) -> ({target}[, error])")]
	NotCallable { shape: String, target: &'static str },

	#[error("cannot use variadic {shape} as Factory fn(..) -> ({target}[, error])")]
	VariadicNotSupported { shape: String, target: &'static str },

	#[error("cannot use {shape} as Factory fn(..) -> ({target}[, error])")]
	UnexpectedSignature { shape: String, target: &'static str },
}
