//! Factory signature validation
//!
//! A factory is accepted when it is callable, not variadic, and returns
//! either exactly `T` or `T` followed by an error-shaped value. Anything else
//! is a programming error reported with the rejected shape spelled out.

use crate::candidate::{Body, Candidate, Parameter};
use crate::{ShapeError, canonical_name};
use std::fmt;
use std::marker::PhantomData;

/// A factory whose shape has been checked against result type `T`.
///
/// Built once by [`validate`] and read-only afterwards; any number of
/// provider invocations may share it.
pub struct Descriptor<T> {
	body: Body,
	params: Vec<Parameter>,
	names: Vec<&'static str>,
	fallible: bool,
	shape: String,
	_target: PhantomData<fn() -> T>,
}

impl<T> Descriptor<T> {
	pub(crate) fn body(&self) -> &Body {
		&self.body
	}

	/// Parameters in declaration order.
	pub fn params(&self) -> &[Parameter] {
		&self.params
	}

	/// Canonical parameter names, in declaration order.
	pub fn parameter_names(&self) -> &[&'static str] {
		&self.names
	}

	/// Number of parameters.
	pub fn arity(&self) -> usize {
		self.names.len()
	}

	/// Whether the factory returns an error next to its value.
	pub fn is_fallible(&self) -> bool {
		self.fallible
	}

	/// Rendered signature, as shown in diagnostics.
	pub fn shape(&self) -> &str {
		&self.shape
	}
}

impl<T: 'static> fmt::Debug for Descriptor<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Descriptor")
			.field("shape", &self.shape)
			.field("target", &canonical_name::<T>())
			.field("parameters", &self.names)
			.field("fallible", &self.fallible)
			.finish()
	}
}

/// Checks `candidate` against the factory contract for result type `T`.
///
/// Checks run in a fixed order: callable, then non-variadic, then the return
/// shape. The first failing check decides the error.
///
/// # Examples
///
/// ```
/// use reinhardt_factory::{Candidate, ShapeError, validate};
///
/// let err = validate::<u32>(Candidate::value::<i32>()).unwrap_err();
/// assert!(matches!(err, ShapeError::NotCallable { .. }));
/// assert_eq!(err.to_string(), "cannot use i32 as Factory fn(..) -> (u32[, error])");
/// ```
pub fn validate<T: 'static>(candidate: Candidate) -> Result<Descriptor<T>, ShapeError> {
	let target = canonical_name::<T>();
	let shape = candidate.shape();

	let function = match candidate {
		Candidate::Value(_) => return Err(ShapeError::NotCallable { shape, target }),
		Candidate::Function(function) => function,
	};

	if function.is_variadic() {
		return Err(ShapeError::VariadicNotSupported { shape, target });
	}

	let fallible = match function.returns() {
		[value] if value.ty().is::<T>() => false,
		[value, error] if value.ty().is::<T>() && error.is_error() => true,
		_ => return Err(ShapeError::UnexpectedSignature { shape, target }),
	};

	let (params, body) = function.into_parts();
	let names = params.iter().map(Parameter::name).collect::<Vec<_>>();

	tracing::debug!(
		factory = %shape,
		target,
		parameters = names.len(),
		fallible,
		"factory validated"
	);

	Ok(Descriptor {
		body,
		params,
		names,
		fallible,
		shape,
		_target: PhantomData,
	})
}

#[cfg(test)]
pub(crate) fn descriptor_for_tests<T>(
	params: Vec<Parameter>,
	fallible: bool,
	body: Body,
) -> Descriptor<T> {
	let names = params.iter().map(Parameter::name).collect();
	Descriptor {
		body,
		params,
		names,
		fallible,
		shape: "fn(..)".to_string(),
		_target: PhantomData,
	}
}
