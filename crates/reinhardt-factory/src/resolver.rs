//! Parameter resolution
//!
//! Each parameter is looked up by its canonical name, strictly left to
//! right. The first failing lookup aborts resolution; later positions are
//! never asked for.

use crate::{Container, DiError, DiResult, Service, signature::Descriptor};

/// Resolves every parameter of `descriptor` against `container`.
///
/// A registration that explicitly holds no value is replaced by the zero
/// value of the parameter's type. Values are passed through untouched
/// otherwise; they are checked against the declared type when the factory is
/// invoked.
pub fn resolve<T, C>(descriptor: &Descriptor<T>, container: &C) -> DiResult<Vec<Service>>
where
	C: Container + ?Sized,
{
	let mut args = Vec::with_capacity(descriptor.arity());

	for (position, param) in descriptor.params().iter().enumerate() {
		let name = param.name();

		let found = container.lookup_named(name).map_err(|e| {
			tracing::debug!(
				parameter = name,
				position,
				error = %e,
				"factory parameter resolution failed"
			);
			e
		})?;

		let value = match found {
			Some(service) => service,
			None => param.zero().ok_or_else(|| DiError::Absent(name.to_string()))?,
		};

		tracing::trace!(parameter = name, position, "factory parameter resolved");
		args.push(value);
	}

	Ok(args)
}
