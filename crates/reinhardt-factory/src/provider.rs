//! Providers
//!
//! A [`Provider<T>`] is the shape a container registers: given the
//! container, produce a `T` or an error. [`to_provider`] builds one from an
//! ordinary function; the function's parameters are looked up in the
//! container each time the provider runs.

use crate::candidate::Output;
use crate::resolver::resolve;
use crate::signature::{Descriptor, validate};
use crate::{Candidate, Container, DiError, DiResult, Factory};
use std::fmt;
use std::sync::Arc;

/// Container-shaped constructor for `T`.
pub struct Provider<T>(Arc<dyn Fn(&dyn Container) -> DiResult<T> + Send + Sync>);

impl<T> Provider<T> {
	/// Wraps a closure as a provider.
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_factory::Provider;
	///
	/// let provider = Provider::new(|_container| Ok(42u32));
	/// ```
	pub fn new<F>(func: F) -> Self
	where
		F: Fn(&dyn Container) -> DiResult<T> + Send + Sync + 'static,
	{
		Self(Arc::new(func))
	}

	/// Builds a value, looking dependencies up in `container`.
	pub fn provide(&self, container: &dyn Container) -> DiResult<T> {
		(self.0)(container)
	}
}

impl<T> Clone for Provider<T> {
	fn clone(&self) -> Self {
		Self(Arc::clone(&self.0))
	}
}

impl<T> fmt::Debug for Provider<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_tuple("Provider").field(&std::any::type_name::<T>()).finish()
	}
}

impl<T: 'static> Descriptor<T> {
	/// Resolves the parameters from `container` and runs the factory.
	pub fn provide<C>(&self, container: &C) -> DiResult<T>
	where
		C: Container + ?Sized,
	{
		let args = resolve(self, container)?;
		let outputs = (self.body())(args)?;
		into_result(outputs, self.is_fallible())
	}
}

/// Maps raw factory outputs onto `DiResult<T>`.
///
/// An output that does not have the declared type is reported as
/// [`DiError::OutputConversion`] rather than replaced by a default value.
fn into_result<T: 'static>(outputs: Vec<Output>, fallible: bool) -> DiResult<T> {
	let mut outputs = outputs.into_iter();
	let value = outputs.next();

	if fallible {
		match outputs.next() {
			Some(Output::Error(None)) => {}
			Some(Output::Error(Some(err))) => {
				tracing::debug!(
					target_type = std::any::type_name::<T>(),
					error = %err,
					"factory returned an error"
				);
				return Err(DiError::Factory(err));
			}
			_ => {
				return Err(DiError::OutputConversion {
					expected: "error",
					position: 1,
				});
			}
		}
	}

	match value {
		Some(Output::Value(value)) => value.downcast::<T>().map(|value| *value).map_err(|_| {
			DiError::OutputConversion {
				expected: std::any::type_name::<T>(),
				position: 0,
			}
		}),
		_ => Err(DiError::OutputConversion {
			expected: std::any::type_name::<T>(),
			position: 0,
		}),
	}
}

fn adapt<T: Send + 'static>(candidate: Candidate) -> Provider<T> {
	let descriptor = match validate::<T>(candidate) {
		Ok(descriptor) => Arc::new(descriptor),
		Err(err) => panic!("{}", err),
	};

	Provider::new(move |container| descriptor.provide(container))
}

/// Adapts a function into a [`Provider<T>`].
///
/// `factory` may take any number of parameters (up to twelve) whose types
/// implement [`Dependency`](crate::Dependency), and must return `T` or
/// `Result<T, E>`. Each parameter is looked up in the container under the
/// canonical name of its type every time the provider runs.
///
/// # Panics
///
/// Panics if the factory shape is rejected by [`validate`]. This is a
/// programming error and is reported when the provider is built, not when it
/// runs.
///
/// # Examples
///
/// ```
/// use reinhardt_factory::{Container, DiError, DiResult, Service, to_provider};
/// use std::sync::Arc;
///
/// struct Names;
///
/// impl Container for Names {
///     fn lookup_named(&self, name: &str) -> DiResult<Option<Service>> {
///         match name {
///             "alloc::string::String" => Ok(Some(Arc::new(String::from("widget")))),
///             _ => Err(DiError::NotFound(name.to_string())),
///         }
///     }
/// }
///
/// fn greeting(name: String) -> Arc<String> {
///     Arc::new(format!("hello {}", name))
/// }
///
/// let provider = to_provider::<Arc<String>, _>(greeting);
/// assert_eq!(*provider.provide(&Names).unwrap(), "hello widget");
/// ```
pub fn to_provider<T, Args>(factory: impl Factory<T, Args>) -> Provider<T>
where
	T: Send + 'static,
{
	adapt(factory.into_candidate())
}

/// Adapts a reflected [`Candidate`] into a [`Provider<T>`].
///
/// # Panics
///
/// Panics with the rejected shape if `candidate` is not an acceptable
/// factory for `T`.
pub fn to_provider_dyn<T>(candidate: Candidate) -> Provider<T>
where
	T: Send + 'static,
{
	adapt(candidate)
}
