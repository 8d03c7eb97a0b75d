//! Registration kinds

use once_cell::sync::OnceCell;
use reinhardt_factory::{Container, DiResult, Provider, Service};
use std::fmt;
use std::sync::Arc;

/// What the injector holds under one name.
pub(crate) enum Registration {
	/// An eager value; `None` is an explicit "no value".
	Value(Option<Service>),
	/// Built on first lookup, then shared.
	Lazy {
		provider: Provider<Service>,
		instance: OnceCell<Service>,
	},
	/// Built on every lookup.
	Transient(Provider<Service>),
}

impl Registration {
	pub(crate) fn lazy(provider: Provider<Service>) -> Self {
		Self::Lazy {
			provider,
			instance: OnceCell::new(),
		}
	}

	/// Produces the registered value.
	///
	/// A failed lazy build is not cached; the next lookup runs the provider
	/// again.
	pub(crate) fn resolve(&self, container: &dyn Container) -> DiResult<Option<Service>> {
		match self {
			Self::Value(value) => Ok(value.clone()),
			Self::Lazy { provider, instance } => instance
				.get_or_try_init(|| provider.provide(container))
				.map(|service| Some(Arc::clone(service))),
			Self::Transient(provider) => provider.provide(container).map(Some),
		}
	}

	pub(crate) fn kind(&self) -> &'static str {
		match self {
			Self::Value(Some(_)) => "value",
			Self::Value(None) => "absent",
			Self::Lazy { .. } => "lazy",
			Self::Transient(_) => "transient",
		}
	}
}

impl fmt::Debug for Registration {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Lazy { instance, .. } => f
				.debug_struct("Lazy")
				.field("initialized", &instance.get().is_some())
				.finish(),
			other => f.write_str(other.kind()),
		}
	}
}

/// Erases the output type of `provider`.
pub(crate) fn erase<T>(provider: Provider<T>) -> Provider<Service>
where
	T: Send + Sync + 'static,
{
	Provider::new(move |container| {
		provider
			.provide(container)
			.map(|value| Arc::new(value) as Service)
	})
}
