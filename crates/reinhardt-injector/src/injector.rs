//! Name-keyed service container

use crate::registration::{Registration, erase};
use parking_lot::RwLock;
use reinhardt_factory::{
	Container, Dependency, DiError, DiResult, Provider, Service, canonical_name,
};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

const DEFAULT_NAME: &str = "root";

/// Service container keyed by canonical type name.
///
/// Every registration lives under a name, by default the
/// [`canonical_name`] of the registered type. Providers are run with the
/// injector itself as their [`Container`], so their parameters are looked up
/// here as well.
///
/// The registry lock is never held while a provider runs. Dependency cycles
/// are not detected: a lazy service that depends on itself, directly or
/// not, blocks forever on its own initialization.
///
/// # Examples
///
/// ```
/// use reinhardt_factory::to_provider;
/// use reinhardt_injector::Injector;
/// use std::sync::Arc;
///
/// struct Service {
///     name: String,
/// }
///
/// fn new_service(name: String) -> Arc<Service> {
///     Arc::new(Service { name })
/// }
///
/// let injector = Injector::new();
/// injector.provide_value(String::from("MyService")).unwrap();
/// injector.provide(to_provider::<Arc<Service>, _>(new_service)).unwrap();
///
/// let service = injector.invoke::<Arc<Service>>().unwrap();
/// assert_eq!(service.name, "MyService");
/// ```
pub struct Injector {
	name: String,
	services: RwLock<HashMap<String, Arc<Registration>>>,
}

impl Injector {
	/// Creates an injector named `root`.
	pub fn new() -> Self {
		Self::builder().build()
	}

	/// Creates a builder for fluent configuration
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_injector::Injector;
	///
	/// let injector = Injector::builder().name("request").build();
	/// assert_eq!(injector.name(), "request");
	/// ```
	pub fn builder() -> InjectorBuilder {
		InjectorBuilder::default()
	}

	/// Name used to identify this injector in logs.
	pub fn name(&self) -> &str {
		&self.name
	}

	/// Registers `provider` as a lazy singleton for `T`.
	///
	/// The provider runs on the first lookup; its value is shared by every
	/// later lookup. A failed build is not cached.
	pub fn provide<T>(&self, provider: Provider<T>) -> DiResult<()>
	where
		T: Send + Sync + 'static,
	{
		self.declare(canonical_name::<T>(), Registration::lazy(erase(provider)))
	}

	/// Registers `provider` for `T`, run again on every lookup.
	pub fn provide_transient<T>(&self, provider: Provider<T>) -> DiResult<()>
	where
		T: Send + Sync + 'static,
	{
		self.declare(canonical_name::<T>(), Registration::Transient(erase(provider)))
	}

	/// Registers an already built value for `T`.
	pub fn provide_value<T>(&self, value: T) -> DiResult<()>
	where
		T: Send + Sync + 'static,
	{
		self.declare(canonical_name::<T>(), Registration::Value(Some(Arc::new(value))))
	}

	/// Registers a value under an explicit name instead of its type name.
	pub fn provide_named_value<T>(&self, name: impl Into<String>, value: T) -> DiResult<()>
	where
		T: Send + Sync + 'static,
	{
		self.declare(name, Registration::Value(Some(Arc::new(value))))
	}

	/// Registers an explicit "no value" for `T`.
	///
	/// Factories taking `T` then receive its [`Dependency::zero`] value.
	pub fn provide_absent<T: ?Sized + 'static>(&self) -> DiResult<()> {
		self.declare(canonical_name::<T>(), Registration::Value(None))
	}

	/// Replaces the registration for `T` with `value`, or creates it.
	pub fn override_value<T>(&self, value: T)
	where
		T: Send + Sync + 'static,
	{
		self.replace(canonical_name::<T>(), Registration::Value(Some(Arc::new(value))));
	}

	/// Replaces the registration for `T` with an explicit "no value".
	pub fn override_absent<T: ?Sized + 'static>(&self) {
		self.replace(canonical_name::<T>(), Registration::Value(None));
	}

	/// Replaces the registration for `T` with a lazy `provider`.
	pub fn override_provider<T>(&self, provider: Provider<T>)
	where
		T: Send + Sync + 'static,
	{
		self.replace(canonical_name::<T>(), Registration::lazy(erase(provider)));
	}

	/// Looks up `T` under its canonical name.
	///
	/// An explicit "no value" yields `T`'s zero value, or
	/// [`DiError::Absent`] when `T` has none.
	pub fn invoke<T: Dependency>(&self) -> DiResult<T> {
		self.invoke_named(canonical_name::<T>())
	}

	/// Looks up `T` under an explicit name.
	pub fn invoke_named<T: Dependency>(&self, name: &str) -> DiResult<T> {
		match self.lookup_named(name)? {
			Some(service) => T::from_service(&service).ok_or_else(|| DiError::TypeMismatch {
				name: name.to_string(),
				position: 0,
			}),
			None => T::zero().ok_or_else(|| DiError::Absent(name.to_string())),
		}
	}

	/// Whether anything is registered under `name`.
	pub fn is_provided(&self, name: &str) -> bool {
		self.services.read().contains_key(name)
	}

	/// Registered names, sorted.
	pub fn services(&self) -> Vec<String> {
		let mut names = self.services.read().keys().cloned().collect::<Vec<_>>();
		names.sort();
		names
	}

	fn declare(&self, name: impl Into<String>, registration: Registration) -> DiResult<()> {
		let name = name.into();
		let mut services = self.services.write();

		if services.contains_key(&name) {
			return Err(DiError::AlreadyDeclared(name));
		}

		tracing::trace!(
			injector = %self.name,
			service = %name,
			kind = registration.kind(),
			"service registered"
		);
		services.insert(name, Arc::new(registration));
		Ok(())
	}

	fn replace(&self, name: &str, registration: Registration) {
		tracing::trace!(
			injector = %self.name,
			service = name,
			kind = registration.kind(),
			"service overridden"
		);
		self.services
			.write()
			.insert(name.to_string(), Arc::new(registration));
	}
}

impl Container for Injector {
	fn lookup_named(&self, name: &str) -> DiResult<Option<Service>> {
		let registration = self.services.read().get(name).cloned();

		let Some(registration) = registration else {
			tracing::debug!(injector = %self.name, service = name, "service not found");
			return Err(DiError::NotFound(name.to_string()));
		};

		tracing::trace!(
			injector = %self.name,
			service = name,
			kind = registration.kind(),
			"service lookup"
		);
		registration.resolve(self)
	}
}

impl Default for Injector {
	fn default() -> Self {
		Self::new()
	}
}

impl fmt::Debug for Injector {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Injector")
			.field("name", &self.name)
			.field("services", &self.services())
			.finish()
	}
}

/// Builder for [`Injector`]
#[derive(Debug, Default)]
pub struct InjectorBuilder {
	name: Option<String>,
}

impl InjectorBuilder {
	/// Set the name reported in logs
	pub fn name(mut self, name: impl Into<String>) -> Self {
		self.name = Some(name.into());
		self
	}

	/// Build the injector
	pub fn build(self) -> Injector {
		Injector {
			name: self.name.unwrap_or_else(|| DEFAULT_NAME.to_string()),
			services: RwLock::new(HashMap::new()),
		}
	}
}
