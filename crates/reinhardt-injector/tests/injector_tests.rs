//! Injector integration tests
//!
//! These tests verify that:
//! 1. Factories registered through `to_provider` resolve their parameters
//!    from the injector
//! 2. Transient registrations observe overridden inputs
//! 3. Lookup failures inside a provider reach the caller unchanged
//! 4. Lazy singletons are built once under concurrent first use

use reinhardt_factory::{Dependency, DiError, to_provider};
use reinhardt_injector::Injector;
use rstest::*;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;

#[derive(Debug, PartialEq)]
struct Service {
	name: String,
}

#[derive(Clone, Debug, PartialEq)]
struct Label(String);

impl Dependency for Label {}

#[fixture]
fn injector() -> Injector {
	Injector::builder().name("integration").build()
}

#[rstest]
fn test_values_of_every_shape(injector: Injector) {
	// Arrange
	injector.provide(to_provider::<i32, _>(|| 1)).unwrap();
	injector
		.provide(to_provider::<String, _>(|| String::from("A")))
		.unwrap();
	injector
		.provide(to_provider::<i64, _>(|| Ok::<_, DiError>(2)))
		.unwrap();
	injector
		.provide(to_provider::<Label, _>(|| {
			Ok::<_, std::io::Error>(Label(String::from("label")))
		}))
		.unwrap();

	// Act & Assert
	assert_eq!(injector.invoke::<i32>().unwrap(), 1);
	assert_eq!(injector.invoke::<String>().unwrap(), "A");
	assert_eq!(injector.invoke::<i64>().unwrap(), 2);
	assert_eq!(
		injector.invoke::<Label>().unwrap(),
		Label(String::from("label"))
	);
}

#[rstest]
fn test_factory_error_is_returned(injector: Injector) {
	// Arrange
	injector
		.provide(to_provider::<Label, _>(|| Err::<Label, _>("expected error")))
		.unwrap();

	// Act
	let err = injector.invoke::<Label>().unwrap_err();

	// Assert
	assert_eq!(err.to_string(), "expected error");
}

#[rstest]
fn test_missing_parameter_reaches_caller(injector: Injector) {
	// Arrange
	let calls = Arc::new(AtomicUsize::new(0));
	let counter = Arc::clone(&calls);
	injector
		.provide(to_provider::<String, _>(move |label: Label| {
			counter.fetch_add(1, Ordering::SeqCst);
			label.0
		}))
		.unwrap();

	// Act
	let err = injector.invoke::<String>().unwrap_err();

	// Assert
	assert!(matches!(err, DiError::NotFound(ref name) if name.ends_with("Label")));
	assert!(err.to_string().contains("could not find service"));
	assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[rstest]
fn test_transient_sees_absent_then_overridden_input(injector: Injector) {
	// Arrange
	injector
		.provide_transient(to_provider::<String, _>(|label: Option<Arc<Label>>| {
			label.map_or_else(|| String::from("<nil>"), |label| label.0.clone())
		}))
		.unwrap();
	injector.provide_absent::<Option<Arc<Label>>>().unwrap();

	// Act
	let before = injector.invoke::<String>().unwrap();
	injector.override_value(Some(Arc::new(Label(String::from("set")))));
	let after = injector.invoke::<String>().unwrap();

	// Assert
	assert_eq!(before, "<nil>");
	assert_eq!(after, "set");
}

#[rstest]
fn test_service_example_scenarios(injector: Injector) {
	// Arrange
	fn new_service(name: String, fail: bool) -> Result<Arc<Service>, String> {
		if fail {
			return Err(String::from("ERROR"));
		}
		Ok(Arc::new(Service { name }))
	}
	injector.provide_value(String::from("MyService")).unwrap();
	injector.provide_value(false).unwrap();
	injector
		.provide_transient(to_provider::<Arc<Service>, _>(new_service))
		.unwrap();

	// Act
	let ok = injector.invoke::<Arc<Service>>();
	injector.override_value(true);
	let failed = injector.invoke::<Arc<Service>>();

	// Assert
	assert_eq!(ok.unwrap().name, "MyService");
	assert_eq!(failed.unwrap_err().to_string(), "ERROR");
}

#[rstest]
fn test_lazy_singleton_is_built_once_across_threads() {
	// Arrange
	let injector = Arc::new(Injector::new());
	let calls = Arc::new(AtomicUsize::new(0));
	let counter = Arc::clone(&calls);
	injector
		.provide(to_provider::<Arc<Service>, _>(move || {
			counter.fetch_add(1, Ordering::SeqCst);
			Arc::new(Service {
				name: String::from("shared"),
			})
		}))
		.unwrap();

	// Act
	let handles = (0..8)
		.map(|_| {
			let injector = Arc::clone(&injector);
			thread::spawn(move || injector.invoke::<Arc<Service>>().unwrap())
		})
		.collect::<Vec<_>>();
	let services = handles
		.into_iter()
		.map(|handle| handle.join().unwrap())
		.collect::<Vec<_>>();

	// Assert
	assert_eq!(calls.load(Ordering::SeqCst), 1);
	for service in &services[1..] {
		assert!(Arc::ptr_eq(&services[0], service));
	}
}
