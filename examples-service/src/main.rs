//! Registers constructor functions with an injector and resolves them.

use anyhow::Result;
use dofactory::{Injector, to_provider};
use std::fmt;
use std::sync::Arc;

#[derive(Debug)]
struct Service {
	name: String,
}

impl fmt::Display for Service {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "&{{{}}}", self.name)
	}
}

fn new_service(name: String) -> Arc<Service> {
	Arc::new(Service { name })
}

fn new_service_with_error(name: String, with_error: bool) -> Result<Arc<Service>, String> {
	if with_error {
		return Err(String::from("ERROR"));
	}
	Ok(Arc::new(Service { name }))
}

fn plain_factory() -> Result<()> {
	let injector = Injector::builder().name("plain").build();

	// Provide service name
	injector.provide_value(String::from("MyService"))?;

	// Convert factory to provider and register it
	injector.provide(to_provider::<Arc<Service>, _>(new_service))?;

	let service = injector.invoke::<Arc<Service>>()?;
	println!("{}", service.name);
	Ok(())
}

fn fallible_factory() -> Result<()> {
	let injector = Injector::builder().name("fallible").build();

	injector.provide_value(String::from("MyService"))?;
	injector.provide_transient(to_provider::<Arc<Service>, _>(new_service_with_error))?;

	// Register flag, no error
	injector.provide_value(false)?;
	report(injector.invoke::<Arc<Service>>());

	// Set flag, error
	injector.override_value(true);
	report(injector.invoke::<Arc<Service>>());
	Ok(())
}

fn report(result: dofactory::DiResult<Arc<Service>>) {
	match result {
		Ok(service) => println!("{} <nil>", service),
		Err(err) => println!("<nil> {}", err),
	}
}

fn main() -> Result<()> {
	plain_factory()?;
	fallible_factory()?;
	Ok(())
}
