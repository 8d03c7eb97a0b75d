//! Container boundary
//!
//! The adapter never looks inside a container. It only needs to ask for a
//! service by canonical name, which is what [`Container`] expresses.

use crate::DiResult;
use std::any::Any;
use std::sync::Arc;

/// Type-erased service value held by a container.
pub type Service = Arc<dyn Any + Send + Sync>;

/// Named service lookup.
///
/// Implementations return:
///
/// - `Ok(Some(service))` when a value is registered under `name`
/// - `Ok(None)` when the registration explicitly holds no value
/// - `Err(_)` when nothing is registered or the container itself failed
pub trait Container {
	fn lookup_named(&self, name: &str) -> DiResult<Option<Service>>;
}

impl<C: Container + ?Sized> Container for &C {
	fn lookup_named(&self, name: &str) -> DiResult<Option<Service>> {
		(**self).lookup_named(name)
	}
}

impl<C: Container + ?Sized> Container for Arc<C> {
	fn lookup_named(&self, name: &str) -> DiResult<Option<Service>> {
		(**self).lookup_named(name)
	}
}
