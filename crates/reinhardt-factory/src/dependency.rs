//! Factory parameter types

use crate::Service;
use std::sync::Arc;

/// A type that can be passed to a factory as a parameter.
///
/// A parameter is extracted by cloning the container's value out of the
/// [`Service`] handle. When a registration explicitly holds no value, the
/// parameter receives its [`zero`](Dependency::zero) value instead. Types
/// without a meaningful "no value" form (the default) make such a lookup fail.
///
/// Implemented for primitives, `String` and `&'static str` (zero is the
/// `Default` value), `Option<T>` (zero is `None`), `Vec<T>` (zero is empty),
/// `Arc<T>` and `Box<T>` (no zero). Application types opt in with an empty
/// impl:
///
/// ```
/// use reinhardt_factory::Dependency;
///
/// #[derive(Clone)]
/// struct Settings {
///     debug: bool,
/// }
///
/// impl Dependency for Settings {}
/// ```
pub trait Dependency: Clone + Send + Sync + 'static {
	fn from_service(service: &Service) -> Option<Self> {
		(**service).downcast_ref::<Self>().cloned()
	}

	/// Value passed when the container holds an explicit "no value".
	fn zero() -> Option<Self> {
		None
	}
}

macro_rules! impl_dependency_with_default_zero {
	($($ty:ty),* $(,)?) => {
		$(
			impl Dependency for $ty {
				fn zero() -> Option<Self> {
					Some(<$ty>::default())
				}
			}
		)*
	};
}

impl_dependency_with_default_zero! {
	(), bool, char,
	i8, i16, i32, i64, i128, isize,
	u8, u16, u32, u64, u128, usize,
	f32, f64,
	String,
	&'static str,
}

impl<T: Dependency> Dependency for Option<T> {
	fn zero() -> Option<Self> {
		Some(None)
	}
}

impl<T: Clone + Send + Sync + 'static> Dependency for Vec<T> {
	fn zero() -> Option<Self> {
		Some(Vec::new())
	}
}

impl<T: ?Sized + Send + Sync + 'static> Dependency for Arc<T> {}

impl<T: Clone + Send + Sync + 'static> Dependency for Box<T> {}
