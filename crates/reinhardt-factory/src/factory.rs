//! Typed factories
//!
//! Ordinary functions and closures are lowered into a [`Candidate`] so they
//! go through the same validation and invocation pipeline as reflected
//! callables. The `Args` parameter of [`Factory`] is a marker tuple: its
//! first element says whether the function returns `T` ([`Plain`]) or
//! `Result<T, E>` ([`Fallible`]), the rest are the parameter types. It is
//! always inferred.

use crate::candidate::{Candidate, Output};
use crate::{BoxError, Dependency, DiError, DiResult, Service, canonical_name};
use std::marker::PhantomData;

/// A function usable as a factory for `T`.
pub trait Factory<T, Args>: Send + Sync + Sized + 'static {
	/// Lowers the function into a reflected candidate.
	fn into_candidate(self) -> Candidate;
}

/// Marker for factories returning `T`.
pub enum Plain {}

/// Marker for factories returning `Result<T, E>`.
pub struct Fallible<E>(PhantomData<fn() -> E>);

/// Resolved arguments consumed in declaration order.
struct Arguments {
	values: std::vec::IntoIter<Service>,
	position: usize,
}

impl Arguments {
	fn new(values: Vec<Service>) -> Self {
		Self {
			values: values.into_iter(),
			position: 0,
		}
	}

	fn next<P: Dependency>(&mut self) -> DiResult<P> {
		let position = self.position;
		self.position += 1;

		self.values
			.next()
			.as_ref()
			.and_then(P::from_service)
			.ok_or_else(|| DiError::TypeMismatch {
				name: canonical_name::<P>().to_string(),
				position,
			})
	}
}

macro_rules! impl_factory {
	($($param:ident),*) => {
		impl<F, T, $($param,)*> Factory<T, (Plain, $($param,)*)> for F
		where
			F: Fn($($param),*) -> T + Send + Sync + 'static,
			T: Send + 'static,
			$($param: Dependency,)*
		{
			fn into_candidate(self) -> Candidate {
				Candidate::function()
					$(.param::<$param>())*
					.returns::<T>()
					.body(move |args| {
						#[allow(unused_mut, unused_variables)]
						let mut args = Arguments::new(args);
						$(
							#[allow(non_snake_case)]
							let $param = args.next::<$param>()?;
						)*
						Ok(vec![Output::value((self)($($param),*))])
					})
			}
		}

		impl<F, T, E, $($param,)*> Factory<T, (Fallible<E>, $($param,)*)> for F
		where
			F: Fn($($param),*) -> Result<T, E> + Send + Sync + 'static,
			T: Send + 'static,
			E: Into<BoxError> + 'static,
			$($param: Dependency,)*
		{
			fn into_candidate(self) -> Candidate {
				Candidate::function()
					$(.param::<$param>())*
					.returns::<T>()
					.returns_error::<E>()
					.body(move |args| {
						#[allow(unused_mut, unused_variables)]
						let mut args = Arguments::new(args);
						$(
							#[allow(non_snake_case)]
							let $param = args.next::<$param>()?;
						)*
						Ok(match (self)($($param),*) {
							Ok(value) => vec![Output::value(value), Output::no_error()],
							Err(err) => vec![Output::Nil, Output::error(err)],
						})
					})
			}
		}
	};
}

impl_factory!();
impl_factory!(A1);
impl_factory!(A1, A2);
impl_factory!(A1, A2, A3);
impl_factory!(A1, A2, A3, A4);
impl_factory!(A1, A2, A3, A4, A5);
impl_factory!(A1, A2, A3, A4, A5, A6);
impl_factory!(A1, A2, A3, A4, A5, A6, A7);
impl_factory!(A1, A2, A3, A4, A5, A6, A7, A8);
impl_factory!(A1, A2, A3, A4, A5, A6, A7, A8, A9);
impl_factory!(A1, A2, A3, A4, A5, A6, A7, A8, A9, A10);
impl_factory!(A1, A2, A3, A4, A5, A6, A7, A8, A9, A10, A11);
impl_factory!(A1, A2, A3, A4, A5, A6, A7, A8, A9, A10, A11, A12);
