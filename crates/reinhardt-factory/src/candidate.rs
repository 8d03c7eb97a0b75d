//! Reflected factory shapes
//!
//! A [`Candidate`] is what the validator inspects: either a plain value (not
//! callable) or a function described by its parameter types, its return
//! types and a type-erased body. Typed Rust functions are lowered into a
//! candidate by [`Factory`](crate::Factory); callables that only exist at
//! runtime (plugins, scripted hooks) describe themselves through
//! [`Candidate::function`].

use crate::{BoxError, Dependency, DiResult, Service, TypeName};
use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// Type-erased function body: takes resolved arguments, returns raw outputs.
pub type Body = Arc<dyn Fn(Vec<Service>) -> DiResult<Vec<Output>> + Send + Sync>;

/// One raw output of an invoked factory.
pub enum Output {
	/// A returned value
	Value(Box<dyn Any + Send>),
	/// The nil-equivalent value returned next to an error
	Nil,
	/// The error-shaped output; `None` means "no error"
	Error(Option<BoxError>),
}

impl Output {
	/// A produced value.
	pub fn value<T: Send + 'static>(value: T) -> Self {
		Self::Value(Box::new(value))
	}

	/// A returned, non-nil error.
	pub fn error(error: impl Into<BoxError>) -> Self {
		Self::Error(Some(error.into()))
	}

	/// The nil error returned next to a value.
	pub fn no_error() -> Self {
		Self::Error(None)
	}
}

impl fmt::Debug for Output {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Value(_) => f.write_str("Value(..)"),
			Self::Nil => f.write_str("Nil"),
			Self::Error(err) => f.debug_tuple("Error").field(err).finish(),
		}
	}
}

/// A parameter position: its type and how to build its zero value.
#[derive(Clone, Copy)]
pub struct Parameter {
	ty: TypeName,
	zero: fn() -> Option<Service>,
}

impl Parameter {
	/// Describes a parameter of type `P`.
	pub fn of<P: Dependency>() -> Self {
		Self {
			ty: TypeName::of::<P>(),
			zero: zero_service::<P>,
		}
	}

	/// Type of the parameter.
	pub fn ty(&self) -> TypeName {
		self.ty
	}

	/// Canonical name the parameter is looked up under.
	pub fn name(&self) -> &'static str {
		self.ty.canonical()
	}

	/// Zero value of the parameter type, if it has one.
	pub fn zero(&self) -> Option<Service> {
		(self.zero)()
	}
}

impl fmt::Debug for Parameter {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_tuple("Parameter").field(&self.ty).finish()
	}
}

fn zero_service<P: Dependency>() -> Option<Service> {
	P::zero().map(|value| Arc::new(value) as Service)
}

/// A declared return type.
#[derive(Debug, Clone, Copy)]
pub struct ReturnType {
	ty: TypeName,
	error: bool,
}

impl ReturnType {
	/// Describes a plain return type `R`.
	pub fn of<R: ?Sized + 'static>() -> Self {
		Self {
			ty: TypeName::of::<R>(),
			error: false,
		}
	}

	/// A return type that can describe itself as an error.
	pub fn error<E: Into<BoxError> + 'static>() -> Self {
		Self {
			ty: TypeName::of::<E>(),
			error: true,
		}
	}

	/// The returned type.
	pub fn ty(&self) -> TypeName {
		self.ty
	}

	/// Whether this position carries the error.
	pub fn is_error(&self) -> bool {
		self.error
	}
}

/// A callable candidate.
pub struct Function {
	params: Vec<Parameter>,
	variadic: bool,
	returns: Vec<ReturnType>,
	body: Body,
}

impl Function {
	/// Parameters in declaration order.
	pub fn params(&self) -> &[Parameter] {
		&self.params
	}

	/// Whether the last parameter accepts a variable number of arguments.
	pub fn is_variadic(&self) -> bool {
		self.variadic
	}

	/// Return types in declaration order.
	pub fn returns(&self) -> &[ReturnType] {
		&self.returns
	}

	pub(crate) fn into_parts(self) -> (Vec<Parameter>, Body) {
		(self.params, self.body)
	}

	fn shape(&self) -> String {
		let last = self.params.len().saturating_sub(1);
		let params = self
			.params
			.iter()
			.enumerate()
			.map(|(i, param)| {
				if self.variadic && i == last {
					format!("...{}", param.ty)
				} else {
					param.ty.to_string()
				}
			})
			.collect::<Vec<_>>()
			.join(", ");

		let returns = self
			.returns
			.iter()
			.map(|ret| ret.ty.to_string())
			.collect::<Vec<_>>();

		match returns.as_slice() {
			[] => format!("fn({})", params),
			[single] => format!("fn({}) -> {}", params, single),
			many => format!("fn({}) -> ({})", params, many.join(", ")),
		}
	}
}

impl fmt::Debug for Function {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.shape())
	}
}

/// Something offered as a factory.
#[derive(Debug)]
pub enum Candidate {
	/// A non-callable value of the given type
	Value(TypeName),
	Function(Function),
}

impl Candidate {
	/// Describes a non-callable value.
	pub fn value<V: ?Sized + 'static>() -> Self {
		Self::Value(TypeName::of::<V>())
	}

	/// Starts describing a callable.
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_factory::{Candidate, Output};
	///
	/// let candidate = Candidate::function()
	///     .param::<u32>()
	///     .returns::<String>()
	///     .body(|_args| Ok(vec![Output::value(String::from("ok"))]));
	///
	/// assert_eq!(candidate.shape(), "fn(u32) -> alloc::string::String");
	/// ```
	pub fn function() -> FunctionBuilder {
		FunctionBuilder::default()
	}

	/// Renders the candidate's signature for diagnostics.
	pub fn shape(&self) -> String {
		match self {
			Self::Value(ty) => ty.to_string(),
			Self::Function(function) => function.shape(),
		}
	}
}

/// Builder for [`Candidate::Function`].
#[derive(Debug, Default)]
pub struct FunctionBuilder {
	params: Vec<Parameter>,
	variadic: bool,
	returns: Vec<ReturnType>,
}

impl FunctionBuilder {
	/// Adds a parameter of type `P`.
	pub fn param<P: Dependency>(mut self) -> Self {
		self.params.push(Parameter::of::<P>());
		self
	}

	/// Adds a trailing parameter accepting any number of `P`.
	pub fn variadic<P: Dependency>(mut self) -> Self {
		self.params.push(Parameter::of::<P>());
		self.variadic = true;
		self
	}

	/// Adds a return type `R`.
	pub fn returns<R: ?Sized + 'static>(mut self) -> Self {
		self.returns.push(ReturnType::of::<R>());
		self
	}

	/// Adds an error return type `E`.
	pub fn returns_error<E: Into<BoxError> + 'static>(mut self) -> Self {
		self.returns.push(ReturnType::error::<E>());
		self
	}

	/// Finishes the function with the body run on invocation.
	pub fn body<F>(self, body: F) -> Candidate
	where
		F: Fn(Vec<Service>) -> DiResult<Vec<Output>> + Send + Sync + 'static,
	{
		Candidate::Function(Function {
			params: self.params,
			variadic: self.variadic,
			returns: self.returns,
			body: Arc::new(body),
		})
	}
}
