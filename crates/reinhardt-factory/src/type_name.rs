//! Canonical type names
//!
//! Parameters are resolved by name: the name of a parameter's type is the
//! key the container is asked for. The name is the fully qualified path
//! reported by [`std::any::type_name`], so it keeps every distinction that
//! matters for lookup:
//!
//! - newtypes and aliases-by-struct are distinct from their inner type
//! - `Arc<T>`, `Box<T>`, `&T` and `Option<T>` are distinct from `T`
//! - `dyn Any + Send + Sync` has its own name
//! - generic types carry their full argument list
//!
//! The path alone is not unique: two types declared in sibling blocks of one
//! function report the same path. Names are therefore interned per
//! [`TypeId`]. The first type to claim a path keeps it as is; every later
//! type with the same path gets `#2`, `#3`, ... appended. `#` never occurs
//! in a Rust path, so a suffixed name cannot collide with a real one.
//!
//! [`TypeName`] pairs the name with the [`TypeId`], which is what equality
//! and hashing use. Values crossing a name-keyed lookup are always checked
//! against the `TypeId` before they reach a factory.

use once_cell::sync::Lazy;
use parking_lot::RwLock;
use std::any::TypeId;
use std::collections::HashMap;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Interned names, shared by the whole process.
static NAMES: Lazy<RwLock<Names>> = Lazy::new(|| RwLock::new(Names::default()));

#[derive(Default)]
struct Names {
	by_id: HashMap<TypeId, &'static str>,
	claims: HashMap<&'static str, usize>,
}

fn intern(id: TypeId, path: &'static str) -> &'static str {
	if let Some(name) = NAMES.read().by_id.get(&id).copied() {
		return name;
	}

	let mut guard = NAMES.write();
	let names = &mut *guard;
	if let Some(name) = names.by_id.get(&id).copied() {
		return name;
	}

	let claims = names.claims.entry(path).or_insert(0);
	*claims += 1;
	let name: &'static str = if *claims == 1 {
		path
	} else {
		// Bounded by the number of distinct types sharing a path.
		Box::leak(format!("{}#{}", path, claims).into_boxed_str())
	};
	names.by_id.insert(id, name);
	name
}

/// Reflected descriptor of a `'static` type.
#[derive(Clone, Copy)]
pub struct TypeName {
	id: TypeId,
	name: &'static str,
}

impl TypeName {
	/// Describes `T`.
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_factory::TypeName;
	/// use std::sync::Arc;
	///
	/// assert_eq!(TypeName::of::<u8>(), TypeName::of::<u8>());
	/// assert_ne!(TypeName::of::<u8>(), TypeName::of::<Arc<u8>>());
	/// ```
	pub fn of<T: ?Sized + 'static>() -> Self {
		let id = TypeId::of::<T>();
		Self {
			id,
			name: intern(id, std::any::type_name::<T>()),
		}
	}

	/// Identity of the described type.
	pub fn id(&self) -> TypeId {
		self.id
	}

	/// Canonical name used as the lookup key.
	pub fn canonical(&self) -> &'static str {
		self.name
	}

	/// Whether this describes `T`.
	pub fn is<T: ?Sized + 'static>(&self) -> bool {
		self.id == TypeId::of::<T>()
	}
}

impl PartialEq for TypeName {
	fn eq(&self, other: &Self) -> bool {
		self.id == other.id
	}
}

impl Eq for TypeName {}

impl Hash for TypeName {
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.id.hash(state);
	}
}

impl fmt::Debug for TypeName {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_tuple("TypeName").field(&self.name).finish()
	}
}

impl fmt::Display for TypeName {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name)
	}
}

/// Returns the canonical lookup name of `T`.
///
/// # Examples
///
/// ```
/// use reinhardt_factory::canonical_name;
///
/// assert_eq!(canonical_name::<String>(), canonical_name::<String>());
/// assert_ne!(canonical_name::<String>(), canonical_name::<Option<String>>());
/// ```
pub fn canonical_name<T: ?Sized + 'static>() -> &'static str {
	TypeName::of::<T>().canonical()
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use std::any::Any;
	use std::sync::Arc;

	#[derive(Clone)]
	struct Label(String);

	#[derive(Clone)]
	struct Title(String);

	type LabelAlias = Label;

	#[rstest]
	fn test_alias_resolves_to_the_aliased_type() {
		// Act & Assert
		assert_eq!(canonical_name::<LabelAlias>(), canonical_name::<Label>());
		assert_eq!(TypeName::of::<LabelAlias>(), TypeName::of::<Label>());
	}

	#[rstest]
	fn test_same_structure_different_names_are_distinct() {
		// Act
		let label = canonical_name::<Label>();
		let title = canonical_name::<Title>();

		// Assert
		assert_ne!(label, title);
		assert_ne!(label, canonical_name::<String>());
		assert!(label.ends_with("Label"));
	}

	#[rstest]
	fn test_pointer_and_value_are_distinct() {
		// Act
		let names = [
			canonical_name::<Label>(),
			canonical_name::<Arc<Label>>(),
			canonical_name::<Box<Label>>(),
			canonical_name::<&'static Label>(),
			canonical_name::<Option<Label>>(),
		];

		// Assert
		for (i, a) in names.iter().enumerate() {
			for b in &names[i + 1..] {
				assert_ne!(a, b);
			}
		}
	}

	#[rstest]
	fn test_any_has_its_own_name() {
		// Act
		let any = canonical_name::<dyn Any + Send + Sync>();

		// Assert
		assert!(any.contains("Any"));
		assert_ne!(any, canonical_name::<dyn Any>());
		assert_ne!(
			canonical_name::<Arc<dyn Any + Send + Sync>>(),
			canonical_name::<Arc<Label>>()
		);
	}

	#[rstest]
	fn test_types_sharing_a_path_get_distinct_names() {
		// Arrange
		let first = {
			struct Key;
			TypeName::of::<Key>()
		};
		let second = {
			struct Key;
			TypeName::of::<Key>()
		};

		// Act
		let names = [first.canonical(), second.canonical()];

		// Assert
		assert_ne!(first, second);
		assert_ne!(names[0], names[1]);
		assert!(names.iter().all(|name| name.contains("Key")));
		assert_eq!(names.iter().filter(|name| name.ends_with("#2")).count(), 1);
	}

	#[rstest]
	fn test_name_is_interned_once_per_type() {
		// Arrange
		struct Key;

		// Act
		let first = canonical_name::<Key>();
		let second = canonical_name::<Key>();

		// Assert
		assert!(std::ptr::eq(first, second));
		assert_eq!(first, std::any::type_name::<Key>());
	}

	#[rstest]
	fn test_display_and_debug_show_the_name() {
		// Arrange
		let ty = TypeName::of::<u64>();

		// Act & Assert
		assert_eq!(ty.to_string(), "u64");
		assert_eq!(format!("{:?}", ty), "TypeName(\"u64\")");
		assert!(ty.is::<u64>());
		assert!(!ty.is::<u32>());
	}
}
