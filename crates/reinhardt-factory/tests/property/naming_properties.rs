use proptest::prelude::*;
use reinhardt_factory::{TypeName, canonical_name};
use std::any::Any;
use std::sync::Arc;

#[derive(Clone)]
#[allow(dead_code)]
struct Widget(u32);

#[derive(Clone)]
#[allow(dead_code)]
struct Gadget(u32);

fn table() -> Vec<TypeName> {
	vec![
		TypeName::of::<u32>(),
		TypeName::of::<Widget>(),
		TypeName::of::<Gadget>(),
		TypeName::of::<Arc<Widget>>(),
		TypeName::of::<Box<Widget>>(),
		TypeName::of::<Option<Widget>>(),
		TypeName::of::<Vec<Widget>>(),
		TypeName::of::<&'static Widget>(),
		TypeName::of::<dyn Any + Send + Sync>(),
		TypeName::of::<Arc<dyn Any + Send + Sync>>(),
		TypeName::of::<String>(),
		TypeName::of::<Result<Widget, String>>(),
	]
}

// Property 1: Canonical names are stable across calls
proptest! {
	#[test]
	fn prop_name_is_idempotent(index in 0usize..12) {
		let first = table()[index];
		let second = table()[index];

		prop_assert_eq!(first.canonical(), second.canonical());
		prop_assert_eq!(first, second);
	}
}

// Property 2: Distinct types never share a canonical name
proptest! {
	#[test]
	fn prop_distinct_types_have_distinct_names(a in 0usize..12, b in 0usize..12) {
		let types = table();

		if a == b {
			prop_assert_eq!(types[a].canonical(), types[b].canonical());
		} else {
			prop_assert_ne!(types[a], types[b]);
			prop_assert_ne!(types[a].canonical(), types[b].canonical());
		}
	}
}

#[test]
fn canonical_name_matches_type_name() {
	assert_eq!(canonical_name::<Widget>(), TypeName::of::<Widget>().canonical());
	assert_eq!(canonical_name::<Widget>(), std::any::type_name::<Widget>());
}
