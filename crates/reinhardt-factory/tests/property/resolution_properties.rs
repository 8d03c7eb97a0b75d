use parking_lot::Mutex;
use proptest::prelude::*;
use reinhardt_factory::{
	Candidate, Container, DiError, DiResult, Output, Service, canonical_name, resolve, validate,
};
use std::collections::HashSet;
use std::sync::Arc;

/// Container that knows every name except the ones listed in `missing`.
struct PartialContainer {
	missing: HashSet<&'static str>,
	requests: Mutex<Vec<String>>,
}

impl Container for PartialContainer {
	fn lookup_named(&self, name: &str) -> DiResult<Option<Service>> {
		self.requests.lock().push(name.to_string());
		if self.missing.contains(name) {
			return Err(DiError::NotFound(name.to_string()));
		}
		let value: Service = match name {
			"u8" => Arc::new(1u8),
			"u16" => Arc::new(2u16),
			"u32" => Arc::new(3u32),
			"u64" => Arc::new(4u64),
			_ => Arc::new(5u128),
		};
		Ok(Some(value))
	}
}

fn names() -> [&'static str; 5] {
	[
		canonical_name::<u8>(),
		canonical_name::<u16>(),
		canonical_name::<u32>(),
		canonical_name::<u64>(),
		canonical_name::<u128>(),
	]
}

fn five_params() -> Candidate {
	Candidate::function()
		.param::<u8>()
		.param::<u16>()
		.param::<u32>()
		.param::<u64>()
		.param::<u128>()
		.returns::<()>()
		.body(|_| Ok(vec![Output::value(())]))
}

// Property: lookups happen in declaration order and stop at the first failure
proptest! {
	#[test]
	fn prop_resolution_stops_at_first_missing(missing in proptest::collection::vec(any::<bool>(), 5)) {
		let names = names();
		let container = PartialContainer {
			missing: names
				.iter()
				.zip(&missing)
				.filter(|(_, missing)| **missing)
				.map(|(name, _)| *name)
				.collect(),
			requests: Mutex::new(Vec::new()),
		};
		let descriptor = validate::<()>(five_params()).unwrap();

		let result = resolve(&descriptor, &container);

		let requests = container.requests.lock().clone();
		match missing.iter().position(|m| *m) {
			Some(first) => {
				prop_assert!(
					matches!(&result, Err(DiError::NotFound(name)) if name == names[first])
				);
				prop_assert_eq!(requests, names[..=first].to_vec());
			}
			None => {
				prop_assert_eq!(result.unwrap().len(), 5);
				prop_assert_eq!(requests, names.to_vec());
			}
		}
	}
}
