// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::collections::HashSet;

use tracing::warn;

/// Makes column names unique. Later duplicates of a name receive the first
/// free suffix `.1`, `.2`, ...; empty names become `C{index}`.
pub fn unique_names(names: impl IntoIterator<Item = String>) -> Vec<String> {
	let names: Vec<String> =
		names.into_iter().enumerate().map(|(idx, n)| if n.is_empty() { format!("C{}", idx) } else { n }).collect();

	let mut used: HashSet<String> = HashSet::with_capacity(names.len());
	let mut renamed = Vec::new();
	let mut result = Vec::with_capacity(names.len());

	for name in names {
		if used.insert(name.clone()) {
			result.push(name);
			continue;
		}
		let mut suffix = 1;
		let unique = loop {
			let candidate = format!("{}.{}", name, suffix);
			if !used.contains(&candidate) {
				break candidate;
			}
			suffix += 1;
		};
		used.insert(unique.clone());
		renamed.push(format!("`{}` -> `{}`", name, unique));
		result.push(unique);
	}

	if !renamed.is_empty() {
		warn!(renamed = %renamed.join(", "), "duplicate column names found, they were assigned unique names");
	}

	result
}

#[cfg(test)]
pub mod tests {
	use super::*;

	fn names(input: &[&str]) -> Vec<String> {
		unique_names(input.iter().map(|s| s.to_string()))
	}

	#[test]
	fn test_unique_names_untouched() {
		assert_eq!(names(&["A", "B", "a"]), vec!["A", "B", "a"]);
	}

	#[test]
	fn test_duplicates_get_suffix_in_order() {
		assert_eq!(names(&["x", "y", "x", "x"]), vec!["x", "y", "x.1", "x.2"]);
	}

	#[test]
	fn test_suffix_skips_taken_names() {
		assert_eq!(names(&["x", "x.1", "x"]), vec!["x", "x.1", "x.2"]);
	}

	#[test]
	fn test_empty_names() {
		assert_eq!(names(&["", "A", ""]), vec!["C0", "A", "C2"]);
	}
}
