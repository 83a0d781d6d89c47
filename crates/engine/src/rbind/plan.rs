// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Reconciles the column sets of the destination and the sources.

use std::collections::HashMap;

use colframe_core::Frame;

use crate::{RbindOptions, rbind::error::RbindError};

/// Provenance of one result column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnPlan {
	pub name: String,
	/// Column of the destination, if it already has one.
	pub destination: Option<usize>,
	/// Contributing column of each source in [`RbindPlan::sources`]; `None`
	/// means a run of NA as long as that source.
	pub sources: Vec<Option<usize>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RbindPlan {
	pub columns: Vec<ColumnPlan>,
	/// Positions of the sources that contribute rows. Frames without rows
	/// are left out; frames with rows but no columns contribute NA only.
	pub sources: Vec<usize>,
}

impl RbindPlan {
	pub fn is_noop(&self) -> bool {
		self.sources.is_empty()
	}
}

struct Planner {
	columns: Vec<ColumnPlan>,
	positions: HashMap<String, Vec<usize>>,
}

impl Planner {
	fn new(destination: &Frame) -> Self {
		let mut planner = Self {
			columns: Vec::with_capacity(destination.ncols()),
			positions: HashMap::new(),
		};
		for (index, column) in destination.columns().iter().enumerate() {
			planner.add(column.name(), Some(index), 0);
		}
		planner
	}

	fn add(&mut self, name: &str, destination: Option<usize>, sources: usize) -> usize {
		let index = self.columns.len();
		self.columns.push(ColumnPlan {
			name: name.to_string(),
			destination,
			sources: vec![None; sources],
		});
		self.positions.entry(name.to_string()).or_default().push(index);
		index
	}

	// `occurrence` counts earlier columns of the same name in the source.
	fn find(&self, name: &str, occurrence: usize) -> Option<usize> {
		self.positions.get(name).and_then(|p| p.get(occurrence)).copied()
	}
}

pub fn plan(destination: &Frame, sources: &[&Frame], options: RbindOptions) -> Result<RbindPlan, RbindError> {
	let contributing: Vec<usize> =
		sources.iter().enumerate().filter(|(_, s)| s.nrows() > 0).map(|(i, _)| i).collect();

	let mut planner = Planner::new(destination);
	// An empty destination takes its schema from the first contributing source.
	let adopting = destination.ncols() == 0;
	let mut expected = (!adopting).then(|| destination.ncols());

	for (k, &index) in contributing.iter().enumerate() {
		let source = sources[index];
		// A source without columns fills every column with NA and is exempt
		// from the schema checks.
		let checked = !options.force && expected.is_some() && source.ncols() > 0;

		if let Some(expected) = expected
			&& checked && source.ncols() != expected
		{
			return Err(RbindError::ColumnCountMismatch {
				source_columns: source.ncols(),
				destination_columns: expected,
			});
		}

		for column in planner.columns.iter_mut() {
			column.sources.push(None);
		}

		if options.bynames {
			let mut occurrences: HashMap<&str, usize> = HashMap::new();
			for (j, column) in source.columns().iter().enumerate() {
				let occurrence = occurrences.entry(column.name()).or_insert(0);
				let found = planner.find(column.name(), *occurrence);
				*occurrence += 1;

				let target = match found {
					Some(target) => target,
					None if checked => {
						return Err(RbindError::ColumnNotFound {
							name: column.name().to_string(),
						});
					}
					None => planner.add(column.name(), None, k + 1),
				};
				planner.columns[target].sources[k] = Some(j);
			}
		} else {
			for (j, column) in source.columns().iter().enumerate() {
				let target = if j < planner.columns.len() {
					j
				} else {
					planner.add(column.name(), None, k + 1)
				};
				planner.columns[target].sources[k] = Some(j);
			}
		}

		if expected.is_none() && source.ncols() > 0 {
			expected = Some(source.ncols());
		}
	}

	Ok(RbindPlan {
		columns: planner.columns,
		sources: contributing,
	})
}
