// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::sync::Arc;

use colframe_core::{ColumnData, Frame};
use colframe_type::{Result, Stype};

use crate::rbind::plan::RbindPlan;

/// Immutable inputs of one result column, read before anything is written.
#[derive(Debug)]
pub(crate) struct ColumnSnapshot {
	pub name: String,
	pub stype: Stype,
	pub destination: Option<Arc<ColumnData>>,
	pub sources: Vec<Option<Arc<ColumnData>>>,
}

/// Resolves every contribution of `plan` to owned, row-ordered data. View
/// columns are materialized here; owned buffers are shared.
pub(crate) fn snapshot(
	plan: &RbindPlan,
	stypes: &[Stype],
	destination: &Frame,
	sources: &[&Frame],
) -> Result<Vec<ColumnSnapshot>> {
	let mut result = Vec::with_capacity(plan.columns.len());
	for (column, &stype) in plan.columns.iter().zip(stypes) {
		let existing = match column.destination {
			Some(index) => Some(destination.columns()[index].materialize()?),
			None => None,
		};

		let mut contributions = Vec::with_capacity(column.sources.len());
		for (contribution, &source) in column.sources.iter().zip(&plan.sources) {
			contributions.push(match contribution {
				Some(index) => Some(sources[source].columns()[*index].materialize()?),
				None => None,
			});
		}

		result.push(ColumnSnapshot {
			name: column.name.clone(),
			stype,
			destination: existing,
			sources: contributions,
		});
	}
	Ok(result)
}
