// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use colframe_core::Frame;
use colframe_type::{Result, Stype, common_stype, internal_err};
use tracing::trace;

use crate::rbind::plan::{ColumnPlan, RbindPlan};

/// Result stype of every planned column: the join of the stypes of all
/// contributing columns. NA runs do not take part.
pub(crate) fn resolve(plan: &RbindPlan, destination: &Frame, sources: &[&Frame]) -> Result<Vec<Stype>> {
	plan.columns.iter().map(|column| resolve_column(column, plan, destination, sources)).collect()
}

fn resolve_column(column: &ColumnPlan, plan: &RbindPlan, destination: &Frame, sources: &[&Frame]) -> Result<Stype> {
	let existing = column.destination.map(|index| destination.columns()[index].stype());
	let contributed = column
		.sources
		.iter()
		.zip(&plan.sources)
		.filter_map(|(contribution, &source)| contribution.map(|index| sources[source].columns()[index].stype()));

	let Some(stype) = common_stype(existing.into_iter().chain(contributed)) else {
		return internal_err!("column `{}` has no contributions", column.name);
	};

	if let Some(existing) = existing
		&& existing != stype
	{
		trace!(column = %column.name, from = %existing, to = %stype, "promoting column");
	}
	Ok(stype)
}
