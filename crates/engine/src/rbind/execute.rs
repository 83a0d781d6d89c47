// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use colframe_core::{Column, ColumnBuilder, Frame};
use colframe_type::{Error, Result, Stype};
use tracing::{debug, instrument};

use crate::{
	RbindConfig,
	rbind::{coerce::extend_coerced, error::RbindError, snapshot::ColumnSnapshot},
};

/// Builds the new columns from `columns` and swaps them into `destination`.
/// `source_rows` holds the row count of every contributing source, in the
/// order of [`ColumnSnapshot::sources`].
#[instrument(name = "rbind::execute", level = "debug", skip_all, fields(columns = columns.len()))]
pub(crate) fn execute(
	destination: &mut Frame,
	columns: Vec<ColumnSnapshot>,
	source_rows: &[usize],
	config: &RbindConfig,
) -> Result<()> {
	let nrows = destination.nrows() + source_rows.iter().sum::<usize>();

	let mut result = Vec::with_capacity(columns.len());
	for column in columns {
		let grow = |err: Error| allocation(err, &column.name, column.stype, nrows);
		let mut builder = ColumnBuilder::try_new(column.stype, nrows).map_err(grow)?;

		match &column.destination {
			Some(data) => {
				if data.is_mapped() {
					debug!(column = %column.name, rows = data.len(), "relocating memory-mapped column");
				}
				extend_coerced(&mut builder, data).map_err(grow)?;
			}
			None => builder.push_na(destination.nrows()).map_err(grow)?,
		}

		for (contribution, &rows) in column.sources.iter().zip(source_rows) {
			match contribution {
				Some(data) => extend_coerced(&mut builder, data).map_err(grow)?,
				None => builder.push_na(rows).map_err(grow)?,
			}
		}

		result.push(Column::new(column.name, builder.finish(config.str32_capacity)));
	}

	destination.replace_columns(result, nrows)
}

fn allocation(err: Error, column: &str, stype: Stype, rows: usize) -> Error {
	if err.code != "STORAGE_005" {
		return err;
	}
	RbindError::Allocation {
		column: column.to_string(),
		stype,
		rows,
		cause: err.diagnostic(),
	}
	.into()
}
