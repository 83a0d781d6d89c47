// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use colframe_type::Result;
use tracing::debug;

use crate::{
	column::{Column, builder::ColumnBuilder},
	frame::Frame,
	view::RowIndex,
};

impl Frame {
	/// Sets the row count. Shrinking keeps the leading rows as views over the
	/// existing buffers; growing pads every column with missing values.
	pub fn resize_rows(&mut self, nrows: usize) -> Result<()> {
		if nrows == self.nrows {
			return Ok(());
		}

		if nrows < self.nrows {
			let shrunk = self.select_rows(&RowIndex::slice(0, nrows, 1));
			*self = shrunk;
			return Ok(());
		}

		debug!(from = self.nrows, to = nrows, "padding frame with missing rows");

		let mut columns = Vec::with_capacity(self.columns.len());
		for column in &self.columns {
			let data = column.materialize()?;
			let mut builder = ColumnBuilder::try_new(column.stype(), nrows)?;
			builder.extend_from(&data)?;
			builder.push_na(nrows - data.len())?;
			columns.push(Column::new(column.name(), builder.finish(usize::MAX)));
		}
		self.replace_columns(columns, nrows)
	}
}
