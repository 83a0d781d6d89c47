// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use colframe_type::{Result, Stype, Value, error::diagnostic::frame::column_length_mismatch, return_error};

use crate::column::{Column, data::ColumnData};

pub mod naming;
mod resize;
mod select;

/// An ordered set of named columns sharing one row count.
///
/// Cloning a frame copies column handles only; the clone is an immutable
/// snapshot of the buffers at that point.
#[derive(Clone, Debug, Default)]
pub struct Frame {
	columns: Vec<Column>,
	nrows: usize,
}

impl Frame {
	/// Builds a frame from columns of equal length, renaming duplicates.
	pub fn new(columns: Vec<Column>) -> Result<Self> {
		let nrows = columns.first().map(|c| c.len()).unwrap_or(0);
		check_lengths(&columns, nrows)?;

		let names = naming::unique_names(columns.iter().map(|c| c.name().to_string()));
		let mut columns = columns;
		for (column, name) in columns.iter_mut().zip(names) {
			if column.name() != name {
				column.set_name(name);
			}
		}

		Ok(Self {
			columns,
			nrows,
		})
	}

	/// Builds a frame from unnamed data; columns are named `C0`, `C1`, ...
	pub fn from_data(data: Vec<ColumnData>) -> Result<Self> {
		Self::new(data.into_iter().enumerate().map(|(idx, d)| Column::new(format!("C{}", idx), d)).collect())
	}

	pub fn empty() -> Self {
		Self::default()
	}

	pub fn nrows(&self) -> usize {
		self.nrows
	}

	pub fn ncols(&self) -> usize {
		self.columns.len()
	}

	pub fn shape(&self) -> (usize, usize) {
		(self.nrows, self.columns.len())
	}

	pub fn is_empty(&self) -> bool {
		self.columns.is_empty()
	}

	pub fn columns(&self) -> &[Column] {
		&self.columns
	}

	pub fn column(&self, index: usize) -> Option<&Column> {
		self.columns.get(index)
	}

	pub fn column_by_name(&self, name: &str) -> Option<&Column> {
		self.columns.iter().find(|c| c.name() == name)
	}

	pub fn names(&self) -> Vec<&str> {
		self.columns.iter().map(|c| c.name()).collect()
	}

	pub fn stypes(&self) -> Vec<Stype> {
		self.columns.iter().map(|c| c.stype()).collect()
	}

	/// Whether any column reads from a memory-mapped file.
	pub fn is_mapped(&self) -> bool {
		self.columns.iter().any(|c| c.is_mapped())
	}

	/// Column-major values.
	pub fn to_values(&self) -> Vec<Vec<Value>> {
		self.columns.iter().map(|c| c.values()).collect()
	}

	/// Replaces every view column with an owned copy of its rows.
	pub fn materialize(&mut self) -> Result<()> {
		if !self.columns.iter().any(|c| c.is_view()) {
			return Ok(());
		}
		let mut columns = Vec::with_capacity(self.columns.len());
		for column in &self.columns {
			columns.push(Column::shared(column.name(), column.materialize()?));
		}
		self.columns = columns;
		Ok(())
	}

	/// Swaps in a new column set and row count in one step. Names are taken
	/// as given.
	pub fn replace_columns(&mut self, columns: Vec<Column>, nrows: usize) -> Result<()> {
		check_lengths(&columns, nrows)?;
		self.columns = columns;
		self.nrows = nrows;
		Ok(())
	}
}

fn check_lengths(columns: &[Column], nrows: usize) -> Result<()> {
	for column in columns {
		if column.len() != nrows {
			return_error!(column_length_mismatch(column.name(), nrows, column.len()));
		}
	}
	Ok(())
}
