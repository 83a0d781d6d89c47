// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::ops::Range;

use colframe_type::Result;

use crate::{frame::Frame, view::RowIndex};

impl Frame {
	/// View of the rows in `range`, clamped to the frame.
	pub fn slice(&self, range: Range<usize>) -> Result<Frame> {
		let start = range.start.min(self.nrows);
		let end = range.end.clamp(start, self.nrows);
		Ok(self.select_rows(&RowIndex::slice(start, end - start, 1)))
	}

	/// View of `start:stop:step` with Python slice semantics.
	pub fn slice_step(&self, start: Option<isize>, stop: Option<isize>, step: isize) -> Result<Frame> {
		let rows = RowIndex::strided(self.nrows, start, stop, step)?;
		Ok(self.select_rows(&rows))
	}

	/// View of the given rows; negative positions count from the end.
	pub fn take_rows(&self, positions: &[isize]) -> Result<Frame> {
		let rows = RowIndex::positions(self.nrows, positions)?;
		Ok(self.select_rows(&rows))
	}

	/// View of the rows where `mask` is `true`.
	pub fn filter(&self, mask: &[bool]) -> Result<Frame> {
		let rows = RowIndex::mask(self.nrows, mask)?;
		Ok(self.select_rows(&rows))
	}

	// `rows` must already be validated against `nrows`.
	pub(crate) fn select_rows(&self, rows: &RowIndex) -> Frame {
		Frame {
			columns: self.columns.iter().map(|c| c.select(rows)).collect(),
			nrows: rows.len(),
		}
	}
}
