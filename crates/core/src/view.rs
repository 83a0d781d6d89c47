// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Row selections over shared column buffers.

use std::sync::Arc;

use colframe_type::{
	Result, Stype, Value,
	error::diagnostic::frame::{mask_length_mismatch, row_index_out_of_bounds, zero_slice_step},
	return_error,
};

use crate::column::data::ColumnData;

/// Rows selected from a base buffer, in output order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RowIndex {
	/// `count` rows starting at `start`, `step` apart. The step may be negative.
	Slice {
		start: usize,
		count: usize,
		step: isize,
	},
	/// Explicit row positions.
	Array(Arc<[usize]>),
}

impl RowIndex {
	/// Unchecked slice; callers guarantee every selected row is in range.
	pub fn slice(start: usize, count: usize, step: isize) -> Self {
		if count == 0 {
			return RowIndex::Slice {
				start: 0,
				count: 0,
				step: 1,
			};
		}
		// A single row has no stride.
		RowIndex::Slice {
			start,
			count,
			step: if count == 1 { 1 } else { step },
		}
	}

	/// Unchecked explicit positions.
	pub fn array(rows: Vec<usize>) -> Self {
		RowIndex::Array(rows.into())
	}

	pub fn all(nrows: usize) -> Self {
		Self::slice(0, nrows, 1)
	}

	/// Resolves `start:stop:step` against `nrows` with Python slice
	/// semantics: negative bounds count from the end and out of range bounds
	/// are clamped.
	pub fn strided(nrows: usize, start: Option<isize>, stop: Option<isize>, step: isize) -> Result<Self> {
		if step == 0 {
			return_error!(zero_slice_step());
		}
		let len = nrows as isize;
		let (lower, upper) = if step > 0 { (0, len) } else { (-1, len - 1) };

		let clamp = |bound: Option<isize>, default: isize| match bound {
			None => default,
			Some(b) if b < 0 => (b + len).max(lower),
			Some(b) => b.min(upper),
		};
		let start = clamp(start, if step > 0 { lower } else { upper });
		let stop = clamp(stop, if step > 0 { upper } else { lower });

		let count = if step > 0 && start < stop {
			(stop - start - 1) as usize / step.unsigned_abs() + 1
		} else if step < 0 && stop < start {
			(start - stop - 1) as usize / step.unsigned_abs() + 1
		} else {
			0
		};

		Ok(Self::slice(start.max(0) as usize, count, step))
	}

	/// Resolves possibly negative positions against `nrows`.
	pub fn positions(nrows: usize, positions: &[isize]) -> Result<Self> {
		let len = nrows as isize;
		let mut rows = Vec::with_capacity(positions.len());
		for &position in positions {
			let row = if position < 0 { position + len } else { position };
			if row < 0 || row >= len {
				return_error!(row_index_out_of_bounds(position, nrows));
			}
			rows.push(row as usize);
		}
		Ok(Self::array(rows))
	}

	/// Selects rows whose mask entry is `true`.
	pub fn mask(nrows: usize, mask: &[bool]) -> Result<Self> {
		if mask.len() != nrows {
			return_error!(mask_length_mismatch(mask.len(), nrows));
		}
		Ok(Self::array(mask.iter().enumerate().filter(|(_, keep)| **keep).map(|(row, _)| row).collect()))
	}

	pub fn len(&self) -> usize {
		match self {
			RowIndex::Slice {
				count,
				..
			} => *count,
			RowIndex::Array(rows) => rows.len(),
		}
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// Base row of output position `index`. `index` must be below `len()`.
	pub fn get(&self, index: usize) -> usize {
		match self {
			RowIndex::Slice {
				start,
				step,
				..
			} => (*start as isize + index as isize * step) as usize,
			RowIndex::Array(rows) => rows[index],
		}
	}

	pub fn iter(&self) -> RowIndexIter<'_> {
		RowIndexIter {
			index: self,
			pos: 0,
		}
	}

	/// Selection equivalent to applying `inner` to the rows this index
	/// selects.
	pub fn compose(&self, inner: &RowIndex) -> RowIndex {
		match (self, inner) {
			(
				RowIndex::Slice {
					step,
					..
				},
				RowIndex::Slice {
					start: inner_start,
					count,
					step: inner_step,
				},
			) => {
				if *count == 0 {
					return RowIndex::slice(0, 0, 1);
				}
				RowIndex::slice(self.get(*inner_start), *count, step * inner_step)
			}
			_ => RowIndex::Array(inner.iter().map(|row| self.get(row)).collect()),
		}
	}
}

pub struct RowIndexIter<'a> {
	index: &'a RowIndex,
	pos: usize,
}

impl Iterator for RowIndexIter<'_> {
	type Item = usize;

	fn next(&mut self) -> Option<Self::Item> {
		if self.pos >= self.index.len() {
			return None;
		}
		let row = self.index.get(self.pos);
		self.pos += 1;
		Some(row)
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		let remaining = self.index.len() - self.pos;
		(remaining, Some(remaining))
	}
}

impl ExactSizeIterator for RowIndexIter<'_> {}

/// A column defined as a row selection over a shared base buffer. The base
/// stays alive as long as any view references it.
#[derive(Clone, Debug)]
pub struct ViewColumn {
	base: Arc<ColumnData>,
	rows: RowIndex,
}

impl ViewColumn {
	pub fn new(base: Arc<ColumnData>, rows: RowIndex) -> Self {
		Self {
			base,
			rows,
		}
	}

	pub fn base(&self) -> &Arc<ColumnData> {
		&self.base
	}

	pub fn rows(&self) -> &RowIndex {
		&self.rows
	}

	pub fn len(&self) -> usize {
		self.rows.len()
	}

	pub fn is_empty(&self) -> bool {
		self.rows.is_empty()
	}

	pub fn stype(&self) -> Stype {
		self.base.stype()
	}

	pub fn get_value(&self, index: usize) -> Value {
		if index >= self.len() {
			return Value::None;
		}
		self.base.get_value(self.rows.get(index))
	}

	/// Narrows the view further, still reading from the same base.
	pub fn select(&self, rows: &RowIndex) -> ViewColumn {
		ViewColumn::new(self.base.clone(), self.rows.compose(rows))
	}

	/// Copies the selected rows, in order, into a fresh buffer.
	pub fn materialize(&self) -> Result<ColumnData> {
		self.base.take(&self.rows)
	}
}

#[cfg(test)]
pub mod tests {
	use super::*;

	fn rows(index: &RowIndex) -> Vec<usize> {
		index.iter().collect()
	}

	mod strided {
		use super::*;

		#[test]
		fn test_plain_range() {
			let index = RowIndex::strided(10, Some(3), Some(7), 1).unwrap();
			assert_eq!(rows(&index), vec![3, 4, 5, 6]);
		}

		#[test]
		fn test_every_other() {
			let index = RowIndex::strided(5, None, None, 2).unwrap();
			assert_eq!(rows(&index), vec![0, 2, 4]);
		}

		#[test]
		fn test_reversed() {
			let index = RowIndex::strided(4, None, None, -1).unwrap();
			assert_eq!(rows(&index), vec![3, 2, 1, 0]);
		}

		#[test]
		fn test_negative_bounds() {
			let index = RowIndex::strided(10, Some(-3), None, 1).unwrap();
			assert_eq!(rows(&index), vec![7, 8, 9]);
			let index = RowIndex::strided(10, None, Some(-8), 1).unwrap();
			assert_eq!(rows(&index), vec![0, 1]);
		}

		#[test]
		fn test_clamped_bounds() {
			let index = RowIndex::strided(3, Some(-10), Some(100), 1).unwrap();
			assert_eq!(rows(&index), vec![0, 1, 2]);
			let index = RowIndex::strided(3, Some(100), None, -2).unwrap();
			assert_eq!(rows(&index), vec![2, 0]);
		}

		#[test]
		fn test_empty() {
			let index = RowIndex::strided(5, Some(4), Some(2), 1).unwrap();
			assert!(index.is_empty());
			let index = RowIndex::strided(0, None, None, -1).unwrap();
			assert!(index.is_empty());
		}

		#[test]
		fn test_extreme_steps() {
			let index = RowIndex::strided(3, None, None, isize::MAX).unwrap();
			assert_eq!(rows(&index), vec![0]);
			let index = RowIndex::strided(3, None, None, isize::MIN).unwrap();
			assert_eq!(rows(&index), vec![2]);
			let index = RowIndex::strided(3, Some(1), None, isize::MAX).unwrap();
			assert_eq!(rows(&index), vec![1]);
		}

		#[test]
		fn test_extreme_steps_compose() {
			let outer = RowIndex::strided(3, None, None, isize::MIN).unwrap();
			let inner = RowIndex::strided(1, None, None, isize::MAX).unwrap();
			assert_eq!(rows(&outer.compose(&inner)), vec![2]);
		}

		#[test]
		fn test_zero_step() {
			let err = RowIndex::strided(5, None, None, 0).unwrap_err();
			assert_eq!(err.code, "FRAME_004");
		}
	}

	mod positions {
		use super::*;

		#[test]
		fn test_negative_positions() {
			let index = RowIndex::positions(10, &[0, -1]).unwrap();
			assert_eq!(rows(&index), vec![0, 9]);
		}

		#[test]
		fn test_out_of_bounds() {
			let err = RowIndex::positions(3, &[3]).unwrap_err();
			assert_eq!(err.code, "FRAME_002");
			let err = RowIndex::positions(3, &[-4]).unwrap_err();
			assert_eq!(err.code, "FRAME_002");
		}

		#[test]
		fn test_mask() {
			let index = RowIndex::mask(4, &[true, false, false, true]).unwrap();
			assert_eq!(rows(&index), vec![0, 3]);
			let err = RowIndex::mask(4, &[true]).unwrap_err();
			assert_eq!(err.code, "FRAME_003");
		}
	}

	mod compose {
		use super::*;

		#[test]
		fn test_slice_of_slice_stays_slice() {
			let outer = RowIndex::strided(20, Some(2), None, 3).unwrap();
			let inner = RowIndex::strided(outer.len(), None, None, -1).unwrap();
			let composed = outer.compose(&inner);
			assert!(matches!(composed, RowIndex::Slice { .. }));
			assert_eq!(rows(&composed), vec![17, 14, 11, 8, 5, 2]);
		}

		#[test]
		fn test_array_of_slice() {
			let outer = RowIndex::strided(10, None, None, 2).unwrap();
			let inner = RowIndex::array(vec![4, 0]);
			assert_eq!(rows(&outer.compose(&inner)), vec![8, 0]);
		}

		#[test]
		fn test_slice_of_array() {
			let outer = RowIndex::array(vec![5, 1, 7, 3]);
			let inner = RowIndex::strided(4, Some(1), None, 2).unwrap();
			assert_eq!(rows(&outer.compose(&inner)), vec![1, 3]);
		}

		#[test]
		fn test_empty_inner() {
			let outer = RowIndex::strided(10, None, None, -1).unwrap();
			let inner = RowIndex::strided(10, Some(3), Some(3), 1).unwrap();
			assert!(outer.compose(&inner).is_empty());
		}
	}

	mod view_column {
		use super::*;

		#[test]
		fn test_materialize_reads_through_index() {
			let base = Arc::new(ColumnData::int32([Some(1), Some(2), None, Some(4)]));
			let view = ViewColumn::new(base.clone(), RowIndex::strided(4, None, None, -1).unwrap());
			let data = view.materialize().unwrap();
			assert_eq!(data.values(), vec![Value::Int32(4), Value::None, Value::Int32(2), Value::Int32(1)]);
			assert_eq!(base.get_value(0), Value::Int32(1));
		}

		#[test]
		fn test_select_composes() {
			let base = Arc::new(ColumnData::int8((0..10).map(Some)));
			let view = ViewColumn::new(base, RowIndex::strided(10, Some(2), None, 1).unwrap());
			let narrowed = view.select(&RowIndex::array(vec![0, 7]));
			assert_eq!(narrowed.get_value(0), Value::Int8(2));
			assert_eq!(narrowed.get_value(1), Value::Int8(9));
			assert_eq!(narrowed.get_value(2), Value::None);
		}
	}
}
