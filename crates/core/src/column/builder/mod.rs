// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use colframe_type::{
	Na, Result, Stype, Value, error, error::diagnostic::storage::allocation_failed, return_internal_error,
};

use crate::{
	column::data::ColumnData,
	container::{BoolContainer, NumberContainer, ObjectContainer},
	storage::try_vec,
};

mod text;

pub use text::TextBuilder;

/// Growable storage for a column under construction. Once finished it turns
/// into immutable [`ColumnData`].
#[derive(Debug)]
pub enum ColumnBuilder {
	Bool8(Vec<i8>),
	Int8(Vec<i8>),
	Int16(Vec<i16>),
	Int32(Vec<i32>),
	Int64(Vec<i64>),
	Float32(Vec<f32>),
	Float64(Vec<f64>),
	Text(TextBuilder),
	Obj64(Vec<Value>),
}

/// Fallible `Vec::reserve`; failure is reported as `STORAGE_005`.
pub fn reserve<T>(data: &mut Vec<T>, additional: usize) -> Result<()> {
	data.try_reserve(additional).map_err(|_| error!(allocation_failed(data.len() + additional, size_of::<T>())))
}

impl ColumnBuilder {
	/// Allocates room for `rows` entries of `stype` up front.
	pub fn try_new(stype: Stype, rows: usize) -> Result<Self> {
		Ok(match stype {
			Stype::Bool8 => ColumnBuilder::Bool8(try_vec(rows)?),
			Stype::Int8 => ColumnBuilder::Int8(try_vec(rows)?),
			Stype::Int16 => ColumnBuilder::Int16(try_vec(rows)?),
			Stype::Int32 => ColumnBuilder::Int32(try_vec(rows)?),
			Stype::Int64 => ColumnBuilder::Int64(try_vec(rows)?),
			Stype::Float32 => ColumnBuilder::Float32(try_vec(rows)?),
			Stype::Float64 => ColumnBuilder::Float64(try_vec(rows)?),
			Stype::Str32 | Stype::Str64 => ColumnBuilder::Text(TextBuilder::try_new(stype, rows)?),
			Stype::Obj64 => ColumnBuilder::Obj64(try_vec(rows)?),
		})
	}

	pub fn stype(&self) -> Stype {
		match self {
			ColumnBuilder::Bool8(_) => Stype::Bool8,
			ColumnBuilder::Int8(_) => Stype::Int8,
			ColumnBuilder::Int16(_) => Stype::Int16,
			ColumnBuilder::Int32(_) => Stype::Int32,
			ColumnBuilder::Int64(_) => Stype::Int64,
			ColumnBuilder::Float32(_) => Stype::Float32,
			ColumnBuilder::Float64(_) => Stype::Float64,
			ColumnBuilder::Text(b) => b.stype(),
			ColumnBuilder::Obj64(_) => Stype::Obj64,
		}
	}

	pub fn len(&self) -> usize {
		match self {
			ColumnBuilder::Bool8(v) => v.len(),
			ColumnBuilder::Int8(v) => v.len(),
			ColumnBuilder::Int16(v) => v.len(),
			ColumnBuilder::Int32(v) => v.len(),
			ColumnBuilder::Int64(v) => v.len(),
			ColumnBuilder::Float32(v) => v.len(),
			ColumnBuilder::Float64(v) => v.len(),
			ColumnBuilder::Text(b) => b.len(),
			ColumnBuilder::Obj64(v) => v.len(),
		}
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// Appends a run of `count` missing values.
	pub fn push_na(&mut self, count: usize) -> Result<()> {
		fn fill<T: Clone>(data: &mut Vec<T>, value: T, count: usize) -> Result<()> {
			reserve(data, count)?;
			data.resize(data.len() + count, value);
			Ok(())
		}

		match self {
			ColumnBuilder::Bool8(v) => fill(v, i8::NA, count),
			ColumnBuilder::Int8(v) => fill(v, i8::NA, count),
			ColumnBuilder::Int16(v) => fill(v, i16::NA, count),
			ColumnBuilder::Int32(v) => fill(v, i32::NA, count),
			ColumnBuilder::Int64(v) => fill(v, i64::NA, count),
			ColumnBuilder::Float32(v) => fill(v, f32::NA, count),
			ColumnBuilder::Float64(v) => fill(v, f64::NA, count),
			ColumnBuilder::Text(b) => b.push_na(count),
			ColumnBuilder::Obj64(v) => fill(v, Value::None, count),
		}
	}

	/// Appends every row of `data`, which must already have the builder's
	/// stype. Text builders accept either string width.
	pub fn extend_from(&mut self, data: &ColumnData) -> Result<()> {
		fn copy<T: Clone>(out: &mut Vec<T>, values: &[T]) -> Result<()> {
			reserve(out, values.len())?;
			out.extend_from_slice(values);
			Ok(())
		}

		match (self, data) {
			(ColumnBuilder::Bool8(out), ColumnData::Bool8(c)) => copy(out, c.as_slice()),
			(ColumnBuilder::Int8(out), ColumnData::Int8(c)) => copy(out, &c[..]),
			(ColumnBuilder::Int16(out), ColumnData::Int16(c)) => copy(out, &c[..]),
			(ColumnBuilder::Int32(out), ColumnData::Int32(c)) => copy(out, &c[..]),
			(ColumnBuilder::Int64(out), ColumnData::Int64(c)) => copy(out, &c[..]),
			(ColumnBuilder::Float32(out), ColumnData::Float32(c)) => copy(out, &c[..]),
			(ColumnBuilder::Float64(out), ColumnData::Float64(c)) => copy(out, &c[..]),
			(ColumnBuilder::Text(b), ColumnData::Str32(c)) => b.extend_from_utf8(c),
			(ColumnBuilder::Text(b), ColumnData::Str64(c)) => b.extend_from_utf8(c),
			(ColumnBuilder::Obj64(out), ColumnData::Obj64(c)) => copy(out, c.as_slice()),
			(builder, data) => {
				return_internal_error!(
					"cannot extend a {} builder with {} data",
					builder.stype(),
					data.stype()
				)
			}
		}
	}

	/// Freezes the builder. Text built as `str32` widens to `str64` when it
	/// holds more than `str32_capacity` bytes.
	pub fn finish(self, str32_capacity: usize) -> ColumnData {
		match self {
			ColumnBuilder::Bool8(v) => ColumnData::Bool8(BoolContainer::new(v)),
			ColumnBuilder::Int8(v) => ColumnData::Int8(NumberContainer::new(v)),
			ColumnBuilder::Int16(v) => ColumnData::Int16(NumberContainer::new(v)),
			ColumnBuilder::Int32(v) => ColumnData::Int32(NumberContainer::new(v)),
			ColumnBuilder::Int64(v) => ColumnData::Int64(NumberContainer::new(v)),
			ColumnBuilder::Float32(v) => ColumnData::Float32(NumberContainer::new(v)),
			ColumnBuilder::Float64(v) => ColumnData::Float64(NumberContainer::new(v)),
			ColumnBuilder::Text(b) => b.finish(str32_capacity),
			ColumnBuilder::Obj64(v) => ColumnData::Obj64(ObjectContainer::new(v)),
		}
	}
}
