// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use colframe_type::{Stype, Value};

use crate::container::{BoolContainer, NumberContainer, ObjectContainer, Utf8Container};

mod get;
mod take;

/// Materialized storage of one column, one variant per stype.
#[derive(Clone, Debug)]
pub enum ColumnData {
	Bool8(BoolContainer),
	Int8(NumberContainer<i8>),
	Int16(NumberContainer<i16>),
	Int32(NumberContainer<i32>),
	Int64(NumberContainer<i64>),
	Float32(NumberContainer<f32>),
	Float64(NumberContainer<f64>),
	Str32(Utf8Container<i32>),
	Str64(Utf8Container<i64>),
	Obj64(ObjectContainer),
}

#[macro_export]
macro_rules! with_container {
	($self:expr, |$c:ident| $body:expr) => {
		match $self {
			$crate::ColumnData::Bool8($c) => $body,
			$crate::ColumnData::Int8($c) => $body,
			$crate::ColumnData::Int16($c) => $body,
			$crate::ColumnData::Int32($c) => $body,
			$crate::ColumnData::Int64($c) => $body,
			$crate::ColumnData::Float32($c) => $body,
			$crate::ColumnData::Float64($c) => $body,
			$crate::ColumnData::Str32($c) => $body,
			$crate::ColumnData::Str64($c) => $body,
			$crate::ColumnData::Obj64($c) => $body,
		}
	};
}

impl ColumnData {
	pub fn bool8(values: impl IntoIterator<Item = Option<bool>>) -> Self {
		ColumnData::Bool8(BoolContainer::from_options(values))
	}

	pub fn int8(values: impl IntoIterator<Item = Option<i8>>) -> Self {
		ColumnData::Int8(NumberContainer::from_options(values))
	}

	pub fn int16(values: impl IntoIterator<Item = Option<i16>>) -> Self {
		ColumnData::Int16(NumberContainer::from_options(values))
	}

	pub fn int32(values: impl IntoIterator<Item = Option<i32>>) -> Self {
		ColumnData::Int32(NumberContainer::from_options(values))
	}

	pub fn int64(values: impl IntoIterator<Item = Option<i64>>) -> Self {
		ColumnData::Int64(NumberContainer::from_options(values))
	}

	pub fn float32(values: impl IntoIterator<Item = Option<f32>>) -> Self {
		ColumnData::Float32(NumberContainer::from_options(values))
	}

	pub fn float64(values: impl IntoIterator<Item = Option<f64>>) -> Self {
		ColumnData::Float64(NumberContainer::from_options(values))
	}

	/// String column, `str32` unless the text exceeds what 32-bit offsets can
	/// address.
	pub fn utf8<S: AsRef<str>>(values: impl IntoIterator<Item = Option<S>>) -> Self {
		match Utf8Container::from_options(values).narrow(i32::MAX as usize) {
			Ok(narrow) => ColumnData::Str32(narrow),
			Err(wide) => ColumnData::Str64(wide),
		}
	}

	pub fn str64<S: AsRef<str>>(values: impl IntoIterator<Item = Option<S>>) -> Self {
		ColumnData::Str64(Utf8Container::from_options(values))
	}

	pub fn obj64(values: impl IntoIterator<Item = Value>) -> Self {
		ColumnData::Obj64(ObjectContainer::new(values.into_iter().collect()))
	}

	/// Integer column of the narrowest stype that holds every value.
	pub fn infer_int(values: impl IntoIterator<Item = Option<i64>>) -> Self {
		let values: Vec<Option<i64>> = values.into_iter().collect();
		let fits = |min: i64, max: i64| values.iter().flatten().all(|v| *v > min && *v <= max);

		if fits(i8::MIN as i64, i8::MAX as i64) {
			ColumnData::int8(values.iter().map(|v| v.map(|v| v as i8)))
		} else if fits(i16::MIN as i64, i16::MAX as i64) {
			ColumnData::int16(values.iter().map(|v| v.map(|v| v as i16)))
		} else if fits(i32::MIN as i64, i32::MAX as i64) {
			ColumnData::int32(values.iter().map(|v| v.map(|v| v as i32)))
		} else {
			ColumnData::int64(values)
		}
	}

	pub fn stype(&self) -> Stype {
		match self {
			ColumnData::Bool8(_) => Stype::Bool8,
			ColumnData::Int8(_) => Stype::Int8,
			ColumnData::Int16(_) => Stype::Int16,
			ColumnData::Int32(_) => Stype::Int32,
			ColumnData::Int64(_) => Stype::Int64,
			ColumnData::Float32(_) => Stype::Float32,
			ColumnData::Float64(_) => Stype::Float64,
			ColumnData::Str32(_) => Stype::Str32,
			ColumnData::Str64(_) => Stype::Str64,
			ColumnData::Obj64(_) => Stype::Obj64,
		}
	}

	pub fn len(&self) -> usize {
		with_container!(self, |c| c.len())
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	pub fn is_mapped(&self) -> bool {
		match self {
			ColumnData::Bool8(c) => c.is_mapped(),
			ColumnData::Int8(c) => c.is_mapped(),
			ColumnData::Int16(c) => c.is_mapped(),
			ColumnData::Int32(c) => c.is_mapped(),
			ColumnData::Int64(c) => c.is_mapped(),
			ColumnData::Float32(c) => c.is_mapped(),
			ColumnData::Float64(c) => c.is_mapped(),
			ColumnData::Str32(c) => c.is_mapped(),
			ColumnData::Str64(c) => c.is_mapped(),
			ColumnData::Obj64(_) => false,
		}
	}
}
