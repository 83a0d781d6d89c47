// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::sync::Arc;

use colframe_type::{Result, Stype, Value};

use crate::view::{RowIndex, ViewColumn};

pub mod builder;
pub mod data;

use data::ColumnData;

#[derive(Clone, Debug)]
pub struct Column {
	name: String,
	source: ColumnSource,
}

/// Where a column's rows come from. Buffers are immutable once shared, so
/// cloning either variant is a handle copy.
#[derive(Clone, Debug)]
pub enum ColumnSource {
	Data(Arc<ColumnData>),
	View(ViewColumn),
}

impl Column {
	pub fn new(name: impl Into<String>, data: ColumnData) -> Self {
		Self::shared(name, Arc::new(data))
	}

	pub fn shared(name: impl Into<String>, data: Arc<ColumnData>) -> Self {
		Self {
			name: name.into(),
			source: ColumnSource::Data(data),
		}
	}

	pub fn view(name: impl Into<String>, view: ViewColumn) -> Self {
		Self {
			name: name.into(),
			source: ColumnSource::View(view),
		}
	}

	pub fn bool8(name: impl Into<String>, values: impl IntoIterator<Item = Option<bool>>) -> Self {
		Self::new(name, ColumnData::bool8(values))
	}

	pub fn int8(name: impl Into<String>, values: impl IntoIterator<Item = Option<i8>>) -> Self {
		Self::new(name, ColumnData::int8(values))
	}

	pub fn int16(name: impl Into<String>, values: impl IntoIterator<Item = Option<i16>>) -> Self {
		Self::new(name, ColumnData::int16(values))
	}

	pub fn int32(name: impl Into<String>, values: impl IntoIterator<Item = Option<i32>>) -> Self {
		Self::new(name, ColumnData::int32(values))
	}

	pub fn int64(name: impl Into<String>, values: impl IntoIterator<Item = Option<i64>>) -> Self {
		Self::new(name, ColumnData::int64(values))
	}

	pub fn float32(name: impl Into<String>, values: impl IntoIterator<Item = Option<f32>>) -> Self {
		Self::new(name, ColumnData::float32(values))
	}

	pub fn float64(name: impl Into<String>, values: impl IntoIterator<Item = Option<f64>>) -> Self {
		Self::new(name, ColumnData::float64(values))
	}

	pub fn str32<S: AsRef<str>>(name: impl Into<String>, values: impl IntoIterator<Item = Option<S>>) -> Self {
		Self::new(name, ColumnData::utf8(values))
	}

	pub fn str64<S: AsRef<str>>(name: impl Into<String>, values: impl IntoIterator<Item = Option<S>>) -> Self {
		Self::new(name, ColumnData::str64(values))
	}

	pub fn obj64(name: impl Into<String>, values: impl IntoIterator<Item = Value>) -> Self {
		Self::new(name, ColumnData::obj64(values))
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	pub(crate) fn set_name(&mut self, name: String) {
		self.name = name;
	}

	pub fn source(&self) -> &ColumnSource {
		&self.source
	}

	pub fn stype(&self) -> Stype {
		match &self.source {
			ColumnSource::Data(data) => data.stype(),
			ColumnSource::View(view) => view.stype(),
		}
	}

	pub fn len(&self) -> usize {
		match &self.source {
			ColumnSource::Data(data) => data.len(),
			ColumnSource::View(view) => view.len(),
		}
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	pub fn is_view(&self) -> bool {
		matches!(self.source, ColumnSource::View(_))
	}

	/// Whether the rows are read from a memory-mapped file, directly or
	/// through a view.
	pub fn is_mapped(&self) -> bool {
		match &self.source {
			ColumnSource::Data(data) => data.is_mapped(),
			ColumnSource::View(view) => view.base().is_mapped(),
		}
	}

	pub fn get_value(&self, index: usize) -> Value {
		match &self.source {
			ColumnSource::Data(data) => data.get_value(index),
			ColumnSource::View(view) => view.get_value(index),
		}
	}

	pub fn values(&self) -> Vec<Value> {
		(0..self.len()).map(|idx| self.get_value(idx)).collect()
	}

	/// Row-ordered data of this column. Owned data is shared as is, views are
	/// copied into a fresh buffer.
	pub fn materialize(&self) -> Result<Arc<ColumnData>> {
		match &self.source {
			ColumnSource::Data(data) => Ok(data.clone()),
			ColumnSource::View(view) => Ok(Arc::new(view.materialize()?)),
		}
	}

	/// A view of `rows` of this column, reading from the same base buffer.
	pub fn select(&self, rows: &RowIndex) -> Column {
		let view = match &self.source {
			ColumnSource::Data(data) => ViewColumn::new(data.clone(), rows.clone()),
			ColumnSource::View(view) => view.select(rows),
		};
		Column::view(self.name.clone(), view)
	}
}
