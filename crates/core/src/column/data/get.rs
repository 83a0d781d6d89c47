// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use colframe_type::Value;

use crate::column::data::ColumnData;

impl ColumnData {
	/// Value at `index`; `Value::None` when missing or out of range.
	pub fn get_value(&self, index: usize) -> Value {
		match self {
			ColumnData::Bool8(c) => c.get(index).map(Value::Bool),
			ColumnData::Int8(c) => c.get(index).map(Value::Int8),
			ColumnData::Int16(c) => c.get(index).map(Value::Int16),
			ColumnData::Int32(c) => c.get(index).map(Value::Int32),
			ColumnData::Int64(c) => c.get(index).map(Value::Int64),
			ColumnData::Float32(c) => c.get(index).map(Value::Float32),
			ColumnData::Float64(c) => c.get(index).map(Value::Float64),
			ColumnData::Str32(c) => c.get(index).map(|s| Value::Str(s.to_string())),
			ColumnData::Str64(c) => c.get(index).map(|s| Value::Str(s.to_string())),
			ColumnData::Obj64(c) => c.get(index).cloned(),
		}
		.unwrap_or(Value::None)
	}

	pub fn is_na(&self, index: usize) -> bool {
		match self {
			ColumnData::Bool8(c) => c.is_na(index),
			ColumnData::Int8(c) => c.is_na(index),
			ColumnData::Int16(c) => c.is_na(index),
			ColumnData::Int32(c) => c.is_na(index),
			ColumnData::Int64(c) => c.is_na(index),
			ColumnData::Float32(c) => c.is_na(index),
			ColumnData::Float64(c) => c.is_na(index),
			ColumnData::Str32(c) => c.is_na(index),
			ColumnData::Str64(c) => c.is_na(index),
			ColumnData::Obj64(c) => c.is_na(index),
		}
	}

	pub fn values(&self) -> Vec<Value> {
		(0..self.len()).map(|idx| self.get_value(idx)).collect()
	}
}
