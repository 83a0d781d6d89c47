// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use colframe_type::Result;

use crate::{column::data::ColumnData, view::RowIndex};

impl ColumnData {
	/// Gathers `rows` into a new heap buffer of the same stype.
	pub fn take(&self, rows: &RowIndex) -> Result<ColumnData> {
		Ok(match self {
			ColumnData::Bool8(c) => ColumnData::Bool8(c.take(rows)?),
			ColumnData::Int8(c) => ColumnData::Int8(c.take(rows)?),
			ColumnData::Int16(c) => ColumnData::Int16(c.take(rows)?),
			ColumnData::Int32(c) => ColumnData::Int32(c.take(rows)?),
			ColumnData::Int64(c) => ColumnData::Int64(c.take(rows)?),
			ColumnData::Float32(c) => ColumnData::Float32(c.take(rows)?),
			ColumnData::Float64(c) => ColumnData::Float64(c.take(rows)?),
			ColumnData::Str32(c) => ColumnData::Str32(c.take(rows)?),
			ColumnData::Str64(c) => ColumnData::Str64(c.take(rows)?),
			ColumnData::Obj64(c) => ColumnData::Obj64(c.take(rows)?),
		})
	}
}

#[cfg(test)]
pub mod tests {
	use colframe_type::{Stype, Value};

	use super::*;

	#[test]
	fn test_take_keeps_stype() {
		let data = ColumnData::utf8([Some("a"), None, Some("c")]);
		let taken = data.take(&RowIndex::array(vec![2, 1])).unwrap();
		assert_eq!(taken.stype(), Stype::Str32);
		assert_eq!(taken.values(), vec![Value::from("c"), Value::None]);
	}

	#[test]
	fn test_take_objects() {
		let data = ColumnData::obj64([Value::Int8(1), Value::from("yey"), Value::None]);
		let taken = data.take(&RowIndex::strided(3, None, None, -1).unwrap()).unwrap();
		assert_eq!(taken.values(), vec![Value::None, Value::from("yey"), Value::Int8(1)]);
	}
}
