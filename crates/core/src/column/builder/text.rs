// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use colframe_type::{Result, Stype, return_internal_error};
use tracing::debug;

use crate::{
	column::{builder::reserve, data::ColumnData},
	container::{Offset, Utf8Container},
	storage::{Buffer, try_vec},
};

/// Accumulates strings with 64-bit offsets; the final width is picked in
/// [`TextBuilder::finish`].
#[derive(Debug)]
pub struct TextBuilder {
	stype: Stype,
	offsets: Vec<i64>,
	bytes: Vec<u8>,
	scratch: String,
}

impl TextBuilder {
	pub fn try_new(stype: Stype, rows: usize) -> Result<Self> {
		if !stype.is_string() {
			return_internal_error!("text builder requested for {}", stype);
		}
		Ok(Self {
			stype,
			offsets: try_vec(rows)?,
			bytes: Vec::new(),
			scratch: String::new(),
		})
	}

	pub fn stype(&self) -> Stype {
		self.stype
	}

	pub fn len(&self) -> usize {
		self.offsets.len()
	}

	pub fn is_empty(&self) -> bool {
		self.offsets.is_empty()
	}

	pub fn push_str(&mut self, value: &str) -> Result<()> {
		reserve(&mut self.bytes, value.len())?;
		reserve(&mut self.offsets, 1)?;
		self.bytes.extend_from_slice(value.as_bytes());
		self.offsets.push(self.bytes.len() as i64);
		Ok(())
	}

	/// Pushes whatever `render` writes as one string.
	pub fn push_with(&mut self, render: impl FnOnce(&mut String)) -> Result<()> {
		let mut scratch = std::mem::take(&mut self.scratch);
		scratch.clear();
		render(&mut scratch);
		let result = self.push_str(&scratch);
		self.scratch = scratch;
		result
	}

	pub fn push_na(&mut self, count: usize) -> Result<()> {
		reserve(&mut self.offsets, count)?;
		let missing = !(self.bytes.len() as i64);
		self.offsets.resize(self.offsets.len() + count, missing);
		Ok(())
	}

	pub fn extend_from_utf8<O: Offset>(&mut self, source: &Utf8Container<O>) -> Result<()> {
		let base = self.bytes.len();
		let data = &source.bytes()[..source.total_bytes()];
		reserve(&mut self.bytes, data.len())?;
		reserve(&mut self.offsets, source.len())?;
		self.bytes.extend_from_slice(data);
		self.offsets.extend(source.offsets().iter().map(|&o| {
			let end = (base + o.end()) as i64;
			if o.is_missing() { !end } else { end }
		}));
		Ok(())
	}

	pub fn finish(self, str32_capacity: usize) -> ColumnData {
		let container = Utf8Container::from_parts(Buffer::Heap(self.offsets), Buffer::Heap(self.bytes));
		if self.stype == Stype::Str64 {
			return ColumnData::Str64(container);
		}
		match container.narrow(str32_capacity) {
			Ok(narrow) => ColumnData::Str32(narrow),
			Err(wide) => {
				debug!(bytes = wide.total_bytes(), capacity = str32_capacity, "text exceeds str32 capacity, using str64");
				ColumnData::Str64(wide)
			}
		}
	}
}
