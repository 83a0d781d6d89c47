// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use colframe_type::{Na, Result};

use crate::{
	storage::{Buffer, try_vec},
	view::RowIndex,
};

/// Booleans stored one per byte as 0 or 1, with `i8::MIN` as the missing
/// marker.
#[derive(Clone, Debug)]
pub struct BoolContainer {
	data: Buffer<i8>,
}

impl BoolContainer {
	pub fn new(data: Vec<i8>) -> Self {
		Self {
			data: Buffer::Heap(data),
		}
	}

	pub fn from_buffer(data: Buffer<i8>) -> Self {
		Self {
			data,
		}
	}

	pub fn from_options(values: impl IntoIterator<Item = Option<bool>>) -> Self {
		Self::new(values.into_iter().map(|v| v.map(i8::from).unwrap_or(i8::NA)).collect())
	}

	pub fn len(&self) -> usize {
		self.data.len()
	}

	pub fn is_empty(&self) -> bool {
		self.data.is_empty()
	}

	pub fn get(&self, index: usize) -> Option<bool> {
		self.data.get(index).copied().filter(|v| !v.is_na()).map(|v| v != 0)
	}

	pub fn is_na(&self, index: usize) -> bool {
		self.data.get(index).is_none_or(|v| v.is_na())
	}

	pub fn as_slice(&self) -> &[i8] {
		self.data.as_slice()
	}

	pub fn buffer(&self) -> &Buffer<i8> {
		&self.data
	}

	pub fn is_mapped(&self) -> bool {
		self.data.is_mapped()
	}

	pub fn take(&self, rows: &RowIndex) -> Result<Self> {
		let mut result = try_vec(rows.len())?;
		result.extend(rows.iter().map(|row| self.data[row]));
		Ok(Self::new(result))
	}
}
