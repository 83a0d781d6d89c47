// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::ops::Deref;

use colframe_type::{Na, Result};

use crate::{
	storage::{Buffer, Element, try_vec},
	view::RowIndex,
};

#[derive(Clone, Debug)]
pub struct NumberContainer<T>
where
	T: Element + Na,
{
	data: Buffer<T>,
}

impl<T: Element + Na> Deref for NumberContainer<T> {
	type Target = [T];

	fn deref(&self) -> &Self::Target {
		self.data.as_slice()
	}
}

impl<T: Element + Na> NumberContainer<T> {
	pub fn new(data: Vec<T>) -> Self {
		Self {
			data: Buffer::Heap(data),
		}
	}

	pub fn from_buffer(data: Buffer<T>) -> Self {
		Self {
			data,
		}
	}

	pub fn from_options(values: impl IntoIterator<Item = Option<T>>) -> Self {
		Self::new(values.into_iter().map(|v| v.unwrap_or(T::NA)).collect())
	}

	pub fn len(&self) -> usize {
		self.data.len()
	}

	pub fn is_empty(&self) -> bool {
		self.data.is_empty()
	}

	/// The value at `index`, `None` when missing or out of range.
	pub fn get(&self, index: usize) -> Option<T> {
		self.data.get(index).copied().filter(|v| !v.is_na())
	}

	pub fn is_na(&self, index: usize) -> bool {
		self.data.get(index).is_none_or(|v| v.is_na())
	}

	pub fn buffer(&self) -> &Buffer<T> {
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
