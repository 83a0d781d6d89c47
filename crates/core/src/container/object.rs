// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use colframe_type::{Result, Value};

use crate::{storage::try_vec, view::RowIndex};

/// Boxed values of any kind; `Value::None` marks a missing entry.
#[derive(Clone, Debug, Default)]
pub struct ObjectContainer {
	data: Vec<Value>,
}

impl ObjectContainer {
	pub fn new(data: Vec<Value>) -> Self {
		Self {
			data,
		}
	}

	pub fn len(&self) -> usize {
		self.data.len()
	}

	pub fn is_empty(&self) -> bool {
		self.data.is_empty()
	}

	pub fn get(&self, index: usize) -> Option<&Value> {
		self.data.get(index).filter(|v| !v.is_none())
	}

	pub fn is_na(&self, index: usize) -> bool {
		self.get(index).is_none()
	}

	pub fn as_slice(&self) -> &[Value] {
		&self.data
	}

	pub fn take(&self, rows: &RowIndex) -> Result<Self> {
		let mut result = try_vec(rows.len())?;
		result.extend(rows.iter().map(|row| self.data[row].clone()));
		Ok(Self::new(result))
	}
}
