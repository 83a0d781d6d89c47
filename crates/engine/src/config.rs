// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

/// Per-call options of a row-bind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RbindOptions {
	/// Match source columns to destination columns by name. When `false`,
	/// columns are matched by position.
	pub bynames: bool,
	/// Allow sources whose columns differ from the destination's. Missing
	/// columns are created and gaps are filled with NA.
	pub force: bool,
}

impl Default for RbindOptions {
	fn default() -> Self {
		Self {
			bynames: true,
			force: false,
		}
	}
}

impl RbindOptions {
	pub fn by_position() -> Self {
		Self {
			bynames: false,
			..Self::default()
		}
	}

	pub fn with_force(mut self, force: bool) -> Self {
		self.force = force;
		self
	}

	pub fn with_bynames(mut self, bynames: bool) -> Self {
		self.bynames = bynames;
		self
	}
}

/// Configuration of a [`RowBinder`](crate::RowBinder).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RbindConfig {
	/// Largest text payload, in bytes, a `str32` result column may hold.
	/// Larger results are stored as `str64`.
	pub str32_capacity: usize,
}

impl Default for RbindConfig {
	fn default() -> Self {
		Self {
			str32_capacity: i32::MAX as usize,
		}
	}
}
