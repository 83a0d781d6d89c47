// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::{
	fmt::{Display, Formatter},
	str::FromStr,
};

use serde::{Deserialize, Serialize};

use crate::{Error, error::diagnostic::stype::unknown_stype, return_error};

mod join;

pub use join::common_stype;

/// Storage type of a column.
///
/// Declaration order is the promotion ladder: every stype can be losslessly
/// coerced into any stype declared after it.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Stype {
	/// A boolean stored as one byte: 0, 1 or NA
	Bool8 = 0,
	/// A 1-byte signed integer
	Int8 = 1,
	/// A 2-byte signed integer
	Int16 = 2,
	/// A 4-byte signed integer
	Int32 = 3,
	/// An 8-byte signed integer
	Int64 = 4,
	/// A 4-byte floating point
	Float32 = 5,
	/// An 8-byte floating point
	Float64 = 6,
	/// UTF-8 text addressed by 32-bit offsets
	Str32 = 7,
	/// UTF-8 text addressed by 64-bit offsets
	Str64 = 8,
	/// An arbitrary boxed value
	Obj64 = 9,
}

impl Stype {
	pub const ALL: [Stype; 10] = [
		Stype::Bool8,
		Stype::Int8,
		Stype::Int16,
		Stype::Int32,
		Stype::Int64,
		Stype::Float32,
		Stype::Float64,
		Stype::Str32,
		Stype::Str64,
		Stype::Obj64,
	];

	pub fn is_bool(&self) -> bool {
		matches!(self, Stype::Bool8)
	}

	pub fn is_integer(&self) -> bool {
		matches!(self, Stype::Int8 | Stype::Int16 | Stype::Int32 | Stype::Int64)
	}

	pub fn is_floating_point(&self) -> bool {
		matches!(self, Stype::Float32 | Stype::Float64)
	}

	pub fn is_number(&self) -> bool {
		self.is_integer() || self.is_floating_point()
	}

	pub fn is_string(&self) -> bool {
		matches!(self, Stype::Str32 | Stype::Str64)
	}

	pub fn is_object(&self) -> bool {
		matches!(self, Stype::Obj64)
	}

	/// Size in bytes of one element of the primary buffer. For strings this
	/// is the width of an offset entry.
	pub fn size(&self) -> usize {
		match self {
			Stype::Bool8 => 1,
			Stype::Int8 => 1,
			Stype::Int16 => 2,
			Stype::Int32 => 4,
			Stype::Int64 => 8,
			Stype::Float32 => 4,
			Stype::Float64 => 8,
			Stype::Str32 => 4,
			Stype::Str64 => 8,
			Stype::Obj64 => 8,
		}
	}

	pub fn name(&self) -> &'static str {
		match self {
			Stype::Bool8 => "bool8",
			Stype::Int8 => "int8",
			Stype::Int16 => "int16",
			Stype::Int32 => "int32",
			Stype::Int64 => "int64",
			Stype::Float32 => "float32",
			Stype::Float64 => "float64",
			Stype::Str32 => "str32",
			Stype::Str64 => "str64",
			Stype::Obj64 => "obj64",
		}
	}
}

impl Display for Stype {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.name())
	}
}

impl FromStr for Stype {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.to_ascii_lowercase().as_str() {
			"bool" | "bool8" => Ok(Stype::Bool8),
			"int8" => Ok(Stype::Int8),
			"int16" => Ok(Stype::Int16),
			"int32" => Ok(Stype::Int32),
			"int64" => Ok(Stype::Int64),
			"float32" => Ok(Stype::Float32),
			"float64" => Ok(Stype::Float64),
			"str" | "str32" => Ok(Stype::Str32),
			"str64" => Ok(Stype::Str64),
			"obj" | "obj64" => Ok(Stype::Obj64),
			_ => return_error!(unknown_stype(s)),
		}
	}
}
