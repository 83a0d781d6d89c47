// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::Stype;

pub mod na;
pub mod stype;
pub mod text;

/// A single cell read out of a column.
///
/// `None` is the missing value of every stype. Float values compare equal
/// when both are NaN so that boxed objects holding NaN stay comparable.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum Value {
	None,
	Bool(bool),
	Int8(i8),
	Int16(i16),
	Int32(i32),
	Int64(i64),
	Float32(f32),
	Float64(f64),
	Str(String),
	Tuple(Vec<Value>),
}

impl Value {
	pub fn is_none(&self) -> bool {
		matches!(self, Value::None)
	}

	/// The stype a column would need to hold this value, `None` for the
	/// missing value.
	pub fn stype(&self) -> Option<Stype> {
		match self {
			Value::None => None,
			Value::Bool(_) => Some(Stype::Bool8),
			Value::Int8(_) => Some(Stype::Int8),
			Value::Int16(_) => Some(Stype::Int16),
			Value::Int32(_) => Some(Stype::Int32),
			Value::Int64(_) => Some(Stype::Int64),
			Value::Float32(_) => Some(Stype::Float32),
			Value::Float64(_) => Some(Stype::Float64),
			Value::Str(_) => Some(Stype::Str32),
			Value::Tuple(_) => Some(Stype::Obj64),
		}
	}

	pub fn tuple(values: impl IntoIterator<Item = Value>) -> Self {
		Value::Tuple(values.into_iter().collect())
	}
}

impl PartialEq for Value {
	fn eq(&self, other: &Self) -> bool {
		match (self, other) {
			(Value::None, Value::None) => true,
			(Value::Bool(l), Value::Bool(r)) => l == r,
			(Value::Int8(l), Value::Int8(r)) => l == r,
			(Value::Int16(l), Value::Int16(r)) => l == r,
			(Value::Int32(l), Value::Int32(r)) => l == r,
			(Value::Int64(l), Value::Int64(r)) => l == r,
			(Value::Float32(l), Value::Float32(r)) => l == r || (l.is_nan() && r.is_nan()),
			(Value::Float64(l), Value::Float64(r)) => l == r || (l.is_nan() && r.is_nan()),
			(Value::Str(l), Value::Str(r)) => l == r,
			(Value::Tuple(l), Value::Tuple(r)) => l == r,
			_ => false,
		}
	}
}

impl Display for Value {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			Value::None => f.write_str("None"),
			Value::Bool(true) => f.write_str("True"),
			Value::Bool(false) => f.write_str("False"),
			Value::Int8(v) => Display::fmt(v, f),
			Value::Int16(v) => Display::fmt(v, f),
			Value::Int32(v) => Display::fmt(v, f),
			Value::Int64(v) => Display::fmt(v, f),
			Value::Float32(v) => f.write_str(&text::f32_to_text(*v)),
			Value::Float64(v) => f.write_str(&text::f64_to_text(*v)),
			Value::Str(v) => write!(f, "{:?}", v),
			Value::Tuple(values) => {
				f.write_str("(")?;
				for (idx, value) in values.iter().enumerate() {
					if idx > 0 {
						f.write_str(", ")?;
					}
					Display::fmt(value, f)?;
				}
				f.write_str(")")
			}
		}
	}
}

impl From<bool> for Value {
	fn from(value: bool) -> Self {
		Value::Bool(value)
	}
}

impl From<i8> for Value {
	fn from(value: i8) -> Self {
		Value::Int8(value)
	}
}

impl From<i16> for Value {
	fn from(value: i16) -> Self {
		Value::Int16(value)
	}
}

impl From<i32> for Value {
	fn from(value: i32) -> Self {
		Value::Int32(value)
	}
}

impl From<i64> for Value {
	fn from(value: i64) -> Self {
		Value::Int64(value)
	}
}

impl From<f32> for Value {
	fn from(value: f32) -> Self {
		Value::Float32(value)
	}
}

impl From<f64> for Value {
	fn from(value: f64) -> Self {
		Value::Float64(value)
	}
}

impl From<&str> for Value {
	fn from(value: &str) -> Self {
		Value::Str(value.to_string())
	}
}

impl From<String> for Value {
	fn from(value: String) -> Self {
		Value::Str(value)
	}
}

impl<T: Into<Value>> From<Option<T>> for Value {
	fn from(value: Option<T>) -> Self {
		match value {
			Some(value) => value.into(),
			None => Value::None,
		}
	}
}

#[cfg(test)]
pub mod tests {
	use super::*;

	#[test]
	fn test_nan_equals_nan() {
		assert_eq!(Value::Float64(f64::NAN), Value::Float64(f64::NAN));
		assert_eq!(Value::Float32(f32::NAN), Value::Float32(f32::NAN));
		assert_ne!(Value::Float64(f64::NAN), Value::Float64(1.0));
	}

	#[test]
	fn test_variants_of_different_width_differ() {
		assert_ne!(Value::Int8(1), Value::Int16(1));
		assert_ne!(Value::Bool(true), Value::Int8(1));
	}

	#[test]
	fn test_from_option() {
		assert_eq!(Value::from(Some(3i16)), Value::Int16(3));
		assert_eq!(Value::from(None::<i16>), Value::None);
		assert_eq!(Value::from(Some("a")), Value::Str("a".to_string()));
	}

	#[test]
	fn test_stype() {
		assert_eq!(Value::None.stype(), None);
		assert_eq!(Value::Bool(false).stype(), Some(Stype::Bool8));
		assert_eq!(Value::from("x").stype(), Some(Stype::Str32));
		assert_eq!(Value::tuple([Value::Int8(3)]).stype(), Some(Stype::Obj64));
	}

	#[test]
	fn test_display() {
		let tuple = Value::tuple([Value::Int8(3), Value::from("foo")]);
		assert_eq!(tuple.to_string(), "(3, \"foo\")");
		assert_eq!(Value::Float64(2.0).to_string(), "2.0");
		assert_eq!(Value::None.to_string(), "None");
		assert_eq!(Value::Bool(false).to_string(), "False");
	}
}
