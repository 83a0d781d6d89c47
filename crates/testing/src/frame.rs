// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use colframe_core::Frame;
use colframe_type::{Stype, Value};

/// Asserts that two frames have the same shape, names, stypes and values.
/// Missing values compare equal to each other.
#[track_caller]
pub fn assert_frames_equal(actual: &Frame, expected: &Frame) {
	assert_eq!(actual.shape(), expected.shape(), "frame shapes differ");
	assert_eq!(actual.names(), expected.names(), "column names differ");
	assert_eq!(actual.stypes(), expected.stypes(), "column stypes differ");
	for (left, right) in actual.columns().iter().zip(expected.columns()) {
		assert_eq!(left.values(), right.values(), "values of column `{}` differ", left.name());
	}
}

/// Asserts a frame's layout and column-major values in one go.
#[track_caller]
pub fn assert_frame(frame: &Frame, names: &[&str], stypes: &[Stype], values: Vec<Vec<Value>>) {
	assert_eq!(frame.names(), names, "column names differ");
	assert_eq!(frame.stypes(), stypes, "column stypes differ");
	assert_eq!(frame.to_values(), values, "values differ");
	for column in frame.columns() {
		assert_eq!(column.len(), frame.nrows(), "column `{}` length differs from the frame", column.name());
	}
}

/// Shorthand for building expected values: `values![1i8, None, 3i8]`.
#[macro_export]
macro_rules! values {
	($($value:expr),* $(,)?) => {
		vec![$($crate::frame::to_value($value)),*]
	};
}

#[doc(hidden)]
pub fn to_value<T: Into<Value>>(value: T) -> Value {
	value.into()
}

#[cfg(test)]
pub mod tests {
	use colframe_core::Column;

	use super::*;

	#[test]
	fn test_values_macro() {
		let values: Vec<Value> = values![1i8, Value::None, "a"];
		assert_eq!(values, vec![Value::Int8(1), Value::None, Value::from("a")]);
	}

	#[test]
	fn test_assert_frame() {
		let frame = Frame::new(vec![Column::int8("A", [Some(1), None])]).unwrap();
		assert_frame(&frame, &["A"], &[Stype::Int8], vec![values![1i8, Value::None]]);
	}

	#[test]
	#[should_panic(expected = "column stypes differ")]
	fn test_assert_frames_equal_detects_stype() {
		let left = Frame::new(vec![Column::int8("A", [Some(1)])]).unwrap();
		let right = Frame::new(vec![Column::int16("A", [Some(1)])]).unwrap();
		assert_frames_equal(&left, &right);
	}
}
