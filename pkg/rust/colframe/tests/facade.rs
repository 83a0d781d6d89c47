// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use colframe::{Column, Frame, Rbind, RbindOptions, Stype, Value, persist, rbind};
use colframe_testing::tempdir::temp_dir;

#[test]
fn test_save_open_then_append() {
	temp_dir(|dir| {
		let frame = Frame::new(vec![Column::int32("A", [Some(1), Some(2)])])?;
		persist::save(&frame, dir)?;

		let mut opened = persist::open(dir)?;
		let more = Frame::new(vec![Column::int8("A", [Some(3)])])?;
		opened.rbind(&[&more], RbindOptions::default())?;

		assert!(!opened.is_mapped());
		assert_eq!(opened.stypes(), vec![Stype::Int32]);
		assert_eq!(opened.to_values(), vec![vec![Value::Int32(1), Value::Int32(2), Value::Int32(3)]]);
		Ok(())
	})
	.unwrap();
}

#[test]
fn test_module_function() {
	let a = Frame::new(vec![Column::float64("F", [Some(0.5)])]).unwrap();
	let b = Frame::new(vec![Column::str32("F", [Some("x")])]).unwrap();
	let result = rbind(&[&a, &b]).unwrap();
	assert_eq!(result.stypes(), vec![Stype::Str32]);
	assert_eq!(result.columns()[0].values(), vec![Value::from("0.5"), Value::from("x")]);
}
