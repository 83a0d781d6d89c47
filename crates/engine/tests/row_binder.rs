// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use colframe_core::{Column, Frame, persist};
use colframe_engine::{RbindConfig, RbindOptions, RowBinder};
use colframe_testing::{frame::assert_frame, tempdir::temp_dir, tracing::init_tracing, values};
use colframe_type::{Stype, Value};

#[test]
fn test_binder_relocates_mapped_destination() {
	init_tracing();
	temp_dir(|dir| {
		let frame = Frame::new(vec![Column::int16("A", [Some(300), None]), Column::str32("S", [Some("a"), Some("")])])?;
		persist::save(&frame, dir)?;

		let mut opened = persist::open(dir)?;
		let source = Frame::new(vec![Column::str64("S", [Some("wide")]), Column::int8("A", [Some(-1)])])?;
		RowBinder::default().append(&mut opened, &[&source], RbindOptions::default())?;

		assert!(!opened.is_mapped());
		assert_frame(
			&opened,
			&["A", "S"],
			&[Stype::Int16, Stype::Str64],
			vec![values![300i16, Value::None, -1i16], values!["a", "", "wide"]],
		);
		Ok(())
	})
	.unwrap();
}

#[test]
fn test_binder_widens_text_past_configured_capacity() {
	init_tracing();
	let binder = RowBinder::new(RbindConfig {
		str32_capacity: 8,
	});
	let a = Frame::new(vec![Column::str32("S", [Some("01234")])]).unwrap();
	let b = Frame::new(vec![Column::int32("S", [Some(56789)])]).unwrap();

	let result = binder.concat(&[&a, &b], RbindOptions::default()).unwrap();
	assert_frame(&result, &["S"], &[Stype::Str64], vec![values!["01234", "56789"]]);

	let small = binder.concat(&[&a], RbindOptions::default()).unwrap();
	assert_eq!(small.stypes(), vec![Stype::Str32]);
}

#[test]
fn test_by_position_concat() {
	let a = Frame::new(vec![Column::int8("A", [Some(1)]), Column::int8("B", [Some(2)])]).unwrap();
	let b = Frame::new(vec![Column::float64("X", [Some(0.5)])]).unwrap();
	let result =
		RowBinder::default().concat(&[&a, &b], RbindOptions::by_position().with_force(true)).unwrap();
	assert_frame(
		&result,
		&["A", "B"],
		&[Stype::Float64, Stype::Int8],
		vec![values![1.0f64, 0.5f64], values![2i8, Value::None]],
	);
}
