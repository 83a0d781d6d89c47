// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use colframe::{Column, ColumnData, Frame, Rbind, RbindOptions, Stype, Value, persist};
use colframe_testing::{frame::assert_frames_equal, tempdir::temp_dir};

fn ints(name: &str, values: &[i64]) -> Column {
	Column::new(name, ColumnData::infer_int(values.iter().copied().map(Some)))
}

fn text(name: &str, values: &[Option<&str>]) -> Column {
	Column::str32(name, values.iter().copied())
}

fn frame(columns: Vec<Column>) -> Frame {
	Frame::new(columns).unwrap()
}

fn append(destination: &mut Frame, sources: &[&Frame]) {
	destination.rbind(sources, RbindOptions::default()).unwrap();
}

#[test]
fn test_rbind_self() {
	let mut d = frame(vec![ints("A", &[1, 5, 7]), text("B", &[Some("one"), Some("two"), None])]);
	let snapshot = d.clone();
	append(&mut d, &[&snapshot, &snapshot, &snapshot]);
	assert_frames_equal(
		&d,
		&frame(vec![ints("A", &[1i64, 5, 7].repeat(4)), text("B", &[Some("one"), Some("two"), None].repeat(4))]),
	);
	assert_eq!(snapshot.nrows(), 3);
}

#[test]
fn test_rbind_self_view() {
	let mut d = frame(vec![ints("A", &[1, 2, 3, 4])]);
	let tail = d.slice(2..4).unwrap();
	append(&mut d, &[&tail]);
	assert_frames_equal(&d, &frame(vec![ints("A", &[1, 2, 3, 4, 3, 4])]));
}

#[test]
fn test_rbind_mmapped() {
	temp_dir(|dir| {
		let original = frame(vec![ints("A", &[1, 5, 7]), text("B", &[Some("one"), Some("two"), None])]);
		persist::save(&original, dir)?;
		drop(original);

		let mut d = persist::open(dir)?;
		assert!(d.is_mapped());
		append(&mut d, &[&frame(vec![ints("A", &[-1]), text("B", &[Some("zero")])])]);

		assert!(!d.is_mapped());
		assert_frames_equal(
			&d,
			&frame(vec![ints("A", &[1, 5, 7, -1]), text("B", &[Some("one"), Some("two"), None, Some("zero")])]),
		);

		let reopened = persist::open(dir)?;
		assert_eq!(reopened.nrows(), 3);
		Ok(())
	})
	.unwrap();
}

#[test]
fn test_rbind_mmapped_source() {
	temp_dir(|dir| {
		persist::save(&frame(vec![text("S", &[Some("x"), None])]), dir)?;
		let source = persist::open(dir)?;

		let mut d = frame(vec![text("S", &[Some("w")])]);
		append(&mut d, &[&source]);
		assert_frames_equal(&d, &frame(vec![text("S", &[Some("w"), Some("x"), None])]));
		Ok(())
	})
	.unwrap();
}

#[test]
fn test_rbind_views0() {
	let letters: Vec<String> = ('a'..='j').map(String::from).collect();
	let base = frame(vec![
		Column::int32("d", (0..10).map(Some)),
		Column::str32("s", letters.iter().map(Some)),
	]);
	let mut d = base.slice(3..7).unwrap();
	append(&mut d, &[&frame(vec![Column::int8("d", [Some(-1), Some(-2)]), text("s", &[Some("the"), Some("end")])])]);

	assert_eq!(d.stypes(), vec![Stype::Int32, Stype::Str32]);
	assert_frames_equal(
		&d,
		&frame(vec![
			Column::int32("d", [3, 4, 5, 6, -1, -2].map(Some)),
			text("s", &["d", "e", "f", "g", "the", "end"].map(Some)),
		]),
	);
	assert_eq!(base.nrows(), 10);
}

#[test]
fn test_rbind_views1() {
	let mut d = frame(vec![ints("A", &[1, 1, 2, 3, 5]), text("B", &["a", "b", "c", "d", "e"].map(Some))]);
	let s = frame(vec![ints("A", &[8, 13, 21]), text("B", &["x", "y", "z"].map(Some))]);
	append(&mut d, &[&s.take_rows(&[0, -1]).unwrap()]);
	assert_frames_equal(
		&d,
		&frame(vec![ints("A", &[1, 1, 2, 3, 5, 8, 21]), text("B", &["a", "b", "c", "d", "e", "x", "z"].map(Some))]),
	);
}

#[test]
fn test_rbind_views2() {
	let base = frame(vec![
		ints("A", &[1, 5, 7, 12, 0, 3]),
		text("B", &[Some("one"), Some("two"), None, Some("x"), Some("z"), Some("omega")]),
	]);
	let mut head = base.slice_step(None, Some(3), 1).unwrap();
	let last = base.take_rows(&[-1]).unwrap();
	append(&mut head, &[&last]);
	assert_frames_equal(
		&head,
		&frame(vec![ints("A", &[1, 5, 7, 3]), text("B", &[Some("one"), Some("two"), None, Some("omega")])]),
	);
}

#[test]
fn test_rbind_views3() {
	let d = frame(vec![ints("A", &[129, 4, 73, 86]), text("B", &[Some("eenie"), None, Some("meenie"), Some("teenie")])]);
	let mut d = d.slice_step(None, None, 2).unwrap();
	let s = frame(vec![ints("A", &[365, -9]), text("B", &[Some("mo"), Some("miney")])]);
	let s = s.slice_step(None, None, -1).unwrap();
	append(&mut d, &[&s]);
	assert_frames_equal(
		&d,
		&frame(vec![ints("A", &[129, 73, -9, 365]), text("B", &["eenie", "meenie", "miney", "mo"].map(Some))]),
	);
}

#[test]
fn test_rbind_filtered_view() {
	let base = frame(vec![Column::float64("F", [Some(0.5), None, Some(1.5), Some(2.5)])]);
	let mut d = frame(vec![Column::float64("F", [Some(-1.0)])]);
	append(&mut d, &[&base.filter(&[false, true, true, false]).unwrap()]);
	assert_eq!(d.columns()[0].values(), vec![Value::Float64(-1.0), Value::None, Value::Float64(1.5)]);
}

#[test]
fn test_issue1292() {
	let mut d = frame(vec![text("C0", &[None, None, None, Some("foo")])]);
	d.resize_rows(2).unwrap();
	let snapshot = d.clone();
	append(&mut d, &[&snapshot]);
	assert_eq!(d.to_values(), vec![vec![Value::None; 4]]);
	assert_eq!(d.stypes(), vec![Stype::Str32]);
}
