// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fs;

use colframe_core::{Column, Frame, persist};
use colframe_testing::{frame::assert_frames_equal, tempdir::temp_dir};
use colframe_type::{Stype, Value};

fn sample() -> Frame {
	Frame::new(vec![
		Column::bool8("B", [Some(true), None, Some(false)]),
		Column::int16("I", [Some(-3), Some(1000), None]),
		Column::float64("F", [Some(0.5), None, Some(-2.0)]),
		Column::str32("S", [Some("alpha"), None, Some("")]),
		Column::str64("W", [None, Some("wide"), Some("z")]),
	])
	.unwrap()
}

#[test]
fn test_save_then_open_is_mapped() {
	temp_dir(|dir| {
		let frame = sample();
		persist::save(&frame, dir)?;

		let opened = persist::open(dir)?;
		assert!(opened.is_mapped());
		assert!(opened.columns().iter().all(|c| c.is_mapped()));
		assert_frames_equal(&opened, &frame);
		Ok(())
	})
	.unwrap();
}

#[test]
fn test_save_materializes_views() {
	temp_dir(|dir| {
		let view = sample().slice_step(None, None, -1)?;
		persist::save(&view, dir)?;

		let opened = persist::open(dir)?;
		assert_eq!(opened.columns()[1].values(), vec![Value::None, Value::Int16(1000), Value::Int16(-3)]);
		Ok(())
	})
	.unwrap();
}

#[test]
fn test_open_empty_columns() {
	temp_dir(|dir| {
		let frame = Frame::new(vec![Column::int32("A", []), Column::str32::<&str>("S", [])])?;
		persist::save(&frame, dir)?;

		let opened = persist::open(dir)?;
		assert_eq!(opened.shape(), (0, 2));
		assert_eq!(opened.stypes(), vec![Stype::Int32, Stype::Str32]);
		Ok(())
	})
	.unwrap();
}

#[test]
fn test_objects_cannot_be_saved() {
	temp_dir(|dir| {
		let frame = Frame::new(vec![Column::obj64("O", [Value::Int8(1)])])?;
		let err = persist::save(&frame, dir).unwrap_err();
		assert_eq!(err.code, "STORAGE_003");
		assert!(!dir.join("frame.json").exists());
		Ok(())
	})
	.unwrap();
}

#[test]
fn test_truncated_file_is_rejected() {
	temp_dir(|dir| {
		persist::save(&sample(), dir)?;
		fs::write(dir.join("c1.bin"), [0u8; 2])?;

		let err = persist::open(dir).unwrap_err();
		assert_eq!(err.code, "STORAGE_004");
		Ok(())
	})
	.unwrap();
}

#[test]
fn test_corrupted_strings_are_rejected() {
	temp_dir(|dir| {
		persist::save(&sample(), dir)?;
		fs::write(dir.join("c3.str"), [0xffu8; 5])?;

		let err = persist::open(dir).unwrap_err();
		assert_eq!(err.code, "STORAGE_007");
		Ok(())
	})
	.unwrap();
}

#[test]
fn test_missing_directory() {
	temp_dir(|dir| {
		let err = persist::open(&dir.join("nope")).unwrap_err();
		assert_eq!(err.code, "STORAGE_002");
		Ok(())
	})
	.unwrap();
}

#[test]
fn test_invalid_manifest() {
	temp_dir(|dir| {
		fs::write(dir.join("frame.json"), b"{ not json")?;
		let err = persist::open(dir).unwrap_err();
		assert_eq!(err.code, "STORAGE_006");
		Ok(())
	})
	.unwrap();
}

#[test]
fn test_unsupported_manifest_version() {
	temp_dir(|dir| {
		persist::save(&sample(), dir)?;
		let path = dir.join("frame.json");
		let mut manifest: serde_json::Value = serde_json::from_slice(&fs::read(&path)?)?;
		manifest["version"] = serde_json::json!(99);
		fs::write(&path, serde_json::to_vec(&manifest)?)?;

		let err = persist::open(dir).unwrap_err();
		assert_eq!(err.code, "STORAGE_008");
		Ok(())
	})
	.unwrap();
}

#[test]
fn test_huge_row_count_is_a_size_mismatch() {
	temp_dir(|dir| {
		persist::save(&sample(), dir)?;
		let path = dir.join("frame.json");
		let mut manifest: serde_json::Value = serde_json::from_slice(&fs::read(&path)?)?;
		manifest["nrows"] = serde_json::json!(usize::MAX);
		fs::write(&path, serde_json::to_vec(&manifest)?)?;

		let err = persist::open(dir).unwrap_err();
		assert_eq!(err.code, "STORAGE_004");
		Ok(())
	})
	.unwrap();
}
