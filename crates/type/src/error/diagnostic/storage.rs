// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::path::Path;

use crate::{Stype, error::diagnostic::Diagnostic};

pub fn string_capacity_exceeded(bytes: usize, capacity: usize) -> Diagnostic {
	Diagnostic {
		code: "STORAGE_001".to_string(),
		message: format!("String data of {} bytes exceeds the str32 capacity of {} bytes", bytes, capacity),
		column: None,
		label: Some("str32 offsets cannot address this much data".to_string()),
		help: Some("Store the column as str64".to_string()),
		notes: vec![],
		cause: None,
	}
}

pub fn io_error(err: std::io::Error) -> Diagnostic {
	Diagnostic {
		code: "STORAGE_002".to_string(),
		message: format!("I/O error: {}", err),
		column: None,
		label: None,
		help: Some("Check that the path exists and is accessible".to_string()),
		notes: vec![format!("error kind: {:?}", err.kind())],
		cause: None,
	}
}

pub fn io_error_at(path: &Path, err: std::io::Error) -> Diagnostic {
	let mut diagnostic = io_error(err);
	diagnostic.label = Some(format!("while accessing `{}`", path.display()));
	diagnostic
}

pub fn stype_not_persistable(column: &str, stype: Stype) -> Diagnostic {
	Diagnostic {
		code: "STORAGE_003".to_string(),
		message: format!("Column `{}` of stype {} cannot be saved", column, stype),
		column: None,
		label: Some("boxed values have no on-disk representation".to_string()),
		help: Some("Convert the column to a primitive or string stype before saving".to_string()),
		notes: vec![],
		cause: None,
	}
}

pub fn mapped_size_mismatch(path: &Path, expected: usize, actual: usize) -> Diagnostic {
	Diagnostic {
		code: "STORAGE_004".to_string(),
		message: format!("File `{}` holds {} bytes, expected {}", path.display(), actual, expected),
		column: None,
		label: Some("file size does not match the frame manifest".to_string()),
		help: Some("The saved frame is incomplete or was modified; save it again".to_string()),
		notes: vec![],
		cause: None,
	}
}

pub fn allocation_failed(elements: usize, element_size: usize) -> Diagnostic {
	Diagnostic {
		code: "STORAGE_005".to_string(),
		message: format!("Cannot allocate a buffer of {} elements of {} bytes", elements, element_size),
		column: None,
		label: Some("allocation failed".to_string()),
		help: None,
		notes: vec![],
		cause: None,
	}
}

pub fn manifest_invalid(err: serde_json::Error) -> Diagnostic {
	Diagnostic {
		code: "STORAGE_006".to_string(),
		message: format!("Invalid frame manifest: {}", err),
		column: None,
		label: None,
		help: Some("The manifest is written by `save`; do not edit it by hand".to_string()),
		notes: vec![],
		cause: None,
	}
}

pub fn corrupted_strings(path: &Path, reason: &str) -> Diagnostic {
	Diagnostic {
		code: "STORAGE_007".to_string(),
		message: format!("String data in `{}` is corrupted: {}", path.display(), reason),
		column: None,
		label: None,
		help: Some("The saved frame was modified; save it again".to_string()),
		notes: vec![],
		cause: None,
	}
}

pub fn manifest_version_unsupported(found: u32, supported: u32) -> Diagnostic {
	Diagnostic {
		code: "STORAGE_008".to_string(),
		message: format!("Frame manifest version {} is not supported", found),
		column: None,
		label: Some(format!("this build reads version {}", supported)),
		help: Some("Save the frame again with this build".to_string()),
		notes: vec![],
		cause: None,
	}
}
