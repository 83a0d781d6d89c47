// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use crate::error::diagnostic::Diagnostic;

pub fn column_length_mismatch(column: &str, expected: usize, actual: usize) -> Diagnostic {
	Diagnostic {
		code: "FRAME_001".to_string(),
		message: format!("Column `{}` has {} rows, but the frame has {} rows", column, actual, expected),
		column: None,
		label: Some("all columns of a frame must have the same number of rows".to_string()),
		help: Some("Pad or trim the column before adding it to the frame".to_string()),
		notes: vec![],
		cause: None,
	}
}

pub fn row_index_out_of_bounds(index: isize, nrows: usize) -> Diagnostic {
	Diagnostic {
		code: "FRAME_002".to_string(),
		message: format!("Row index {} is out of bounds for a frame with {} rows", index, nrows),
		column: None,
		label: Some("index out of bounds".to_string()),
		help: Some(format!("Use an index in the range [-{}, {})", nrows, nrows)),
		notes: vec!["Negative indices count from the end of the frame".to_string()],
		cause: None,
	}
}

pub fn mask_length_mismatch(mask_len: usize, nrows: usize) -> Diagnostic {
	Diagnostic {
		code: "FRAME_003".to_string(),
		message: format!("Row mask has {} entries, but the frame has {} rows", mask_len, nrows),
		column: None,
		label: Some("mask length mismatch".to_string()),
		help: Some("Provide exactly one boolean per row".to_string()),
		notes: vec![],
		cause: None,
	}
}

pub fn zero_slice_step() -> Diagnostic {
	Diagnostic {
		code: "FRAME_004".to_string(),
		message: "Slice step cannot be zero".to_string(),
		column: None,
		label: None,
		help: Some("Use a positive step to select forward or a negative step to select backward".to_string()),
		notes: vec![],
		cause: None,
	}
}
