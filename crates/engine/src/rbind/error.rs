// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use colframe_type::{Diagnostic, Error, IntoDiagnostic, Stype};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RbindError {
	#[error(
		"Cannot rbind frame with {} to a frame with {}",
		columns(.source_columns),
		columns(.destination_columns)
	)]
	ColumnCountMismatch {
		source_columns: usize,
		destination_columns: usize,
	},

	#[error("Column `{name}` is not found in the source frame")]
	ColumnNotFound {
		name: String,
	},

	#[error("Cannot allocate {rows} rows for column `{column}` of stype {stype}")]
	Allocation {
		column: String,
		stype: Stype,
		rows: usize,
		cause: Diagnostic,
	},
}

fn columns(count: &usize) -> String {
	if *count == 1 { "1 column".to_string() } else { format!("{} columns", count) }
}

const FORCE_HELP: &str = "pass `force = true` to fill the missing columns with NA";

impl RbindError {
	/// Whether the inputs cannot be reconciled without `force`.
	pub fn is_schema_error(&self) -> bool {
		matches!(self, RbindError::ColumnCountMismatch { .. } | RbindError::ColumnNotFound { .. })
	}
}

impl IntoDiagnostic for RbindError {
	fn into_diagnostic(self) -> Diagnostic {
		let message = self.to_string();
		match self {
			RbindError::ColumnCountMismatch {
				..
			} => Diagnostic {
				code: "RBIND_001".to_string(),
				message,
				column: None,
				label: Some("column counts differ".to_string()),
				help: Some(FORCE_HELP.to_string()),
				notes: vec!["without `force`, every source must have the destination's column count".to_string()],
				cause: None,
			},
			RbindError::ColumnNotFound {
				name,
			} => Diagnostic {
				code: "RBIND_002".to_string(),
				message,
				column: None,
				label: Some(format!("`{}` has no counterpart in the destination", name)),
				help: Some(FORCE_HELP.to_string()),
				notes: vec!["columns are matched by name; pass `bynames = false` to match them by position"
					.to_string()],
				cause: None,
			},
			RbindError::Allocation {
				column,
				stype,
				rows,
				cause,
			} => Diagnostic {
				code: "RBIND_003".to_string(),
				message,
				column: None,
				label: Some(format!("{} rows requested", rows)),
				help: None,
				notes: vec!["the destination frame was left unchanged".to_string()],
				cause: None,
			}
			.with_cause(cause)
			.with_column(column, stype),
		}
	}
}

impl From<RbindError> for Error {
	fn from(err: RbindError) -> Self {
		Error(err.into_diagnostic())
	}
}

#[cfg(test)]
pub mod tests {
	use super::*;

	#[test]
	fn test_count_mismatch_message() {
		let err = RbindError::ColumnCountMismatch {
			source_columns: 2,
			destination_columns: 1,
		};
		assert_eq!(err.to_string(), "Cannot rbind frame with 2 columns to a frame with 1 column");

		let err = RbindError::ColumnCountMismatch {
			source_columns: 1,
			destination_columns: 2,
		};
		assert_eq!(err.to_string(), "Cannot rbind frame with 1 column to a frame with 2 columns");
	}

	#[test]
	fn test_schema_errors_mention_force() {
		let err: Error = RbindError::ColumnNotFound {
			name: "C".to_string(),
		}
		.into();
		assert_eq!(err.code, "RBIND_002");
		let rendered = err.to_string();
		assert!(rendered.contains("Column `C` is not found in the source frame"));
		assert!(rendered.contains("force = true"));
	}

	#[test]
	fn test_is_schema_error() {
		let err = RbindError::Allocation {
			column: "A".to_string(),
			stype: Stype::Int64,
			rows: usize::MAX,
			cause: colframe_type::error::diagnostic::storage::allocation_failed(usize::MAX, 8),
		};
		assert!(!err.is_schema_error());

		let diagnostic = err.into_diagnostic();
		assert_eq!(diagnostic.code, "RBIND_003");
		assert_eq!(diagnostic.cause.map(|c| c.code), Some("STORAGE_005".to_string()));
		assert_eq!(diagnostic.column.map(|c| c.stype), Some(Stype::Int64));
	}
}
