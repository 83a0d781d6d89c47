// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use crate::{Stype, error::diagnostic::Diagnostic};

pub fn unknown_stype(name: &str) -> Diagnostic {
	let known: Vec<&str> = Stype::ALL.iter().map(|s| s.name()).collect();
	Diagnostic {
		code: "STYPE_001".to_string(),
		message: format!("Unknown stype `{}`", name),
		column: None,
		label: None,
		help: Some(format!("Use one of: {}", known.join(", "))),
		notes: vec![],
		cause: None,
	}
}
