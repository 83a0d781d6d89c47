// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

#![cfg_attr(not(debug_assertions), deny(warnings))]
// #![cfg_attr(not(debug_assertions), deny(clippy::unwrap_used))]
// #![cfg_attr(not(debug_assertions), deny(clippy::expect_used))]

pub use error::{
	Error, Result,
	diagnostic::{Diagnostic, DiagnosticColumn, IntoDiagnostic},
};
pub use value::{
	Value,
	na::Na,
	stype::{Stype, common_stype},
	text,
};

pub mod error;
pub mod value;
