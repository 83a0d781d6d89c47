// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::path::{Path, PathBuf};

use colframe_type::Stype;
use serde::{Deserialize, Serialize};

pub(crate) const MANIFEST_FILE: &str = "frame.json";
pub(crate) const MANIFEST_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct Manifest {
	pub version: u32,
	pub nrows: usize,
	pub columns: Vec<ManifestColumn>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct ManifestColumn {
	pub name: String,
	pub stype: Stype,
}

/// Fixed-width columns live in `c{index}.bin`; strings split their offsets
/// into `c{index}.off` and their text into `c{index}.str`.
pub(crate) fn data_path(dir: &Path, index: usize) -> PathBuf {
	dir.join(format!("c{}.bin", index))
}

pub(crate) fn offsets_path(dir: &Path, index: usize) -> PathBuf {
	dir.join(format!("c{}.off", index))
}

pub(crate) fn strings_path(dir: &Path, index: usize) -> PathBuf {
	dir.join(format!("c{}.str", index))
}
