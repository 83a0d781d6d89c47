// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

#![cfg_attr(not(debug_assertions), deny(warnings))]

pub use colframe_core as core;
pub use colframe_engine as engine;
pub use colframe_type as r#type;

pub use colframe_core::{Column, ColumnData, Frame, RowIndex, persist};
pub use colframe_engine::{Rbind, RbindConfig, RbindError, RbindOptions, RowBinder, rbind, rbind_with};
pub use colframe_type::{Diagnostic, Error, Result, Stype, Value};
