// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

#![cfg_attr(not(debug_assertions), deny(warnings))]
// #![cfg_attr(not(debug_assertions), deny(clippy::unwrap_used))]
// #![cfg_attr(not(debug_assertions), deny(clippy::expect_used))]

pub use column::{
	Column, ColumnSource,
	builder::{ColumnBuilder, TextBuilder},
	data::ColumnData,
};
pub use container::{BoolContainer, NumberContainer, ObjectContainer, Offset, Utf8Container};
pub use frame::{Frame, naming::unique_names};
pub use storage::{Buffer, Element, MappedBuffer};
pub use view::{RowIndex, ViewColumn};

pub mod column;
pub mod container;
pub mod frame;
pub mod persist;
pub mod storage;
pub mod view;
