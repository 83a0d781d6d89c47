// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

#![cfg_attr(not(debug_assertions), deny(warnings))]
// #![cfg_attr(not(debug_assertions), deny(clippy::unwrap_used))]
// #![cfg_attr(not(debug_assertions), deny(clippy::expect_used))]

pub use colframe_type::Result;
pub use config::{RbindConfig, RbindOptions};
pub use rbind::{Rbind, RowBinder, error::RbindError, rbind, rbind_with};

pub mod config;
pub mod rbind;
