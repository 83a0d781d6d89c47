// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

mod boolean;
mod number;
mod object;
mod utf8;

pub use boolean::BoolContainer;
pub use number::NumberContainer;
pub use object::ObjectContainer;
pub use utf8::{Offset, Utf8Container};
