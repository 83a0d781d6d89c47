// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{
	fmt::{self, Debug},
	mem::size_of,
	ops::Deref,
	slice,
};

use colframe_type::{Result, error, error::diagnostic::storage::allocation_failed};

mod mapped;

pub use mapped::MappedBuffer;

mod sealed {
	pub trait Sealed {}
}

/// Plain-old-data element of a column buffer. Every bit pattern is a valid
/// value and the type has no padding, so a buffer can be viewed as raw bytes
/// and mapped straight from a file.
pub trait Element: Copy + Debug + Default + PartialEq + Send + Sync + 'static + sealed::Sealed {}

macro_rules! impl_element {
	($($t:ty),*) => {
		$(
			impl sealed::Sealed for $t {}
			impl Element for $t {}
		)*
	};
}

impl_element!(u8, i8, i16, i32, i64, f32, f64);

/// Reserves room for exactly `capacity` elements, reporting failure instead
/// of aborting.
pub fn try_vec<T>(capacity: usize) -> Result<Vec<T>> {
	let mut result = Vec::new();
	result.try_reserve_exact(capacity).map_err(|_| error!(allocation_failed(capacity, size_of::<T>())))?;
	Ok(result)
}

pub fn bytes_of<T: Element>(data: &[T]) -> &[u8] {
	// SAFETY: `Element` types have no padding bytes.
	unsafe { slice::from_raw_parts(data.as_ptr() as *const u8, size_of_val(data)) }
}

/// Immutable element storage, either owned on the heap or mapped from a file.
#[derive(Clone)]
pub enum Buffer<T: Element> {
	Heap(Vec<T>),
	Mapped(MappedBuffer<T>),
}

impl<T: Element> Buffer<T> {
	pub fn is_mapped(&self) -> bool {
		matches!(self, Buffer::Mapped(_))
	}

	pub fn as_slice(&self) -> &[T] {
		match self {
			Buffer::Heap(data) => data.as_slice(),
			Buffer::Mapped(data) => data.as_slice(),
		}
	}
}

impl<T: Element> Deref for Buffer<T> {
	type Target = [T];

	fn deref(&self) -> &Self::Target {
		self.as_slice()
	}
}

impl<T: Element> From<Vec<T>> for Buffer<T> {
	fn from(data: Vec<T>) -> Self {
		Buffer::Heap(data)
	}
}

impl<T: Element> Debug for Buffer<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Buffer::Heap(data) => f.debug_tuple("Heap").field(data).finish(),
			Buffer::Mapped(data) => Debug::fmt(data, f),
		}
	}
}
