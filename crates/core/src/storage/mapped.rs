// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{
	fmt::{self, Debug},
	fs::{self, File},
	marker::PhantomData,
	mem::size_of,
	path::{Path, PathBuf},
	slice,
	sync::Arc,
};

use colframe_type::{
	Result, error,
	error::diagnostic::storage::{io_error_at, mapped_size_mismatch},
};
use memmap2::Mmap;
use tracing::trace;

use crate::storage::{Element, bytes_of};

/// Read-only elements backed by a memory-mapped file. Clones share the
/// mapping.
pub struct MappedBuffer<T: Element> {
	map: Option<Arc<Mmap>>,
	len: usize,
	path: PathBuf,
	_marker: PhantomData<T>,
}

impl<T: Element> Clone for MappedBuffer<T> {
	fn clone(&self) -> Self {
		Self {
			map: self.map.clone(),
			len: self.len,
			path: self.path.clone(),
			_marker: PhantomData,
		}
	}
}

impl<T: Element> MappedBuffer<T> {
	/// Maps `path` whose size must be a whole number of elements. Empty files
	/// are not mapped at all.
	pub fn open(path: &Path) -> Result<Self> {
		let file = File::open(path).map_err(|e| error!(io_error_at(path, e)))?;
		let size = file.metadata().map_err(|e| error!(io_error_at(path, e)))?.len() as usize;

		let elem = size_of::<T>();
		if size % elem != 0 {
			return Err(error!(mapped_size_mismatch(path, size - size % elem, size)));
		}

		let map = if size == 0 {
			None
		} else {
			// SAFETY: the file is opened read-only and never written through this
			// process while mapped.
			let map = unsafe { Mmap::map(&file) }.map_err(|e| error!(io_error_at(path, e)))?;
			Some(Arc::new(map))
		};

		trace!(path = %path.display(), bytes = size, "mapped buffer");

		Ok(Self {
			map,
			len: size / elem,
			path: path.to_path_buf(),
			_marker: PhantomData,
		})
	}

	/// Writes `data` as raw native-endian elements.
	pub fn write(path: &Path, data: &[T]) -> Result<()> {
		fs::write(path, bytes_of(data)).map_err(|e| error!(io_error_at(path, e)))
	}

	pub fn len(&self) -> usize {
		self.len
	}

	pub fn is_empty(&self) -> bool {
		self.len == 0
	}

	pub fn path(&self) -> &Path {
		&self.path
	}

	pub fn as_slice(&self) -> &[T] {
		match &self.map {
			None => &[],
			// SAFETY: mappings are page aligned, hold exactly `len` elements and
			// every bit pattern is a valid `Element`.
			Some(map) => unsafe { slice::from_raw_parts(map.as_ptr() as *const T, self.len) },
		}
	}
}

impl<T: Element> Debug for MappedBuffer<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Mapped").field("path", &self.path).field("data", &self.as_slice()).finish()
	}
}
