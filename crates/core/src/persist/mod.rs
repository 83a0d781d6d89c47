// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Saves frames as raw column files and reopens them memory-mapped.

use std::{fs, path::Path};

use colframe_type::{
	Result, Stype, error,
	error::diagnostic::storage::{
		corrupted_strings, io_error_at, manifest_version_unsupported, mapped_size_mismatch,
		stype_not_persistable,
	},
	return_error,
};
use tracing::{debug, instrument};

use crate::{
	column::{Column, data::ColumnData},
	container::{BoolContainer, NumberContainer, Offset, Utf8Container},
	frame::Frame,
	storage::{Buffer, Element, MappedBuffer},
};

mod manifest;

use manifest::{MANIFEST_FILE, MANIFEST_VERSION, Manifest, ManifestColumn, data_path, offsets_path, strings_path};

/// Writes `frame` into `dir`, creating it if needed. View columns are
/// materialized first; `obj64` columns cannot be saved.
#[instrument(name = "persist::save", level = "debug", skip_all, fields(dir = %dir.display(), nrows = frame.nrows()))]
pub fn save(frame: &Frame, dir: &Path) -> Result<()> {
	if let Some(column) = frame.columns().iter().find(|c| c.stype() == Stype::Obj64) {
		return_error!(stype_not_persistable(column.name(), Stype::Obj64));
	}

	fs::create_dir_all(dir).map_err(|e| error!(io_error_at(dir, e)))?;

	let mut columns = Vec::with_capacity(frame.ncols());
	for (index, column) in frame.columns().iter().enumerate() {
		let data = column.materialize()?;
		match data.as_ref() {
			ColumnData::Bool8(c) => MappedBuffer::write(&data_path(dir, index), c.as_slice())?,
			ColumnData::Int8(c) => MappedBuffer::write(&data_path(dir, index), &c[..])?,
			ColumnData::Int16(c) => MappedBuffer::write(&data_path(dir, index), &c[..])?,
			ColumnData::Int32(c) => MappedBuffer::write(&data_path(dir, index), &c[..])?,
			ColumnData::Int64(c) => MappedBuffer::write(&data_path(dir, index), &c[..])?,
			ColumnData::Float32(c) => MappedBuffer::write(&data_path(dir, index), &c[..])?,
			ColumnData::Float64(c) => MappedBuffer::write(&data_path(dir, index), &c[..])?,
			ColumnData::Str32(c) => save_strings(dir, index, c)?,
			ColumnData::Str64(c) => save_strings(dir, index, c)?,
			ColumnData::Obj64(_) => return_error!(stype_not_persistable(column.name(), Stype::Obj64)),
		}
		columns.push(ManifestColumn {
			name: column.name().to_string(),
			stype: data.stype(),
		});
	}

	let manifest = Manifest {
		version: MANIFEST_VERSION,
		nrows: frame.nrows(),
		columns,
	};
	let path = dir.join(MANIFEST_FILE);
	fs::write(&path, serde_json::to_vec_pretty(&manifest)?).map_err(|e| error!(io_error_at(&path, e)))?;

	debug!(columns = manifest.columns.len(), "frame saved");
	Ok(())
}

fn save_strings<O: Offset>(dir: &Path, index: usize, container: &Utf8Container<O>) -> Result<()> {
	MappedBuffer::write(&offsets_path(dir, index), &container.offsets()[..])?;
	MappedBuffer::write(&strings_path(dir, index), &container.bytes()[..container.total_bytes()])
}

/// Opens a frame saved by [`save`] with every column memory-mapped.
#[instrument(name = "persist::open", level = "debug", skip_all, fields(dir = %dir.display()))]
pub fn open(dir: &Path) -> Result<Frame> {
	let path = dir.join(MANIFEST_FILE);
	let bytes = fs::read(&path).map_err(|e| error!(io_error_at(&path, e)))?;
	let manifest: Manifest = serde_json::from_slice(&bytes)?;
	if manifest.version != MANIFEST_VERSION {
		return_error!(manifest_version_unsupported(manifest.version, MANIFEST_VERSION));
	}

	let mut columns = Vec::with_capacity(manifest.columns.len());
	for (index, entry) in manifest.columns.iter().enumerate() {
		let data = match entry.stype {
			Stype::Bool8 => ColumnData::Bool8(BoolContainer::from_buffer(open_fixed(dir, index, manifest.nrows)?)),
			Stype::Int8 => ColumnData::Int8(NumberContainer::from_buffer(open_fixed(dir, index, manifest.nrows)?)),
			Stype::Int16 => ColumnData::Int16(NumberContainer::from_buffer(open_fixed(dir, index, manifest.nrows)?)),
			Stype::Int32 => ColumnData::Int32(NumberContainer::from_buffer(open_fixed(dir, index, manifest.nrows)?)),
			Stype::Int64 => ColumnData::Int64(NumberContainer::from_buffer(open_fixed(dir, index, manifest.nrows)?)),
			Stype::Float32 => {
				ColumnData::Float32(NumberContainer::from_buffer(open_fixed(dir, index, manifest.nrows)?))
			}
			Stype::Float64 => {
				ColumnData::Float64(NumberContainer::from_buffer(open_fixed(dir, index, manifest.nrows)?))
			}
			Stype::Str32 => ColumnData::Str32(open_strings(dir, index, manifest.nrows)?),
			Stype::Str64 => ColumnData::Str64(open_strings(dir, index, manifest.nrows)?),
			Stype::Obj64 => return_error!(stype_not_persistable(&entry.name, Stype::Obj64)),
		};
		columns.push(Column::new(entry.name.clone(), data));
	}

	let mut frame = Frame::new(columns)?;
	if frame.ncols() == 0 {
		frame.replace_columns(Vec::new(), manifest.nrows)?;
	}
	debug!(nrows = frame.nrows(), ncols = frame.ncols(), "frame opened");
	Ok(frame)
}

fn open_fixed<T: Element>(dir: &Path, index: usize, nrows: usize) -> Result<Buffer<T>> {
	open_exact(&data_path(dir, index), nrows)
}

fn open_exact<T: Element>(path: &Path, nrows: usize) -> Result<Buffer<T>> {
	let buffer = MappedBuffer::<T>::open(path)?;
	if buffer.len() != nrows {
		let expected = nrows.saturating_mul(size_of::<T>());
		return_error!(mapped_size_mismatch(path, expected, buffer.len() * size_of::<T>()));
	}
	Ok(Buffer::Mapped(buffer))
}

fn open_strings<O: Offset>(dir: &Path, index: usize, nrows: usize) -> Result<Utf8Container<O>> {
	let offsets = open_exact::<O>(&offsets_path(dir, index), nrows)?;
	let path = strings_path(dir, index);
	let bytes = MappedBuffer::<u8>::open(&path)?;

	let container = Utf8Container::from_parts(offsets, Buffer::Mapped(bytes));
	if let Err(reason) = container.validate() {
		return_error!(corrupted_strings(&path, &reason));
	}
	Ok(container)
}
