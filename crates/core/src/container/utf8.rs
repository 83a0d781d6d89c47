// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use colframe_type::{Result, Stype, error::diagnostic::storage::string_capacity_exceeded, return_error};

use crate::{
	storage::{Buffer, Element, try_vec},
	view::RowIndex,
};

/// Offset entry of a string column.
///
/// Entry `i` stores the end position of string `i` in the byte buffer; its
/// start is the end of entry `i - 1`. A missing string stores the bitwise
/// complement of its end, which is always negative, so `""` and NA differ.
pub trait Offset: Element + Ord {
	const STYPE: Stype;

	/// Largest byte position an offset can address.
	const MAX_BYTES: usize;

	fn present(end: usize) -> Option<Self>;

	fn missing(end: usize) -> Option<Self>;

	fn end(self) -> usize;

	fn is_missing(self) -> bool;
}

macro_rules! impl_offset {
	($t:ty, $stype:expr) => {
		impl Offset for $t {
			const STYPE: Stype = $stype;

			const MAX_BYTES: usize = <$t>::MAX as usize;

			#[inline]
			fn present(end: usize) -> Option<Self> {
				<$t>::try_from(end).ok()
			}

			#[inline]
			fn missing(end: usize) -> Option<Self> {
				<$t>::try_from(end).ok().map(|end| !end)
			}

			#[inline]
			fn end(self) -> usize {
				if self < 0 { (!self) as usize } else { self as usize }
			}

			#[inline]
			fn is_missing(self) -> bool {
				self < 0
			}
		}
	};
}

impl_offset!(i32, Stype::Str32);
impl_offset!(i64, Stype::Str64);

#[derive(Clone, Debug)]
pub struct Utf8Container<O: Offset> {
	offsets: Buffer<O>,
	bytes: Buffer<u8>,
}

impl<O: Offset> Utf8Container<O> {
	/// Assembles a container from parts that already satisfy the offset
	/// encoding.
	pub fn from_parts(offsets: Buffer<O>, bytes: Buffer<u8>) -> Self {
		Self {
			offsets,
			bytes,
		}
	}

	pub fn len(&self) -> usize {
		self.offsets.len()
	}

	pub fn is_empty(&self) -> bool {
		self.offsets.is_empty()
	}

	fn start(&self, index: usize) -> usize {
		if index == 0 { 0 } else { self.offsets[index - 1].end() }
	}

	pub fn get(&self, index: usize) -> Option<&str> {
		let offset = *self.offsets.get(index)?;
		if offset.is_missing() {
			return None;
		}
		std::str::from_utf8(&self.bytes[self.start(index)..offset.end()]).ok()
	}

	pub fn is_na(&self, index: usize) -> bool {
		self.offsets.get(index).is_none_or(|o| o.is_missing())
	}

	pub fn iter(&self) -> impl Iterator<Item = Option<&str>> + '_ {
		(0..self.len()).map(|idx| self.get(idx))
	}

	/// Bytes of text data referenced by the offsets.
	pub fn total_bytes(&self) -> usize {
		self.offsets.last().map(|o| o.end()).unwrap_or(0)
	}

	pub fn offsets(&self) -> &Buffer<O> {
		&self.offsets
	}

	pub fn bytes(&self) -> &Buffer<u8> {
		&self.bytes
	}

	pub fn is_mapped(&self) -> bool {
		self.offsets.is_mapped() || self.bytes.is_mapped()
	}

	/// Checks that offsets are monotonic, stay inside the byte buffer and cut
	/// it on UTF-8 boundaries.
	pub fn validate(&self) -> std::result::Result<(), String> {
		let mut start = 0;
		for (idx, offset) in self.offsets.iter().enumerate() {
			let end = offset.end();
			if end < start || end > self.bytes.len() {
				return Err(format!("offset {} of entry {} is out of order", end, idx));
			}
			if std::str::from_utf8(&self.bytes[start..end]).is_err() {
				return Err(format!("entry {} is not valid UTF-8", idx));
			}
			start = end;
		}
		Ok(())
	}

	pub fn take(&self, rows: &RowIndex) -> Result<Self> {
		let mut offsets = try_vec(rows.len())?;
		let mut bytes = Vec::new();
		for row in rows.iter() {
			let offset = self.offsets[row];
			let value = &self.bytes[self.start(row)..offset.end()];
			bytes.extend_from_slice(value);
			let next = if offset.is_missing() { O::missing(bytes.len()) } else { O::present(bytes.len()) };
			match next {
				Some(next) => offsets.push(next),
				None => return_error!(string_capacity_exceeded(bytes.len(), O::MAX_BYTES)),
			}
		}
		Ok(Self::from_parts(Buffer::Heap(offsets), Buffer::Heap(bytes)))
	}
}

impl Utf8Container<i64> {
	pub fn from_options<S: AsRef<str>>(values: impl IntoIterator<Item = Option<S>>) -> Self {
		let mut offsets = Vec::new();
		let mut bytes = Vec::new();
		for value in values {
			match value {
				Some(value) => {
					bytes.extend_from_slice(value.as_ref().as_bytes());
					offsets.push(bytes.len() as i64);
				}
				None => offsets.push(!(bytes.len() as i64)),
			}
		}
		Self::from_parts(Buffer::Heap(offsets), Buffer::Heap(bytes))
	}

	/// Re-encodes with 32-bit offsets when the text data fits within
	/// `capacity` bytes, otherwise hands the container back unchanged.
	pub fn narrow(self, capacity: usize) -> std::result::Result<Utf8Container<i32>, Self> {
		if self.total_bytes() > capacity.min(i32::MAX as usize) {
			return Err(self);
		}
		let offsets = self
			.offsets
			.iter()
			.map(|&o| {
				if o.is_missing() {
					!((!o) as i32)
				} else {
					o as i32
				}
			})
			.collect::<Vec<i32>>();
		Ok(Utf8Container::from_parts(Buffer::Heap(offsets), self.bytes))
	}
}

#[cfg(test)]
pub mod tests {
	use super::*;

	fn strings() -> Utf8Container<i64> {
		Utf8Container::from_options([Some("a"), Some("bc"), None, Some(""), Some("def")])
	}

	#[test]
	fn test_get() {
		let container = strings();
		assert_eq!(container.len(), 5);
		assert_eq!(container.get(0), Some("a"));
		assert_eq!(container.get(1), Some("bc"));
		assert_eq!(container.get(2), None);
		assert_eq!(container.get(3), Some(""));
		assert_eq!(container.get(4), Some("def"));
		assert_eq!(container.get(5), None);
	}

	#[test]
	fn test_empty_string_is_not_missing() {
		let container = strings();
		assert!(container.is_na(2));
		assert!(!container.is_na(3));
	}

	#[test]
	fn test_missing_offset_encoding() {
		let container = strings();
		assert_eq!(&container.offsets()[..], &[1, 3, !3, 3, 6]);
		assert_eq!(container.total_bytes(), 6);
	}

	#[test]
	fn test_leading_missing() {
		let container = Utf8Container::from_options([None, Some("x")]);
		assert_eq!(container.get(0), None);
		assert_eq!(container.get(1), Some("x"));
	}

	#[test]
	fn test_narrow() {
		let narrow = strings().narrow(i32::MAX as usize).unwrap();
		assert_eq!(&narrow.offsets()[..], &[1, 3, !3, 3, 6]);
		assert_eq!(narrow.iter().collect::<Vec<_>>(), strings().iter().collect::<Vec<_>>());
	}

	#[test]
	fn test_narrow_refuses_when_over_capacity() {
		let wide = strings().narrow(5).unwrap_err();
		assert_eq!(wide.total_bytes(), 6);
	}

	#[test]
	fn test_take() {
		let taken = strings().take(&RowIndex::array(vec![4, 2, 0, 3])).unwrap();
		assert_eq!(taken.iter().collect::<Vec<_>>(), vec![Some("def"), None, Some("a"), Some("")]);
		assert!(taken.validate().is_ok());
	}

	#[test]
	fn test_validate_rejects_out_of_order_offsets() {
		let container = Utf8Container::<i32>::from_parts(Buffer::Heap(vec![3, 1]), Buffer::Heap(b"abc".to_vec()));
		assert!(container.validate().is_err());
	}

	#[test]
	fn test_validate_rejects_split_code_point() {
		let container =
			Utf8Container::<i32>::from_parts(Buffer::Heap(vec![1, 2]), Buffer::Heap("é".as_bytes().to_vec()));
		assert!(container.validate().is_err());
	}
}
