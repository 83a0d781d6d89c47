// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

/// Missing-value marker of a primitive buffer element.
///
/// Integers reserve their minimum value, floats use NaN. Booleans are stored
/// as `i8` and share its marker.
pub trait Na: Copy {
	const NA: Self;

	fn is_na(self) -> bool;
}

macro_rules! impl_integer_na {
	($($t:ty),*) => {
		$(
			impl Na for $t {
				const NA: Self = <$t>::MIN;

				#[inline]
				fn is_na(self) -> bool {
					self == <$t>::MIN
				}
			}
		)*
	};
}

impl_integer_na!(i8, i16, i32, i64);

impl Na for f32 {
	const NA: Self = f32::NAN;

	#[inline]
	fn is_na(self) -> bool {
		self.is_nan()
	}
}

impl Na for f64 {
	const NA: Self = f64::NAN;

	#[inline]
	fn is_na(self) -> bool {
		self.is_nan()
	}
}

#[cfg(test)]
pub mod tests {
	use super::*;

	#[test]
	fn test_integer_markers() {
		assert!(i8::NA.is_na());
		assert!(i16::MIN.is_na());
		assert!(!0i32.is_na());
		assert!(!(-1i64).is_na());
		assert!(!i64::MAX.is_na());
	}

	#[test]
	fn test_float_markers() {
		assert!(f32::NA.is_na());
		assert!(f64::NAN.is_na());
		assert!(!0.0f64.is_na());
		assert!(!f64::INFINITY.is_na());
	}
}
