// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use crate::Stype;

impl Stype {
	/// Position on the promotion ladder.
	pub fn rank(&self) -> u8 {
		*self as u8
	}

	/// Least upper bound of two stypes.
	pub fn join(self, other: Stype) -> Stype {
		Stype::ALL[self.rank().max(other.rank()) as usize]
	}

	/// Whether values of `self` can be coerced into `target` without loss.
	pub fn promotes_to(&self, target: Stype) -> bool {
		self.rank() <= target.rank()
	}
}

/// Join over every stype yielded, or `None` when nothing contributes.
pub fn common_stype<I>(stypes: I) -> Option<Stype>
where
	I: IntoIterator<Item = Stype>,
{
	stypes.into_iter().reduce(Stype::join)
}
