// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Row-binding: appends the rows of source frames to a destination frame.
//!
//! A call runs in four phases. The column sets are reconciled into a
//! [`RbindPlan`], a result stype is resolved per column, every contribution
//! is snapshotted into immutable data, and finally new buffers are built and
//! swapped into the destination. Every error surfaces before the swap, so a
//! failed call leaves the destination untouched.

use colframe_core::Frame;
use colframe_type::Result;
use tracing::{debug, instrument};

use crate::{RbindConfig, RbindOptions};

mod coerce;
pub mod error;
mod execute;
pub mod plan;
mod resolve;
mod snapshot;

pub use plan::{ColumnPlan, RbindPlan};

#[derive(Debug, Clone, Default)]
pub struct RowBinder {
	config: RbindConfig,
}

impl RowBinder {
	pub fn new(config: RbindConfig) -> Self {
		Self {
			config,
		}
	}

	pub fn config(&self) -> &RbindConfig {
		&self.config
	}

	/// Appends the rows of `sources`, in order, to `destination`.
	///
	/// To append a frame to itself, pass a clone of it; the clone shares the
	/// buffers and keeps reading the rows as they were before the call.
	#[instrument(
		name = "rbind::append",
		level = "debug",
		skip_all,
		fields(sources = sources.len(), bynames = options.bynames, force = options.force)
	)]
	pub fn append(&self, destination: &mut Frame, sources: &[&Frame], options: RbindOptions) -> Result<()> {
		let plan = plan::plan(destination, sources, options)?;
		if plan.is_noop() {
			debug!("no rows to append");
			return Ok(());
		}
		debug!(columns = plan.columns.len(), sources = plan.sources.len(), "planned rbind");

		let stypes = resolve::resolve(&plan, destination, sources)?;
		let columns = snapshot::snapshot(&plan, &stypes, destination, sources)?;
		let rows: Vec<usize> = plan.sources.iter().map(|&index| sources[index].nrows()).collect();

		execute::execute(destination, columns, &rows, &self.config)
	}

	/// Binds `sources` into a new frame, leaving every input untouched.
	pub fn concat(&self, sources: &[&Frame], options: RbindOptions) -> Result<Frame> {
		let mut result = Frame::empty();
		self.append(&mut result, sources, options)?;
		Ok(result)
	}
}

/// Member-style row-binding on a frame.
pub trait Rbind {
	fn rbind(&mut self, sources: &[&Frame], options: RbindOptions) -> Result<()>;
}

impl Rbind for Frame {
	fn rbind(&mut self, sources: &[&Frame], options: RbindOptions) -> Result<()> {
		RowBinder::default().append(self, sources, options)
	}
}

/// Binds `frames` by name into a new frame.
pub fn rbind(frames: &[&Frame]) -> Result<Frame> {
	rbind_with(frames, RbindOptions::default())
}

pub fn rbind_with(frames: &[&Frame], options: RbindOptions) -> Result<Frame> {
	RowBinder::default().concat(frames, options)
}
