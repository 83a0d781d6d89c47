// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use tracing_subscriber::{EnvFilter, fmt};

/// Installs a test-friendly subscriber filtered by `RUST_LOG`. Safe to call
/// from every test; only the first call takes effect.
pub fn init_tracing() {
	let _ = fmt().with_env_filter(EnvFilter::from_default_env()).with_test_writer().try_init();
}
