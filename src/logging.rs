// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::config::{DEFAULT_LOG_FILTER, LogConfig};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

/// Sets up the global tracing subscriber. `RUST_LOG` takes priority over the configured filter.
pub fn init_logging(config: &LogConfig) {
	let env_filter = EnvFilter::try_from_default_env()
		.or_else(|_| EnvFilter::try_new(&config.filter))
		.unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

	tracing_subscriber::registry().with(fmt::layer()).with(env_filter).init();
	tracing::debug!(filter = %config.filter, "Logging initialized");
}
