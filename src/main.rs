// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() -> miette::Result<()> {
	use feedback_widget_site::config::{DEFAULT_CONFIG_PATH, parse_config};
	use feedback_widget_site::logging::init_logging;
	use feedback_widget_site::site::metadata::METADATA;
	use feedback_widget_site::web::server::run_server;
	use std::sync::Arc;

	let config_path = std::env::args()
		.nth(1)
		.unwrap_or_else(|| String::from(DEFAULT_CONFIG_PATH));
	let config = parse_config(&config_path).await?;
	init_logging(&config.log);

	if let Err(error) = METADATA.validate() {
		tracing::error!(source = ?error, "Site metadata is invalid");
		return Err(error.into());
	}

	run_server(Arc::new(config)).await
}

#[cfg(not(feature = "ssr"))]
pub fn main() {
	// The client side is started through hydrate() in the library
}
