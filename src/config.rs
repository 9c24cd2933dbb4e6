// © 2024 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use kdl::{KdlDocument, KdlNode};
use miette::{IntoDiagnostic, Result, WrapErr, miette};
use std::net::SocketAddr;

pub const DEFAULT_CONFIG_PATH: &str = "config.kdl";
pub const DEFAULT_LOG_FILTER: &str = "info";

pub async fn parse_config(config_path: &str) -> Result<ConfigData> {
	let config_file_contents = tokio::fs::read_to_string(config_path)
		.await
		.into_diagnostic()
		.wrap_err_with(|| format!("Failed to read config file {}", config_path))?;
	parse_config_document(&config_file_contents)
}

/// Parses the contents of a KDL config file:
///
/// ```kdl
/// web {
///     bind_addr "127.0.0.1:3000"
/// }
/// log {
///     filter "info"
/// }
/// ```
pub fn parse_config_document(contents: &str) -> Result<ConfigData> {
	let document: KdlDocument = contents.parse()?;

	let web = section(&document, "web")?.ok_or_else(|| miette!("Config is missing the `web` block"))?;
	let bind_addr = string_value(web, "web", "bind_addr")?.ok_or_else(|| miette!("Config is missing `web.bind_addr`"))?;
	let bind_addr = bind_addr
		.parse()
		.into_diagnostic()
		.wrap_err_with(|| format!("`web.bind_addr` isn't a socket address: {:?}", bind_addr))?;

	let filter = match section(&document, "log")? {
		Some(log) => string_value(log, "log", "filter")?,
		None => None,
	};
	let filter = filter.unwrap_or(DEFAULT_LOG_FILTER).to_string();

	Ok(ConfigData {
		web: WebConfig { bind_addr },
		log: LogConfig { filter },
	})
}

fn section<'a>(document: &'a KdlDocument, name: &str) -> Result<Option<&'a KdlDocument>> {
	let Some(node) = document.get(name) else {
		return Ok(None);
	};
	node.children()
		.map(Some)
		.ok_or_else(|| miette!("`{}` in the config must be a block", name))
}

fn string_value<'a>(section: &'a KdlDocument, section_name: &str, key: &str) -> Result<Option<&'a str>> {
	let Some(value) = section.get(key).and_then(|node: &KdlNode| node.get(0)) else {
		return Ok(None);
	};
	value
		.as_string()
		.map(Some)
		.ok_or_else(|| miette!("`{}.{}` in the config must be a string", section_name, key))
}

#[derive(Debug)]
pub struct ConfigData {
	pub web: WebConfig,
	pub log: LogConfig,
}

#[derive(Debug)]
pub struct WebConfig {
	pub bind_addr: SocketAddr,
}

#[derive(Debug)]
pub struct LogConfig {
	pub filter: String,
}
