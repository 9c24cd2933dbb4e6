// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::metadata::{Metadata, MetadataError};
use std::fmt::Write;

/// Builds a robots.txt body matching the descriptor's crawler directives
pub fn robots_txt(metadata: &Metadata) -> Result<String, MetadataError> {
	let base = metadata.base_url()?;
	let mut body = String::new();

	let groups = [
		("*", metadata.robots.index),
		("Googlebot", metadata.robots.google_bot.index),
	];
	for (user_agent, index) in groups {
		let rule = if index { "Allow" } else { "Disallow" };
		let _ = write!(body, "User-Agent: {}\n{}: /\n\n", user_agent, rule);
	}
	let _ = writeln!(body, "Host: {}", base.origin().ascii_serialization());

	Ok(body)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::site::metadata::{METADATA, Robots};

	#[test]
	fn indexable_site_is_allowed() {
		let body = robots_txt(&METADATA).unwrap();
		assert_eq!(
			body,
			"User-Agent: *\nAllow: /\n\nUser-Agent: Googlebot\nAllow: /\n\nHost: https://embedded-feedback.vercel.app\n"
		);
	}

	#[test]
	fn noindex_disallows_everything() {
		let metadata = Metadata {
			robots: Robots {
				index: false,
				..METADATA.robots
			},
			..METADATA
		};
		let body = robots_txt(&metadata).unwrap();
		assert!(body.starts_with("User-Agent: *\nDisallow: /\n"));
		assert!(body.contains("User-Agent: Googlebot\nAllow: /\n"));
	}
}
