// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::metadata::{Metadata, MetadataError};

/// A single element for the document head
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum HeadTag {
	Title(String),
	Meta {
		key: MetaKey,
		content: String,
	},
	Link {
		rel: &'static str,
		href: String,
		sizes: Option<&'static str>,
		mime_type: Option<&'static str>,
	},
}

/// Which attribute names a meta tag. Open Graph uses `property`, everything else uses `name`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum MetaKey {
	Name(&'static str),
	Property(&'static str),
}

impl HeadTag {
	fn name(name: &'static str, content: impl Into<String>) -> Self {
		Self::Meta {
			key: MetaKey::Name(name),
			content: content.into(),
		}
	}

	fn property(property: &'static str, content: impl Into<String>) -> Self {
		Self::Meta {
			key: MetaKey::Property(property),
			content: content.into(),
		}
	}

	fn link(rel: &'static str, href: String) -> Self {
		Self::Link {
			rel,
			href,
			sizes: None,
			mime_type: None,
		}
	}
}

/// Builds the head tags for a page. Every URL in the output is absolute.
pub fn head_tags(metadata: &Metadata, page_title: Option<&str>) -> Result<Vec<HeadTag>, MetadataError> {
	let resolve = |url: &str| metadata.resolve_url(url).map(String::from);
	let mut tags = vec![
		HeadTag::Title(metadata.title.resolve(page_title)),
		HeadTag::name("description", metadata.description),
	];

	for author in metadata.authors {
		if let Some(url) = author.url {
			tags.push(HeadTag::link("author", resolve(url)?));
		}
		tags.push(HeadTag::name("author", author.name));
	}
	if let Some(manifest) = metadata.manifest {
		tags.push(HeadTag::link("manifest", resolve(manifest)?));
	}
	if !metadata.keywords.is_empty() {
		tags.push(HeadTag::name("keywords", metadata.keywords_content()));
	}
	tags.push(HeadTag::name("creator", metadata.creator));
	tags.push(HeadTag::name("publisher", metadata.publisher));
	tags.push(HeadTag::name("robots", metadata.robots.directives()));
	tags.push(HeadTag::name("googlebot", metadata.robots.google_bot.directives()));
	tags.push(HeadTag::name("category", metadata.category));
	tags.push(HeadTag::link("canonical", String::from(metadata.canonical_url()?)));

	let open_graph = &metadata.open_graph;
	tags.push(HeadTag::property("og:title", open_graph.title));
	tags.push(HeadTag::property("og:description", open_graph.description));
	tags.push(HeadTag::property("og:url", resolve(open_graph.url)?));
	tags.push(HeadTag::property("og:site_name", open_graph.site_name));
	tags.push(HeadTag::property("og:locale", open_graph.locale));
	for image in open_graph.images {
		tags.push(HeadTag::property("og:image", resolve(image.url)?));
		tags.push(HeadTag::property("og:image:width", image.width.to_string()));
		tags.push(HeadTag::property("og:image:height", image.height.to_string()));
		tags.push(HeadTag::property("og:image:alt", image.alt));
	}
	tags.push(HeadTag::property("og:type", open_graph.og_type.as_str()));

	let twitter = &metadata.twitter;
	tags.push(HeadTag::name("twitter:card", twitter.card.as_str()));
	tags.push(HeadTag::name("twitter:creator", twitter.creator));
	tags.push(HeadTag::name("twitter:title", twitter.title));
	tags.push(HeadTag::name("twitter:description", twitter.description));
	for image in twitter.images {
		tags.push(HeadTag::name("twitter:image", resolve(image)?));
	}

	let icon_groups = [
		("shortcut icon", metadata.icons.shortcut),
		("icon", metadata.icons.icon),
		("apple-touch-icon", metadata.icons.apple),
	];
	for (rel, icons) in icon_groups {
		for icon in icons {
			tags.push(HeadTag::Link {
				rel,
				href: resolve(icon.url)?,
				sizes: icon.sizes,
				mime_type: icon.mime_type,
			});
		}
	}

	Ok(tags)
}

#[cfg(test)]
mod tests;
