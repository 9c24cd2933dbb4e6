// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::*;
use crate::site::metadata::METADATA;

fn meta_content<'a>(tags: &'a [HeadTag], wanted: &MetaKey) -> Vec<&'a str> {
	tags.iter()
		.filter_map(|tag| match tag {
			HeadTag::Meta { key, content } if key == wanted => Some(content.as_str()),
			_ => None,
		})
		.collect()
}

fn links<'a>(tags: &'a [HeadTag], wanted_rel: &str) -> Vec<&'a HeadTag> {
	tags.iter()
		.filter(|tag| matches!(tag, HeadTag::Link { rel, .. } if *rel == wanted_rel))
		.collect()
}

#[test]
fn title_comes_first() {
	let tags = head_tags(&METADATA, None).unwrap();
	assert_eq!(
		tags[0],
		HeadTag::Title(String::from(
			"Feedback Widget - Embedded User Feedback Collection Tool | Next.js"
		))
	);

	let tags = head_tags(&METADATA, Some("Not Found")).unwrap();
	assert_eq!(tags[0], HeadTag::Title(String::from("Not Found | Feedback Widget")));
}

#[test]
fn exactly_one_title() {
	let tags = head_tags(&METADATA, None).unwrap();
	let titles = tags.iter().filter(|tag| matches!(tag, HeadTag::Title(_))).count();
	assert_eq!(titles, 1);
}

#[test]
fn social_images_are_absolute() {
	let tags = head_tags(&METADATA, None).unwrap();
	assert_eq!(
		meta_content(&tags, &MetaKey::Property("og:image")),
		["https://embedded-feedback.vercel.app/favicon.ico"]
	);
	assert_eq!(
		meta_content(&tags, &MetaKey::Name("twitter:image")),
		["https://embedded-feedback.vercel.app/favicon.ico"]
	);
	assert_eq!(meta_content(&tags, &MetaKey::Property("og:image:width")), ["1200"]);
	assert_eq!(meta_content(&tags, &MetaKey::Property("og:image:height")), ["630"]);
}

#[test]
fn crawler_directives() {
	let tags = head_tags(&METADATA, None).unwrap();
	assert_eq!(meta_content(&tags, &MetaKey::Name("robots")), ["index, follow"]);
	assert_eq!(
		meta_content(&tags, &MetaKey::Name("googlebot")),
		["index, follow, max-video-preview:-1, max-image-preview:large, max-snippet:-1"]
	);
}

#[test]
fn canonical_link_matches_base() {
	let tags = head_tags(&METADATA, None).unwrap();
	let canonical = links(&tags, "canonical");
	assert_eq!(
		canonical,
		[&HeadTag::Link {
			rel: "canonical",
			href: String::from("https://embedded-feedback.vercel.app/"),
			sizes: None,
			mime_type: None,
		}]
	);
}

#[test]
fn icon_links_keep_sizes_and_types() {
	let tags = head_tags(&METADATA, None).unwrap();
	let icons = links(&tags, "icon");
	assert_eq!(icons.len(), 2);
	assert!(matches!(icons[0], HeadTag::Link { sizes: Some("any"), mime_type: None, .. }));
	assert!(matches!(icons[1], HeadTag::Link { sizes: None, mime_type: Some("image/x-icon"), .. }));
	assert_eq!(links(&tags, "shortcut icon").len(), 1);
	assert_eq!(links(&tags, "apple-touch-icon").len(), 1);
	assert_eq!(links(&tags, "manifest").len(), 1);
}

#[test]
fn author_link_precedes_author_name() {
	let tags = head_tags(&METADATA, None).unwrap();
	let link_position = tags
		.iter()
		.position(|tag| matches!(tag, HeadTag::Link { rel: "author", .. }))
		.unwrap();
	assert_eq!(tags[link_position + 1], HeadTag::name("author", "Arnob Mahmud"));
}

#[test]
fn empty_keywords_are_left_out() {
	let metadata = Metadata {
		keywords: &[],
		..METADATA
	};
	let tags = head_tags(&metadata, None).unwrap();
	assert!(meta_content(&tags, &MetaKey::Name("keywords")).is_empty());
}
