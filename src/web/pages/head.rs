// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::site::head::{HeadTag, MetaKey, head_tags};
use crate::site::metadata::METADATA;
use leptos::prelude::*;
use leptos_meta::{Link, Meta, Title};

/// Registers the document head tags built from the site metadata, with the default title.
/// Pages with their own title add a [`PageTitle`] on top.
#[component]
pub fn SiteHead() -> impl IntoView {
	let tags = match head_tags(&METADATA, None) {
		Ok(tags) => tags,
		Err(error) => {
			tracing::error!(source = ?error, "Failed to build head tags from site metadata");
			Vec::new()
		}
	};

	tags.into_iter().map(head_tag_view).collect_view()
}

/// Sets the document title for a page through the site's title template
#[component]
pub fn PageTitle(title: &'static str) -> impl IntoView {
	view! { <Title text=METADATA.title.resolve(Some(title)) /> }
}

fn head_tag_view(tag: HeadTag) -> AnyView {
	match tag {
		HeadTag::Title(text) => view! { <Title text /> }.into_any(),
		HeadTag::Meta {
			key: MetaKey::Name(name),
			content,
		} => view! { <Meta name content /> }.into_any(),
		HeadTag::Meta {
			key: MetaKey::Property(property),
			content,
		} => view! { <Meta property content /> }.into_any(),
		HeadTag::Link {
			rel,
			href,
			sizes,
			mime_type,
		} => match (sizes, mime_type) {
			(Some(sizes), Some(mime_type)) => view! { <Link rel href sizes type_=mime_type /> }.into_any(),
			(Some(sizes), None) => view! { <Link rel href sizes /> }.into_any(),
			(None, Some(mime_type)) => view! { <Link rel href type_=mime_type /> }.into_any(),
			(None, None) => view! { <Link rel href /> }.into_any(),
		},
	}
}
