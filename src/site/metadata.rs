// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The page metadata descriptor.
//!
//! [`METADATA`] is the single source for everything that ends up in the document head: the page title, social
//! previews, crawler directives, icons and the canonical URL. It's built entirely from `'static` data so it never
//! changes once the process is running. The serialized form uses the field names web metadata consumers expect
//! (`openGraph`, `metadataBase`, `max-video-preview` and so on).

#[cfg(feature = "ssr")]
use miette::Diagnostic;
use serde::Serialize;
use std::error::Error;
use std::fmt;
use url::Url;

/// Placeholder in a title template that gets replaced by the page title
pub const TITLE_PLACEHOLDER: &str = "%s";

pub const SITE_URL: &str = "https://embedded-feedback.vercel.app/";
pub const FAVICON_PATH: &str = "/favicon.ico";

const SOCIAL_TITLE: &str = "Feedback Widget - Embedded User Feedback Collection Tool";

pub static METADATA: Metadata = Metadata {
	title: Title::Templated {
		default: "Feedback Widget - Embedded User Feedback Collection Tool | Next.js",
		template: "%s | Feedback Widget",
	},
	description: "A modern, reusable full-stack feedback widget built with Next.js, React, Tailwind CSS, and Prisma. Easily embed this widget into any project to collect user feedback with ratings, messages, and contact information.",
	keywords: &[
		"feedback widget",
		"feedback form",
		"user feedback",
		"feedback collector",
		"react widget",
		"nextjs widget",
		"embeddable widget",
		"feedback component",
		"reactjs",
		"next.js",
		"tailwindcss",
		"prisma",
		"mongodb",
		"feedback management",
		"customer feedback",
		"web widget",
		"feedback system",
		"UI component",
		"react component",
		"widget integration",
		"fullstack",
		"typescript",
		"api integration",
		"vercel",
		"modern web",
		"feedback tool",
	],
	authors: &[Author {
		name: "Arnob Mahmud",
		url: Some("https://arnob-mahmud.vercel.app/"),
	}],
	creator: "Arnob Mahmud",
	publisher: "Arnob Mahmud",
	robots: Robots {
		index: true,
		follow: true,
		google_bot: GoogleBot {
			index: true,
			follow: true,
			max_video_preview: NO_LIMIT,
			max_image_preview: ImagePreview::Large,
			max_snippet: NO_LIMIT,
		},
	},
	icons: Icons {
		icon: &[
			IconDescriptor {
				url: FAVICON_PATH,
				sizes: Some("any"),
				mime_type: None,
			},
			IconDescriptor {
				url: FAVICON_PATH,
				sizes: None,
				mime_type: Some("image/x-icon"),
			},
		],
		shortcut: &[IconDescriptor::plain(FAVICON_PATH)],
		apple: &[IconDescriptor::plain(FAVICON_PATH)],
	},
	manifest: Some(FAVICON_PATH),
	open_graph: OpenGraph {
		og_type: OpenGraphType::Website,
		locale: "en_US",
		url: SITE_URL,
		title: SOCIAL_TITLE,
		description: "A modern, reusable full-stack feedback widget built with Next.js, React, Tailwind CSS, and Prisma. Easily embed this widget into any project to collect user feedback.",
		site_name: "Feedback Widget",
		images: &[OpenGraphImage {
			url: FAVICON_PATH,
			width: 1200,
			height: 630,
			alt: SOCIAL_TITLE,
		}],
	},
	twitter: Twitter {
		card: TwitterCard::SummaryLargeImage,
		title: SOCIAL_TITLE,
		description: "A modern, reusable full-stack feedback widget built with Next.js, React, Tailwind CSS, and Prisma.",
		images: &[FAVICON_PATH],
		creator: "@arnob_mahmud",
	},
	alternates: Alternates { canonical: SITE_URL },
	metadata_base: SITE_URL,
	category: "technology",
};

/// Value for numeric crawler directives meaning "no limit"
pub const NO_LIMIT: i32 = -1;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
	pub title: Title,
	pub description: &'static str,
	pub keywords: &'static [&'static str],
	pub authors: &'static [Author],
	pub creator: &'static str,
	pub publisher: &'static str,
	pub robots: Robots,
	pub icons: Icons,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub manifest: Option<&'static str>,
	pub open_graph: OpenGraph,
	pub twitter: Twitter,
	pub alternates: Alternates,
	pub metadata_base: &'static str,
	pub category: &'static str,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Title {
	Static(&'static str),
	Templated {
		default: &'static str,
		template: &'static str,
	},
}

impl Title {
	/// Gets the document title for a page. Pages without their own title get the default.
	pub fn resolve(&self, page_title: Option<&str>) -> String {
		match (self, page_title) {
			(Self::Static(title), None) => String::from(*title),
			(Self::Static(_), Some(page_title)) => String::from(page_title),
			(Self::Templated { default, .. }, None) => String::from(*default),
			(Self::Templated { template, .. }, Some(page_title)) => template.replace(TITLE_PLACEHOLDER, page_title),
		}
	}
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub struct Author {
	pub name: &'static str,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub url: Option<&'static str>,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Robots {
	pub index: bool,
	pub follow: bool,
	pub google_bot: GoogleBot,
}

impl Robots {
	pub fn directives(&self) -> String {
		index_follow(self.index, self.follow)
	}
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct GoogleBot {
	pub index: bool,
	pub follow: bool,
	pub max_video_preview: i32,
	pub max_image_preview: ImagePreview,
	pub max_snippet: i32,
}

impl GoogleBot {
	pub fn directives(&self) -> String {
		format!(
			"{}, max-video-preview:{}, max-image-preview:{}, max-snippet:{}",
			index_follow(self.index, self.follow),
			self.max_video_preview,
			self.max_image_preview.as_str(),
			self.max_snippet
		)
	}
}

fn index_follow(index: bool, follow: bool) -> String {
	let index = if index { "index" } else { "noindex" };
	let follow = if follow { "follow" } else { "nofollow" };
	format!("{}, {}", index, follow)
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ImagePreview {
	None,
	Standard,
	Large,
}

impl ImagePreview {
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::None => "none",
			Self::Standard => "standard",
			Self::Large => "large",
		}
	}
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub struct Icons {
	pub icon: &'static [IconDescriptor],
	pub shortcut: &'static [IconDescriptor],
	pub apple: &'static [IconDescriptor],
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub struct IconDescriptor {
	pub url: &'static str,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub sizes: Option<&'static str>,
	#[serde(rename = "type", skip_serializing_if = "Option::is_none")]
	pub mime_type: Option<&'static str>,
}

impl IconDescriptor {
	pub const fn plain(url: &'static str) -> Self {
		Self {
			url,
			sizes: None,
			mime_type: None,
		}
	}
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenGraph {
	#[serde(rename = "type")]
	pub og_type: OpenGraphType,
	pub locale: &'static str,
	pub url: &'static str,
	pub title: &'static str,
	pub description: &'static str,
	pub site_name: &'static str,
	pub images: &'static [OpenGraphImage],
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OpenGraphType {
	Website,
	Article,
}

impl OpenGraphType {
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Website => "website",
			Self::Article => "article",
		}
	}
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub struct OpenGraphImage {
	pub url: &'static str,
	pub width: u32,
	pub height: u32,
	pub alt: &'static str,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub struct Twitter {
	pub card: TwitterCard,
	pub title: &'static str,
	pub description: &'static str,
	pub images: &'static [&'static str],
	pub creator: &'static str,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TwitterCard {
	Summary,
	SummaryLargeImage,
	App,
	Player,
}

impl TwitterCard {
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Summary => "summary",
			Self::SummaryLargeImage => "summary_large_image",
			Self::App => "app",
			Self::Player => "player",
		}
	}
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub struct Alternates {
	pub canonical: &'static str,
}

impl Metadata {
	pub fn base_url(&self) -> Result<Url, MetadataError> {
		Url::parse(self.metadata_base).map_err(|source| MetadataError::InvalidBase {
			url: self.metadata_base,
			source,
		})
	}

	/// Resolves a URL from the descriptor. Absolute URLs come back unchanged; relative ones are joined onto the
	/// metadata base.
	pub fn resolve_url(&self, url: &str) -> Result<Url, MetadataError> {
		let base = self.base_url()?;
		base.join(url).map_err(|source| MetadataError::InvalidUrl {
			url: url.to_string(),
			source,
		})
	}

	pub fn canonical_url(&self) -> Result<Url, MetadataError> {
		self.resolve_url(self.alternates.canonical)
	}

	pub fn keywords_content(&self) -> String {
		self.keywords.join(",")
	}

	/// Every URL-valued field in the descriptor, in declaration order
	pub fn urls(&self) -> Vec<&'static str> {
		let mut urls: Vec<&'static str> = self.authors.iter().filter_map(|author| author.url).collect();
		let icons = self.icons.icon.iter().chain(self.icons.shortcut).chain(self.icons.apple);
		urls.extend(icons.map(|icon| icon.url));
		urls.extend(self.manifest);
		urls.push(self.open_graph.url);
		urls.extend(self.open_graph.images.iter().map(|image| image.url));
		urls.extend(self.twitter.images.iter().copied());
		urls.push(self.alternates.canonical);
		urls
	}

	/// Checks that the base and every URL in the descriptor resolve.
	pub fn validate(&self) -> Result<(), MetadataError> {
		self.base_url()?;
		for url in self.urls() {
			self.resolve_url(url)?;
		}
		Ok(())
	}
}

#[derive(Debug)]
#[cfg_attr(feature = "ssr", derive(Diagnostic))]
pub enum MetadataError {
	#[cfg_attr(
		feature = "ssr",
		diagnostic(code(metadata::invalid_base), help("The metadata base must be an absolute URL"))
	)]
	InvalidBase { url: &'static str, source: url::ParseError },
	#[cfg_attr(feature = "ssr", diagnostic(code(metadata::invalid_url)))]
	InvalidUrl { url: String, source: url::ParseError },
}

impl fmt::Display for MetadataError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::InvalidBase { url, .. } => write!(f, "invalid metadata base URL {:?}", url),
			Self::InvalidUrl { url, .. } => write!(f, "metadata URL {:?} doesn't resolve against the base", url),
		}
	}
}

impl Error for MetadataError {
	fn source(&self) -> Option<&(dyn Error + 'static)> {
		match self {
			Self::InvalidBase { source, .. } | Self::InvalidUrl { source, .. } => Some(source),
		}
	}
}
