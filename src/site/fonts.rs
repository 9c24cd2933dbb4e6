// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::fmt::Write;

pub static GEIST_SANS: FontScope = FontScope {
	family: "Geist",
	variable: "--font-geist-sans",
	subsets: &[Subset::Latin],
	fallback: "sans-serif",
};

pub static GEIST_MONO: FontScope = FontScope {
	family: "Geist Mono",
	variable: "--font-geist-mono",
	subsets: &[Subset::Latin],
	fallback: "monospace",
};

/// Fonts whose scopes apply to the document body, in class list order
pub static BODY_FONTS: [&FontScope; 2] = [&GEIST_SANS, &GEIST_MONO];

/// A font family bound to a CSS custom property.
///
/// Elements carrying the scope's class token get the custom property, so styles can use
/// `font-family: var(--font-geist-sans)` anywhere underneath. Faces are taken from the fonts installed on the
/// client; the server doesn't ship font files.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FontScope {
	pub family: &'static str,
	pub variable: &'static str,
	pub subsets: &'static [Subset],
	pub fallback: &'static str,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Subset {
	Latin,
}

impl Subset {
	pub fn name(&self) -> &'static str {
		match self {
			Self::Latin => "latin",
		}
	}

	pub fn unicode_range(&self) -> &'static str {
		match self {
			Self::Latin => {
				"U+0000-00FF, U+0131, U+0152-0153, U+02BB-02BC, U+02C6, U+02DA, U+02DC, U+0304, U+0308, U+0329, U+2000-206F, U+20AC, U+2122, U+2191, U+2193, U+2212, U+2215, U+FEFF, U+FFFD"
			}
		}
	}
}

impl FontScope {
	/// Class name binding this scope's custom property
	pub fn class_token(&self) -> String {
		let name: String = self
			.variable
			.trim_start_matches('-')
			.chars()
			.map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
			.collect();
		format!("__variable_{}", name)
	}

	/// The `@font-face` rules for each subset followed by the rule binding the class token to the custom property
	pub fn stylesheet(&self) -> String {
		let mut css = String::new();
		for subset in self.subsets {
			// Writing to a String can't fail
			let _ = writeln!(
				css,
				"@font-face {{ font-family: '{}'; font-style: normal; font-weight: 100 900; font-display: swap; src: local('{}'); unicode-range: {}; }}",
				self.family,
				self.family,
				subset.unicode_range()
			);
		}
		let _ = writeln!(
			css,
			".{} {{ {}: '{}', {}; }}",
			self.class_token(),
			self.variable,
			self.family,
			self.fallback
		);
		css
	}
}

/// The body's class list: every body font token separated by a space
pub fn body_class() -> String {
	BODY_FONTS
		.iter()
		.map(|font| font.class_token())
		.collect::<Vec<_>>()
		.join(" ")
}

pub fn body_stylesheet() -> String {
	BODY_FONTS.iter().map(|font| font.stylesheet()).collect()
}
