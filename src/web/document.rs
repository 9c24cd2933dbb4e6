// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Plain node trees for the document shell.
//!
//! The Leptos shell renders full pages; this is the same structure as data, for places that need a document
//! without running the app (static error pages) and for checking the shell's shape.

use crate::site::fonts::body_class;
use maud::{DOCTYPE, Render, html};
use std::collections::BTreeMap;

pub const DOCUMENT_LANG: &str = "en";

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Node {
	Element(Element),
	Text(String),
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Element {
	pub tag: String,
	pub attributes: BTreeMap<String, String>,
	pub children: Vec<Node>,
	/// Void elements (`meta`, `img`, ...) have no closing tag and never render children
	pub void: bool,
}

impl Element {
	pub fn new(tag: impl Into<String>) -> Self {
		Self {
			tag: tag.into(),
			attributes: BTreeMap::new(),
			children: Vec::new(),
			void: false,
		}
	}

	pub fn void(tag: impl Into<String>) -> Self {
		Self {
			void: true,
			..Self::new(tag)
		}
	}

	pub fn attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.attributes.insert(name.into(), value.into());
		self
	}

	pub fn child(mut self, child: impl Into<Node>) -> Self {
		self.children.push(child.into());
		self
	}

	pub fn get_attribute(&self, name: &str) -> Option<&str> {
		self.attributes.get(name).map(String::as_str)
	}

	pub fn class_list(&self) -> Vec<&str> {
		self.get_attribute("class")
			.map(|class| class.split_whitespace().collect())
			.unwrap_or_default()
	}
}

impl Render for Element {
	fn render_to(&self, buffer: &mut String) {
		buffer.push('<');
		buffer.push_str(&self.tag);
		for (name, value) in self.attributes.iter() {
			buffer.push(' ');
			buffer.push_str(name);
			buffer.push_str("=\"");
			value.render_to(buffer);
			buffer.push('"');
		}
		buffer.push('>');

		if self.void {
			return;
		}
		for child in self.children.iter() {
			child.render_to(buffer);
		}
		buffer.push_str("</");
		buffer.push_str(&self.tag);
		buffer.push('>');
	}
}

impl Node {
	pub fn text(text: impl Into<String>) -> Self {
		Self::Text(text.into())
	}

	pub fn as_element(&self) -> Option<&Element> {
		match self {
			Self::Element(element) => Some(element),
			Self::Text(_) => None,
		}
	}

	pub fn to_html(&self) -> String {
		self.render().into_string()
	}
}

impl Render for Node {
	fn render_to(&self, buffer: &mut String) {
		match self {
			Self::Element(element) => element.render_to(buffer),
			Self::Text(text) => text.render_to(buffer),
		}
	}
}

impl From<Element> for Node {
	fn from(element: Element) -> Self {
		Self::Element(element)
	}
}

/// Wraps page content in the document shell: `<html lang="en">` around a body scoped to the body fonts.
/// The content goes into the body as given.
pub fn compose_document(content: Node) -> Node {
	let body = Element::new("body").attribute("class", body_class()).child(content);
	Element::new("html").attribute("lang", DOCUMENT_LANG).child(body).into()
}

/// Composes and serializes a full document, doctype included
pub fn render_document(content: Node) -> String {
	html! {
		(DOCTYPE)
		(compose_document(content))
	}
	.into_string()
}
