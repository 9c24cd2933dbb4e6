// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::document::{Element, Node, render_document};
use super::pages::app::App;
use super::pages::shell::shell;
use super::state::AppState;
use crate::config::ConfigData;
use crate::site::metadata::{METADATA, Metadata};
use crate::site::robots::robots_txt;
use axum::body::Body;
use axum::extract::{Request, State};
use axum::http::{StatusCode, Uri, header};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list, render_app_to_stream};
use miette::IntoDiagnostic;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower::util::ServiceExt;
use tower_http::services::ServeDir;

pub async fn run_server(config: Arc<ConfigData>) -> miette::Result<()> {
	let web_config = get_configuration(None).into_diagnostic()?;
	let site_addr = config.web.bind_addr;
	let leptos_options = web_config.leptos_options;

	let app_state = AppState {
		leptos_options,
		config: Arc::clone(&config),
	};
	let app = router(app_state);

	tracing::info!(address = %site_addr, "Listening on http://{}", site_addr);
	let listener = TcpListener::bind(site_addr).await.into_diagnostic()?;
	axum::serve(listener, app.into_make_service()).await.into_diagnostic()?;

	Ok(())
}

fn router(app_state: AppState) -> Router {
	let routes = generate_route_list(App);

	Router::new()
		.route("/robots.txt", get(robots_route))
		.route("/metadata.json", get(metadata_route))
		.leptos_routes(&app_state, routes, {
			let leptos_options = app_state.leptos_options.clone();
			move || shell(leptos_options.clone())
		})
		.fallback(file_and_error_handler)
		.with_state(app_state)
}

async fn robots_route() -> Response {
	match robots_txt(&METADATA) {
		Ok(body) => ([(header::CONTENT_TYPE, "text/plain; charset=utf-8")], body).into_response(),
		Err(error) => {
			tracing::error!(source = ?error, "Failed to build robots.txt");
			StatusCode::INTERNAL_SERVER_ERROR.into_response()
		}
	}
}

async fn metadata_route() -> Json<&'static Metadata> {
	Json(&METADATA)
}

async fn file_and_error_handler(uri: Uri, State(state): State<AppState>, request: Request) -> Response {
	let site_root_dir = state.leptos_options.site_root.clone();
	let response = get_static_file(uri.clone(), &site_root_dir).await;
	let response = match response {
		Ok(response) => response,
		Err(status) => {
			tracing::error!(%uri, %status, "Failed to serve static file");
			return (status, Html(error_page(status))).into_response();
		}
	};

	if response.status() == StatusCode::OK {
		response.into_response()
	} else {
		let leptos_options = state.leptos_options.clone();
		let handler = render_app_to_stream(move || shell(leptos_options.clone()));
		handler(request).await.into_response()
	}
}

async fn get_static_file(uri: Uri, root: &str) -> Result<Response, StatusCode> {
	let Ok(request) = Request::builder().uri(uri.clone()).body(Body::empty()) else {
		return Err(StatusCode::INTERNAL_SERVER_ERROR);
	};

	match ServeDir::new(root).oneshot(request).await {
		Ok(response) => Ok(response.into_response()),
		Err(_) => Err(StatusCode::INTERNAL_SERVER_ERROR),
	}
}

/// Static page for failures that happen before the app can render
fn error_page(status: StatusCode) -> String {
	let reason = status.canonical_reason().unwrap_or("Error");
	let content = Element::new("main")
		.attribute("id", "error_page")
		.child(Element::new("h1").child(Node::text(reason)))
		.child(Element::new("p").child(Node::text("Something went wrong. Please try again later.")));
	render_document(content.into())
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::config::{LogConfig, WebConfig};
	use axum::body::{Bytes, to_bytes};
	use axum::http::HeaderMap;

	fn test_router() -> Router {
		let leptos_options = LeptosOptions::builder()
			.output_name("feedback-widget-site")
			.site_root("assets")
			.build();
		let config = ConfigData {
			web: WebConfig {
				bind_addr: "127.0.0.1:3000".parse().unwrap(),
			},
			log: LogConfig {
				filter: String::from("info"),
			},
		};
		router(AppState {
			leptos_options,
			config: Arc::new(config),
		})
	}

	async fn fetch(path: &str) -> (StatusCode, HeaderMap, Bytes) {
		let request = Request::builder().uri(path).body(Body::empty()).unwrap();
		let response = test_router().oneshot(request).await.unwrap();
		let status = response.status();
		let headers = response.headers().clone();
		let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
		(status, headers, body)
	}

	async fn fetch_text(path: &str) -> (StatusCode, String) {
		let (status, _, body) = fetch(path).await;
		(status, String::from_utf8(body.to_vec()).unwrap())
	}

	/// Every opening tag with the given name, attributes included
	fn tags<'a>(html: &'a str, name: &str) -> Vec<&'a str> {
		let opening = format!("<{} ", name);
		html.match_indices(&opening)
			.map(|(start, _)| {
				let end = html[start..].find('>').unwrap();
				&html[start..=start + end]
			})
			.collect()
	}

	fn with_rel<'a>(links: &[&'a str], rel: &str) -> Vec<&'a str> {
		let rel = format!("rel=\"{}\"", rel);
		links.iter().copied().filter(|tag| tag.contains(&rel)).collect()
	}

	#[tokio::test]
	async fn home_page_is_wrapped_in_the_shell() {
		let (status, html) = fetch_text("/").await;
		assert_eq!(status, StatusCode::OK);
		assert!(html.contains("<html lang=\"en\">"));
		assert!(html.contains("<body class=\"__variable_font_geist_sans __variable_font_geist_mono\">"));

		let body_start = html.find("<body").unwrap();
		let content = html.find("id=\"home_page\"").unwrap();
		let body_end = html.find("</body>").unwrap();
		assert!(body_start < content && content < body_end);
	}

	#[tokio::test]
	async fn home_page_head_comes_from_metadata() {
		let (_, html) = fetch_text("/").await;
		assert!(html.contains(
			"<title>Feedback Widget - Embedded User Feedback Collection Tool | Next.js</title>"
		));
		assert_eq!(html.matches("<title>").count(), 1);

		let metas = tags(&html, "meta");
		assert!(metas.iter().any(|tag| tag.contains("property=\"og:image\"")
			&& tag.contains("content=\"https://embedded-feedback.vercel.app/favicon.ico\"")));
		assert!(metas.iter().any(|tag| tag.contains("name=\"googlebot\"")
			&& tag.contains("max-video-preview:-1")));

		let links = tags(&html, "link");
		let rel = |wanted: &str| with_rel(&links, wanted);
		let icons = rel("icon");
		assert_eq!(icons.len(), 2);
		assert!(icons.iter().any(|tag| tag.contains("sizes=\"any\"") && !tag.contains("type=")));
		assert!(icons.iter().any(|tag| tag.contains("type=\"image/x-icon\"") && !tag.contains("sizes=")));
		for tag in rel("shortcut icon").iter().chain(rel("apple-touch-icon").iter()) {
			assert!(tag.contains("href=\"https://embedded-feedback.vercel.app/favicon.ico\""));
			assert!(!tag.contains("sizes=") && !tag.contains("type="));
		}
		assert!(rel("canonical")[0].contains("href=\"https://embedded-feedback.vercel.app/\""));
	}

	#[tokio::test]
	async fn unknown_path_is_templated_not_found() {
		let (status, html) = fetch_text("/nope").await;
		assert_eq!(status, StatusCode::NOT_FOUND);
		assert!(html.contains("<title>Not Found | Feedback Widget</title>"));
		assert_eq!(html.matches("<title>").count(), 1);
		assert!(html.contains("<html lang=\"en\">"));
		assert!(html.contains("id=\"not_found_page\""));
	}

	#[tokio::test]
	async fn favicon_is_served() {
		let (status, _, body) = fetch("/favicon.ico").await;
		assert_eq!(status, StatusCode::OK);
		// ICO header: reserved 0, type 1
		assert_eq!(&body[..4], &[0, 0, 1, 0]);
	}

	#[tokio::test]
	async fn robots_route_serves_directives() {
		let (status, headers, body) = fetch("/robots.txt").await;
		assert_eq!(status, StatusCode::OK);
		assert_eq!(headers[header::CONTENT_TYPE], "text/plain; charset=utf-8");
		assert_eq!(body, robots_txt(&METADATA).unwrap());
	}

	#[tokio::test]
	async fn metadata_route_serves_descriptor() {
		let (status, headers, body) = fetch("/metadata.json").await;
		assert_eq!(status, StatusCode::OK);
		assert_eq!(headers[header::CONTENT_TYPE], "application/json");

		let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
		assert_eq!(value["robots"]["googleBot"]["max-video-preview"], -1);
		assert_eq!(value["metadataBase"], "https://embedded-feedback.vercel.app/");
		assert_eq!(value, serde_json::to_value(METADATA).unwrap());
	}

	#[test]
	fn error_page_is_a_full_document() {
		let page = error_page(StatusCode::INTERNAL_SERVER_ERROR);
		assert!(page.starts_with("<!DOCTYPE html><html lang=\"en\"><body class=\""));
		assert!(page.contains("<h1>Internal Server Error</h1>"));
	}
}
