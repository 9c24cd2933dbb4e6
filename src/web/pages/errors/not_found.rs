// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::web::pages::head::PageTitle;
use leptos::prelude::*;

pub const NOT_FOUND_TITLE: &str = "Not Found";

#[component]
pub fn NotFound() -> impl IntoView {
	#[cfg(feature = "ssr")]
	{
		if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
			response.set_status(axum::http::StatusCode::NOT_FOUND);
		}
	}

	view! {
		<PageTitle title=NOT_FOUND_TITLE />
		<main id="not_found_page">
			<h1>"Not found!"</h1>
			<p>"The content you were looking for is not here."</p>
		</main>
	}
}
