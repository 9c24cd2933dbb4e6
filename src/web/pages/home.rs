// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::site::metadata::METADATA;
use leptos::prelude::*;

#[component]
pub fn Home() -> impl IntoView {
	view! {
		<main id="home_page">
			<h1>{METADATA.open_graph.site_name}</h1>
			<p>{METADATA.description}</p>
		</main>
	}
}
