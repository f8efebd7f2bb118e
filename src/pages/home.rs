use leptos::prelude::*;

use crate::components::flow_graph::FlowGraphView;

/// Address of the embedded backend serving the dependency graph.
const DATA_ENDPOINT: &str = "http://localhost:39261";

/// Default Home Page
#[component]
pub fn Home() -> impl IntoView {
	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"Uh oh! Something went wrong!"</h1>

				<p>"Errors: "</p>
				<ul>
					{move || {
						errors
							.get()
							.into_iter()
							.map(|(_, e)| view! { <li>{e.to_string()}</li> })
							.collect_view()
					}}
				</ul>
			}
		}>

			<div class="fullscreen-graph">
				<FlowGraphView endpoint=DATA_ENDPOINT />
				<div class="graph-overlay">
					<h1>"Package Dependencies"</h1>
					<p class="subtitle">"Scroll to zoom. Drag the background to pan."</p>
				</div>
			</div>
		</ErrorBoundary>
	}
}
