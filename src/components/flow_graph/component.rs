use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use leptos::__reexports::send_wrapper::SendWrapper;
use leptos::task::spawn_local;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use web_sys::HtmlDivElement;

use super::elk::ElkEngine;
use super::fetch::GraphClient;
use super::fit::FitScheduler;
use super::layout::{LayoutOptions, layout_graph};
use super::state::ViewController;
use super::surface::{self, FitOptions, FlowSurface};

/// Settling delay before the post-layout viewport fit.
const FIT_SETTLE_MS: i32 = 50;

/// Interactive dependency-graph diagram.
///
/// Fetches the raw graph from `endpoint`, commits the pre-layout render
/// model, reacts to the commit with an asynchronous layout pass and frames
/// the result once the surface has painted it.
#[component]
pub fn FlowGraphView(
	/// Base address of the graph data source.
	#[prop(into)]
	endpoint: String,
	/// Viewport fraction kept free around the fitted graph.
	#[prop(default = 0.2)]
	fit_padding: f64,
) -> impl IntoView {
	let container_ref = NodeRef::<leptos::html::Div>::new();
	let view = RwSignal::new(ViewController::new());
	let surface: Rc<RefCell<Option<FlowSurface>>> = Rc::new(RefCell::new(None));
	let connect_cb: Rc<RefCell<Option<Closure<dyn FnMut(JsValue)>>>> = Rc::new(RefCell::new(None));

	let fit = Rc::new(FitScheduler::new(FIT_SETTLE_MS, {
		let surface = Rc::clone(&surface);
		move || {
			if let Some(ref surface) = *surface.borrow() {
				let options = FitOptions {
					padding: fit_padding,
					..FitOptions::default()
				};
				match surface::to_js(&options) {
					Ok(options) => surface.fit_view(options),
					Err(err) => log::warn!("failed to encode fit options: {err}"),
				}
			}
		}
	}));

	// Mount the rendering surface once the container exists.
	let (surface_mount, connect_mount) = (Rc::clone(&surface), Rc::clone(&connect_cb));
	Effect::new(move |_| {
		let Some(container) = container_ref.get() else {
			return;
		};
		if surface_mount.borrow().is_some() {
			return;
		}
		let container: HtmlDivElement = container.into();
		let handler: Closure<dyn FnMut(JsValue)> = Closure::new(|params: JsValue| {
			// user-driven connects stay inside the surface (single writer)
			log::debug!("connect requested on surface: {params:?}");
		});
		*surface_mount.borrow_mut() = Some(surface::mount(&container, &handler));
		*connect_mount.borrow_mut() = Some(handler);
	});

	// One fetch per mount. Loading always clears; a successful fetch commits
	// the raw model, which the layout effect below reacts to.
	let client = GraphClient::new(endpoint);
	view.update(|v| v.begin_fetch());
	spawn_local(async move {
		match client.fetch_graph().await {
			Ok(raw) => view.update(|v| {
				v.commit_raw(raw);
			}),
			Err(err) => view.update(|v| v.fetch_failed(&err)),
		}
		view.update(|v| v.finish_loading());
	});

	// Push every committed snapshot to the surface.
	let surface_push = Rc::clone(&surface);
	Effect::new(move |_| {
		view.with(|v| {
			if !v.has_model() {
				return;
			}
			let Some(ref surface) = *surface_push.borrow() else {
				return;
			};
			match (surface::to_js(v.nodes()), surface::to_js(v.edges())) {
				(Ok(nodes), Ok(edges)) => surface.set_graph(nodes, edges),
				(Err(err), _) | (_, Err(err)) => {
					log::warn!("failed to encode render state: {err}");
				}
			}
		});
	});

	// Layout pass, as a reaction to raw-model arrival. Keyed on the
	// generation tag: a rerun caused by commit_layout sees an unchanged
	// generation and does nothing, and a result from a superseded snapshot
	// is rejected by the controller when it finally resolves.
	let engine = ElkEngine::new();
	let fit_layout = Rc::clone(&fit);
	Effect::new(move |prev: Option<u64>| {
		let generation = view.with(|v| v.generation());
		if prev == Some(generation) || view.with_untracked(|v| !v.has_model()) {
			return generation;
		}
		let (nodes, edges) =
			view.with_untracked(|v| (v.nodes().to_vec(), v.edges().to_vec()));
		let engine = engine.clone();
		let fit = Rc::clone(&fit_layout);
		spawn_local(async move {
			let options = LayoutOptions::default();
			let (nodes, edges) = layout_graph(&engine, nodes, edges, &options).await;
			view.update(|v| {
				if v.commit_layout(generation, nodes, edges) {
					fit.schedule();
				}
			});
		});
		generation
	});

	let (surface_cleanup, connect_cleanup) = (
		SendWrapper::new(Rc::clone(&surface)),
		SendWrapper::new(Rc::clone(&connect_cb)),
	);
	on_cleanup(move || {
		if let Some(surface) = surface_cleanup.borrow_mut().take() {
			surface.destroy();
		}
		connect_cleanup.borrow_mut().take();
	});

	view! {
		<div class="flow-graph">
			<Show when=move || view.with(|v| v.loading())>
				<div class="flow-graph__loading">"Loading..."</div>
			</Show>
			<div class="flow-graph__surface" node_ref=container_ref></div>
		</div>
	}
}
