//! Interface boundary to the external flow-view rendering bundle.
//!
//! The page (see `index.html`) loads a `flowView` global wrapping the
//! graph-rendering widget: nodes and edges go in, pan/zoom/minimap/drag are
//! handled entirely on the JS side. This crate only pushes committed render
//! state across and issues camera commands.

use serde::Serialize;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen]
extern "C" {
	/// Handle to a mounted flow-view instance.
	pub type FlowSurface;

	#[wasm_bindgen(js_namespace = flowView, js_name = mount)]
	fn mount_raw(container: &web_sys::Element, handlers: &JsValue) -> FlowSurface;

	/// Replace the rendered node and edge collections.
	#[wasm_bindgen(method, js_name = setGraph)]
	pub fn set_graph(this: &FlowSurface, nodes: JsValue, edges: JsValue);

	/// Recompute the camera so all current geometry is framed.
	#[wasm_bindgen(method, js_name = fitView)]
	pub fn fit_view(this: &FlowSurface, options: JsValue);

	/// Tear the instance down and release its DOM.
	#[wasm_bindgen(method)]
	pub fn destroy(this: &FlowSurface);
}

/// Camera-fit parameters.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct FitOptions {
	/// Fraction of the viewport kept free around the framed graph.
	pub padding: f64,
	/// Camera animation length in milliseconds.
	pub duration: f64,
}

impl Default for FitOptions {
	fn default() -> Self {
		Self {
			padding: 0.2,
			duration: 200.0,
		}
	}
}

/// Mount the surface into `container`.
///
/// `on_connect` receives user-driven edge-creation attempts. Those stay
/// local to the surface — the committed model has a single writer — so the
/// handler observes, it never commits.
pub fn mount(container: &web_sys::Element, on_connect: &Closure<dyn FnMut(JsValue)>) -> FlowSurface {
	let handlers = js_sys::Object::new();
	let _ = js_sys::Reflect::set(
		&handlers,
		&JsValue::from_str("onConnect"),
		on_connect.as_ref(),
	);
	mount_raw(container, &handlers)
}

// serde_wasm_bindgen turns maps into ES Maps by default; the surface and the
// layout engine both want plain objects.
pub(crate) fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, serde_wasm_bindgen::Error> {
	value.serialize(&serde_wasm_bindgen::Serializer::json_compatible())
}
