//! Binding to the ELK layout engine bundle loaded by the page.

use std::rc::Rc;

use wasm_bindgen::JsValue;
use wasm_bindgen::prelude::wasm_bindgen;
use wasm_bindgen_futures::JsFuture;

use crate::error::{Error, Result};

use super::layout::{LayoutEngine, LayoutRequest, LayoutResponse};
use super::surface::to_js;

#[wasm_bindgen]
extern "C" {
	#[wasm_bindgen(js_name = ELK)]
	type Elk;

	#[wasm_bindgen(constructor, js_class = "ELK")]
	fn new() -> Elk;

	#[wasm_bindgen(method)]
	fn layout(this: &Elk, graph: JsValue) -> js_sys::Promise;
}

/// The in-page ELK instance behind the [`LayoutEngine`] seam.
#[derive(Clone)]
pub struct ElkEngine {
	inner: Rc<Elk>,
}

impl ElkEngine {
	pub fn new() -> Self {
		Self {
			inner: Rc::new(Elk::new()),
		}
	}
}

impl Default for ElkEngine {
	fn default() -> Self {
		Self::new()
	}
}

impl LayoutEngine for ElkEngine {
	async fn compute(&self, request: &LayoutRequest) -> Result<LayoutResponse> {
		let graph = to_js(request).map_err(|e| Error::Layout {
			message: e.to_string(),
		})?;
		let value = JsFuture::from(self.inner.layout(graph))
			.await
			.map_err(|e| Error::Layout {
				message: format!("{e:?}"),
			})?;
		serde_wasm_bindgen::from_value(value).map_err(|e| Error::Layout {
			message: e.to_string(),
		})
	}
}
