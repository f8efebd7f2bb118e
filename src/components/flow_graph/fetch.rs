//! Client for the graph data endpoint.
//!
//! Uses web-sys fetch on wasm32 and reqwest on native builds, so the same
//! call sites compile and test on the host.

use serde::de::DeserializeOwned;

use crate::error::{Error, Result};

use super::types::RawGraph;

/// Client for the backend exposing the dependency graph.
#[derive(Clone, Debug)]
pub struct GraphClient {
	base_url: String,
}

impl GraphClient {
	pub fn new(base_url: impl Into<String>) -> Self {
		Self {
			base_url: base_url.into(),
		}
	}

	/// Fetch the raw dependency graph with a single GET.
	pub async fn fetch_graph(&self) -> Result<RawGraph> {
		self.get("/data").await
	}

	#[cfg(target_arch = "wasm32")]
	async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
		use wasm_bindgen::JsCast;
		use wasm_bindgen_futures::JsFuture;
		use web_sys::{Request, RequestInit, RequestMode, Response};

		let url = format!("{}{}", self.base_url, path);

		let opts = RequestInit::new();
		opts.set_method("GET");
		opts.set_mode(RequestMode::Cors);

		let request = Request::new_with_str_and_init(&url, &opts).map_err(|e| Error::Fetch {
			message: format!("{e:?}"),
		})?;

		let window = web_sys::window().ok_or_else(|| Error::Fetch {
			message: "no window".into(),
		})?;
		let resp_value = JsFuture::from(window.fetch_with_request(&request))
			.await
			.map_err(|e| Error::Fetch {
				message: format!("{e:?}"),
			})?;

		let resp: Response = resp_value.dyn_into().map_err(|_| Error::Fetch {
			message: "response is not a Response".into(),
		})?;

		if !resp.ok() {
			return Err(Error::Status { status: resp.status() });
		}

		let json = JsFuture::from(resp.json().map_err(|e| Error::Fetch {
			message: format!("{e:?}"),
		})?)
		.await
		.map_err(|e| Error::Fetch {
			message: format!("{e:?}"),
		})?;

		serde_wasm_bindgen::from_value(json).map_err(|e| Error::Fetch {
			message: e.to_string(),
		})
	}

	#[cfg(not(target_arch = "wasm32"))]
	async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
		let url = format!("{}{}", self.base_url, path);

		let response = reqwest::get(&url).await.map_err(|e| Error::Fetch {
			message: e.to_string(),
		})?;

		if !response.status().is_success() {
			return Err(Error::Status {
				status: response.status().as_u16(),
			});
		}

		response.json::<T>().await.map_err(|e| Error::Fetch {
			message: e.to_string(),
		})
	}
}
