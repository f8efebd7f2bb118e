use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

/// Schedules the one-shot "fit view" action that follows a layout commit.
///
/// The surface needs at least one paint before its bounding boxes reflect
/// newly committed geometry, so the action runs after a settling delay plus
/// one animation frame. Single-slot: rescheduling clears the pending timeout
/// and replaces it, so only the latest commit's fit ever fires.
pub struct FitScheduler {
	settle_ms: i32,
	action: Rc<dyn Fn()>,
	pending: Cell<Option<i32>>,
	timeout_cb: RefCell<Option<Closure<dyn FnMut()>>>,
}

impl FitScheduler {
	pub fn new(settle_ms: i32, action: impl Fn() + 'static) -> Self {
		Self {
			settle_ms,
			action: Rc::new(action),
			pending: Cell::new(None),
			timeout_cb: RefCell::new(None),
		}
	}

	/// Queue the fit action, superseding any previously queued one.
	pub fn schedule(&self) {
		let Some(window) = web_sys::window() else {
			return;
		};
		if let Some(handle) = self.pending.take() {
			window.clear_timeout_with_handle(handle);
		}

		let action = Rc::clone(&self.action);
		let closure: Closure<dyn FnMut()> = Closure::new(move || {
			let action = Rc::clone(&action);
			// one frame between committing geometry and recomputing the camera
			let frame = Closure::once_into_js(move || action());
			if let Some(window) = web_sys::window() {
				let _ = window.request_animation_frame(frame.unchecked_ref());
			}
		});

		match window.set_timeout_with_callback_and_timeout_and_arguments_0(
			closure.as_ref().unchecked_ref(),
			self.settle_ms,
		) {
			Ok(handle) => self.pending.set(Some(handle)),
			Err(err) => log::warn!("failed to schedule viewport fit: {err:?}"),
		}
		// replacing the slot drops the superseded closure; its timeout is
		// already cleared
		*self.timeout_cb.borrow_mut() = Some(closure);
	}
}
