use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

use crate::constants::VISIBILITY_THRESHOLD;
use crate::frame::FrameLoop;
use crate::state::Shared;

/// `IntersectionObserver` on the slider root. Off-screen sliders stop the
/// frame loop and hold auto-play; the observer disconnects on drop.
pub struct VisibilityWatch {
    observer: web::IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array)>,
}

impl VisibilityWatch {
    pub fn observe(root: &web::Element, shared: &Shared, frame: Rc<FrameLoop>) -> anyhow::Result<Self> {
        let shared = shared.clone();
        let callback = Closure::wrap(Box::new(move |entries: js_sys::Array| {
            // Only the latest entry for our single target matters.
            let Some(entry) = entries
                .iter()
                .last()
                .and_then(|e| e.dyn_into::<web::IntersectionObserverEntry>().ok())
            else {
                return;
            };
            let visible = entry.is_intersecting();
            shared.with_slider(|s| s.set_visible(visible, instant::now()));
            if visible {
                frame.resume();
            } else {
                frame.pause();
            }
            log::debug!("[web] visible={visible}");
        }) as Box<dyn FnMut(js_sys::Array)>);

        let init = web::IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from(VISIBILITY_THRESHOLD));
        let observer =
            web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
                .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        observer.observe(root);
        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for VisibilityWatch {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
