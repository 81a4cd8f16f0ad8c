#![cfg(target_arch = "wasm32")]
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;

use slider_core::Slider;

mod autoplay;
mod constants;
mod css;
mod dom;
mod events;
mod frame;
mod input;
mod options;
mod state;
mod style;
mod visibility;

use constants::SLIDE_SELECTOR;
use dom::{EventListener, Timer};
use frame::FrameLoop;
use state::Shared;
use style::SliderView;
use visibility::VisibilityWatch;

/// Everything a mounted slider registered with the browser. Dropping it
/// removes listeners, clears timers, disconnects the observer and stops the
/// frame loop.
struct Wiring {
    listeners: Vec<EventListener>,
    wheel_timer: Rc<RefCell<Timer>>,
    autoplay: Option<Timer>,
    visibility: Option<VisibilityWatch>,
    frame: Rc<FrameLoop>,
}

impl Wiring {
    fn release(self) {
        let Wiring {
            listeners,
            wheel_timer,
            autoplay,
            visibility,
            frame,
        } = self;
        drop(visibility);
        drop(autoplay);
        if let Ok(mut timer) = wheel_timer.try_borrow_mut() {
            timer.clear();
        }
        drop(listeners);
        frame.stop();
    }
}

/// JavaScript handle for one slider widget.
#[wasm_bindgen]
pub struct SliderHandle {
    shared: Shared,
    wiring: Option<Wiring>,
}

#[wasm_bindgen]
impl SliderHandle {
    /// Mount onto the element with id `root_id`. `options_json` takes the
    /// camelCase slider options; slide count and width default to the
    /// markup.
    pub fn mount(root_id: &str, options_json: Option<String>) -> Result<SliderHandle, JsValue> {
        mount_slider(root_id, options_json.as_deref())
            .map_err(|e| JsValue::from_str(&format!("{e:#}")))
    }

    pub fn next(&self) -> bool {
        self.shared.with_slider(|s| s.next()).unwrap_or(false)
    }

    pub fn prev(&self) -> bool {
        self.shared.with_slider(|s| s.prev()).unwrap_or(false)
    }

    #[wasm_bindgen(js_name = goTo)]
    pub fn go_to(&self, index: usize, immediate: bool) {
        self.shared.with_slider(|s| s.go_to(index, immediate));
    }

    #[wasm_bindgen(js_name = currentIndex)]
    pub fn current_index(&self) -> usize {
        self.shared.read(|s| s.current_index()).unwrap_or(0)
    }

    pub fn progress(&self) -> f64 {
        self.shared
            .read(|s| s.motion().progress())
            .unwrap_or(0.0)
    }

    #[wasm_bindgen(js_name = performanceMode)]
    pub fn performance_mode(&self) -> String {
        self.shared
            .read(|s| s.motion().performance_mode().as_str().to_string())
            .unwrap_or_default()
    }

    /// Call `callback(index)` whenever the active slide changes. Returns an
    /// id for `off`.
    #[wasm_bindgen(js_name = onSlideChange)]
    pub fn on_slide_change(&self, callback: js_sys::Function) -> u32 {
        self.shared.on_slide_change(callback)
    }

    pub fn off(&self, id: u32) -> bool {
        self.shared.off(id)
    }

    pub fn destroy(&mut self) {
        let Some(wiring) = self.wiring.take() else {
            return;
        };
        wiring.release();
        self.shared.teardown();
        log::info!("[web] slider unmounted");
    }
}

impl Drop for SliderHandle {
    fn drop(&mut self) {
        self.destroy();
    }
}

fn mount_slider(root_id: &str, options_json: Option<&str>) -> anyhow::Result<SliderHandle> {
    let root = dom::element_by_id(root_id)?;
    let view = SliderView::collect(root.clone());
    let width = view.width();
    let config = options::resolve_config(options_json, view.slide_count(), width)?;
    if config.slide_count != view.slide_count() {
        log::warn!(
            "[web] #{root_id}: slideCount {} but {} {SLIDE_SELECTOR} elements",
            config.slide_count,
            view.slide_count()
        );
    }
    let slider = Slider::new(config)?;
    let shared = Shared::new(slider, view);

    let frame = {
        let shared = shared.clone();
        Rc::new(FrameLoop::start(move |timestamp| shared.frame(timestamp)))
    };

    let mut listeners = events::wire_pointer(&root, &shared)?;
    let (wheel, wheel_timer) = events::wire_wheel(&root, &shared)?;
    listeners.push(wheel);
    listeners.push(events::wire_keyboard(&shared)?);
    listeners.push(events::wire_resize(&shared)?);
    let autoplay = autoplay::start_autoplay(&shared)?;
    let visibility = match VisibilityWatch::observe(&root, &shared, frame.clone()) {
        Ok(watch) => Some(watch),
        Err(e) => {
            // Without an observer the slider simply stays visible.
            log::warn!("[web] IntersectionObserver unavailable: {e:#}");
            None
        }
    };

    log::info!("[web] mounted #{root_id} ({width:.0}px wide)");
    Ok(SliderHandle {
        shared,
        wiring: Some(Wiring {
            listeners,
            wheel_timer,
            autoplay,
            visibility,
            frame,
        }),
    })
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("[web] slider module ready");
}
