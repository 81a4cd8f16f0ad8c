use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type Tick = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// `requestAnimationFrame` loop that can be paused, resumed and stopped.
///
/// The tick closure holds a handle to its own slot; `stop` empties the slot
/// and so releases the closure along with everything it captured.
pub struct FrameLoop {
    tick: Tick,
    handle: Rc<Cell<Option<i32>>>,
    running: Rc<Cell<bool>>,
}

impl FrameLoop {
    pub fn start(mut on_frame: impl FnMut(f64) + 'static) -> Self {
        let tick: Tick = Rc::new(RefCell::new(None));
        let handle = Rc::new(Cell::new(None));
        let running = Rc::new(Cell::new(true));

        let tick_clone = tick.clone();
        let handle_clone = handle.clone();
        let running_clone = running.clone();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move |timestamp: f64| {
            handle_clone.set(None);
            if !running_clone.get() {
                return;
            }
            on_frame(timestamp);
            // on_frame may have paused or stopped the loop
            if running_clone.get() {
                request(&tick_clone, &handle_clone);
            }
        }) as Box<dyn FnMut(f64)>));

        request(&tick, &handle);
        Self {
            tick,
            handle,
            running,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running.get()
    }

    pub fn pause(&self) {
        self.running.set(false);
        if let (Some(id), Some(w)) = (self.handle.take(), web::window()) {
            _ = w.cancel_animation_frame(id);
        }
    }

    pub fn resume(&self) {
        if self.running.get() || self.tick.borrow().is_none() {
            return;
        }
        self.running.set(true);
        request(&self.tick, &self.handle);
    }

    pub fn stop(&self) {
        self.pause();
        self.tick.borrow_mut().take();
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.stop();
    }
}

fn request(tick: &Tick, handle: &Rc<Cell<Option<i32>>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(closure) = tick.borrow().as_ref() {
        match w.request_animation_frame(closure.as_ref().unchecked_ref()) {
            Ok(id) => handle.set(Some(id)),
            Err(e) => log::warn!("requestAnimationFrame failed: {:?}", e),
        }
    }
}
