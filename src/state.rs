use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsValue;
use web_sys as web;

use slider_core::{FrameUpdate, Slider, SliderEvent};

use crate::constants::SLIDE_CHANGE_EVENT;
use crate::style::SliderView;

pub struct SliderState {
    pub slider: Slider,
    pub view: SliderView,
    pub latest: FrameUpdate,
}

impl SliderState {
    pub fn render(&self) {
        let transforms = self.slider.transforms(&self.latest);
        let bar = self.slider.progress_bar(&self.latest);
        self.view.apply(&transforms, &bar);
    }
}

#[derive(Default)]
pub struct Callbacks {
    next_id: u32,
    entries: Vec<(u32, js_sys::Function)>,
}

impl Callbacks {
    pub fn add(&mut self, f: js_sys::Function) -> u32 {
        self.next_id += 1;
        self.entries.push((self.next_id, f));
        self.next_id
    }

    pub fn remove(&mut self, id: u32) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(i, _)| *i != id);
        self.entries.len() != before
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

/// State shared by every closure of one mounted slider.
///
/// Engine listeners only queue slide changes; `flush` delivers them to the
/// DOM and to JavaScript once no borrow is held, so page callbacks may call
/// straight back into the handle.
#[derive(Clone)]
pub struct Shared {
    pub state: Rc<RefCell<SliderState>>,
    pending: Rc<RefCell<Vec<usize>>>,
    callbacks: Rc<RefCell<Callbacks>>,
}

impl Shared {
    pub fn new(mut slider: Slider, mut view: SliderView) -> Self {
        let pending = Rc::new(RefCell::new(Vec::new()));
        let queue = pending.clone();
        slider.subscribe(move |event| {
            if let SliderEvent::SlideChanged { index } = event {
                queue.try_borrow_mut()?.push(*index);
            }
            Ok(())
        });
        let latest = slider.snapshot();
        let index = slider.current_index();
        view.mark_active(index);
        let state = SliderState {
            slider,
            view,
            latest,
        };
        state.render();
        Self {
            state: Rc::new(RefCell::new(state)),
            pending,
            callbacks: Rc::new(RefCell::new(Callbacks::default())),
        }
    }

    /// Run `f` on the slider and deliver any slide change it caused.
    /// Returns `None` when the slider is already borrowed further up the
    /// stack.
    pub fn with_slider<R>(&self, f: impl FnOnce(&mut Slider) -> R) -> Option<R> {
        let result = {
            let Ok(mut state) = self.state.try_borrow_mut() else {
                log::warn!("[web] slider busy, call dropped");
                return None;
            };
            f(&mut state.slider)
        };
        self.flush();
        Some(result)
    }

    pub fn read<R>(&self, f: impl FnOnce(&Slider) -> R) -> Option<R> {
        self.state.try_borrow().ok().map(|state| f(&state.slider))
    }

    pub fn frame(&self, timestamp: f64) {
        {
            let Ok(mut state) = self.state.try_borrow_mut() else {
                return;
            };
            if let Some(update) = state.slider.frame(timestamp) {
                state.latest = update;
                state.render();
            }
        }
        self.flush();
    }

    pub fn on_slide_change(&self, f: js_sys::Function) -> u32 {
        self.callbacks.borrow_mut().add(f)
    }

    pub fn off(&self, id: u32) -> bool {
        self.callbacks.borrow_mut().remove(id)
    }

    fn flush(&self) {
        let changes: Vec<usize> = match self.pending.try_borrow_mut() {
            Ok(mut pending) => pending.drain(..).collect(),
            Err(_) => return,
        };
        for index in changes {
            let root = {
                let Ok(mut state) = self.state.try_borrow_mut() else {
                    return;
                };
                if !state.view.mark_active(index) {
                    continue;
                }
                state.view.root().clone()
            };
            log::debug!("[web] slide {index}");
            dispatch_slide_change(&root, index);
            let listeners: Vec<js_sys::Function> = self
                .callbacks
                .borrow()
                .entries
                .iter()
                .map(|(_, f)| f.clone())
                .collect();
            for f in listeners {
                if let Err(e) = f.call1(&JsValue::NULL, &JsValue::from(index as u32)) {
                    log::warn!("[web] slide change callback failed: {:?}", e);
                }
            }
        }
    }

    pub fn teardown(&self) {
        self.callbacks.borrow_mut().clear();
        if let Ok(mut pending) = self.pending.try_borrow_mut() {
            pending.clear();
        }
        if let Ok(mut state) = self.state.try_borrow_mut() {
            state.slider.destroy();
            state.view.clear();
        }
    }
}

fn dispatch_slide_change(root: &web::HtmlElement, index: usize) {
    let init = web::CustomEventInit::new();
    init.set_bubbles(true);
    init.set_detail(&JsValue::from(index as u32));
    match web::CustomEvent::new_with_event_init_dict(SLIDE_CHANGE_EVENT, &init) {
        Ok(event) => {
            _ = root.dispatch_event(&event);
        }
        Err(e) => log::warn!("[web] {SLIDE_CHANGE_EVENT} event failed: {:?}", e),
    }
}
