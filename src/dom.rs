use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
fn js_err(e: wasm_bindgen::JsValue) -> anyhow::Error {
    anyhow::anyhow!("{:?}", e)
}

/// A DOM event listener that is removed again when dropped.
pub struct EventListener {
    target: web::EventTarget,
    kind: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

impl EventListener {
    pub fn new<E, F>(target: &web::EventTarget, kind: &'static str, handler: F) -> anyhow::Result<Self>
    where
        E: JsCast + 'static,
        F: FnMut(E) + 'static,
    {
        Self::with_options(target, kind, None, handler)
    }

    /// Register with `passive: false` so the handler may call
    /// `prevent_default`.
    pub fn active<E, F>(target: &web::EventTarget, kind: &'static str, handler: F) -> anyhow::Result<Self>
    where
        E: JsCast + 'static,
        F: FnMut(E) + 'static,
    {
        let options = web::AddEventListenerOptions::new();
        options.set_passive(false);
        Self::with_options(target, kind, Some(&options), handler)
    }

    fn with_options<E, F>(
        target: &web::EventTarget,
        kind: &'static str,
        options: Option<&web::AddEventListenerOptions>,
        mut handler: F,
    ) -> anyhow::Result<Self>
    where
        E: JsCast + 'static,
        F: FnMut(E) + 'static,
    {
        let closure = Closure::wrap(Box::new(move |ev: web::Event| {
            handler(ev.unchecked_into::<E>());
        }) as Box<dyn FnMut(web::Event)>);
        let callback = closure.as_ref().unchecked_ref();
        match options {
            Some(options) => target
                .add_event_listener_with_callback_and_add_event_listener_options(
                    kind, callback, options,
                ),
            None => target.add_event_listener_with_callback(kind, callback),
        }
        .map_err(js_err)?;
        Ok(Self {
            target: target.clone(),
            kind,
            closure,
        })
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.kind, self.closure.as_ref().unchecked_ref());
    }
}

/// A `setTimeout`/`setInterval` callback with its pending handle.
pub struct Timer {
    closure: Closure<dyn FnMut()>,
    handle: Option<i32>,
    repeating: bool,
}

impl Timer {
    pub fn new(mut callback: impl FnMut() + 'static) -> Self {
        Self {
            closure: Closure::wrap(Box::new(move || callback()) as Box<dyn FnMut()>),
            handle: None,
            repeating: false,
        }
    }

    /// Run once after `ms`, replacing any pending run.
    pub fn schedule(&mut self, ms: f64) -> anyhow::Result<()> {
        self.clear();
        let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
        let handle = window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                self.closure.as_ref().unchecked_ref(),
                ms.ceil().max(0.0) as i32,
            )
            .map_err(js_err)?;
        self.handle = Some(handle);
        self.repeating = false;
        Ok(())
    }

    pub fn repeat(&mut self, ms: i32) -> anyhow::Result<()> {
        self.clear();
        let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
        let handle = window
            .set_interval_with_callback_and_timeout_and_arguments_0(
                self.closure.as_ref().unchecked_ref(),
                ms,
            )
            .map_err(js_err)?;
        self.handle = Some(handle);
        self.repeating = true;
        Ok(())
    }

    pub fn clear(&mut self) {
        let (Some(handle), Some(window)) = (self.handle.take(), web::window()) else {
            return;
        };
        if self.repeating {
            window.clear_interval_with_handle(handle);
        } else {
            window.clear_timeout_with_handle(handle);
        }
    }
}

impl Drop for Timer {
    fn drop(&mut self) {
        self.clear();
    }
}

pub fn element_by_id(id: &str) -> anyhow::Result<web::HtmlElement> {
    let document = window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow::anyhow!("no element with id {id:?}"))?
        .dyn_into::<web::HtmlElement>()
        .map_err(|_| anyhow::anyhow!("#{id} is not an HTML element"))
}

pub fn query_all(root: &web::Element, selector: &str) -> Vec<web::HtmlElement> {
    let Ok(list) = root.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<web::HtmlElement>().ok())
        .collect()
}

pub fn query_one(root: &web::Element, selector: &str) -> Option<web::HtmlElement> {
    root.query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

#[inline]
pub fn width_of(el: &web::Element) -> f64 {
    el.get_bounding_client_rect().width()
}

#[inline]
pub fn set_style(el: &web::HtmlElement, property: &str, value: &str) {
    _ = el.style().set_property(property, value);
}
