use wasm_bindgen::JsCast;
use web_sys as web;

use crate::dom::EventListener;
use crate::input::{self, Modifiers};
use crate::state::Shared;

/// Window-level keys. The slider itself ignores them while off-screen.
pub fn wire_keyboard(shared: &Shared) -> anyhow::Result<EventListener> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let shared = shared.clone();
    EventListener::new(&window, "keydown", move |ev: web::KeyboardEvent| {
        let key = ev.key();
        let modifiers = Modifiers {
            alt: ev.alt_key(),
            ctrl: ev.ctrl_key(),
            meta: ev.meta_key(),
        };
        let tag = ev
            .target()
            .and_then(|t| t.dyn_into::<web::Element>().ok())
            .map(|el| el.tag_name());
        if !input::forwards_key(&key, modifiers, tag.as_deref()) {
            return;
        }
        if let Some(Some(command)) = shared.with_slider(|s| s.key(&key, ev.time_stamp())) {
            ev.prevent_default();
            log::debug!("[web] key {key:?} -> {:?}", command);
        }
    })
}
