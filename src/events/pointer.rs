use web_sys as web;

use crate::dom::EventListener;
use crate::state::Shared;

/// Drag with pointer capture so a gesture keeps tracking outside the root.
pub fn wire_pointer(root: &web::HtmlElement, shared: &Shared) -> anyhow::Result<Vec<EventListener>> {
    Ok(vec![
        wire_pointerdown(root, shared)?,
        wire_pointermove(root, shared)?,
        wire_pointerup(root, shared)?,
        wire_pointercancel(root, shared)?,
    ])
}

fn wire_pointerdown(root: &web::HtmlElement, shared: &Shared) -> anyhow::Result<EventListener> {
    let shared = shared.clone();
    let el = root.clone();
    EventListener::new(root, "pointerdown", move |ev: web::PointerEvent| {
        if !ev.is_primary() || ev.button() != 0 {
            return;
        }
        _ = el.set_pointer_capture(ev.pointer_id());
        let x = ev.client_x() as f64;
        shared.with_slider(|s| s.pointer_down(x, ev.time_stamp()));
    })
}

fn wire_pointermove(root: &web::HtmlElement, shared: &Shared) -> anyhow::Result<EventListener> {
    let shared = shared.clone();
    EventListener::new(root, "pointermove", move |ev: web::PointerEvent| {
        if !ev.is_primary() {
            return;
        }
        let x = ev.client_x() as f64;
        let dragged = shared
            .with_slider(|s| s.pointer_move(x, ev.time_stamp()))
            .unwrap_or(false);
        if dragged {
            ev.prevent_default();
        }
    })
}

fn wire_pointerup(root: &web::HtmlElement, shared: &Shared) -> anyhow::Result<EventListener> {
    let shared = shared.clone();
    let el = root.clone();
    EventListener::new(root, "pointerup", move |ev: web::PointerEvent| {
        if !ev.is_primary() {
            return;
        }
        if el.has_pointer_capture(ev.pointer_id()) {
            _ = el.release_pointer_capture(ev.pointer_id());
        }
        let x = ev.client_x() as f64;
        if let Some(Some(outcome)) = shared.with_slider(|s| s.pointer_up(x, ev.time_stamp())) {
            log::debug!("[web] drag released: {:?}", outcome);
        }
    })
}

fn wire_pointercancel(root: &web::HtmlElement, shared: &Shared) -> anyhow::Result<EventListener> {
    let shared = shared.clone();
    EventListener::new(root, "pointercancel", move |ev: web::PointerEvent| {
        shared.with_slider(|s| s.pointer_cancel(ev.time_stamp()));
    })
}
