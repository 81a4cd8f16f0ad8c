use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

use crate::dom::{self, EventListener, Timer};
use crate::input;
use crate::state::Shared;

/// Debounced wheel stepping. Every consumed event restarts the timeout;
/// when it fires the accumulated scroll decides on at most one step.
pub fn wire_wheel(
    root: &web::HtmlElement,
    shared: &Shared,
) -> anyhow::Result<(EventListener, Rc<RefCell<Timer>>)> {
    let timer = {
        let shared = shared.clone();
        Rc::new(RefCell::new(Timer::new(move || {
            let now = instant::now();
            shared.with_slider(|s| {
                // Timers may fire a hair early relative to event timestamps.
                let now = s.wheel_deadline().map_or(now, |deadline| now.max(deadline));
                if let Some(steps) = s.poll_wheel(now) {
                    log::debug!("[web] wheel step {steps}");
                }
            });
        })))
    };

    let shared = shared.clone();
    let el = root.clone();
    let pending = timer.clone();
    let listener = EventListener::active(root, "wheel", move |ev: web::WheelEvent| {
        let delta = input::wheel_delta_px(ev.delta_x(), ev.delta_y(), ev.delta_mode(), dom::width_of(&el));
        let Some(Some(window_ms)) = shared.with_slider(|s| s.wheel(delta.x, delta.y, ev.time_stamp())) else {
            return;
        };
        ev.prevent_default();
        if let Ok(mut timer) = pending.try_borrow_mut() {
            if let Err(e) = timer.schedule(window_ms) {
                log::warn!("[web] wheel timeout: {e:#}");
            }
        }
    })?;
    Ok((listener, timer))
}
