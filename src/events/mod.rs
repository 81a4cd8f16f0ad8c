pub mod keyboard;
pub mod pointer;
pub mod wheel;

use web_sys as web;

use crate::dom::EventListener;
use crate::state::Shared;

pub use keyboard::wire_keyboard;
pub use pointer::wire_pointer;
pub use wheel::wire_wheel;

/// Re-measure the root on window resize. The slide pitch keeps the share of
/// the root width it had at mount.
pub fn wire_resize(shared: &Shared) -> anyhow::Result<EventListener> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let ratio = {
        let state = shared.state.try_borrow()?;
        let root_width = state.view.width();
        if root_width > 0.0 {
            state.slider.motion().item_width() / root_width
        } else {
            1.0
        }
    };
    let shared = shared.clone();
    EventListener::new(&window, "resize", move |_: web::Event| {
        let Some(width) = shared.state.try_borrow().ok().map(|state| state.view.width() * ratio) else {
            return;
        };
        if let Some(Err(e)) = shared.with_slider(|s| s.resize(width)) {
            log::warn!("[web] resize ignored: {e}");
        }
    })
}
