use glam::DVec2;

use crate::constants::{DOM_DELTA_LINE, DOM_DELTA_PAGE, DOM_DELTA_PIXEL, LINE_HEIGHT_PX};

/// Modifier keys held during a keydown.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub alt: bool,
    pub ctrl: bool,
    pub meta: bool,
}

impl Modifiers {
    #[inline]
    pub fn any(&self) -> bool {
        self.alt || self.ctrl || self.meta
    }
}

/// Normalize a `WheelEvent` delta to pixels. Page mode scrolls by the
/// width of the slider root.
pub fn wheel_delta_px(dx: f64, dy: f64, delta_mode: u32, page_px: f64) -> DVec2 {
    let unit = match delta_mode {
        DOM_DELTA_PIXEL => 1.0,
        DOM_DELTA_LINE => LINE_HEIGHT_PX,
        DOM_DELTA_PAGE => page_px.max(1.0),
        _ => 1.0,
    };
    let delta = DVec2::new(dx, dy) * unit;
    if delta.is_finite() {
        delta
    } else {
        DVec2::ZERO
    }
}

/// Elements whose keystrokes belong to the user, not the slider.
pub fn is_text_entry(tag_name: &str) -> bool {
    matches!(
        tag_name.to_ascii_uppercase().as_str(),
        "INPUT" | "TEXTAREA" | "SELECT"
    )
}

/// Whether a keydown should reach the slider at all. Shortcuts with
/// modifiers and typing into form fields pass through to the page.
pub fn forwards_key(key: &str, modifiers: Modifiers, target_tag: Option<&str>) -> bool {
    if key.is_empty() || modifiers.any() {
        return false;
    }
    !target_tag.map(is_text_entry).unwrap_or(false)
}
