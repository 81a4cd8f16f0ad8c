use slider_core::{ProgressBar, SlideTransform};

use crate::constants::CSS_EPSILON;

/// Inline style values for one slide element.
#[derive(Clone, Debug, PartialEq)]
pub struct SlideStyle {
    pub transform: String,
    pub opacity: String,
    pub filter: String,
    pub visibility: &'static str,
}

/// Round to three decimals and squash near-zero values so the strings stay
/// short and never read `-0`.
#[inline]
pub fn num(v: f64) -> f64 {
    if !v.is_finite() || v.abs() < CSS_EPSILON {
        return 0.0;
    }
    let r = (v * 1000.0).round() / 1000.0;
    if r == 0.0 {
        0.0
    } else {
        r
    }
}

pub fn translate_x(px: f64) -> String {
    format!("translate3d({}px, 0, 0)", num(px))
}

pub fn slide_transform(t: &SlideTransform) -> String {
    let mut out = translate_x(t.translate_x);
    let scale = num(t.scale);
    if scale != 1.0 {
        out.push_str(&format!(" scale({scale})"));
    }
    let skew = num(t.skew_deg);
    if skew != 0.0 {
        out.push_str(&format!(" skewX({skew}deg)"));
    }
    let rotate = num(t.rotate_deg);
    if rotate != 0.0 {
        out.push_str(&format!(" rotate({rotate}deg)"));
    }
    out
}

pub fn filter(blur_px: f64) -> String {
    let blur = num(blur_px);
    if blur <= 0.0 {
        "none".to_string()
    } else {
        format!("blur({blur}px)")
    }
}

pub fn slide_style(t: &SlideTransform) -> SlideStyle {
    SlideStyle {
        transform: slide_transform(t),
        opacity: num(t.opacity.clamp(0.0, 1.0)).to_string(),
        filter: filter(t.blur_px),
        visibility: if t.visible { "visible" } else { "hidden" },
    }
}

/// Layers sit inside the already translated slide, so each one only moves
/// by the difference between its parallax offset and the slide's own.
pub fn layer_transforms(t: &SlideTransform) -> [String; 3] {
    t.layers.map(|offset| translate_x(offset - t.translate_x))
}

pub fn progress_transform(bar: &ProgressBar) -> String {
    format!("scaleX({})", num(bar.fill.clamp(0.0, 1.0)))
}
