//! Per-frame mapping from motion state to slide transforms.
//!
//! Stateless: every function takes the latest `FrameUpdate` and returns
//! plain numbers. Hosts turn them into CSS (web) or instance data (native).

use crate::config::{PresentationTuning, SliderConfig};
use crate::events::FrameUpdate;
use crate::performance::PerformanceMode;

/// Geometry of the slide strip.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SlideMetrics {
    pub slide_count: usize,
    pub item_width: f64,
    pub infinite: bool,
}

impl SlideMetrics {
    pub fn from_config(config: &SliderConfig) -> Self {
        Self {
            slide_count: config.slide_count,
            item_width: config.item_width,
            infinite: config.infinite,
        }
    }

    #[inline]
    pub fn total_width(&self) -> f64 {
        self.item_width * self.slide_count as f64
    }

    #[inline]
    fn is_degenerate(&self) -> bool {
        !(self.item_width.is_finite() && self.item_width > 0.0)
    }
}

/// Motion-blur style effects shared by every slide in a frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SpeedEffects {
    pub blur_px: f64,
    pub skew_deg: f64,
    pub rotate_deg: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SlideTransform {
    pub index: usize,
    /// Horizontal offset from the viewport origin, in position units.
    pub translate_x: f64,
    /// Signed distance from the viewport in slides.
    pub distance: f64,
    pub opacity: f64,
    pub scale: f64,
    pub blur_px: f64,
    pub skew_deg: f64,
    pub rotate_deg: f64,
    /// Background, midground and foreground parallax offsets.
    pub layers: [f64; 3],
    pub visible: bool,
}

impl SlideTransform {
    fn resting(index: usize) -> Self {
        Self {
            index,
            translate_x: 0.0,
            distance: 0.0,
            opacity: 1.0,
            scale: 1.0,
            blur_px: 0.0,
            skew_deg: 0.0,
            rotate_deg: 0.0,
            layers: [0.0; 3],
            visible: index == 0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProgressBar {
    /// Fill ratio in `[0, 1]`.
    pub fill: f64,
    /// Lead (positive) or lag applied on top of `progress`.
    pub lead: f64,
}

/// Speed in slides per second, signed like `FrameUpdate::speed`.
#[inline]
fn slide_speed(update: &FrameUpdate, metrics: &SlideMetrics) -> f64 {
    if metrics.is_degenerate() || !update.speed.is_finite() {
        return 0.0;
    }
    update.speed / metrics.item_width
}

pub fn speed_effects(
    update: &FrameUpdate,
    metrics: &SlideMetrics,
    tuning: &PresentationTuning,
) -> SpeedEffects {
    let speed = slide_speed(update, metrics);
    let blur_px = if update.performance_mode == PerformanceMode::PowerSave {
        0.0
    } else {
        (speed.abs() * tuning.blur_per_slide_speed).min(tuning.max_blur_px)
    };
    SpeedEffects {
        blur_px,
        skew_deg: (speed * tuning.skew_per_slide_speed)
            .clamp(-tuning.max_skew_deg, tuning.max_skew_deg),
        rotate_deg: (speed * tuning.rotate_per_slide_speed)
            .clamp(-tuning.max_rotate_deg, tuning.max_rotate_deg),
    }
}

/// Offset of slide `index` relative to the viewport, wrapped to the nearest
/// copy in infinite mode.
pub fn slide_offset(index: usize, current: f64, metrics: &SlideMetrics) -> f64 {
    if metrics.is_degenerate() {
        return 0.0;
    }
    let offset = index as f64 * metrics.item_width + current;
    let total = metrics.total_width();
    if metrics.infinite && total > 0.0 {
        let half = total / 2.0;
        (offset + half).rem_euclid(total) - half
    } else {
        offset
    }
}

pub fn slide_transform(
    index: usize,
    update: &FrameUpdate,
    metrics: &SlideMetrics,
    tuning: &PresentationTuning,
    effects: SpeedEffects,
) -> SlideTransform {
    if metrics.is_degenerate() {
        return SlideTransform::resting(index);
    }
    let translate_x = slide_offset(index, update.current, metrics);
    let distance = translate_x / metrics.item_width;
    let falloff = (distance * distance).min(1.0);
    SlideTransform {
        index,
        translate_x,
        distance,
        opacity: 1.0 - falloff * (1.0 - tuning.min_opacity),
        scale: 1.0 - falloff * (1.0 - tuning.min_scale),
        blur_px: effects.blur_px,
        skew_deg: effects.skew_deg,
        rotate_deg: effects.rotate_deg,
        layers: tuning.layer_speeds.map(|factor| translate_x * factor),
        visible: distance.abs() <= tuning.visible_slide_span,
    }
}

/// Transforms for every slide, in index order.
pub fn layout(
    update: &FrameUpdate,
    metrics: &SlideMetrics,
    tuning: &PresentationTuning,
) -> Vec<SlideTransform> {
    let effects = speed_effects(update, metrics, tuning);
    (0..metrics.slide_count)
        .map(|i| slide_transform(i, update, metrics, tuning, effects))
        .collect()
}

pub fn progress_bar(
    update: &FrameUpdate,
    metrics: &SlideMetrics,
    tuning: &PresentationTuning,
) -> ProgressBar {
    // Advancing moves positions negative, so lead runs opposite to speed.
    let lead = (-slide_speed(update, metrics) * tuning.progress_lead_per_slide_speed)
        .clamp(-tuning.max_progress_lead, tuning.max_progress_lead);
    let base = if update.progress.is_finite() {
        update.progress
    } else {
        0.0
    };
    ProgressBar {
        fill: (base + lead).clamp(0.0, 1.0),
        lead,
    }
}
