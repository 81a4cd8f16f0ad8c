//! Typed slider configuration.
//!
//! `SliderConfig` is the construction contract of a slider widget. The
//! nested tuning structs expose the empirical constants of the motion loop,
//! gesture thresholds and visual effects so hosts can adjust them without
//! touching the engine. Every struct deserializes from camelCase JSON with
//! per-field defaults, which is how the web host passes options.

use serde::Deserialize;
use thiserror::Error;

use crate::constants::*;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("item width must be a finite value greater than zero (got {0})")]
    InvalidItemWidth(f64),
    #[error("slide count must not be negative (got {0})")]
    NegativeSlideCount(i64),
    #[error("lerp factor must be in (0, 1] (got {0})")]
    InvalidLerpFactor(f64),
    #[error("drag sensitivity must be greater than zero (got {0})")]
    InvalidDragSensitivity(f64),
    #[error("scroll sensitivity must be greater than zero (got {0})")]
    InvalidScrollSensitivity(f64),
    #[error("snap strength must be zero or positive (got {0})")]
    InvalidSnapStrength(f64),
    #[error("speed decay must be in (0, 1) (got {0})")]
    InvalidSpeedDecay(f64),
    #[error("performance target must be at least 1 fps")]
    InvalidPerformanceTarget,
    #[error("invalid tuning value for {field}: {value}")]
    InvalidTuning { field: &'static str, value: f64 },
    #[error("malformed slider options: {0}")]
    Options(String),
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct SliderConfig {
    pub slide_count: usize,
    pub item_width: f64,
    /// Advancing past the last slide re-enters from the first.
    pub infinite: bool,
    pub lerp_factor: f64,
    pub drag_sensitivity: f64,
    pub scroll_sensitivity: f64,
    /// Zero selects the fixed-threshold snap strategy.
    pub snap_strength: f64,
    pub speed_decay: f64,
    /// With `infinite`, position wraps seamlessly instead of rewinding.
    pub continuous_scroll: bool,
    pub performance_target: u32,
    pub motion: MotionTuning,
    pub gesture: GestureTuning,
    pub auto_play: AutoPlayConfig,
    pub presentation: PresentationTuning,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            slide_count: 0,
            item_width: DEFAULT_ITEM_WIDTH,
            infinite: false,
            lerp_factor: DEFAULT_LERP_FACTOR,
            drag_sensitivity: DEFAULT_DRAG_SENSITIVITY,
            scroll_sensitivity: DEFAULT_SCROLL_SENSITIVITY,
            snap_strength: DEFAULT_SNAP_STRENGTH,
            speed_decay: DEFAULT_SPEED_DECAY,
            continuous_scroll: false,
            performance_target: DEFAULT_PERFORMANCE_TARGET,
            motion: MotionTuning::default(),
            gesture: GestureTuning::default(),
            auto_play: AutoPlayConfig::default(),
            presentation: PresentationTuning::default(),
        }
    }
}

impl SliderConfig {
    pub fn new(slide_count: usize, item_width: f64) -> Self {
        Self {
            slide_count,
            item_width,
            ..Self::default()
        }
    }

    /// Parse camelCase JSON options on top of the defaults and validate them.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let value: serde_json::Value =
            serde_json::from_str(json).map_err(|e| ConfigError::Options(e.to_string()))?;
        if let Some(count) = value.get("slideCount").and_then(|v| v.as_i64()) {
            if count < 0 {
                return Err(ConfigError::NegativeSlideCount(count));
            }
        }
        let config: SliderConfig =
            serde_json::from_value(value).map_err(|e| ConfigError::Options(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_item_width(self.item_width)?;
        if !(self.lerp_factor > 0.0 && self.lerp_factor <= 1.0) {
            return Err(ConfigError::InvalidLerpFactor(self.lerp_factor));
        }
        if !(self.drag_sensitivity.is_finite() && self.drag_sensitivity > 0.0) {
            return Err(ConfigError::InvalidDragSensitivity(self.drag_sensitivity));
        }
        if !(self.scroll_sensitivity.is_finite() && self.scroll_sensitivity > 0.0) {
            return Err(ConfigError::InvalidScrollSensitivity(self.scroll_sensitivity));
        }
        if !(self.snap_strength.is_finite() && self.snap_strength >= 0.0) {
            return Err(ConfigError::InvalidSnapStrength(self.snap_strength));
        }
        if !(self.speed_decay > 0.0 && self.speed_decay < 1.0) {
            return Err(ConfigError::InvalidSpeedDecay(self.speed_decay));
        }
        if self.performance_target == 0 {
            return Err(ConfigError::InvalidPerformanceTarget);
        }
        self.motion.validate()
    }

    /// `item_width * slide_count`.
    #[inline]
    pub fn total_width(&self) -> f64 {
        self.item_width * self.slide_count as f64
    }

    /// Continuous wraparound only applies to infinite sliders.
    #[inline]
    pub fn wraps_continuously(&self) -> bool {
        self.infinite && self.continuous_scroll
    }
}

pub(crate) fn validate_item_width(item_width: f64) -> Result<(), ConfigError> {
    if item_width.is_finite() && item_width > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidItemWidth(item_width))
    }
}

/// Empirical constants of the interpolation loop.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct MotionTuning {
    pub luxury_easing: bool,
    pub luxury_speed_decay: f64,
    pub luxury_speed_weight: f64,
    pub luxury_gain_min: f64,
    pub luxury_gain_max: f64,
    pub luxury_speed_norm: f64,
    pub min_lerp: f64,
    pub snap_distance_ratio: f64,
    pub snap_ease: f64,
    pub snap_exact_ratio: f64,
    pub snap_slow_speed_ratio: f64,
    pub fixed_snap_distance: f64,
    pub fixed_snap_speed: f64,
    pub loose_fixed_snap_distance: f64,
    pub loose_fixed_snap_speed: f64,
    pub balanced_scale: f64,
    pub power_save_scale: f64,
    pub luxury_settle_decay: f64,
    pub standard_settle_decay: f64,
    pub speed_epsilon: f64,
    pub target_clamp_widths: f64,
    pub wrap_speed_damping: f64,
    pub wrap_center_offset: f64,
}

impl Default for MotionTuning {
    fn default() -> Self {
        Self {
            luxury_easing: true,
            luxury_speed_decay: LUXURY_SPEED_DECAY,
            luxury_speed_weight: LUXURY_SPEED_WEIGHT,
            luxury_gain_min: LUXURY_GAIN_MIN,
            luxury_gain_max: LUXURY_GAIN_MAX,
            luxury_speed_norm: LUXURY_SPEED_NORM,
            min_lerp: MIN_LERP,
            snap_distance_ratio: SNAP_DISTANCE_RATIO,
            snap_ease: SNAP_EASE,
            snap_exact_ratio: SNAP_EXACT_RATIO,
            snap_slow_speed_ratio: SNAP_SLOW_SPEED_RATIO,
            fixed_snap_distance: FIXED_SNAP_DISTANCE,
            fixed_snap_speed: FIXED_SNAP_SPEED,
            loose_fixed_snap_distance: LOOSE_FIXED_SNAP_DISTANCE,
            loose_fixed_snap_speed: LOOSE_FIXED_SNAP_SPEED,
            balanced_scale: BALANCED_SCALE,
            power_save_scale: POWER_SAVE_SCALE,
            luxury_settle_decay: LUXURY_SETTLE_DECAY,
            standard_settle_decay: STANDARD_SETTLE_DECAY,
            speed_epsilon: SPEED_EPSILON,
            target_clamp_widths: TARGET_CLAMP_WIDTHS,
            wrap_speed_damping: WRAP_SPEED_DAMPING,
            wrap_center_offset: WRAP_CENTER_OFFSET,
        }
    }
}

impl MotionTuning {
    fn validate(&self) -> Result<(), ConfigError> {
        let unit_interval = [
            ("luxurySpeedDecay", self.luxury_speed_decay),
            ("luxurySpeedWeight", self.luxury_speed_weight),
            ("snapEase", self.snap_ease),
            ("snapExactRatio", self.snap_exact_ratio),
            ("luxurySettleDecay", self.luxury_settle_decay),
            ("standardSettleDecay", self.standard_settle_decay),
            ("wrapSpeedDamping", self.wrap_speed_damping),
        ];
        for (field, value) in unit_interval {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::InvalidTuning { field, value });
            }
        }
        let positive = [
            ("luxuryGainMin", self.luxury_gain_min),
            ("luxuryGainMax", self.luxury_gain_max),
            ("luxurySpeedNorm", self.luxury_speed_norm),
            ("minLerp", self.min_lerp),
            ("balancedScale", self.balanced_scale),
            ("powerSaveScale", self.power_save_scale),
            ("targetClampWidths", self.target_clamp_widths),
        ];
        for (field, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::InvalidTuning { field, value });
            }
        }
        // A negative offset would put the lower wrap bound above the upper one.
        if !(self.wrap_center_offset.is_finite() && self.wrap_center_offset >= 0.0) {
            return Err(ConfigError::InvalidTuning {
                field: "wrapCenterOffset",
                value: self.wrap_center_offset,
            });
        }
        Ok(())
    }
}

/// Drag and wheel thresholds.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct GestureTuning {
    pub drag_damping: f64,
    pub min_drag_distance: f64,
    pub momentum_threshold: f64,
    pub momentum_min_distance: f64,
    pub momentum_slides_per_velocity: f64,
    pub max_momentum_slides: usize,
    pub velocity_horizon_ms: f64,
    pub wheel_horizontal_window_ms: f64,
    pub wheel_vertical_window_ms: f64,
    pub wheel_horizontal_threshold: f64,
    pub wheel_vertical_threshold: f64,
}

impl Default for GestureTuning {
    fn default() -> Self {
        Self {
            drag_damping: DRAG_DAMPING,
            min_drag_distance: MIN_DRAG_DISTANCE,
            momentum_threshold: MOMENTUM_THRESHOLD,
            momentum_min_distance: MOMENTUM_MIN_DISTANCE,
            momentum_slides_per_velocity: MOMENTUM_SLIDES_PER_VELOCITY,
            max_momentum_slides: MAX_MOMENTUM_SLIDES,
            velocity_horizon_ms: VELOCITY_HORIZON_MS,
            wheel_horizontal_window_ms: WHEEL_HORIZONTAL_WINDOW_MS,
            wheel_vertical_window_ms: WHEEL_VERTICAL_WINDOW_MS,
            wheel_horizontal_threshold: WHEEL_HORIZONTAL_THRESHOLD,
            wheel_vertical_threshold: WHEEL_VERTICAL_THRESHOLD,
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct AutoPlayConfig {
    pub enabled: bool,
    pub delay_ms: f64,
    /// Pause after any user interaction before auto-play picks up again.
    pub resume_delay_ms: f64,
}

impl Default for AutoPlayConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            delay_ms: AUTO_PLAY_DELAY_MS,
            resume_delay_ms: AUTO_PLAY_RESUME_DELAY_MS,
        }
    }
}

/// Visual falloff and speed-effect limits.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct PresentationTuning {
    pub min_opacity: f64,
    pub min_scale: f64,
    pub layer_speeds: [f64; 3],
    pub blur_per_slide_speed: f64,
    pub max_blur_px: f64,
    pub skew_per_slide_speed: f64,
    pub max_skew_deg: f64,
    pub rotate_per_slide_speed: f64,
    pub max_rotate_deg: f64,
    pub progress_lead_per_slide_speed: f64,
    pub max_progress_lead: f64,
    pub visible_slide_span: f64,
}

impl Default for PresentationTuning {
    fn default() -> Self {
        Self {
            min_opacity: MIN_SLIDE_OPACITY,
            min_scale: MIN_SLIDE_SCALE,
            layer_speeds: LAYER_SPEEDS,
            blur_per_slide_speed: BLUR_PER_SLIDE_SPEED,
            max_blur_px: MAX_BLUR_PX,
            skew_per_slide_speed: SKEW_PER_SLIDE_SPEED,
            max_skew_deg: MAX_SKEW_DEG,
            rotate_per_slide_speed: ROTATE_PER_SLIDE_SPEED,
            max_rotate_deg: MAX_ROTATE_DEG,
            progress_lead_per_slide_speed: PROGRESS_LEAD_PER_SLIDE_SPEED,
            max_progress_lead: MAX_PROGRESS_LEAD,
            visible_slide_span: VISIBLE_SLIDE_SPAN,
        }
    }
}
