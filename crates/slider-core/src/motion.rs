//! Motion core: eases `current` toward `target` once per animation frame.
//!
//! Positions are in the host's unit (pixels or percent); slide `i` rests at
//! `-i * item_width`, so advancing makes positions more negative. Gesture
//! code only moves `target`; `current` and `speed` change inside `tick`,
//! apart from the hard jump of `go_to_index(_, true)`.

use std::cell::Cell;

use crate::config::{validate_item_width, ConfigError, MotionTuning, SliderConfig};
use crate::constants::PROGRESS_CACHE_MS;
use crate::events::{FrameUpdate, ListenerId, Listeners, SliderEvent};
use crate::performance::{FpsMonitor, FrameHistory, PerformanceMode};

#[derive(Debug)]
pub struct MotionCore {
    config: SliderConfig,
    current: f64,
    target: f64,
    speed: f64,
    total_width: f64,
    last_time: Option<f64>,
    clock_ms: f64,
    running: bool,
    destroyed: bool,
    monitor: FpsMonitor,
    progress_cache: Cell<Option<(f64, f64)>>,
    last_index: usize,
    pending_jump: Option<usize>,
    wrap_shift: f64,
    listeners: Listeners,
}

impl MotionCore {
    pub fn new(config: SliderConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let total_width = config.total_width();
        let monitor = FpsMonitor::new(config.performance_target);
        Ok(Self {
            config,
            current: 0.0,
            target: 0.0,
            speed: 0.0,
            total_width,
            last_time: None,
            clock_ms: 0.0,
            running: true,
            destroyed: false,
            monitor,
            progress_cache: Cell::new(None),
            last_index: 0,
            pending_jump: None,
            wrap_shift: 0.0,
            listeners: Listeners::default(),
        })
    }

    /// Advance one frame. `now_ms` is a monotonic timestamp in milliseconds.
    ///
    /// The first call after construction or `resume` only records the
    /// timestamp. Returns the snapshot delivered to listeners.
    pub fn tick(&mut self, now_ms: f64) -> Option<FrameUpdate> {
        if !self.running {
            return None;
        }
        let Some(last) = self.last_time else {
            self.last_time = Some(now_ms);
            self.clock_ms = now_ms;
            return None;
        };
        let raw_ms = now_ms - last;
        self.last_time = Some(now_ms);
        self.clock_ms = now_ms;
        if !(raw_ms > 0.0) {
            return None;
        }

        if let Some((from, to)) = self.monitor.record(raw_ms, now_ms) {
            self.listeners
                .emit(&SliderEvent::PerformanceModeChanged { from, to });
        }
        let mode = self.monitor.mode();
        let dt = (raw_ms / 1000.0).min(mode.max_frame_delta());

        self.step(dt, mode);
        if self.config.wraps_continuously() {
            self.wrap();
        }

        self.progress_cache.set(None);
        let update = FrameUpdate {
            current: self.current,
            target: self.target,
            speed: self.speed,
            progress: self.progress(),
            performance_mode: mode,
            fps: self.monitor.fps(),
        };
        self.listeners.emit(&SliderEvent::Frame(update));
        self.report_crossing();
        Some(update)
    }

    fn step(&mut self, dt: f64, mode: PerformanceMode) {
        let tuning = &self.config.motion;
        let diff = self.target - self.current;

        if diff.abs() <= mode.micro_threshold() {
            self.current = self.target;
            let settle = if tuning.luxury_easing {
                tuning.luxury_settle_decay
            } else {
                tuning.standard_settle_decay
            };
            self.speed *= settle;
            if self.speed.abs() < tuning.speed_epsilon {
                self.speed = 0.0;
            }
            return;
        }

        let lerp = self.frame_lerp(diff, dt, mode);
        let movement = diff * lerp;
        self.current += movement;

        let decay = if tuning.luxury_easing {
            tuning.luxury_speed_decay
        } else {
            self.config.speed_decay
        };
        let previous = self.speed;
        self.speed = previous * decay + (movement / dt) * (1.0 - decay);
        if self.speed.abs() < tuning.speed_epsilon {
            self.speed = 0.0;
        }

        if self.config.snap_strength > 0.0 {
            self.proportional_snap(previous, mode);
        } else {
            self.fixed_snap();
        }
    }

    /// Fraction of `diff` to close this frame, normalized to 60 Hz frames.
    fn frame_lerp(&self, diff: f64, dt: f64, mode: PerformanceMode) -> f64 {
        let tuning = &self.config.motion;
        let item_width = self.config.item_width;
        let base = if tuning.luxury_easing {
            let norm_speed = (self.speed.abs() / (item_width * tuning.luxury_speed_norm)).min(1.0);
            let norm_distance = (diff.abs() / item_width).min(1.0);
            let factor = norm_speed * tuning.luxury_speed_weight
                + norm_distance * (1.0 - tuning.luxury_speed_weight);
            self.config.lerp_factor * luxury_gain(factor, tuning)
        } else {
            self.config.lerp_factor
        };
        let per_frame = (base * mode.scale(tuning)).clamp(tuning.min_lerp, 1.0);
        1.0 - (1.0 - per_frame).powf(dt * 60.0)
    }

    fn proportional_snap(&mut self, previous_speed: f64, mode: PerformanceMode) {
        let tuning = &self.config.motion;
        let threshold = self.config.item_width
            * self.config.snap_strength
            * tuning.snap_distance_ratio
            * mode.scale(tuning);
        let remaining = self.target - self.current;
        let slow = self.speed.abs() < self.config.item_width * tuning.snap_slow_speed_ratio
            || self.speed.abs() < previous_speed.abs();
        if remaining.abs() >= threshold || !slow {
            return;
        }
        self.current += remaining * tuning.snap_ease;
        if (self.target - self.current).abs() < threshold * tuning.snap_exact_ratio {
            self.snap_exact();
        }
    }

    fn fixed_snap(&mut self) {
        let tuning = &self.config.motion;
        let (distance, speed) = if tuning.luxury_easing {
            (tuning.fixed_snap_distance, tuning.fixed_snap_speed)
        } else {
            (tuning.loose_fixed_snap_distance, tuning.loose_fixed_snap_speed)
        };
        if (self.target - self.current).abs() < distance && self.speed.abs() < speed {
            self.snap_exact();
        }
    }

    #[inline]
    fn snap_exact(&mut self) {
        self.current = self.target;
        self.speed = 0.0;
    }

    fn wrap(&mut self) {
        if self.total_width <= 0.0 {
            return;
        }
        let tuning = &self.config.motion;
        let buffer_zone = (self.config.slide_count as f64 / 2.0) * self.config.item_width;
        let upper = tuning.wrap_center_offset + buffer_zone;
        let lower = -tuning.wrap_center_offset - buffer_zone;
        let shift = if self.current > upper {
            -self.total_width
        } else if self.current < lower {
            self.total_width
        } else {
            return;
        };
        self.current += shift;
        self.target += shift;
        self.speed *= tuning.wrap_speed_damping;
        self.wrap_shift += shift;
        self.progress_cache.set(None);
        log::trace!("[motion] wrapped by {shift:.1}");
    }

    fn report_crossing(&mut self) {
        let index = self.current_index();
        if let Some(pending) = self.pending_jump {
            if index == pending {
                self.pending_jump = None;
                self.last_index = index;
            }
            return;
        }
        if index != self.last_index {
            self.last_index = index;
            self.listeners.emit(&SliderEvent::SlideChanged { index });
        }
    }

    /// Normalized position in `[0, 1]`, cached for one frame of engine clock.
    pub fn progress(&self) -> f64 {
        if let Some((at, value)) = self.progress_cache.get() {
            if self.clock_ms - at < PROGRESS_CACHE_MS {
                return value;
            }
        }
        let value = self.compute_progress();
        self.progress_cache.set(Some((self.clock_ms, value)));
        value
    }

    fn compute_progress(&self) -> f64 {
        let count = self.config.slide_count;
        if count == 0 || self.config.item_width <= 0.0 {
            return 0.0;
        }
        let mut index = -self.current / self.config.item_width;
        if self.config.infinite {
            index = index.rem_euclid(count as f64);
        }
        (index / count as f64).clamp(0.0, 1.0)
    }

    /// Slide nearest to `current`.
    pub fn current_index(&self) -> usize {
        self.index_for(self.current)
    }

    /// Slide the core is easing toward.
    pub fn target_index(&self) -> usize {
        self.index_for(self.target)
    }

    fn index_for(&self, position: f64) -> usize {
        let count = self.config.slide_count;
        if count == 0 || self.config.item_width <= 0.0 {
            return 0;
        }
        let raw = (-position / self.config.item_width).round();
        if self.config.infinite {
            (raw as i64).rem_euclid(count as i64) as usize
        } else {
            raw.clamp(0.0, (count - 1) as f64) as usize
        }
    }

    /// Aim at slide `index` (clamped to the slide range). `immediate` jumps
    /// there without easing.
    pub fn go_to_index(&mut self, index: usize, immediate: bool) {
        let count = self.config.slide_count;
        if count == 0 || self.destroyed {
            return;
        }
        let index = index.min(count - 1);
        let mut target = -(index as f64) * self.config.item_width;
        if self.config.wraps_continuously() && self.total_width > 0.0 {
            // Aim at the copy of the slide nearest to the wrapped position.
            target += self.total_width * ((self.current - target) / self.total_width).round();
        }
        self.target = self.clamp_target(target);
        if immediate {
            self.current = self.target;
            self.speed = 0.0;
            self.progress_cache.set(None);
            self.last_index = index;
            self.pending_jump = None;
        } else {
            self.pending_jump = Some(index);
        }
        self.listeners.emit(&SliderEvent::SlideChanged { index });
    }

    /// Nudge the target, e.g. while a pointer is dragging.
    pub fn add_offset(&mut self, delta: f64) {
        if !delta.is_finite() || self.destroyed {
            return;
        }
        self.target = self.clamp_target(self.target + delta);
        self.pending_jump = None;
    }

    /// Replace the target outright (clamped).
    pub fn set_target(&mut self, target: f64) {
        if !target.is_finite() || self.destroyed {
            return;
        }
        self.target = self.clamp_target(target);
        self.pending_jump = None;
    }

    pub fn go_to_next(&mut self) -> bool {
        self.go_by(1)
    }

    pub fn go_to_prev(&mut self) -> bool {
        self.go_by(-1)
    }

    /// Step `steps` slides forward (positive) or back. Returns false when
    /// a finite slider is already at the requested end.
    pub fn go_by(&mut self, steps: i64) -> bool {
        let count = self.config.slide_count as i64;
        if count == 0 || steps == 0 || self.destroyed {
            return false;
        }
        if self.config.wraps_continuously() {
            self.target = self.clamp_target(self.target - steps as f64 * self.config.item_width);
            let index = self.target_index();
            self.pending_jump = Some(index);
            self.listeners.emit(&SliderEvent::SlideChanged { index });
            return true;
        }
        let from = self.target_index() as i64;
        let next = if self.config.infinite {
            (from + steps).rem_euclid(count)
        } else {
            (from + steps).clamp(0, count - 1)
        };
        if next == from {
            return false;
        }
        self.go_to_index(next as usize, false);
        true
    }

    /// Adopt a new slide width, keeping the fractional slide position.
    pub fn resize(&mut self, item_width: f64) -> Result<(), ConfigError> {
        validate_item_width(item_width)?;
        let ratio = item_width / self.config.item_width;
        self.current *= ratio;
        self.target *= ratio;
        self.speed *= ratio;
        self.config.item_width = item_width;
        self.total_width = self.config.total_width();
        self.progress_cache.set(None);
        Ok(())
    }

    /// Stop advancing, e.g. while off-screen.
    pub fn pause(&mut self) {
        self.running = false;
    }

    /// Restart after `pause`; the next tick re-primes the clock.
    pub fn resume(&mut self) {
        if self.destroyed || self.running {
            return;
        }
        self.running = true;
        self.last_time = None;
        self.monitor.reset_window();
    }

    /// Tear down: stop ticking, drop listeners and zero the state.
    pub fn destroy(&mut self) {
        self.running = false;
        self.destroyed = true;
        self.listeners.clear();
        self.current = 0.0;
        self.target = 0.0;
        self.speed = 0.0;
        self.last_time = None;
        self.pending_jump = None;
        self.wrap_shift = 0.0;
        self.monitor.reset();
        self.progress_cache.set(None);
    }

    pub fn subscribe<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(&SliderEvent) -> anyhow::Result<()> + 'static,
    {
        self.listeners.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.listeners.unsubscribe(id)
    }

    /// Total shift applied by wraparound since the last call.
    pub fn take_wrap_shift(&mut self) -> f64 {
        std::mem::take(&mut self.wrap_shift)
    }

    #[inline]
    fn clamp_target(&self, target: f64) -> f64 {
        let bound = self.total_width * self.config.motion.target_clamp_widths;
        target.clamp(-bound, bound)
    }

    pub fn current(&self) -> f64 {
        self.current
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn item_width(&self) -> f64 {
        self.config.item_width
    }

    pub fn total_width(&self) -> f64 {
        self.total_width
    }

    pub fn slide_count(&self) -> usize {
        self.config.slide_count
    }

    pub fn config(&self) -> &SliderConfig {
        &self.config
    }

    pub fn performance_mode(&self) -> PerformanceMode {
        self.monitor.mode()
    }

    pub fn fps(&self) -> f64 {
        self.monitor.fps()
    }

    pub fn frame_history(&self) -> &FrameHistory {
        self.monitor.history()
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    pub fn is_settled(&self) -> bool {
        self.current == self.target && self.speed == 0.0
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

/// Ease-out cubic mapped into `[gain_min, gain_max]`.
#[inline]
fn luxury_gain(factor: f64, tuning: &MotionTuning) -> f64 {
    let f = factor.clamp(0.0, 1.0);
    let eased = 1.0 - (1.0 - f).powi(3);
    tuning.luxury_gain_min + (tuning.luxury_gain_max - tuning.luxury_gain_min) * eased
}
