use crate::config::GestureTuning;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WheelAxis {
    Horizontal,
    Vertical,
}

/// Debounced wheel accumulator: a burst of wheel events becomes at most one
/// slide step once the burst goes quiet.
#[derive(Clone, Debug)]
pub struct WheelAccumulator {
    tuning: GestureTuning,
    sensitivity: f64,
    axis: Option<WheelAxis>,
    accumulated: f64,
    deadline_ms: Option<f64>,
}

impl WheelAccumulator {
    pub fn new(tuning: GestureTuning, sensitivity: f64) -> Self {
        Self {
            tuning,
            sensitivity,
            axis: None,
            accumulated: 0.0,
            deadline_ms: None,
        }
    }

    /// Feed one wheel event. Returns the debounce window (ms) the host should
    /// wait before calling `poll`, or `None` for an empty event.
    pub fn push(&mut self, dx: f64, dy: f64, now_ms: f64) -> Option<f64> {
        if !(dx.is_finite() && dy.is_finite()) || (dx == 0.0 && dy == 0.0) {
            return None;
        }
        let (axis, delta) = if dx.abs() > dy.abs() {
            (WheelAxis::Horizontal, dx)
        } else {
            (WheelAxis::Vertical, dy)
        };
        if self.axis != Some(axis) {
            self.axis = Some(axis);
            self.accumulated = 0.0;
        }
        self.accumulated += delta * self.sensitivity;
        let window = self.window(axis);
        self.deadline_ms = Some(now_ms + window);
        Some(window)
    }

    /// Once the debounce window has expired, returns the step to take
    /// (`1` advances, `-1` goes back) if the burst was large enough. The
    /// accumulator resets either way.
    pub fn poll(&mut self, now_ms: f64) -> Option<i64> {
        let deadline = self.deadline_ms?;
        if now_ms < deadline {
            return None;
        }
        let axis = self.axis?;
        let accumulated = self.accumulated;
        self.reset();
        if accumulated.abs() <= self.threshold(axis) {
            log::trace!("[wheel] {axis:?} burst of {accumulated:.1} below threshold");
            return None;
        }
        Some(if accumulated > 0.0 { 1 } else { -1 })
    }

    pub fn is_pending(&self) -> bool {
        self.deadline_ms.is_some()
    }

    pub fn deadline(&self) -> Option<f64> {
        self.deadline_ms
    }

    pub fn accumulated(&self) -> f64 {
        self.accumulated
    }

    pub fn axis(&self) -> Option<WheelAxis> {
        self.axis
    }

    pub fn reset(&mut self) {
        self.axis = None;
        self.accumulated = 0.0;
        self.deadline_ms = None;
    }

    #[inline]
    fn window(&self, axis: WheelAxis) -> f64 {
        match axis {
            WheelAxis::Horizontal => self.tuning.wheel_horizontal_window_ms,
            WheelAxis::Vertical => self.tuning.wheel_vertical_window_ms,
        }
    }

    #[inline]
    fn threshold(&self, axis: WheelAxis) -> f64 {
        match axis {
            WheelAxis::Horizontal => self.tuning.wheel_horizontal_threshold,
            WheelAxis::Vertical => self.tuning.wheel_vertical_threshold,
        }
    }
}
