use crate::config::GestureTuning;
use crate::constants::VELOCITY_HISTORY_LEN;

/// What a finished drag asks the slider to do. Positive steps advance.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragOutcome {
    /// Fast flick, possibly several slides.
    Momentum { steps: i64 },
    /// Slow drag past the minimum distance: one slide.
    Step { steps: i64 },
    /// Return to where the drag started.
    SnapBack,
}

impl DragOutcome {
    pub fn steps(self) -> i64 {
        match self {
            DragOutcome::Momentum { steps } | DragOutcome::Step { steps } => steps,
            DragOutcome::SnapBack => 0,
        }
    }
}

#[derive(Clone, Copy, Debug, Default)]
struct Sample {
    time_ms: f64,
    x: f64,
}

#[derive(Clone, Debug)]
struct DragSession {
    start_x: f64,
    last_x: f64,
    start_target: f64,
    samples: [Sample; VELOCITY_HISTORY_LEN],
    len: usize,
    next: usize,
}

impl DragSession {
    fn push(&mut self, time_ms: f64, x: f64) {
        self.samples[self.next] = Sample { time_ms, x };
        self.next = (self.next + 1) % VELOCITY_HISTORY_LEN;
        self.len = (self.len + 1).min(VELOCITY_HISTORY_LEN);
    }

    fn newest(&self) -> Option<Sample> {
        if self.len == 0 {
            return None;
        }
        Some(self.samples[(self.next + VELOCITY_HISTORY_LEN - 1) % VELOCITY_HISTORY_LEN])
    }

    /// Pointer velocity in px/ms over the samples inside `horizon_ms`.
    fn velocity(&self, horizon_ms: f64) -> f64 {
        let Some(newest) = self.newest() else {
            return 0.0;
        };
        let mut oldest = newest;
        for back in 1..self.len {
            let idx = (self.next + VELOCITY_HISTORY_LEN - 1 - back) % VELOCITY_HISTORY_LEN;
            let sample = self.samples[idx];
            if newest.time_ms - sample.time_ms > horizon_ms {
                break;
            }
            oldest = sample;
        }
        let dt = newest.time_ms - oldest.time_ms;
        if dt <= 0.0 {
            return 0.0;
        }
        (newest.x - oldest.x) / dt
    }
}

/// Pointer/touch drag bookkeeping, one gesture at a time.
#[derive(Clone, Debug)]
pub struct DragTracker {
    tuning: GestureTuning,
    sensitivity: f64,
    session: Option<DragSession>,
}

impl DragTracker {
    pub fn new(tuning: GestureTuning, sensitivity: f64) -> Self {
        Self {
            tuning,
            sensitivity,
            session: None,
        }
    }

    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    /// Start tracking at pointer `x`; `target` is the motion target to
    /// restore on snap-back.
    pub fn begin(&mut self, x: f64, now_ms: f64, target: f64) {
        let mut session = DragSession {
            start_x: x,
            last_x: x,
            start_target: target,
            samples: [Sample::default(); VELOCITY_HISTORY_LEN],
            len: 0,
            next: 0,
        };
        session.push(now_ms, x);
        self.session = Some(session);
    }

    /// Damped offset to add to the motion target for this move event.
    pub fn update(&mut self, x: f64, now_ms: f64) -> Option<f64> {
        let session = self.session.as_mut()?;
        let delta = (x - session.last_x) * self.sensitivity * self.tuning.drag_damping;
        session.last_x = x;
        session.push(now_ms, x);
        Some(delta)
    }

    /// Finish the drag. Returns the outcome and the drag-start target.
    pub fn end(&mut self, x: f64, now_ms: f64) -> Option<(DragOutcome, f64)> {
        let mut session = self.session.take()?;
        session.push(now_ms, x);
        let distance = x - session.start_x;
        let velocity = session.velocity(self.tuning.velocity_horizon_ms);
        let outcome = self.classify(distance, velocity);
        log::debug!(
            "[drag] distance={distance:.1}px velocity={velocity:.3}px/ms -> {outcome:?}"
        );
        Some((outcome, session.start_target))
    }

    /// Abandon the drag (pointer cancel). Returns the drag-start target.
    pub fn cancel(&mut self) -> Option<f64> {
        self.session.take().map(|s| s.start_target)
    }

    /// Keep the drag origin aligned after the motion core wrapped around.
    pub fn shift_origin(&mut self, shift: f64) {
        if let Some(session) = self.session.as_mut() {
            session.start_target += shift;
        }
    }

    pub fn start_target(&self) -> Option<f64> {
        self.session.as_ref().map(|s| s.start_target)
    }

    fn classify(&self, distance: f64, velocity: f64) -> DragOutcome {
        // Dragging left (negative) advances.
        let direction = |v: f64| if v < 0.0 { 1 } else { -1 };
        if velocity.abs() > self.tuning.momentum_threshold
            && distance.abs() > self.tuning.momentum_min_distance
        {
            let slides = (velocity.abs() * self.tuning.momentum_slides_per_velocity)
                .ceil()
                .clamp(1.0, self.tuning.max_momentum_slides.max(1) as f64) as i64;
            return DragOutcome::Momentum {
                steps: direction(velocity) * slides,
            };
        }
        if distance.abs() > self.tuning.min_drag_distance {
            return DragOutcome::Step {
                steps: direction(distance),
            };
        }
        DragOutcome::SnapBack
    }
}
