//! Per-widget handle wiring gestures into the motion core.
//!
//! Hosts own one `Slider` per widget and forward their raw input and frame
//! callbacks to it. Nothing here touches a clock or a timer; every method
//! takes the host's `now_ms`.

use crate::config::{ConfigError, SliderConfig};
use crate::events::{FrameUpdate, ListenerId, SliderEvent};
use crate::gesture::{key_command, AutoPlay, DragOutcome, DragTracker, KeyCommand, WheelAccumulator};
use crate::motion::MotionCore;
use crate::presentation::{layout, progress_bar, ProgressBar, SlideMetrics, SlideTransform};

#[derive(Debug)]
pub struct Slider {
    motion: MotionCore,
    drag: DragTracker,
    wheel: WheelAccumulator,
    autoplay: AutoPlay,
    visible: bool,
}

impl Slider {
    pub fn new(config: SliderConfig) -> Result<Self, ConfigError> {
        let drag = DragTracker::new(config.gesture.clone(), config.drag_sensitivity);
        let wheel = WheelAccumulator::new(config.gesture.clone(), config.scroll_sensitivity);
        let autoplay = AutoPlay::new(config.auto_play.clone());
        let motion = MotionCore::new(config)?;
        log::info!(
            "[slider] {} slides, width {}, infinite={} continuous={}",
            motion.slide_count(),
            motion.item_width(),
            motion.config().infinite,
            motion.config().wraps_continuously()
        );
        Ok(Self {
            motion,
            drag,
            wheel,
            autoplay,
            visible: true,
        })
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Self::new(SliderConfig::from_json(json)?)
    }

    /// Host frame callback.
    pub fn frame(&mut self, now_ms: f64) -> Option<FrameUpdate> {
        let update = self.motion.tick(now_ms);
        let shift = self.motion.take_wrap_shift();
        if shift != 0.0 {
            self.drag.shift_origin(shift);
        }
        update
    }

    /// Current state without advancing the clock.
    pub fn snapshot(&self) -> FrameUpdate {
        FrameUpdate {
            current: self.motion.current(),
            target: self.motion.target(),
            speed: self.motion.speed(),
            progress: self.motion.progress(),
            performance_mode: self.motion.performance_mode(),
            fps: self.motion.fps(),
        }
    }

    pub fn pointer_down(&mut self, x: f64, now_ms: f64) {
        if self.motion.is_destroyed() {
            return;
        }
        self.drag.begin(x, now_ms, self.motion.target());
        self.autoplay.set_dragging(true, now_ms);
    }

    /// Returns false when no drag is in progress.
    pub fn pointer_move(&mut self, x: f64, now_ms: f64) -> bool {
        match self.drag.update(x, now_ms) {
            Some(delta) => {
                self.motion.add_offset(delta);
                true
            }
            None => false,
        }
    }

    pub fn pointer_up(&mut self, x: f64, now_ms: f64) -> Option<DragOutcome> {
        let (outcome, start_target) = self.drag.end(x, now_ms)?;
        self.autoplay.set_dragging(false, now_ms);
        self.motion.set_target(start_target);
        let steps = outcome.steps();
        if steps != 0 {
            self.motion.go_by(steps);
        }
        Some(outcome)
    }

    pub fn pointer_cancel(&mut self, now_ms: f64) {
        if let Some(start_target) = self.drag.cancel() {
            self.motion.set_target(start_target);
            self.autoplay.set_dragging(false, now_ms);
        }
    }

    /// Feed a wheel event; returns the debounce window to schedule
    /// `poll_wheel` after.
    pub fn wheel(&mut self, dx: f64, dy: f64, now_ms: f64) -> Option<f64> {
        if self.motion.is_destroyed() {
            return None;
        }
        self.autoplay.note_interaction(now_ms);
        self.wheel.push(dx, dy, now_ms)
    }

    pub fn poll_wheel(&mut self, now_ms: f64) -> Option<i64> {
        let steps = self.wheel.poll(now_ms)?;
        self.motion.go_by(steps);
        Some(steps)
    }

    /// Returns true when auto-play advanced the slider.
    pub fn poll_autoplay(&mut self, now_ms: f64) -> bool {
        if self.motion.is_destroyed() || self.drag.is_active() || !self.autoplay.poll(now_ms) {
            return false;
        }
        // A finite slider rewinds once it runs out of slides.
        if !self.motion.go_to_next() {
            self.motion.go_to_index(0, false);
        }
        true
    }

    /// Handle a `KeyboardEvent.key` value. Returns the command it mapped to,
    /// or `None` when the key was ignored.
    pub fn key(&mut self, key: &str, now_ms: f64) -> Option<KeyCommand> {
        if !self.visible || self.motion.is_destroyed() {
            return None;
        }
        let command = key_command(key)?;
        let count = self.motion.slide_count();
        match command {
            KeyCommand::Next => {
                self.motion.go_to_next();
            }
            KeyCommand::Prev => {
                self.motion.go_to_prev();
            }
            KeyCommand::First => self.motion.go_to_index(0, true),
            KeyCommand::Last => self.motion.go_to_index(count.saturating_sub(1), true),
            KeyCommand::Index(index) if index < count => self.motion.go_to_index(index, false),
            KeyCommand::Index(_) => return None,
        }
        self.autoplay.note_interaction(now_ms);
        Some(command)
    }

    /// Visibility from the host's intersection observer. Hidden sliders stop
    /// ticking, ignore keys and hold auto-play.
    pub fn set_visible(&mut self, visible: bool, now_ms: f64) {
        if self.motion.is_destroyed() || self.visible == visible {
            return;
        }
        self.visible = visible;
        if visible {
            self.motion.resume();
        } else {
            self.motion.pause();
        }
        self.autoplay.set_visible(visible, now_ms);
        log::debug!("[slider] visible={visible}");
    }

    pub fn next(&mut self) -> bool {
        self.motion.go_to_next()
    }

    pub fn prev(&mut self) -> bool {
        self.motion.go_to_prev()
    }

    pub fn go_to(&mut self, index: usize, immediate: bool) {
        self.motion.go_to_index(index, immediate);
    }

    pub fn go_by(&mut self, steps: i64) -> bool {
        self.motion.go_by(steps)
    }

    pub fn resize(&mut self, item_width: f64) -> Result<(), ConfigError> {
        self.motion.resize(item_width)
    }

    pub fn subscribe<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(&SliderEvent) -> anyhow::Result<()> + 'static,
    {
        self.motion.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.motion.unsubscribe(id)
    }

    pub fn destroy(&mut self) {
        if self.motion.is_destroyed() {
            return;
        }
        self.drag.cancel();
        self.wheel.reset();
        self.autoplay.stop();
        self.motion.destroy();
        log::info!("[slider] destroyed");
    }

    pub fn metrics(&self) -> SlideMetrics {
        SlideMetrics::from_config(self.motion.config())
    }

    pub fn transforms(&self, update: &FrameUpdate) -> Vec<SlideTransform> {
        layout(update, &self.metrics(), &self.motion.config().presentation)
    }

    pub fn progress_bar(&self, update: &FrameUpdate) -> ProgressBar {
        progress_bar(update, &self.metrics(), &self.motion.config().presentation)
    }

    pub fn motion(&self) -> &MotionCore {
        &self.motion
    }

    pub fn current_index(&self) -> usize {
        self.motion.current_index()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_active()
    }

    pub fn is_wheel_pending(&self) -> bool {
        self.wheel.is_pending()
    }

    pub fn wheel_deadline(&self) -> Option<f64> {
        self.wheel.deadline()
    }

    pub fn autoplay(&self) -> &AutoPlay {
        &self.autoplay
    }
}
