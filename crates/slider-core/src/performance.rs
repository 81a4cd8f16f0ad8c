//! Adaptive quality tiers driven by measured frame rate.

use crate::config::MotionTuning;
use crate::constants::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PerformanceMode {
    #[default]
    High,
    Balanced,
    PowerSave,
}

impl PerformanceMode {
    /// Largest frame delta (seconds) the core integrates in one tick.
    #[inline]
    pub fn max_frame_delta(self) -> f64 {
        match self {
            PerformanceMode::High => HIGH_MAX_FRAME_DELTA,
            PerformanceMode::Balanced => BALANCED_MAX_FRAME_DELTA,
            PerformanceMode::PowerSave => POWER_SAVE_MAX_FRAME_DELTA,
        }
    }

    #[inline]
    pub fn micro_threshold(self) -> f64 {
        match self {
            PerformanceMode::High => HIGH_MICRO_THRESHOLD,
            _ => REDUCED_MICRO_THRESHOLD,
        }
    }

    /// Multiplier applied to lerp and snap threshold in reduced modes.
    #[inline]
    pub fn scale(self, tuning: &MotionTuning) -> f64 {
        match self {
            PerformanceMode::High => 1.0,
            PerformanceMode::Balanced => tuning.balanced_scale,
            PerformanceMode::PowerSave => tuning.power_save_scale,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PerformanceMode::High => "high",
            PerformanceMode::Balanced => "balanced",
            PerformanceMode::PowerSave => "power-save",
        }
    }
}

/// Fixed-capacity ring buffer of recent inter-frame durations (ms).
#[derive(Clone, Debug)]
pub struct FrameHistory {
    samples: [f64; FRAME_HISTORY_LEN],
    len: usize,
    next: usize,
}

impl Default for FrameHistory {
    fn default() -> Self {
        Self {
            samples: [0.0; FRAME_HISTORY_LEN],
            len: 0,
            next: 0,
        }
    }
}

impl FrameHistory {
    pub fn push(&mut self, frame_ms: f64) {
        self.samples[self.next] = frame_ms;
        self.next = (self.next + 1) % FRAME_HISTORY_LEN;
        self.len = (self.len + 1).min(FRAME_HISTORY_LEN);
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn latest(&self) -> Option<f64> {
        if self.len == 0 {
            return None;
        }
        let idx = (self.next + FRAME_HISTORY_LEN - 1) % FRAME_HISTORY_LEN;
        Some(self.samples[idx])
    }

    pub fn average(&self) -> Option<f64> {
        if self.len == 0 {
            return None;
        }
        let sum: f64 = self.iter().sum();
        Some(sum / self.len as f64)
    }

    /// Latest frame took much longer than the rolling average.
    pub fn is_stuttering(&self) -> bool {
        match (self.latest(), self.average()) {
            (Some(latest), Some(avg)) if self.len > 1 && avg > 0.0 => latest > avg * STUTTER_RATIO,
            _ => false,
        }
    }

    /// Samples oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        let start = (self.next + FRAME_HISTORY_LEN - self.len) % FRAME_HISTORY_LEN;
        (0..self.len).map(move |i| self.samples[(start + i) % FRAME_HISTORY_LEN])
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Rolling one-second FPS counter with mode transitions.
#[derive(Clone, Debug)]
pub struct FpsMonitor {
    target_fps: f64,
    mode: PerformanceMode,
    fps: f64,
    window_start_ms: Option<f64>,
    frames_in_window: u32,
    history: FrameHistory,
}

impl FpsMonitor {
    pub fn new(performance_target: u32) -> Self {
        let target_fps = performance_target.max(1) as f64;
        Self {
            target_fps,
            mode: PerformanceMode::High,
            fps: target_fps,
            window_start_ms: None,
            frames_in_window: 0,
            history: FrameHistory::default(),
        }
    }

    pub fn mode(&self) -> PerformanceMode {
        self.mode
    }

    pub fn fps(&self) -> f64 {
        self.fps
    }

    pub fn history(&self) -> &FrameHistory {
        &self.history
    }

    /// Record one frame. Returns `(from, to)` when the mode changed.
    pub fn record(&mut self, frame_ms: f64, now_ms: f64) -> Option<(PerformanceMode, PerformanceMode)> {
        self.history.push(frame_ms);
        if frame_ms >= FPS_WINDOW_MS {
            // A gap this long (e.g. a backgrounded tab) says nothing about
            // the frame rate; start measuring afresh.
            self.window_start_ms = Some(now_ms);
            self.frames_in_window = 0;
            return None;
        }
        let start = *self.window_start_ms.get_or_insert(now_ms - frame_ms);
        self.frames_in_window += 1;
        let elapsed = now_ms - start;
        if elapsed < FPS_WINDOW_MS {
            return None;
        }
        self.fps = self.frames_in_window as f64 * 1000.0 / elapsed;
        self.window_start_ms = Some(now_ms);
        self.frames_in_window = 0;
        self.evaluate()
    }

    fn evaluate(&mut self) -> Option<(PerformanceMode, PerformanceMode)> {
        let from = self.mode;
        let to = if self.fps > self.target_fps * RECOVER_TO_HIGH_RATIO {
            PerformanceMode::High
        } else {
            match from {
                PerformanceMode::High if self.fps < self.target_fps * DOWNGRADE_TO_BALANCED_RATIO => {
                    PerformanceMode::Balanced
                }
                PerformanceMode::Balanced
                    if self.fps < self.target_fps * DOWNGRADE_TO_POWER_SAVE_RATIO =>
                {
                    PerformanceMode::PowerSave
                }
                other => other,
            }
        };
        if to == from {
            return None;
        }
        self.mode = to;
        log::debug!(
            "[perf] {} -> {} at {:.1} fps",
            from.as_str(),
            to.as_str(),
            self.fps
        );
        Some((from, to))
    }

    /// Forget the measurement window, e.g. after the loop was paused.
    pub fn reset_window(&mut self) {
        self.window_start_ms = None;
        self.frames_in_window = 0;
    }

    pub fn reset(&mut self) {
        *self = Self::new(self.target_fps as u32);
    }
}
