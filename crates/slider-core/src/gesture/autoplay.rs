use crate::config::AutoPlayConfig;

/// Auto-advance schedule on the host's millisecond clock.
///
/// The host polls it (from an interval timer or the frame loop); `poll`
/// answers whether to call `go_to_next` now.
#[derive(Clone, Debug)]
pub struct AutoPlay {
    config: AutoPlayConfig,
    next_due_ms: Option<f64>,
    dragging: bool,
    visible: bool,
}

impl AutoPlay {
    pub fn new(config: AutoPlayConfig) -> Self {
        Self {
            config,
            next_due_ms: None,
            dragging: false,
            visible: true,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.config.enabled && self.config.delay_ms > 0.0
    }

    pub fn is_suspended(&self) -> bool {
        self.dragging || !self.visible
    }

    pub fn next_due(&self) -> Option<f64> {
        self.next_due_ms
    }

    pub fn poll(&mut self, now_ms: f64) -> bool {
        if !self.is_enabled() || self.is_suspended() {
            return false;
        }
        match self.next_due_ms {
            None => {
                self.next_due_ms = Some(now_ms + self.config.delay_ms);
                false
            }
            Some(due) if now_ms >= due => {
                self.next_due_ms = Some(now_ms + self.config.delay_ms);
                true
            }
            Some(_) => false,
        }
    }

    /// Postpone the next advance after user input.
    pub fn note_interaction(&mut self, now_ms: f64) {
        if self.is_enabled() {
            self.next_due_ms = Some(now_ms + self.config.resume_delay_ms + self.config.delay_ms);
        }
    }

    pub fn set_dragging(&mut self, dragging: bool, now_ms: f64) {
        if self.dragging == dragging {
            return;
        }
        self.dragging = dragging;
        if !dragging {
            self.note_interaction(now_ms);
        }
    }

    pub fn set_visible(&mut self, visible: bool, now_ms: f64) {
        if self.visible == visible {
            return;
        }
        self.visible = visible;
        if visible && self.is_enabled() {
            self.next_due_ms = Some(now_ms + self.config.delay_ms);
        }
    }

    pub fn stop(&mut self) {
        self.config.enabled = false;
        self.next_due_ms = None;
    }
}
