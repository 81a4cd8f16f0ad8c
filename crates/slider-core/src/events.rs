//! Observer registry for slider notifications.
//!
//! Any number of parties (view bindings, analytics, ARIA updates) can
//! subscribe; each gets its own `ListenerId` for removal. A failing listener
//! is logged and skipped, it never stops delivery to the others.

use smallvec::SmallVec;

use crate::performance::PerformanceMode;

/// Snapshot handed to listeners once per advanced frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameUpdate {
    pub current: f64,
    pub target: f64,
    pub speed: f64,
    pub progress: f64,
    pub performance_mode: PerformanceMode,
    pub fps: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SliderEvent {
    Frame(FrameUpdate),
    SlideChanged {
        index: usize,
    },
    PerformanceModeChanged {
        from: PerformanceMode,
        to: PerformanceMode,
    },
}

impl SliderEvent {
    fn kind(&self) -> &'static str {
        match self {
            SliderEvent::Frame(_) => "frame",
            SliderEvent::SlideChanged { .. } => "slide-changed",
            SliderEvent::PerformanceModeChanged { .. } => "performance-mode-changed",
        }
    }
}

pub type Listener = Box<dyn FnMut(&SliderEvent) -> anyhow::Result<()>>;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

impl ListenerId {
    pub fn as_u64(self) -> u64 {
        self.0
    }

    pub fn from_u64(raw: u64) -> Self {
        Self(raw)
    }
}

#[derive(Default)]
pub struct Listeners {
    next_id: u64,
    entries: SmallVec<[(ListenerId, Listener); 4]>,
}

impl std::fmt::Debug for Listeners {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Listeners")
            .field("count", &self.entries.len())
            .finish()
    }
}

impl Listeners {
    pub fn subscribe<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(&SliderEvent) -> anyhow::Result<()> + 'static,
    {
        self.next_id += 1;
        let id = ListenerId(self.next_id);
        self.entries.push((id, Box::new(listener)));
        id
    }

    /// Returns false when the id was not registered.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        self.entries.len() != before
    }

    /// Deliver to every listener in subscription order. Returns the number of
    /// listeners that reported an error.
    pub fn emit(&mut self, event: &SliderEvent) -> usize {
        let mut failures = 0;
        for (id, listener) in self.entries.iter_mut() {
            if let Err(e) = listener(event) {
                failures += 1;
                log::warn!("[slider] listener {} failed on {}: {:#}", id.0, event.kind(), e);
            }
        }
        failures
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
