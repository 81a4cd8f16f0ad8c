//! Translates raw input into Motion Core calls.
//!
//! Each tracker owns only transient per-gesture bookkeeping; the `Slider`
//! handle decides what to do with the outcome.

pub mod autoplay;
pub mod drag;
pub mod keyboard;
pub mod wheel;

pub use autoplay::AutoPlay;
pub use drag::{DragOutcome, DragTracker};
pub use keyboard::{key_command, KeyCommand};
pub use wheel::{WheelAccumulator, WheelAxis};
