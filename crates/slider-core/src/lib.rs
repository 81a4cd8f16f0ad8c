pub mod config;
pub mod constants;
pub mod events;
pub mod gesture;
pub mod motion;
pub mod performance;
pub mod presentation;
pub mod slider;
pub static SLIDES_WGSL: &str = include_str!("../shaders/slides.wgsl");

pub use config::*;
pub use events::*;
pub use gesture::{key_command, AutoPlay, DragOutcome, DragTracker, KeyCommand, WheelAccumulator, WheelAxis};
pub use motion::MotionCore;
pub use performance::*;
pub use presentation::*;
pub use slider::Slider;
